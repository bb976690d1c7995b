// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_coordinate --heading-base-level=0

//! Understory Coordinate: chart coordinate transforms.
//!
//! This crate maps logical chart data (numbers on value axes, labels on
//! category axes) into pixel positions inside a container. It is the layout
//! math under a chart renderer and focuses on:
//! - Axis normalization for value and category axes.
//! - Cartesian projection under four origin orientations.
//! - Polar projection (x as radius, y as angle).
//! - Layout: margins, content size, projection center, and polar radius.
//!
//! It does **not** draw anything. Callers are expected to:
//! - Feed the current container size into [`Coordinate::new`] and
//!   [`Coordinate::resize`].
//! - Hand the [`kurbo::Point`]s returned by [`Coordinate::coord`] to whatever
//!   2D backend they render with.
//! - Skip points with NaN components; unknown categories and mode
//!   mismatches are reported that way rather than as errors.
//!
//! ## Cartesian example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_coordinate::{Axis, Coordinate, Grid, Options, Orientation};
//!
//! let options: Options<&str, &str> =
//!     Options::new(Axis::category(["mon", "tue", "wed"]), Axis::value(0.0, 100.0))
//!         .with_orientation(Orientation::BottomLeft)
//!         .with_grid(Grid::uniform(10));
//! let mut coord = Coordinate::new((320.0, 220.0), options);
//!
//! // "tue" sits in the middle of the second of three slots; 25 is a quarter
//! // of the way up from the bottom edge.
//! assert_eq!(coord.coord("tue", 25.0), Point::new(160.0, 160.0));
//!
//! // Unknown categories produce NaN.
//! assert!(coord.coord("sun", 25.0).is_nan());
//!
//! // Re-layout after the container changes size.
//! coord.resize((620.0, 220.0));
//! assert_eq!(coord.width(), 600.0);
//! ```
//!
//! ## Polar example
//!
//! ```rust
//! use understory_coordinate::{Axis, Coordinate, Grid, Options, Polar};
//!
//! let options: Options<&str, &str> = Options::new(Axis::value(0.0, 1.0), Axis::value(0.0, 360.0))
//!     .with_grid(Grid::uniform(20))
//!     .with_polar(Polar::default());
//! let coord = Coordinate::new((440.0, 440.0), options);
//!
//! // Default center is the middle of the content area; default radius is
//! // half of its shorter side.
//! assert_eq!(coord.max_radius(), 200.0);
//!
//! // The start angle (90 degrees) points straight up.
//! let top = coord.coord(1.0, 0.0);
//! assert!((top.x - 220.0).abs() < 1e-9);
//! assert!((top.y - 20.0).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for the configuration types, using
//!   camelCase keys (`xAxis`, `boundaryGap`, `startAngle`), `"type"` for the
//!   orientation, and `"50%"` strings for percentages.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod coordinate;
mod length;
mod options;
mod orientation;

pub use axis::{Axis, CategoryAxis, Datum, Label, ValueAxis};
pub use coordinate::{Coordinate, CoordinateDebugInfo, Mode};
pub use length::{Length, ParseLengthError};
pub use options::{Grid, Options, Polar};
pub use orientation::{Direction, Orientation};
