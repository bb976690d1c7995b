// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`Coordinate`](crate::Coordinate).

use kurbo::{Insets, Size};

use crate::axis::Axis;
use crate::length::Length;
use crate::orientation::Orientation;

/// Margins between the container edges and the content area.
///
/// Left/right resolve against the container width, top/bottom against the
/// container height. Unspecified sides default to zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Grid {
    /// Top margin.
    pub top: Length,
    /// Right margin.
    pub right: Length,
    /// Bottom margin.
    pub bottom: Length,
    /// Left margin.
    pub left: Length,
}

impl Grid {
    /// Creates a grid from explicit margins, in CSS order.
    #[must_use]
    pub fn new(
        top: impl Into<Length>,
        right: impl Into<Length>,
        bottom: impl Into<Length>,
        left: impl Into<Length>,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Creates a grid with the same margin on every side.
    #[must_use]
    pub fn uniform(margin: impl Into<Length>) -> Self {
        let margin = margin.into();
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Resolves the margins against a container size.
    #[must_use]
    pub fn resolve(&self, container: Size) -> Insets {
        Insets::new(
            self.left.resolve(container.width),
            self.top.resolve(container.height),
            self.right.resolve(container.width),
            self.bottom.resolve(container.height),
        )
    }
}

/// Polar layout settings.
///
/// The x axis becomes the radius axis and the y axis the angle axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Polar {
    /// Center position, resolved against the content width and height and
    /// measured from the orientation's origin edges.
    pub center: [Length; 2],
    /// Outer radius, resolved against the shorter content side.
    pub radius: Length,
    /// Angle of the logical origin, in degrees counter-clockwise from the
    /// positive x axis.
    pub start_angle: f64,
    /// Whether increasing angle values sweep clockwise on screen.
    pub clockwise: bool,
}

impl Default for Polar {
    fn default() -> Self {
        Self {
            center: [Length::percent(50.0), Length::percent(50.0)],
            radius: Length::percent(50.0),
            start_angle: 90.0,
            clockwise: true,
        }
    }
}

impl Polar {
    /// Sets the center position.
    #[must_use]
    pub fn with_center(mut self, x: impl Into<Length>, y: impl Into<Length>) -> Self {
        self.center = [x.into(), y.into()];
        self
    }

    /// Sets the outer radius.
    #[must_use]
    pub fn with_radius(mut self, radius: impl Into<Length>) -> Self {
        self.radius = radius.into();
        self
    }

    /// Sets the start angle in degrees.
    #[must_use]
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Sets the sweep direction.
    #[must_use]
    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }
}

/// Everything needed to build a [`Coordinate`](crate::Coordinate).
///
/// Presence of [`Options::polar`] selects polar mode for the lifetime of the
/// coordinate system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Options<X = alloc::string::String, Y = X> {
    /// Logical origin corner.
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub orientation: Orientation,
    /// Horizontal axis, or the radius axis in polar mode.
    pub x_axis: Axis<X>,
    /// Vertical axis, or the angle axis in polar mode.
    pub y_axis: Axis<Y>,
    /// Content margins.
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: Grid,
    /// Polar settings; `None` for a Cartesian layout.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub polar: Option<Polar>,
}

impl<X, Y> Options<X, Y> {
    /// Creates Cartesian options with a top-left origin and no margins.
    #[must_use]
    pub fn new(x_axis: Axis<X>, y_axis: Axis<Y>) -> Self {
        Self {
            orientation: Orientation::default(),
            x_axis,
            y_axis,
            grid: Grid::default(),
            polar: None,
        }
    }

    /// Sets the origin corner.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the content margins.
    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Switches to a polar layout.
    #[must_use]
    pub fn with_polar(mut self, polar: Polar) -> Self {
        self.polar = Some(polar);
        self
    }
}
