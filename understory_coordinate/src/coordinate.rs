// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::axis::{Axis, Datum, Label};
use crate::options::{Grid, Options, Polar};
use crate::orientation::Orientation;

/// Projection mode of a [`Coordinate`], fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// x and y map onto the horizontal and vertical screen axes.
    Cartesian,
    /// x maps onto the radius and y onto the angle around a center.
    Polar,
}

/// Maps logical axis values into pixel positions inside a container.
///
/// `Coordinate` owns the axis, margin and polar configuration plus the layout
/// derived from the current container size:
/// - Content width/height (container minus margins).
/// - The center point: the content origin in Cartesian mode, or the polar
///   center in polar mode.
/// - The maximum polar radius.
///
/// Layout is computed on construction. Call [`Coordinate::resize`] whenever
/// the container size changes; nothing is observed automatically.
///
/// Queries never fail loudly. A datum that cannot be placed (unknown category,
/// wrong datum kind, or a Cartesian query on a polar layout and vice versa)
/// produces NaN, which renderers are expected to skip.
#[derive(Clone, Debug)]
pub struct Coordinate<X = alloc::string::String, Y = X> {
    orientation: Orientation,
    x_axis: Axis<X>,
    y_axis: Axis<Y>,
    grid: Grid,
    polar: Option<Polar>,
    container: Size,
    margins: Insets,
    size: Size,
    center: Point,
    max_radius: f64,
}

impl<X: Label, Y: Label> Coordinate<X, Y> {
    /// Creates a coordinate system for a container of the given size and lays
    /// it out immediately.
    #[must_use]
    pub fn new(container: impl Into<Size>, options: Options<X, Y>) -> Self {
        let Options {
            orientation,
            x_axis,
            y_axis,
            grid,
            polar,
        } = options;
        let mut coord = Self {
            orientation,
            x_axis,
            y_axis,
            grid,
            polar,
            container: Size::ZERO,
            margins: Insets::ZERO,
            size: Size::ZERO,
            center: Point::ORIGIN,
            max_radius: 0.0,
        };
        tracing::debug!(
            mode = ?coord.mode(),
            orientation = ?orientation,
            x_category = coord.x_axis.is_category(),
            y_category = coord.y_axis.is_category(),
            "coordinate created"
        );
        coord.resize(container);
        coord
    }

    /// Recomputes the derived layout for a new container size.
    ///
    /// Margins resolve against the container; the polar center and radius
    /// resolve against the remaining content area.
    pub fn resize(&mut self, container: impl Into<Size>) {
        let container = container.into();
        let margins = self.grid.resolve(container);
        let size = Size::new(
            container.width - margins.x0 - margins.x1,
            container.height - margins.y0 - margins.y1,
        );

        self.container = container;
        self.margins = margins;
        self.size = size;

        match self.polar {
            Some(polar) => {
                self.max_radius = polar.radius.resolve(size.width.min(size.height));
                let (dx, dy) = self.orientation.directions();
                let along_x = polar.center[0].resolve(size.width);
                let along_y = polar.center[1].resolve(size.height);
                self.center = Point::new(
                    margins.x0 + dx.offset(size.width, along_x),
                    margins.y0 + dy.offset(size.height, along_y),
                );
            }
            None => {
                // The content origin is always the top-left content corner;
                // orientation only flips projection direction.
                self.center = Point::new(margins.x0, margins.y0);
            }
        }

        tracing::trace!(
            width = size.width,
            height = size.height,
            center_x = self.center.x,
            center_y = self.center.y,
            max_radius = self.max_radius,
            "coordinate layout"
        );
    }

    /// Horizontal pixel position of `x` in Cartesian mode.
    ///
    /// Returns NaN in polar mode or when `x` cannot be placed on the x axis.
    #[must_use]
    pub fn coord_x(&self, x: impl Into<Datum<X>>) -> f64 {
        if self.polar.is_some() {
            return f64::NAN;
        }
        let t = self.x_axis.fraction(&x.into());
        self.center.x + self.size.width * self.orientation.x_direction().apply(t)
    }

    /// Vertical pixel position of `y` in Cartesian mode.
    ///
    /// Returns NaN in polar mode or when `y` cannot be placed on the y axis.
    #[must_use]
    pub fn coord_y(&self, y: impl Into<Datum<Y>>) -> f64 {
        if self.polar.is_some() {
            return f64::NAN;
        }
        let t = self.y_axis.fraction(&y.into());
        self.center.y + self.size.height * self.orientation.y_direction().apply(t)
    }

    /// Distance from the polar center for `x`, in pixels.
    ///
    /// Returns NaN in Cartesian mode or when `x` cannot be placed on the x axis.
    #[must_use]
    pub fn radius(&self, x: impl Into<Datum<X>>) -> f64 {
        if self.polar.is_none() {
            return f64::NAN;
        }
        self.max_radius * self.x_axis.fraction(&x.into())
    }

    /// Screen angle for `y`, in radians (y-down, so positive is clockwise).
    ///
    /// The logical origin sits at `start_angle` degrees counter-clockwise from
    /// the positive x axis and values sweep a full turn over the axis.
    /// Category axes divide the turn into equal slices without a boundary
    /// gap.
    ///
    /// Returns NaN in Cartesian mode or when `y` cannot be placed on the y axis.
    #[must_use]
    pub fn radian(&self, y: impl Into<Datum<Y>>) -> f64 {
        let Some(polar) = self.polar else {
            return f64::NAN;
        };
        let t = self.y_axis.angular_fraction(&y.into());
        let sweep = if polar.clockwise { 360.0 } else { -360.0 };
        (-polar.start_angle + sweep * t).to_radians()
    }

    /// Pixel position of the logical point `(x, y)`.
    ///
    /// Either component may be NaN if the corresponding datum cannot be
    /// placed; see [`Point::is_nan`].
    #[must_use]
    pub fn coord(&self, x: impl Into<Datum<X>>, y: impl Into<Datum<Y>>) -> Point {
        if self.polar.is_some() {
            let r = self.radius(x);
            let theta = self.radian(y);
            self.center + Vec2::from_angle(theta) * r
        } else {
            Point::new(self.coord_x(x), self.coord_y(y))
        }
    }

    /// Pixel position of a logical `(x, y)` pair.
    ///
    /// Equivalent to [`Coordinate::coord`].
    #[must_use]
    pub fn coord_pair<A, B>(&self, (x, y): (A, B)) -> Point
    where
        A: Into<Datum<X>>,
        B: Into<Datum<Y>>,
    {
        self.coord(x, y)
    }

    /// Pixel position of `(x, y)`, or `None` if it cannot be placed.
    #[must_use]
    pub fn checked_coord(&self, x: impl Into<Datum<X>>, y: impl Into<Datum<Y>>) -> Option<Point> {
        let pt = self.coord(x, y);
        (!pt.is_nan()).then_some(pt)
    }
}

impl<X, Y> Coordinate<X, Y> {
    /// Returns the projection mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.polar.is_some() {
            Mode::Polar
        } else {
            Mode::Cartesian
        }
    }

    /// Returns `true` in polar mode.
    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.polar.is_some()
    }

    /// Returns the origin corner.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the x (radius) axis.
    #[must_use]
    pub fn x_axis(&self) -> &Axis<X> {
        &self.x_axis
    }

    /// Returns the y (angle) axis.
    #[must_use]
    pub fn y_axis(&self) -> &Axis<Y> {
        &self.y_axis
    }

    /// Returns the configured margins.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the polar settings, if in polar mode.
    #[must_use]
    pub fn polar(&self) -> Option<&Polar> {
        self.polar.as_ref()
    }

    /// Container size used by the last layout.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Margins in pixels, as resolved by the last layout.
    #[must_use]
    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// Content width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Content height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Content size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Content area in container pixel coordinates.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size((self.margins.x0, self.margins.y0), self.size)
    }

    /// Projection origin: the top-left content corner in Cartesian mode, the
    /// polar center in polar mode.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Outer polar radius in pixels; zero in Cartesian mode.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// Snapshot of the current layout for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CoordinateDebugInfo {
        CoordinateDebugInfo {
            container: self.container,
            margins: self.margins,
            content_rect: self.content_rect(),
            center: self.center,
            max_radius: self.max_radius,
            orientation: self.orientation,
            mode: self.mode(),
        }
    }
}

/// Debug snapshot of a [`Coordinate`] layout.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateDebugInfo {
    /// Container size in pixels.
    pub container: Size,
    /// Resolved margins.
    pub margins: Insets,
    /// Content area in container coordinates.
    pub content_rect: Rect,
    /// Projection origin or polar center.
    pub center: Point,
    /// Outer polar radius.
    pub max_radius: f64,
    /// Origin corner.
    pub orientation: Orientation,
    /// Projection mode.
    pub mode: Mode,
}
