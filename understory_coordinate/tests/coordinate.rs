// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_coordinate` crate.
//!
//! These exercise the public `Coordinate` API: layout after construction and
//! resize, Cartesian projection across orientations, polar projection, and the
//! NaN behavior for data that cannot be placed.

use kurbo::{Point, Size};
use understory_coordinate::{
    Axis, CategoryAxis, Coordinate, Datum, Grid, Length, Mode, Options, Orientation, Polar,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn degrees(options: Options<&'static str>) -> Coordinate<&'static str> {
    Coordinate::new((360.0, 360.0), options)
}

fn value_options(orientation: Orientation) -> Options<&'static str> {
    Options::new(Axis::value(0.0, 360.0), Axis::value(0.0, 360.0)).with_orientation(orientation)
}

#[test]
fn value_axis_ends_map_to_content_edges() {
    let coord = degrees(value_options(Orientation::TopLeft));
    let center = coord.center();
    assert_eq!(coord.coord_x(0.0), center.x);
    assert_eq!(coord.coord_x(360.0), center.x + coord.width());

    let coord = degrees(value_options(Orientation::TopRight));
    let center = coord.center();
    assert_eq!(coord.coord_x(0.0), center.x + coord.width());
    assert_eq!(coord.coord_x(360.0), center.x);
}

#[test]
fn vertical_direction_follows_orientation() {
    let top = degrees(value_options(Orientation::TopLeft));
    assert_eq!(top.coord_y(0.0), 0.0);
    assert_eq!(top.coord_y(360.0), 360.0);

    let bottom = degrees(value_options(Orientation::BottomLeft));
    assert_eq!(bottom.coord_y(0.0), 360.0);
    assert_eq!(bottom.coord_y(360.0), 0.0);
}

#[test]
fn value_axis_projection_is_monotonic() {
    for orientation in Orientation::ALL {
        let coord = degrees(value_options(orientation));
        let xs: Vec<f64> = (0..=36).map(|i| coord.coord_x(f64::from(i) * 10.0)).collect();
        let rising = xs.windows(2).all(|w| w[1] >= w[0]);
        let falling = xs.windows(2).all(|w| w[1] <= w[0]);
        assert!(rising || falling, "{orientation:?}");
        let left = matches!(orientation, Orientation::TopLeft | Orientation::BottomLeft);
        assert_eq!(rising, left, "{orientation:?}");
    }
}

#[test]
fn value_axis_extrapolates_outside_range() {
    let coord = degrees(value_options(Orientation::TopLeft));
    assert!(close(coord.coord_x(-36.0), -36.0));
    assert!(close(coord.coord_x(720.0), 720.0));
}

#[test]
fn category_axis_fractions() {
    let gap: Options<&str, &str> = Options::new(
        Axis::category(["a", "b", "c"]),
        Axis::value(0.0, 1.0),
    );
    let coord = Coordinate::new((600.0, 100.0), gap);
    assert!(close(coord.coord_x("a"), 100.0));
    assert!(close(coord.coord_x("b"), 300.0));
    assert!(close(coord.coord_x("c"), 500.0));

    let no_gap: Options<&str, &str> = Options::new(
        Axis::Category(CategoryAxis::new(["a", "b", "c"]).with_boundary_gap(false)),
        Axis::value(0.0, 1.0),
    );
    let coord = Coordinate::new((600.0, 100.0), no_gap);
    assert!(close(coord.coord_x("a"), 0.0));
    assert!(close(coord.coord_x("b"), 300.0));
    assert!(close(coord.coord_x("c"), 600.0));
}

#[test]
fn category_axis_on_y_respects_bottom_origin() {
    let options: Options<&str, &str> =
        Options::new(Axis::value(0.0, 1.0), Axis::category(["low", "high"]))
            .with_orientation(Orientation::BottomLeft);
    let coord = Coordinate::new((100.0, 400.0), options);
    assert!(close(coord.coord_y("low"), 300.0));
    assert!(close(coord.coord_y("high"), 100.0));
}

#[test]
fn missing_category_is_nan() {
    let options: Options<String, String> = Options::new(
        Axis::category(["a".to_string(), "b".to_string()]),
        Axis::value(0.0, 1.0),
    );
    let coord = Coordinate::new((100.0, 100.0), options);
    assert!(coord.coord_x("missing-category").is_nan());
    assert!(!coord.coord_x("a").is_nan());

    let pt = coord.coord("missing-category", 0.5);
    assert!(pt.x.is_nan());
    assert!(close(pt.y, 50.0));
    assert!(pt.is_nan());
}

#[test]
fn numeric_category_labels_place_plain_numbers() {
    let options: Options<i32, i32> = Options::new(
        Axis::category([2019, 2020, 2021]),
        Axis::value(0.0, 100.0),
    );
    let coord = Coordinate::new((300.0, 100.0), options);
    assert!(close(coord.coord_x(2020), 150.0));
    assert_eq!(coord.coord_x(2020), coord.coord_x(Datum::Category(2020)));
    assert!(close(coord.coord(2019, 50).x, 50.0));
    assert!(coord.coord_x(2022).is_nan());

    let options: Options<f64, f64> = Options::new(
        Axis::value(0.0, 1.0),
        Axis::category([0.0, 90.0, 180.0, 270.0]),
    )
    .with_polar(Polar::default());
    let coord = Coordinate::new((200.0, 200.0), options);
    let east = coord.coord(1.0, 90.0);
    assert!(!east.is_nan());
    assert!(close(east.x, 200.0));
    assert!(close(east.y, 100.0));
    assert_eq!(east, coord.coord(1.0, Datum::Category(90.0)));
    assert!(coord.coord(1.0, 45.0).is_nan());
}

#[test]
fn resize_resolves_percentage_margins() {
    let options = value_options(Orientation::TopLeft).with_grid(Grid::new(
        Length::Percent(10.0),
        20,
        Length::Percent(10.0),
        20,
    ));
    let mut coord = Coordinate::new((400.0, 300.0), options);
    assert!(close(coord.height(), 240.0));
    assert!(close(coord.width(), 360.0));
    assert_eq!(coord.center(), Point::new(20.0, 30.0));

    coord.resize((600.0, 500.0));
    assert!(close(coord.height(), 400.0));
    assert!(close(coord.width(), 560.0));
    assert_eq!(coord.center(), Point::new(20.0, 50.0));
    assert_eq!(coord.container_size(), Size::new(600.0, 500.0));
}

#[test]
fn polar_center_symmetric_percentages() {
    for orientation in [Orientation::TopLeft, Orientation::BottomRight] {
        let coord = degrees(value_options(orientation).with_polar(Polar::default()));
        assert!(close(coord.center().x, 180.0), "{orientation:?}");
        assert!(close(coord.center().y, 180.0), "{orientation:?}");
    }
}

#[test]
fn polar_center_mirrors_per_orientation() {
    let polar = Polar::default().with_center(Length::Percent(30.0), Length::Percent(70.0));
    let expected = [
        (Orientation::TopLeft, 108.0, 252.0),
        (Orientation::TopRight, 252.0, 252.0),
        (Orientation::BottomLeft, 108.0, 108.0),
        (Orientation::BottomRight, 252.0, 108.0),
    ];
    for (orientation, x, y) in expected {
        let coord = degrees(value_options(orientation).with_polar(polar));
        let center = coord.center();
        assert!(close(center.x, x), "{orientation:?}: {center:?}");
        assert!(close(center.y, y), "{orientation:?}: {center:?}");
    }
}

#[test]
fn polar_center_accounts_for_margins() {
    let polar = Polar::default().with_center(Length::Percent(25.0), Length::Percent(25.0));
    let options = value_options(Orientation::BottomRight)
        .with_grid(Grid::new(10, 20, 30, 40))
        .with_polar(polar);
    let coord = Coordinate::new((460.0, 440.0), options);
    // Content is 400x400 starting at (40, 10).
    assert!(close(coord.center().x, 40.0 + 400.0 - 100.0));
    assert!(close(coord.center().y, 10.0 + 400.0 - 100.0));
}

#[test]
fn polar_start_angle_is_straight_up() {
    let coord = degrees(value_options(Orientation::TopLeft).with_polar(Polar::default()));
    assert_eq!(coord.mode(), Mode::Polar);
    assert!(close(coord.max_radius(), 180.0));

    let pt = coord.coord(360.0, 0.0);
    let center = coord.center();
    assert!(close(pt.x, center.x));
    assert!(close(pt.y, center.y - 180.0));
}

#[test]
fn polar_custom_start_angle() {
    let polar = Polar::default().with_start_angle(0.0);
    let coord = degrees(value_options(Orientation::TopLeft).with_polar(polar));
    let pt = coord.coord(180.0, 0.0);
    assert!(close(pt.x, 180.0 + 90.0));
    assert!(close(pt.y, 180.0));
}

#[test]
fn polar_category_angle_ignores_boundary_gap() {
    let options: Options<&str, &str> = Options::new(
        Axis::value(0.0, 1.0),
        Axis::category(["n", "e", "s", "w"]),
    )
    .with_polar(Polar::default());
    let coord = Coordinate::new((200.0, 200.0), options);

    let north = coord.coord(1.0, "n");
    assert!(close(north.x, 100.0));
    assert!(close(north.y, 0.0));

    let east = coord.coord(1.0, "e");
    assert!(close(east.x, 200.0));
    assert!(close(east.y, 100.0));

    assert!(coord.coord(1.0, "up").is_nan());
}

#[test]
fn polar_category_radius_keeps_boundary_gap() {
    let options: Options<&str, &str> = Options::new(
        Axis::category(["inner", "outer"]),
        Axis::value(0.0, 360.0),
    )
    .with_polar(Polar::default());
    let coord = Coordinate::new((200.0, 200.0), options);
    assert!(close(coord.radius("inner"), 25.0));
    assert!(close(coord.radius("outer"), 75.0));
}

#[test]
fn coord_call_shapes_agree() {
    let cartesian = degrees(value_options(Orientation::BottomRight));
    let polar = degrees(value_options(Orientation::TopLeft).with_polar(Polar::default()));
    for coord in [&cartesian, &polar] {
        for (x, y) in [(0.0, 0.0), (90.0, 45.0), (360.0, 270.0)] {
            assert_eq!(coord.coord(x, y), coord.coord_pair((x, y)));
        }
    }
}

#[test]
fn mode_is_fixed_by_options() {
    let cartesian = degrees(value_options(Orientation::TopLeft));
    assert!(!cartesian.is_polar());
    assert!(cartesian.polar().is_none());
    assert!(cartesian.radius(1.0).is_nan());
    assert!(cartesian.radian(1.0).is_nan());

    let polar = degrees(value_options(Orientation::TopLeft).with_polar(Polar::default()));
    assert!(polar.is_polar());
    assert!(polar.coord_x(1.0).is_nan());
    assert!(polar.coord_y(1.0).is_nan());
}
