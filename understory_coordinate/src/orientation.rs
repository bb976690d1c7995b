// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which corner of the content area is the logical origin.
///
/// Output pixel coordinates always use the usual screen convention (x grows
/// rightward, y grows downward); the orientation only decides which way each
/// axis runs across the content area, and which edges polar center
/// percentages are measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum Orientation {
    /// Origin in the top-left corner; x grows rightward, y grows downward.
    #[default]
    TopLeft,
    /// Origin in the top-right corner; x grows leftward, y grows downward.
    TopRight,
    /// Origin in the bottom-left corner; x grows rightward, y grows upward.
    BottomLeft,
    /// Origin in the bottom-right corner; x grows leftward, y grows upward.
    BottomRight,
}

impl Orientation {
    /// All four orientations.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Looks up an orientation by its numeric code: `1` top-left, `2`
    /// top-right, `3` bottom-left, `4` bottom-right.
    #[must_use]
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::TopLeft),
            2 => Some(Self::TopRight),
            3 => Some(Self::BottomLeft),
            4 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Looks up an orientation by its kebab-case name (`"top-left"`) or its
    /// short name (`"lt"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top-left" | "lt" => Some(Self::TopLeft),
            "top-right" | "rt" => Some(Self::TopRight),
            "bottom-left" | "lb" => Some(Self::BottomLeft),
            "bottom-right" | "rb" => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Returns the `(x, y)` directions for this orientation.
    #[must_use]
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            Self::TopLeft => (Direction::Forward, Direction::Forward),
            Self::TopRight => (Direction::Reverse, Direction::Forward),
            Self::BottomLeft => (Direction::Forward, Direction::Reverse),
            Self::BottomRight => (Direction::Reverse, Direction::Reverse),
        }
    }

    /// Direction of the horizontal axis relative to screen space.
    #[must_use]
    pub const fn x_direction(self) -> Direction {
        self.directions().0
    }

    /// Direction of the vertical axis relative to screen space.
    #[must_use]
    pub const fn y_direction(self) -> Direction {
        self.directions().1
    }
}

/// How a logical axis runs relative to the screen axis it is drawn along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same direction as screen space (rightward or downward).
    Forward,
    /// Opposite to screen space (leftward or upward).
    Reverse,
}

impl Direction {
    /// Maps a normalized fraction along the logical axis to a fraction along
    /// the screen axis.
    #[must_use]
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Forward => t,
            Self::Reverse => 1.0 - t,
        }
    }

    /// Places a distance measured from the logical origin edge within an
    /// extent, returning the distance from the screen origin edge.
    #[must_use]
    #[inline]
    pub fn offset(self, extent: f64, along: f64) -> f64 {
        match self {
            Self::Forward => along,
            Self::Reverse => extent - along,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserialize, Deserializer};

    use super::Orientation;

    struct OrientationVisitor;

    impl Visitor<'_> for OrientationVisitor {
        type Value = Orientation;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an orientation name such as \"top-left\" or a code from 1 to 4")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Orientation, E> {
            Orientation::from_code(v)
                .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Orientation, E> {
            u64::try_from(v)
                .ok()
                .and_then(Orientation::from_code)
                .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Orientation, E> {
            Orientation::from_name(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for Orientation {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(OrientationVisitor)
        }
    }
}
