// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute and percentage lengths.
//!
//! Margins, the polar center, and the polar radius are configured as
//! [`Length`]s and resolved against a concrete pixel dimension during layout.

use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;

/// A length that is either an absolute pixel value or a percentage of a total.
///
/// ```rust
/// use understory_coordinate::Length;
///
/// assert_eq!(Length::px(20.0).resolve(400.0), 20.0);
/// assert_eq!(Length::percent(10.0).resolve(300.0), 30.0);
/// assert_eq!("25%".parse::<Length>().unwrap(), Length::Percent(25.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Absolute device pixels.
    Px(f64),
    /// Percentage of the dimension the length is resolved against.
    Percent(f64),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Creates an absolute pixel length.
    #[must_use]
    #[inline]
    pub const fn px(px: f64) -> Self {
        Self::Px(px)
    }

    /// Creates a percentage length (`50.0` means half of the total).
    #[must_use]
    #[inline]
    pub const fn percent(percent: f64) -> Self {
        Self::Percent(percent)
    }

    /// Resolves this length against `total`, returning absolute pixels.
    ///
    /// Pixel lengths pass through untouched; percentages yield
    /// `total * percent / 100`.
    #[must_use]
    #[inline]
    pub fn resolve(self, total: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(percent) => total * (percent / 100.0),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<i32> for Length {
    fn from(px: i32) -> Self {
        Self::Px(f64::from(px))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for Length {
    type Err = ParseLengthError;

    /// Parses `"<number>%"` as a percentage, and `"<number>"` or
    /// `"<number>px"` as absolute pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(percent) = s.strip_suffix('%') {
            return Ok(Self::Percent(percent.trim_end().parse()?));
        }
        let px = s.strip_suffix("px").unwrap_or(s);
        Ok(Self::Px(px.trim_end().parse()?))
    }
}

/// Error returned when a string cannot be parsed as a [`Length`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLengthError {
    source: ParseFloatError,
}

impl From<ParseFloatError> for ParseLengthError {
    fn from(source: ParseFloatError) -> Self {
        Self { source }
    }
}

impl fmt::Display for ParseLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid length, expected a number or a percentage: {}",
            self.source
        )
    }
}

impl core::error::Error for ParseLengthError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Length;

    // Pixels travel as plain numbers and percentages as `"<n>%"` tokens.
    impl Serialize for Length {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match *self {
                Self::Px(px) => serializer.serialize_f64(px),
                Self::Percent(_) => serializer.collect_str(self),
            }
        }
    }

    struct LengthVisitor;

    impl Visitor<'_> for LengthVisitor {
        type Value = Length;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a pixel number or a percentage string such as \"50%\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Length, E> {
            Ok(Length::Px(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Length, E> {
            Ok(Length::Px(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Length, E> {
            Ok(Length::Px(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Length, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Length {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LengthVisitor)
        }
    }
}
