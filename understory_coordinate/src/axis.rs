// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis definitions and normalization.
//!
//! An [`Axis`] turns a logical [`Datum`] into a normalized fraction, where
//! `0.0` is the logical origin and `1.0` is the far end of the axis. Data that
//! cannot be placed (unknown category, or a label with no numeric value on a
//! value axis) normalizes to NaN.

use alloc::string::String;
use alloc::vec::Vec;

/// A logical value to be projected along an axis.
///
/// Numbers convert into [`Datum::Value`] and strings into
/// [`Datum::Category`]. For other label types, build the variant directly.
///
/// A number placed on a category axis is matched against labels that have
/// the same [`Label::to_number`] value, so numeric labels (years, angles) can
/// be passed as plain numbers.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum<L> {
    /// A point on a continuous value axis.
    Value(f64),
    /// A label on a category axis.
    Category(L),
}

impl<L: Label> Datum<L> {
    /// Numeric value of this datum, if it has one.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Category(label) => label.to_number(),
        }
    }
}

impl<L> From<f64> for Datum<L> {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl<L> From<f32> for Datum<L> {
    fn from(value: f32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl<L> From<i32> for Datum<L> {
    fn from(value: i32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl<'a> From<&'a str> for Datum<&'a str> {
    fn from(label: &'a str) -> Self {
        Self::Category(label)
    }
}

impl From<&str> for Datum<String> {
    fn from(label: &str) -> Self {
        Self::Category(String::from(label))
    }
}

impl From<String> for Datum<String> {
    fn from(label: String) -> Self {
        Self::Category(label)
    }
}

/// A category label.
///
/// Labels are compared with `==`. Labels with a numeric reading report it
/// through [`Label::to_number`]; the default is `None`, which is right for
/// text and other symbolic labels.
///
/// ```rust
/// use understory_coordinate::Label;
///
/// #[derive(PartialEq)]
/// enum Weekday {
///     Mon,
///     Tue,
/// }
///
/// impl Label for Weekday {}
///
/// assert_eq!(Weekday::Tue.to_number(), None);
/// assert_eq!(2020_i32.to_number(), Some(2020.0));
/// ```
pub trait Label: PartialEq {
    /// Numeric value of this label, if it has one.
    fn to_number(&self) -> Option<f64> {
        None
    }
}

impl Label for &str {}
impl Label for String {}
impl Label for char {}
impl Label for bool {}

macro_rules! lossless_number_label {
    ($($ty:ty),*) => {$(
        impl Label for $ty {
            fn to_number(&self) -> Option<f64> {
                Some(f64::from(*self))
            }
        }
    )*};
}

macro_rules! wide_number_label {
    ($($ty:ty),*) => {$(
        impl Label for $ty {
            fn to_number(&self) -> Option<f64> {
                Some(*self as f64)
            }
        }
    )*};
}

lossless_number_label!(i8, i16, i32, u8, u16, u32, f32, f64);
wide_number_label!(i64, u64, isize, usize);

/// A continuous numeric axis over `[min, max]`.
///
/// Values outside the range extrapolate linearly; nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueAxis {
    /// Domain value at the logical origin.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min: f64,
    /// Domain value at the far end of the axis.
    pub max: f64,
}

impl ValueAxis {
    /// Creates a value axis spanning `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a value axis spanning `[0, max]`.
    #[must_use]
    pub const fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    /// Returns `(value - min) / (max - min)`.
    #[must_use]
    #[inline]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// A discrete axis over an ordered list of labels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CategoryAxis<L> {
    /// Category labels in axis order.
    pub data: Vec<L>,
    /// Whether labels sit in the middle of their slot (`true`) or on the slot
    /// boundaries (`false`).
    #[cfg_attr(feature = "serde", serde(default = "default_boundary_gap"))]
    pub boundary_gap: bool,
}

#[cfg(feature = "serde")]
const fn default_boundary_gap() -> bool {
    true
}

impl<L: Label> CategoryAxis<L> {
    /// Creates a category axis with boundary gaps enabled.
    #[must_use]
    pub fn new(data: impl IntoIterator<Item = L>) -> Self {
        Self {
            data: data.into_iter().collect(),
            boundary_gap: true,
        }
    }

    /// Sets whether labels are centered within their slots.
    #[must_use]
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = boundary_gap;
        self
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of `label` in the category list.
    ///
    /// This is a linear scan; category lists are expected to be short.
    #[must_use]
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.data.iter().position(|d| d == label)
    }

    /// Position of the first label whose numeric value equals `value`.
    #[must_use]
    pub fn index_of_number(&self, value: f64) -> Option<usize> {
        self.data.iter().position(|d| d.to_number() == Some(value))
    }

    /// Position of `datum` in the category list, by label or by number.
    #[must_use]
    pub fn locate(&self, datum: &Datum<L>) -> Option<usize> {
        match datum {
            Datum::Category(label) => self.index_of(label),
            Datum::Value(v) => self.index_of_number(*v),
        }
    }

    /// Normalized slot position of `label`, honoring the boundary gap.
    ///
    /// With a gap, category `i` of `n` sits at `(i + 0.5) / n`; without one,
    /// at `i / (n - 1)`. Unknown labels yield NaN.
    #[must_use]
    pub fn fraction(&self, label: &L) -> f64 {
        self.slot_fraction(self.index_of(label))
    }

    /// Normalized angular position of `label`: `i / n`, ignoring the boundary
    /// gap so that the last category does not wrap onto the first.
    #[must_use]
    pub fn angular_fraction(&self, label: &L) -> f64 {
        self.turn_fraction(self.index_of(label))
    }

    fn slot_fraction(&self, index: Option<usize>) -> f64 {
        let Some(i) = index else {
            return f64::NAN;
        };
        let (i, n) = (i as f64, self.len() as f64);
        if self.boundary_gap {
            (i + 0.5) / n
        } else {
            i / (n - 1.0)
        }
    }

    fn turn_fraction(&self, index: Option<usize>) -> f64 {
        match index {
            Some(i) => i as f64 / self.len() as f64,
            None => f64::NAN,
        }
    }
}

/// One chart axis: either continuous values or discrete categories.
///
/// The kind is chosen once when the axis is configured.
///
/// ```rust
/// use understory_coordinate::{Axis, Datum};
///
/// let years: Axis<u16> = Axis::category([2019, 2020, 2021]);
/// assert!(years.is_category() && !years.is_value());
/// assert_eq!(years.fraction(&Datum::from(2020)), 0.5);
///
/// let share: Axis<u16> = Axis::value(0.0, 200.0);
/// assert!(share.is_value());
/// assert_eq!(share.fraction(&Datum::Value(50.0)), 0.25);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Axis<L = String> {
    /// Continuous numeric axis.
    Value(ValueAxis),
    /// Discrete label axis.
    Category(CategoryAxis<L>),
}

impl<L: Label> Axis<L> {
    /// Creates a value axis spanning `[min, max]`.
    #[must_use]
    pub const fn value(min: f64, max: f64) -> Self {
        Self::Value(ValueAxis::new(min, max))
    }

    /// Creates a category axis over `data` with boundary gaps enabled.
    #[must_use]
    pub fn category(data: impl IntoIterator<Item = L>) -> Self {
        Self::Category(CategoryAxis::new(data))
    }

    /// Returns `true` for a value axis.
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for a category axis.
    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }

    /// Normalized position of `datum` along this axis.
    ///
    /// Used for linear placement: Cartesian x/y and the polar radius. Value
    /// axes place any datum with a numeric value; category axes look the
    /// datum up by label or by number.
    #[must_use]
    pub fn fraction(&self, datum: &Datum<L>) -> f64 {
        match self {
            Self::Value(axis) => datum.to_number().map_or(f64::NAN, |v| axis.fraction(v)),
            Self::Category(axis) => axis.slot_fraction(axis.locate(datum)),
        }
    }

    /// Normalized position of `datum` around a full turn.
    ///
    /// Value axes behave as in [`Axis::fraction`]; category axes use
    /// [`CategoryAxis::angular_fraction`].
    #[must_use]
    pub fn angular_fraction(&self, datum: &Datum<L>) -> f64 {
        match self {
            Self::Value(axis) => datum.to_number().map_or(f64::NAN, |v| axis.fraction(v)),
            Self::Category(axis) => axis.turn_fraction(axis.locate(datum)),
        }
    }
}

impl<L> From<ValueAxis> for Axis<L> {
    fn from(axis: ValueAxis) -> Self {
        Self::Value(axis)
    }
}

impl<L> From<CategoryAxis<L>> for Axis<L> {
    fn from(axis: CategoryAxis<L>) -> Self {
        Self::Category(axis)
    }
}
