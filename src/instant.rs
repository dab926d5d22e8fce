// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points in time usable as span endpoints.
//!
//! The algebra only needs three things from a timestamp: a total order,
//! subtraction yielding a duration, and a way to render it. [`TimeInstant`]
//! captures exactly that and is implemented for the chrono types callers
//! usually hold:
//!
//! | Type | Duration |
//! |------|----------|
//! | `DateTime<Utc>` | `chrono::Duration` |
//! | `DateTime<FixedOffset>` | `chrono::Duration` |
//! | `NaiveDateTime` | `chrono::Duration` |

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::fmt::Debug;
use std::ops::Add;

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as endpoints of a
/// [`Span`](crate::Span). `Ord` is required because the intersection sweep
/// sorts by start instant.
pub trait TimeInstant: Copy + Ord + Debug + Sized {
    /// The duration type produced by subtracting two instants.
    type Duration: Copy + Debug + PartialEq + Add<Output = Self::Duration>;

    /// Compute `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// The additive identity of [`Self::Duration`].
    fn zero_duration() -> Self::Duration;

    /// Render this instant with a `strftime`-style pattern.
    fn format_with(&self, pattern: &str) -> String;
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn zero_duration() -> Self::Duration {
        chrono::Duration::zero()
    }

    fn format_with(&self, pattern: &str) -> String {
        self.format(pattern).to_string()
    }
}

impl TimeInstant for DateTime<FixedOffset> {
    type Duration = chrono::Duration;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn zero_duration() -> Self::Duration {
        chrono::Duration::zero()
    }

    fn format_with(&self, pattern: &str) -> String {
        self.format(pattern).to_string()
    }
}

impl TimeInstant for NaiveDateTime {
    type Duration = chrono::Duration;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn zero_duration() -> Self::Duration {
        chrono::Duration::zero()
    }

    fn format_with(&self, pattern: &str) -> String {
        self.format(pattern).to_string()
    }
}
