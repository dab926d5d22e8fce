// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Span values.
//!
//! This module provides:
//! - [`SpanLike`]: the capability every span-shaped value exposes
//! - [`Span<T>`]: a plain `[start, end]` pair over any [`TimeInstant`]
//! - [`TypedSpan<T>`]: a span tagged with per-endpoint [`BoundType`]

use crate::error::{Result, SpanError};
use crate::instant::TimeInstant;
use qtty::{Day, Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Pattern used by the human-readable `Display` form of spans.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Anything with an ordered start and end instant.
///
/// The set-algebra operations in this crate accept any `SpanLike`, so callers
/// can run them directly over their own payload-carrying types. `Display` is
/// part of the capability so collections can always be rendered.
pub trait SpanLike: fmt::Display {
    type Instant: TimeInstant;

    fn start(&self) -> Self::Instant;

    fn end(&self) -> Self::Instant;

    /// `true` when the span has zero duration.
    #[inline]
    fn is_instant(&self) -> bool {
        crate::relation::is_instant(self)
    }

    /// `end - start`.
    #[inline]
    fn duration(&self) -> <Self::Instant as TimeInstant>::Duration {
        self.end().difference(&self.start())
    }

    /// The bare `[start, end]` pair, dropping any extra data.
    #[inline]
    fn to_span(&self) -> Span<Self::Instant> {
        Span::new(self.start(), self.end())
    }
}

impl<S: SpanLike + ?Sized> SpanLike for &S {
    type Instant = S::Instant;

    #[inline]
    fn start(&self) -> Self::Instant {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> Self::Instant {
        (**self).end()
    }
}

impl<S: SpanLike + ?Sized> SpanLike for Box<S> {
    type Instant = S::Instant;

    #[inline]
    fn start(&self) -> Self::Instant {
        (**self).start()
    }

    #[inline]
    fn end(&self) -> Self::Instant {
        (**self).end()
    }
}

/// A span of time between two instants.
///
/// `start <= end` is expected; equality denotes an instant. Spans have no
/// identity beyond their bounds.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use spaniel::{Span, SpanLike};
///
/// let start = Utc.with_ymd_and_hms(2020, 9, 26, 2, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2020, 9, 26, 6, 0, 0).unwrap();
/// let span = Span::new(start, end);
///
/// assert_eq!(span.duration().num_hours(), 4);
/// assert_eq!(span.to_string(), "2020-09-26 02:00 - 2020-09-26 06:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

impl<T: TimeInstant> Span<T> {
    /// Creates a span. The caller guarantees `start <= end`; use
    /// [`Span::try_new`] for untrusted input.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        debug_assert!(start <= end, "span start after end");
        Span { start, end }
    }

    /// Creates a span, rejecting `start > end`.
    pub fn try_new(start: T, end: T) -> Result<Self> {
        if start > end {
            return Err(SpanError::Reversed {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }
        Ok(Span { start, end })
    }

    /// A zero-duration span at `at`.
    #[inline]
    pub fn instant(at: T) -> Self {
        Span { start: at, end: at }
    }

    /// Renders `start - end` with a custom `strftime` pattern.
    pub fn format_with(&self, pattern: &str) -> String {
        format!(
            "{} - {}",
            self.start.format_with(pattern),
            self.end.format_with(pattern)
        )
    }
}

impl<T: TimeInstant> SpanLike for Span<T> {
    type Instant = T;

    #[inline]
    fn start(&self) -> T {
        self.start
    }

    #[inline]
    fn end(&self) -> T {
        self.end
    }
}

impl<T: TimeInstant> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DISPLAY_FORMAT))
    }
}

// Specific implementation for chrono-backed spans
impl<T: TimeInstant<Duration = chrono::Duration>> Span<T> {
    /// Returns the duration in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        self.duration().num_seconds()
    }

    /// Returns the duration in days.
    pub fn duration_days(&self) -> Days {
        chrono_days(self.duration())
    }
}

/// Converts a chrono duration to a [`Days`] quantity.
pub(crate) fn chrono_days(duration: chrono::Duration) -> Days {
    let seconds = match duration.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        // Fallback for durations that do not fit in i64 nanoseconds.
        None => duration.num_seconds() as f64,
    };
    Seconds::new(seconds).to::<Day>()
}

/// Inclusivity of a span endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundType {
    /// The endpoint itself is excluded.
    Open,
    /// The endpoint itself is included.
    Closed,
}

/// A span whose endpoints carry an open/closed tag.
///
/// An instant can never be open: there would be nothing left to include.
/// Constructors enforce `[t, t]` for zero-duration spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypedSpan<T: TimeInstant> {
    start: T,
    end: T,
    start_type: BoundType,
    end_type: BoundType,
}

impl<T: TimeInstant> TypedSpan<T> {
    /// Creates a typed span. Instants are forced to `Closed` on both ends.
    pub fn new(start: T, end: T, start_type: BoundType, end_type: BoundType) -> Self {
        debug_assert!(start <= end, "span start after end");
        if start == end {
            return Self::closed_instant(start);
        }
        TypedSpan {
            start,
            end,
            start_type,
            end_type,
        }
    }

    /// Like [`TypedSpan::new`], but rejects `start > end`.
    pub fn try_new(start: T, end: T, start_type: BoundType, end_type: BoundType) -> Result<Self> {
        Span::try_new(start, end)?;
        Ok(Self::new(start, end, start_type, end_type))
    }

    /// `[start, end)` for ranges and `[t, t]` for instants.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use spaniel::{BoundType, TypedSpan};
    ///
    /// let t = Utc.with_ymd_and_hms(2020, 9, 26, 2, 0, 0).unwrap();
    /// let instant = TypedSpan::half_open(t, t);
    /// assert_eq!(instant.end_type(), BoundType::Closed);
    /// ```
    pub fn half_open(start: T, end: T) -> Self {
        Self::new(start, end, BoundType::Closed, BoundType::Open)
    }

    fn closed_instant(at: T) -> Self {
        TypedSpan {
            start: at,
            end: at,
            start_type: BoundType::Closed,
            end_type: BoundType::Closed,
        }
    }

    #[inline]
    pub fn start_type(&self) -> BoundType {
        self.start_type
    }

    #[inline]
    pub fn end_type(&self) -> BoundType {
        self.end_type
    }

    /// Drops the boundary tags.
    #[inline]
    pub fn untyped(&self) -> Span<T> {
        Span::new(self.start, self.end)
    }
}

impl<T: TimeInstant> SpanLike for TypedSpan<T> {
    type Instant = T;

    #[inline]
    fn start(&self) -> T {
        self.start
    }

    #[inline]
    fn end(&self) -> T {
        self.end
    }
}

impl<T: TimeInstant> From<Span<T>> for TypedSpan<T> {
    fn from(span: Span<T>) -> Self {
        TypedSpan::half_open(span.start, span.end)
    }
}

impl<T: TimeInstant> fmt::Display for TypedSpan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = match self.start_type {
            BoundType::Closed => '[',
            BoundType::Open => '(',
        };
        let close = match self.end_type {
            BoundType::Closed => ']',
            BoundType::Open => ')',
        };
        write!(
            f,
            "{open}{}, {}{close}",
            self.start.format_with(DISPLAY_FORMAT),
            self.end.format_with(DISPLAY_FORMAT)
        )
    }
}

// Serde support: `{ "start": ..., "end": ... }` with the instant's own
// encoding (RFC 3339 for chrono types).
#[cfg(feature = "serde")]
impl<T: TimeInstant + Serialize> Serialize for Span<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Span", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TimeInstant + Deserialize<'de>> Deserialize<'de> for Span<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Span::try_new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<T: TimeInstant + Serialize> Serialize for TypedSpan<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TypedSpan", 4)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("start_type", &self.start_type)?;
        s.serialize_field("end_type", &self.end_type)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TimeInstant + Deserialize<'de>> Deserialize<'de> for TypedSpan<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
            start_type: BoundType,
            end_type: BoundType,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        TypedSpan::try_new(raw.start, raw.end, raw.start_type, raw.end_type)
            .map_err(serde::de::Error::custom)
    }
}
