// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the (de)serialisation boundary.
//!
//! The set-algebra itself is total; only decoding and parsing can fail.

use thiserror::Error;

/// Errors raised while building or decoding a span.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// A binary payload did not have the width of two encoded instants.
    #[error("unknown binary format, len {len} (expected {expected})")]
    InvalidLength { len: usize, expected: usize },

    /// A decoded timestamp component is outside chrono's representable range.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    /// A textual timestamp could not be parsed.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// A textual interval had no `/` between its two endpoints.
    #[error("missing '/' separator in interval '{0}'")]
    MissingSeparator(String),

    /// The start of the span lies after its end.
    #[error("span start {start} is after its end {end}")]
    Reversed { start: String, end: String },
}

/// Shorthand for results carrying a [`SpanError`].
pub type Result<T> = std::result::Result<T, SpanError>;
