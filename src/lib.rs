// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Span Module
//!
//! This crate represents time spans and computes set-algebra over
//! collections of them, for scheduling-style callers that need to find
//! overlaps, carve busy time out of availability, or test nesting.
//!
//! # Core types
//!
//! - [`Span<T>`] — an immutable `[start, end]` pair over any [`TimeInstant`].
//! - [`TypedSpan<T>`] — a span whose endpoints carry a [`BoundType`].
//! - [`SpanLike`] — trait every span-shaped value implements; the algebra
//!   accepts any implementor, including caller payload types.
//! - [`Spans<S>`] — an ordered collection with the lifted operations.
//! - [`TimeInstant`] — trait for points in time usable as endpoints.
//!
//! # Operations
//!
//! | Operation | Free function | On [`Spans`] |
//! |-----------|---------------|--------------|
//! | overlap test | [`overlaps`] | |
//! | containment | [`within`] | |
//! | pairwise overlaps | [`intersection()`] | [`Spans::intersection`] |
//! | overlaps across two collections | [`intersection_between`] | [`Spans::intersection_between`] |
//! | difference | [`without()`] | [`Spans::without`] |
//! | summed duration | | [`Spans::duration`] |
//!
//! Every operation returns fresh values and leaves its inputs untouched.
//! The `*_with_handler` variants take a closure that receives the two
//! original spans along with the computed result, which is how callers
//! attach their own payloads to the output.
//!
//! Overlapping spans are not merged anywhere: [`Spans::duration`] counts
//! shared time once per span.
//!
//! # Encodings
//!
//! - `Display`: `2020-09-26 02:00 - 2020-09-26 06:00` (see [`DISPLAY_FORMAT`]).
//! - ISO-8601 interval text via [`Span::to_iso8601`] and `FromStr`.
//! - Fixed-width binary via [`Span::to_bytes`] / [`Span::from_bytes`].
//! - `{ "start": ..., "end": ... }` records with the `serde` feature.

mod codec;
mod difference;
mod error;
pub(crate) mod instant;
mod intersection;
mod relation;
pub(crate) mod span;
mod spans;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use codec::InstantCodec;
pub use difference::{without, without_with_handler};
pub use error::{Result, SpanError};
pub use instant::TimeInstant;
pub use intersection::{
    intersection, intersection_between, intersection_between_with_handler,
    intersection_with_handler,
};
pub use relation::{is_instant, overlaps, within};
pub use span::{BoundType, Span, SpanLike, TypedSpan, DISPLAY_FORMAT};
pub use spans::Spans;

/// Span between two UTC instants.
///
/// This is a type alias for [`Span<DateTime<Utc>>`](Span).
pub type UtcSpan = Span<chrono::DateTime<chrono::Utc>>;
