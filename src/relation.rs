// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pairwise predicates between spans.
//!
//! [`overlaps`] is the single overlap test every algorithm in the crate goes
//! through; nothing else re-derives it.

use crate::span::SpanLike;

/// Returns `true` if the two spans share time.
///
/// The test is strict: spans that merely touch (`a.end == b.start`) do not
/// overlap, and a zero-duration instant never overlaps anything that ends or
/// starts exactly on it.
#[inline]
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: SpanLike + ?Sized,
    B: SpanLike<Instant = A::Instant> + ?Sized,
{
    a.start() < b.end() && b.start() < a.end()
}

/// Returns `true` if `inner` lies completely inside `outer`.
///
/// Equal starts or ends count as inside.
#[inline]
pub fn within<A, B>(outer: &A, inner: &B) -> bool
where
    A: SpanLike + ?Sized,
    B: SpanLike<Instant = A::Instant> + ?Sized,
{
    outer.start() <= inner.start() && outer.end() >= inner.end()
}

/// Returns `true` if the span has zero duration.
#[inline]
pub fn is_instant<S: SpanLike + ?Sized>(span: &S) -> bool {
    span.start() == span.end()
}

/// `true` when both spans have the same start and the same end.
#[inline]
pub(crate) fn same_bounds<A, B>(a: &A, b: &B) -> bool
where
    A: SpanLike + ?Sized,
    B: SpanLike<Instant = A::Instant> + ?Sized,
{
    a.start() == b.start() && a.end() == b.end()
}
