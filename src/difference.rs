// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Span difference.
//!
//! [`without`] removes the coverage of one span from another by case analysis
//! on the four endpoints. Cases are checked in order and the first match
//! wins.

use crate::relation::is_instant;
use crate::span::{Span, SpanLike};
use log::trace;

/// Returns the parts of `base` not covered by `cut`, in chronological order.
///
/// ```text
/// inside:      ----++++++----  base       start overlap:  ----++++++----
///              ------++------  cut                        ---++++-------
///           => ----++--++----                          => -------+++----
///
/// end overlap: ----++++++----             cover:          ----++++++----
///              -------++++---                             ---++++++++---
///           => ----+++-------                          => --------------
/// ```
///
/// A zero-duration `cut` has no effect: a single point cannot split a span.
/// Spans that touch or do not meet at all leave `base` unchanged.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use spaniel::{without, Span};
///
/// let at = |h, m| Utc.with_ymd_and_hms(2020, 9, 26, h, m, 0).unwrap();
/// let base = Span::new(at(9, 4), at(12, 13));
/// let cut = Span::new(at(10, 6), at(11, 13));
///
/// assert_eq!(
///     without(&base, &cut),
///     vec![Span::new(at(9, 4), at(10, 6)), Span::new(at(11, 13), at(12, 13))]
/// );
/// ```
pub fn without<A, B>(base: &A, cut: &B) -> Vec<Span<A::Instant>>
where
    A: SpanLike + ?Sized,
    B: SpanLike<Instant = A::Instant> + ?Sized,
{
    let (base_start, base_end) = (base.start(), base.end());
    let (cut_start, cut_end) = (cut.start(), cut.end());

    if is_instant(cut) {
        return vec![base.to_span()];
    }

    if base_start < cut_start && base_end > cut_end {
        trace!("cut lies inside base, splitting in two");
        vec![
            Span::new(base_start, cut_start),
            Span::new(cut_end, base_end),
        ]
    } else if base_start >= cut_start && base_end > cut_end && cut_end > base_start {
        trace!("cut overlaps the start of base");
        vec![Span::new(cut_end, base_end)]
    } else if base_end <= cut_end && base_start < cut_start && cut_start < base_end {
        trace!("cut overlaps the end of base");
        vec![Span::new(base_start, cut_start)]
    } else if cut_start <= base_start && cut_end >= base_end {
        // Identical bounds fall in here too.
        Vec::new()
    } else {
        vec![base.to_span()]
    }
}

/// Computes [`without`] and hands `(base, cut, residues)` to `handler`,
/// returning whatever it produces.
pub fn without_with_handler<A, B, R, F>(base: &A, cut: &B, handler: F) -> Vec<R>
where
    A: SpanLike + ?Sized,
    B: SpanLike<Instant = A::Instant> + ?Sized,
    F: FnOnce(&A, &B, Vec<Span<A::Instant>>) -> Vec<R>,
{
    let residues = without(base, cut);
    handler(base, cut, residues)
}
