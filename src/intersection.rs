// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Multi-way intersection.
//!
//! A single sweep over the spans sorted by start, keeping an *active set* of
//! spans that may still overlap the one being scanned. Every overlapping pair
//! is reported once, in discovery order:
//!
//! ```text
//!   a  ----++++++++--------
//!   b  --------++++++++----
//!   c  ------------------++
//!   => --------++++--------   (a ∩ b)
//! ```
//!
//! The sort is stable, so spans sharing a start keep their input order and
//! the output is reproducible for a fixed input sequence.

use crate::relation::{overlaps, same_bounds};
use crate::span::{Span, SpanLike};
use log::{debug, trace};
use std::cmp::{max, min};

/// Returns the overlap of every intersecting pair in `spans`.
///
/// Equivalent to [`intersection_with_handler`] with an identity handler.
pub fn intersection<S: SpanLike>(spans: &[S]) -> Vec<Span<S::Instant>> {
    intersection_with_handler(spans, |_, _, window| window)
}

/// Returns `handler(a, b, a ∩ b)` for every intersecting pair in `spans`.
///
/// `a` is the span that entered the active set first (earlier start, or same
/// start and earlier in the input). Results are in scan order, not sorted by
/// the start of the intersection.
pub fn intersection_with_handler<S, R, F>(spans: &[S], mut handler: F) -> Vec<R>
where
    S: SpanLike,
    F: FnMut(&S, &S, Span<S::Instant>) -> R,
{
    let items = spans.iter().enumerate().collect();
    let found = sweep(items, |(_, a), (_, b), window| handler(a, b, window));
    debug!(
        "intersection of {} spans produced {} overlaps",
        spans.len(),
        found.len()
    );
    found
}

/// Returns the overlaps between each candidate and each span, ignoring
/// overlaps within either collection.
///
/// Results are grouped by candidate, then by span, in input order.
pub fn intersection_between<S: SpanLike>(candidates: &[S], spans: &[S]) -> Vec<Span<S::Instant>> {
    intersection_between_with_handler(candidates, spans, |_, _, window| window)
}

/// Like [`intersection_between`], calling `handler(candidate, span, window)`
/// for each overlapping pair.
///
/// The candidate is always the first handler argument, whichever of the two
/// starts earlier.
pub fn intersection_between_with_handler<S, R, F>(
    candidates: &[S],
    spans: &[S],
    mut handler: F,
) -> Vec<R>
where
    S: SpanLike,
    F: FnMut(&S, &S, Span<S::Instant>) -> R,
{
    const CANDIDATE: usize = 0;

    let mut found = Vec::new();
    for candidate in candidates {
        for span in spans {
            let pair = vec![(CANDIDATE, candidate), (1, span)];
            found.extend(sweep(pair, |(ia, a), (_, b), window| {
                if ia == CANDIDATE {
                    handler(a, b, window)
                } else {
                    handler(b, a, window)
                }
            }));
        }
    }
    debug!(
        "intersection between {} candidates and {} spans produced {} overlaps",
        candidates.len(),
        spans.len(),
        found.len()
    );
    found
}

/// The sweep itself. Items carry their input position so callers can tell
/// which side of a pair came from where.
fn sweep<'a, S, R, F>(mut items: Vec<(usize, &'a S)>, mut handler: F) -> Vec<R>
where
    S: SpanLike,
    F: FnMut((usize, &'a S), (usize, &'a S), Span<S::Instant>) -> R,
{
    // `sort_by_key` is stable: equal starts keep their input order.
    items.sort_by_key(|(_, span)| span.start());

    let mut rest = items.into_iter();
    let Some(first) = rest.next() else {
        return Vec::new();
    };

    let mut active = vec![first];
    let mut found = Vec::new();

    for b in rest {
        let (_, current) = b;
        let before = active.len();
        // Drop spans that ended before `current` starts; exact duplicates
        // stay so they still intersect each other.
        active.retain(|(_, t)| same_bounds(*t, current) || current.start() <= t.end());
        if active.len() != before {
            trace!(
                "pruned {} spans from active set at {:?}",
                before - active.len(),
                current.start()
            );
        }

        for &a in &active {
            let (_, earlier) = a;
            if overlaps(earlier, current) {
                let window = Span::new(
                    max(earlier.start(), current.start()),
                    min(earlier.end(), current.end()),
                );
                trace!("overlap {:?} .. {:?}", window.start, window.end);
                found.push(handler(a, b, window));
            }
        }

        active.push(b);
    }

    found
}
