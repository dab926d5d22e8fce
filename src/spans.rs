// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Collections of spans.
//!
//! [`Spans<S>`] keeps its members in caller order. Operations never reorder
//! or mutate it; the ones that need sort order work on a local copy and
//! return a fresh collection.

use crate::difference::{without, without_with_handler};
use crate::instant::TimeInstant;
use crate::intersection::{intersection_between_with_handler, intersection_with_handler};
use crate::span::{chrono_days, Span, SpanLike};
use qtty::Days;
use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered list of spans.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use spaniel::{Span, Spans};
///
/// let at = |h, m| Utc.with_ymd_and_hms(2020, 9, 26, h, m, 0).unwrap();
/// let spans = Spans::from(vec![
///     Span::new(at(10, 4), at(12, 13)),
///     Span::new(at(14, 4), at(16, 13)),
///     Span::new(at(11, 4), at(13, 13)),
/// ]);
///
/// let overlaps = spans.intersection();
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!(overlaps[0], Span::new(at(11, 4), at(12, 13)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Spans<S> {
    items: Vec<S>,
}

impl<S> Spans<S> {
    pub fn new() -> Self {
        Spans { items: Vec::new() }
    }

    pub fn push(&mut self, span: S) {
        self.items.push(span);
    }

    pub fn into_vec(self) -> Vec<S> {
        self.items
    }
}

impl<S> Default for Spans<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SpanLike> Spans<S> {
    /// The overlap of every intersecting pair of members, in scan order.
    pub fn intersection(&self) -> Spans<Span<S::Instant>> {
        self.intersection_with_handler(|_, _, window| window)
    }

    /// `handler(a, b, a ∩ b)` for every intersecting pair of members.
    ///
    /// See [`intersection_with_handler`](crate::intersection_with_handler)
    /// for the argument order.
    pub fn intersection_with_handler<R, F>(&self, handler: F) -> Spans<R>
    where
        F: FnMut(&S, &S, Span<S::Instant>) -> R,
    {
        intersection_with_handler(&self.items, handler).into()
    }

    /// Overlaps between each of `candidates` and each member.
    pub fn intersection_between(&self, candidates: &Spans<S>) -> Spans<Span<S::Instant>> {
        self.intersection_between_with_handler(candidates, |_, _, window| window)
    }

    /// `handler(candidate, member, window)` for each overlapping pair; the
    /// candidate always comes first.
    pub fn intersection_between_with_handler<R, F>(
        &self,
        candidates: &Spans<S>,
        handler: F,
    ) -> Spans<R>
    where
        F: FnMut(&S, &S, Span<S::Instant>) -> R,
    {
        intersection_between_with_handler(&candidates.items, &self.items, handler).into()
    }

    /// Removes `cut` from every member.
    ///
    /// Residues are concatenated in member order. Members that do not meet
    /// `cut` pass through as bare [`Span`]s, members it covers drop out.
    /// Use [`Spans::without_with_handler`] to keep the original members
    /// (bound tags, payloads) in the output.
    pub fn without<B>(&self, cut: &B) -> Spans<Span<S::Instant>>
    where
        B: SpanLike<Instant = S::Instant> + ?Sized,
    {
        self.items.iter().flat_map(|base| without(base, cut)).collect()
    }

    /// Like [`Spans::without`], passing each `(member, cut, residues)` through
    /// `handler` before appending.
    pub fn without_with_handler<B, R, F>(&self, cut: &B, mut handler: F) -> Spans<R>
    where
        B: SpanLike<Instant = S::Instant> + ?Sized,
        F: FnMut(&S, &B, Vec<Span<S::Instant>>) -> Vec<R>,
    {
        self.items
            .iter()
            .flat_map(|base| without_with_handler(base, cut, &mut handler))
            .collect()
    }

    /// Sum of member durations.
    ///
    /// Overlapping members are counted once each; merge them first if the
    /// total covered time is wanted.
    pub fn duration(&self) -> <S::Instant as TimeInstant>::Duration {
        self.items.iter().fold(
            <S::Instant as TimeInstant>::zero_duration(),
            |total, span| total + span.duration(),
        )
    }

    /// A copy sorted by start. Ties keep their current order.
    pub fn sorted_by_start(&self) -> Spans<S>
    where
        S: Clone,
    {
        let mut sorted = self.items.clone();
        sorted.sort_by_key(|span| span.start());
        sorted.into()
    }

    /// A copy sorted by end. Ties keep their current order.
    pub fn sorted_by_end(&self) -> Spans<S>
    where
        S: Clone,
    {
        let mut sorted = self.items.clone();
        sorted.sort_by_key(|span| span.end());
        sorted.into()
    }
}

// Specific implementation for chrono-backed collections
impl<S> Spans<S>
where
    S: SpanLike,
    S::Instant: TimeInstant<Duration = chrono::Duration>,
{
    /// Sum of member durations in days. Overlaps are double-counted.
    pub fn total_days(&self) -> Days {
        chrono_days(self.duration())
    }
}

impl<S> Deref for Spans<S> {
    type Target = [S];

    fn deref(&self) -> &[S] {
        &self.items
    }
}

impl<S> From<Vec<S>> for Spans<S> {
    fn from(items: Vec<S>) -> Self {
        Spans { items }
    }
}

impl<S> FromIterator<S> for Spans<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Spans {
            items: iter.into_iter().collect(),
        }
    }
}

impl<S> IntoIterator for Spans<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Spans<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// One member per line.
impl<S: fmt::Display> fmt::Display for Spans<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, span) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{span}")?;
        }
        Ok(())
    }
}
