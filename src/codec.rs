// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Binary and textual encodings of spans.
//!
//! # Fixed-width binary form
//!
//! A span is the concatenation of its two encoded endpoints. Every integer is
//! big-endian:
//!
//! | Instant | Layout | Width |
//! |---------|--------|-------|
//! | `DateTime<Utc>` | `i64` Unix seconds, `u32` nanoseconds | 12 |
//! | `NaiveDateTime` | `i64` seconds (as if UTC), `u32` nanoseconds | 12 |
//! | `DateTime<FixedOffset>` | as UTC, then `i32` offset seconds | 16 |
//!
//! # Textual form
//!
//! ISO-8601 interval notation, `start/end`, each endpoint in RFC 3339
//! (offset-less for `NaiveDateTime`).

use crate::error::{Result, SpanError};
use crate::instant::TimeInstant;
use crate::span::Span;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use log::debug;
use std::str::FromStr;

const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Instants with a fixed-width binary encoding and an ISO-8601 text form.
pub trait InstantCodec: TimeInstant {
    /// Encoded width in bytes.
    const WIDTH: usize;

    fn encode(&self, out: &mut Vec<u8>);

    /// Decodes exactly [`Self::WIDTH`] bytes.
    fn decode(bytes: &[u8]) -> Result<Self>;

    fn to_iso8601(&self) -> String;

    fn parse_iso8601(text: &str) -> Result<Self>;
}

fn check_width(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        debug!(
            "rejecting binary payload of {} bytes, expected {}",
            bytes.len(),
            expected
        );
        return Err(SpanError::InvalidLength {
            len: bytes.len(),
            expected,
        });
    }
    Ok(())
}

fn encode_unix(secs: i64, nanos: u32, out: &mut Vec<u8>) {
    out.extend_from_slice(&secs.to_be_bytes());
    out.extend_from_slice(&nanos.to_be_bytes());
}

/// Reads the `(seconds, nanoseconds)` prefix shared by every layout.
/// `bytes` must hold at least 12 bytes.
fn decode_unix(bytes: &[u8]) -> Result<DateTime<Utc>> {
    let mut secs = [0u8; 8];
    secs.copy_from_slice(&bytes[..8]);
    let mut nanos = [0u8; 4];
    nanos.copy_from_slice(&bytes[8..12]);

    let (secs, nanos) = (i64::from_be_bytes(secs), u32::from_be_bytes(nanos));
    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| SpanError::TimestampOutOfRange(format!("{secs} s + {nanos} ns")))
}

impl InstantCodec for DateTime<Utc> {
    const WIDTH: usize = 12;

    fn encode(&self, out: &mut Vec<u8>) {
        encode_unix(self.timestamp(), self.timestamp_subsec_nanos(), out);
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        check_width(bytes, Self::WIDTH)?;
        decode_unix(bytes)
    }

    fn to_iso8601(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn parse_iso8601(text: &str) -> Result<Self> {
        Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
    }
}

impl InstantCodec for DateTime<FixedOffset> {
    const WIDTH: usize = 16;

    fn encode(&self, out: &mut Vec<u8>) {
        encode_unix(self.timestamp(), self.timestamp_subsec_nanos(), out);
        out.extend_from_slice(&self.offset().local_minus_utc().to_be_bytes());
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        check_width(bytes, Self::WIDTH)?;
        let utc = decode_unix(bytes)?;

        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[12..16]);
        let seconds = i32::from_be_bytes(raw);
        let offset = FixedOffset::east_opt(seconds)
            .ok_or_else(|| SpanError::TimestampOutOfRange(format!("offset {seconds} s")))?;
        Ok(utc.with_timezone(&offset))
    }

    fn to_iso8601(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }

    fn parse_iso8601(text: &str) -> Result<Self> {
        Ok(DateTime::parse_from_rfc3339(text)?)
    }
}

impl InstantCodec for NaiveDateTime {
    const WIDTH: usize = 12;

    fn encode(&self, out: &mut Vec<u8>) {
        let utc = self.and_utc();
        encode_unix(utc.timestamp(), utc.timestamp_subsec_nanos(), out);
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        check_width(bytes, Self::WIDTH)?;
        Ok(decode_unix(bytes)?.naive_utc())
    }

    fn to_iso8601(&self) -> String {
        self.format(NAIVE_ISO_FORMAT).to_string()
    }

    fn parse_iso8601(text: &str) -> Result<Self> {
        Ok(NaiveDateTime::parse_from_str(text, NAIVE_ISO_FORMAT)?)
    }
}

impl<T: InstantCodec> Span<T> {
    /// Encodes the span as `start ++ end`.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use spaniel::Span;
    ///
    /// let start = Utc.with_ymd_and_hms(2020, 9, 26, 2, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2020, 9, 26, 6, 0, 0).unwrap();
    /// let span = Span::new(start, end);
    ///
    /// let bytes = span.to_bytes();
    /// assert_eq!(bytes.len(), 24);
    /// assert_eq!(Span::from_bytes(&bytes).unwrap(), span);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 * T::WIDTH);
        self.start.encode(&mut out);
        self.end.encode(&mut out);
        out
    }

    /// Decodes a payload produced by [`Span::to_bytes`].
    ///
    /// Fails with [`SpanError::InvalidLength`] unless the payload is exactly
    /// two encoded instants wide.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_width(bytes, 2 * T::WIDTH)?;
        let (start, end) = bytes.split_at(T::WIDTH);
        Span::try_new(T::decode(start)?, T::decode(end)?)
    }

    /// Renders the span as an ISO-8601 interval, `start/end`.
    pub fn to_iso8601(&self) -> String {
        format!("{}/{}", self.start.to_iso8601(), self.end.to_iso8601())
    }

    /// Parses an ISO-8601 interval, `start/end`.
    pub fn parse_iso8601(text: &str) -> Result<Self> {
        let (start, end) = text
            .split_once('/')
            .ok_or_else(|| SpanError::MissingSeparator(text.to_string()))?;
        Span::try_new(
            T::parse_iso8601(start.trim())?,
            T::parse_iso8601(end.trim())?,
        )
    }
}

impl<T: InstantCodec> FromStr for Span<T> {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self> {
        Span::parse_iso8601(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SpanLike;
    use chrono::{NaiveDate, TimeZone};

    fn utc_span() -> Span<DateTime<Utc>> {
        Span::new(
            Utc.with_ymd_and_hms(2020, 9, 26, 2, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 9, 26, 6, 15, 0).unwrap()
                + chrono::Duration::nanoseconds(7),
        )
    }

    #[test]
    fn binary_roundtrip_utc() {
        let span = utc_span();
        let bytes = span.to_bytes();

        assert_eq!(bytes.len(), 24);
        assert_eq!(Span::<DateTime<Utc>>::from_bytes(&bytes).unwrap(), span);
    }

    #[test]
    fn binary_roundtrip_fixed_offset_keeps_offset() {
        let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
        let span = Span::new(
            berlin.with_ymd_and_hms(2020, 9, 1, 20, 0, 0).unwrap(),
            berlin.with_ymd_and_hms(2020, 9, 2, 2, 0, 0).unwrap(),
        );
        let bytes = span.to_bytes();
        assert_eq!(bytes.len(), 32);

        let back = Span::<DateTime<FixedOffset>>::from_bytes(&bytes).unwrap();
        assert_eq!(back, span);
        assert_eq!(back.start.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn binary_roundtrip_naive() {
        let day = NaiveDate::from_ymd_opt(2020, 9, 26).unwrap();
        let span = Span::new(
            day.and_hms_opt(2, 0, 0).unwrap(),
            day.and_hms_milli_opt(6, 0, 0, 250).unwrap(),
        );
        let back = Span::<NaiveDateTime>::from_bytes(&span.to_bytes()).unwrap();
        assert_eq!(back, span);
    }

    #[test]
    fn binary_wrong_length_names_length() {
        let mut bytes = utc_span().to_bytes();
        bytes.pop();

        let err = Span::<DateTime<Utc>>::from_bytes(&bytes).unwrap_err();
        assert_eq!(
            err,
            SpanError::InvalidLength {
                len: 23,
                expected: 24
            }
        );
        assert!(err.to_string().contains("len 23"));
    }

    #[test]
    fn binary_rejects_reversed_bounds() {
        let span = utc_span();
        let mut bytes = Vec::new();
        span.end.encode(&mut bytes);
        span.start.encode(&mut bytes);

        let err = Span::<DateTime<Utc>>::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SpanError::Reversed { .. }));
    }

    #[test]
    fn binary_rejects_out_of_range_offset() {
        let mut bytes = Vec::new();
        for _ in 0..2 {
            encode_unix(0, 0, &mut bytes);
            bytes.extend_from_slice(&i32::MAX.to_be_bytes());
        }
        let err = Span::<DateTime<FixedOffset>>::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SpanError::TimestampOutOfRange(_)));
    }

    #[test]
    fn iso8601_roundtrip() {
        let span = Span::new(
            Utc.with_ymd_and_hms(2020, 9, 26, 2, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 9, 26, 6, 0, 0).unwrap(),
        );
        let text = span.to_iso8601();
        assert_eq!(text, "2020-09-26T02:00:00Z/2020-09-26T06:00:00Z");

        let parsed: Span<DateTime<Utc>> = text.parse().unwrap();
        assert_eq!(parsed, span);
    }

    #[test]
    fn iso8601_accepts_offsets() {
        let parsed: Span<DateTime<Utc>> = "2020-09-26T04:00:00+02:00 / 2020-09-26T06:00:00Z"
            .parse()
            .unwrap();
        assert_eq!(parsed.duration_seconds(), 4 * 3600);
    }

    #[test]
    fn iso8601_errors() {
        let missing = "2020-09-26T02:00:00Z".parse::<Span<DateTime<Utc>>>();
        assert!(matches!(missing, Err(SpanError::MissingSeparator(_))));

        let garbage = "noon/2020-09-26T02:00:00Z".parse::<Span<DateTime<Utc>>>();
        assert!(matches!(garbage, Err(SpanError::Timestamp(_))));
    }

    #[test]
    fn iso8601_naive() {
        let text = "2020-09-26T02:00:00/2020-09-26T06:30:00.500";
        let span: Span<NaiveDateTime> = text.parse().unwrap();
        assert_eq!(span.duration().num_milliseconds(), 16_200_500);
        assert_eq!(span.to_iso8601(), text);
    }
}
