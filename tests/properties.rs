use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use spaniel::{intersection, is_instant, overlaps, within, without, Span, SpanLike, Spans};

type UtcSpan = Span<DateTime<Utc>>;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 9, 26, 0, 0, 0).unwrap()
}

fn arb_span() -> impl Strategy<Value = UtcSpan> {
    (0i64..1_000, 0i64..300).prop_map(|(offset, len)| {
        let start = base() + Duration::minutes(offset);
        Span::new(start, start + Duration::minutes(len))
    })
}

fn arb_range() -> impl Strategy<Value = UtcSpan> {
    arb_span().prop_filter("non-degenerate", |s| !is_instant(s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn overlap_is_symmetric(a in arb_span(), b in arb_span()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn touching_spans_never_overlap(a in arb_span(), len in 0i64..300) {
        let b = Span::new(a.end, a.end + Duration::minutes(len));
        prop_assert!(!overlaps(&a, &b));
    }

    #[test]
    fn containment_is_reflexive(a in arb_span()) {
        prop_assert!(within(&a, &a));
    }

    #[test]
    fn nested_overlap_intersects_to_inner(
        offset in 0i64..1_000,
        lead in 0i64..100,
        inner in 1i64..100,
        trail in 0i64..100
    ) {
        let start = base() + Duration::minutes(offset);
        let a = Span::new(start, start + Duration::minutes(lead + inner + trail));
        let b = Span::new(start + Duration::minutes(lead), start + Duration::minutes(lead + inner));

        prop_assert!(within(&a, &b) && overlaps(&a, &b));
        prop_assert_eq!(intersection(&[a, b]), vec![b]);
    }

    #[test]
    fn empty_collection_without_is_empty(x in arb_span()) {
        let spans: Spans<UtcSpan> = Spans::new();
        prop_assert!(spans.without(&x).is_empty());
    }

    #[test]
    fn instant_cut_is_a_no_op(a in arb_span(), at in 0i64..1_300) {
        let cut = Span::instant(base() + Duration::minutes(at));
        prop_assert_eq!(without(&a, &cut), vec![a]);
    }

    #[test]
    fn subtracting_self_is_empty(a in arb_range()) {
        prop_assert!(without(&a, &a).is_empty());
    }

    #[test]
    fn subtracting_a_cover_is_empty(a in arb_range(), before in 0i64..60, after in 0i64..60) {
        let cover = Span::new(
            a.start - Duration::minutes(before),
            a.end + Duration::minutes(after),
        );
        prop_assert!(without(&a, &cover).is_empty());
    }

    #[test]
    fn strict_inner_cut_leaves_head_gap_tail(
        offset in 0i64..1_000,
        head in 1i64..100,
        gap in 1i64..100,
        tail in 1i64..100
    ) {
        let start = base() + Duration::minutes(offset);
        let a = Span::new(start, start + Duration::minutes(head + gap + tail));
        let cut = Span::new(start + Duration::minutes(head), start + Duration::minutes(head + gap));

        let residues = without(&a, &cut);

        prop_assert_eq!(residues.len(), 2);
        prop_assert_eq!(residues[0].start, a.start);
        prop_assert_eq!(residues[0].end, cut.start);
        prop_assert_eq!(residues[1].start, cut.end);
        prop_assert_eq!(residues[1].end, a.end);
        prop_assert_eq!(
            residues[0].duration() + cut.duration() + residues[1].duration(),
            a.duration()
        );
    }

    #[test]
    fn residues_are_ordered_and_inside_base(a in arb_span(), b in arb_span()) {
        for r in without(&a, &b) {
            prop_assert!(r.start <= r.end);
            prop_assert!(within(&a, &r));
        }
    }

    #[test]
    fn intersection_windows_are_valid_and_deterministic(
        spans in prop::collection::vec(arb_span(), 0..20)
    ) {
        let first = intersection(&spans);
        let second = intersection(&spans);
        prop_assert_eq!(&first, &second);

        for window in &first {
            prop_assert!(window.start <= window.end);
            prop_assert!(spans.iter().filter(|s| within(*s, window)).count() >= 2);
        }
    }
}
