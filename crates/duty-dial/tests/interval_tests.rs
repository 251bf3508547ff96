//! Tests for circular interval arithmetic across midnight.

use duty_dial::interval::{format_hour, gap_between};
use duty_dial::{duration_between, CircularInterval, Handles, Span};

// ── Membership ──────────────────────────────────────────────────────────────

#[test]
fn daytime_interval_is_a_plain_range() {
    let day = CircularInterval::new(8, 20);
    assert!(day.contains(8));
    assert!(day.contains(14));
    assert!(day.contains(20));
    assert!(!day.contains(7));
    assert!(!day.contains(21));
}

#[test]
fn wrapping_interval_covers_both_sides_of_midnight() {
    let night = CircularInterval::new(20, 8);
    assert!(night.is_wrapping());
    for hour in [20, 22, 24, 0, 3, 8] {
        assert!(night.contains(hour), "{} should be inside", hour);
    }
    for hour in [9, 12, 19] {
        assert!(!night.contains(hour), "{} should be outside", hour);
    }
}

#[test]
fn degenerate_interval_contains_every_hour() {
    let circle = CircularInterval::new(5, 5);
    assert!(circle.is_degenerate());
    assert!((0..=24).all(|h| circle.contains(h)));
}

#[test]
fn full_day_has_two_spellings() {
    assert!(CircularInterval::new(7, 7).is_full_day());
    assert!(CircularInterval::FULL_DAY.is_full_day());
    assert!(!CircularInterval::new(0, 23).is_full_day());
    assert!(!CircularInterval::new(1, 24).is_full_day());
}

// ── Durations ───────────────────────────────────────────────────────────────

#[test]
fn duration_is_forward_difference_when_end_is_later() {
    assert_eq!(duration_between(8, 20), 12);
    assert_eq!(duration_between(0, 24), 24);
}

#[test]
fn duration_wraps_when_end_is_not_later() {
    assert_eq!(duration_between(22, 6), 8);
    assert_eq!(duration_between(10, 10), 24);
    assert_eq!(duration_between(24, 0), 0);
}

#[test]
fn gap_treats_coincident_handles_as_zero() {
    assert_eq!(gap_between(10, 10), 0);
    assert_eq!(gap_between(22, 6), 8);
    assert_eq!(gap_between(0, 24), 24);
}

#[test]
fn interval_duration_uses_wrap_rule() {
    assert_eq!(CircularInterval::new(20, 8).duration(), 12);
    assert_eq!(CircularInterval::new(3, 3).duration(), 24);
}

// ── Pieces and regions ──────────────────────────────────────────────────────

#[test]
fn wrapping_interval_splits_at_midnight() {
    assert_eq!(
        CircularInterval::new(22, 6).pieces(),
        vec![Span::new(22, 24), Span::new(0, 6)]
    );
    assert_eq!(CircularInterval::new(8, 20).pieces(), vec![Span::new(8, 20)]);
}

#[test]
fn leading_region_runs_from_limit_start_to_boundary() {
    let limit = CircularInterval::new(8, 20);
    assert_eq!(limit.leading_region(10), vec![Span::new(8, 10)]);
}

#[test]
fn leading_region_splits_when_boundary_is_past_midnight() {
    let limit = CircularInterval::new(20, 8);
    assert_eq!(
        limit.leading_region(2),
        vec![Span::new(0, 2), Span::new(20, 24)]
    );
}

#[test]
fn trailing_region_runs_from_boundary_to_limit_end() {
    let limit = CircularInterval::new(8, 20);
    assert_eq!(limit.trailing_region(15), vec![Span::new(15, 20)]);
}

#[test]
fn trailing_region_splits_when_boundary_is_before_midnight() {
    let limit = CircularInterval::new(20, 8);
    assert_eq!(
        limit.trailing_region(23),
        vec![Span::new(23, 24), Span::new(0, 8)]
    );
}

// ── Interval relations ──────────────────────────────────────────────────────

#[test]
fn containment_of_wrapping_interval() {
    let night = CircularInterval::new(20, 8);
    assert!(night.contains_interval(&CircularInterval::new(22, 4)));
    assert!(night.contains_interval(&CircularInterval::new(1, 5)));
    assert!(!night.contains_interval(&CircularInterval::new(18, 2)));
}

#[test]
fn degenerate_interval_contains_everything() {
    let circle = CircularInterval::new(9, 9);
    assert!(circle.contains_interval(&CircularInterval::new(22, 4)));
}

#[test]
fn adjacent_intervals_do_not_overlap() {
    let morning = CircularInterval::new(6, 12);
    let afternoon = CircularInterval::new(12, 18);
    assert!(!morning.overlaps(&afternoon));
}

#[test]
fn overlap_is_detected_across_midnight() {
    let late = CircularInterval::new(22, 2);
    let early = CircularInterval::new(1, 5);
    assert!(late.overlaps(&early));
    assert!(early.overlaps(&late));
    assert!(!late.overlaps(&CircularInterval::new(3, 21)));
}

#[test]
fn span_cover_is_inclusive() {
    let outer = Span::new(8, 15);
    assert!(outer.covers(&Span::new(8, 10)));
    assert!(outer.covers(&Span::new(8, 15)));
    assert!(!outer.covers(&Span::new(7, 10)));
}

// ── Handles ─────────────────────────────────────────────────────────────────

#[test]
fn end_on_or_before_start_falls_on_next_day() {
    assert!(Handles::new(22, 6).ends_next_day());
    assert!(Handles::new(9, 9).ends_next_day());
    assert!(!Handles::new(9, 17).ends_next_day());
}

#[test]
fn midnight_end_is_reported_as_twenty_four() {
    assert_eq!(Handles::new(20, 0).with_end_sentinel(), Handles::new(20, 24));
    assert_eq!(Handles::new(0, 5).with_end_sentinel(), Handles::new(0, 5));
}

#[test]
fn handles_region_matches_interval_pieces() {
    assert_eq!(
        Handles::new(21, 3).region(),
        vec![Span::new(21, 24), Span::new(0, 3)]
    );
}

#[test]
fn hour_labels_are_zero_padded() {
    assert_eq!(format_hour(8), "08:00");
    assert_eq!(format_hour(24), "24:00");
    assert_eq!(Handles::new(8, 17).to_string(), "08:00 ~ 17:00");
}
