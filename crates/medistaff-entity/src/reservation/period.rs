//! Inclusive date range of a reservation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The inclusive `[start_date, end_date]` range a reservation claims.
///
/// Both endpoints count: a reservation ending on a date still blocks that
/// date, and one starting on a date already blocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPeriod {
    /// First reserved day.
    pub start_date: NaiveDate,
    /// Last reserved day.
    pub end_date: NaiveDate,
}

impl ReservationPeriod {
    /// Create a new period. Does not validate ordering; see
    /// [`Self::is_well_formed`].
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// A period is well-formed when it ends on or after the day it starts.
    pub fn is_well_formed(&self) -> bool {
        self.end_date >= self.start_date
    }

    /// Check if `date` falls within the period, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Inclusive-inclusive interval overlap test.
    ///
    /// Two periods conflict when either endpoint of one falls inside the
    /// other, or one fully contains the other:
    /// `(a.start <= b.start <= a.end) OR (a.start <= b.end <= a.end) OR
    /// (b.start <= a.start AND a.end <= b.end)`.
    pub fn overlaps(&self, other: &ReservationPeriod) -> bool {
        (self.start_date <= other.start_date && other.start_date <= self.end_date)
            || (self.start_date <= other.end_date && other.end_date <= self.end_date)
            || (other.start_date <= self.start_date && self.end_date <= other.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn p(start: &str, end: &str) -> ReservationPeriod {
        ReservationPeriod::new(d(start), d(end))
    }

    #[test]
    fn test_well_formed() {
        assert!(p("2024-06-10", "2024-06-12").is_well_formed());
        assert!(p("2024-06-10", "2024-06-10").is_well_formed());
        assert!(!p("2024-06-12", "2024-06-10").is_well_formed());
    }

    #[test]
    fn test_contains_endpoints() {
        let period = p("2024-06-10", "2024-06-12");
        assert!(period.contains(d("2024-06-10")));
        assert!(period.contains(d("2024-06-11")));
        assert!(period.contains(d("2024-06-12")));
        assert!(!period.contains(d("2024-06-09")));
        assert!(!period.contains(d("2024-06-13")));
    }

    #[test]
    fn test_overlap_cases() {
        let existing = p("2024-06-10", "2024-06-12");
        // Straddles the tail.
        assert!(existing.overlaps(&p("2024-06-11", "2024-06-13")));
        // Shares a single endpoint day.
        assert!(existing.overlaps(&p("2024-06-12", "2024-06-15")));
        assert!(existing.overlaps(&p("2024-06-08", "2024-06-10")));
        // Fully contains / fully contained.
        assert!(existing.overlaps(&p("2024-06-11", "2024-06-11")));
        assert!(existing.overlaps(&p("2024-06-01", "2024-06-30")));
        // Disjoint on either side.
        assert!(!existing.overlaps(&p("2024-06-13", "2024-06-15")));
        assert!(!existing.overlaps(&p("2024-06-01", "2024-06-09")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = p("2024-06-10", "2024-06-12");
        let b = p("2024-06-12", "2024-06-20");
        let c = p("2024-07-01", "2024-07-02");
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    // The three-clause test must agree with the simple "not disjoint"
    // formulation on every well-formed pair of intervals.
    #[test]
    fn test_overlap_matches_negated_disjointness_on_random_pairs() {
        use rand::Rng;

        let base = d("2024-01-01");
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let s1: i64 = rng.gen_range(0..60);
            let e1: i64 = s1 + rng.gen_range(0..15);
            let s2: i64 = rng.gen_range(0..60);
            let e2: i64 = s2 + rng.gen_range(0..15);

            let a = ReservationPeriod::new(
                base + chrono::Duration::days(s1),
                base + chrono::Duration::days(e1),
            );
            let b = ReservationPeriod::new(
                base + chrono::Duration::days(s2),
                base + chrono::Duration::days(e2),
            );

            let disjoint = a.end_date < b.start_date || b.end_date < a.start_date;
            assert_eq!(
                a.overlaps(&b),
                !disjoint,
                "mismatch for {a:?} vs {b:?}"
            );
        }
    }
}
