use crate::seat_map::SeatId;
use serde::Serialize;

/// Total price for a selection, in minor currency units.
///
/// Fares are integers end to end; there is no floating point anywhere in
/// the money path.
pub fn total_fare(base_fare: i64, seat_count: u32) -> i64 {
    base_fare * i64::from(seat_count)
}

/// The numbers a confirmation or summary panel needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareSummary {
    pub seat_numbers: Vec<String>,
    pub seat_count: u32,
    pub base_fare: i64,
    pub total_fare: i64,
}

impl FareSummary {
    pub fn for_selection(base_fare: i64, seats: &[SeatId]) -> Self {
        let seat_count = seats.len() as u32;
        Self {
            seat_numbers: seats.iter().map(ToString::to_string).collect(),
            seat_count,
            base_fare,
            total_fare: total_fare(base_fare, seat_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_fare_is_base_times_count() {
        assert_eq!(total_fare(500, 2), 1000);
        assert_eq!(total_fare(0, 10), 0);
        assert_eq!(total_fare(750, 1), 750);
    }

    #[test]
    fn test_empty_selection_costs_nothing() {
        assert_eq!(total_fare(500, 0), 0);
        let summary = FareSummary::for_selection(500, &[]);
        assert_eq!(summary.total_fare, 0);
        assert_eq!(summary.seat_count, 0);
        assert!(summary.seat_numbers.is_empty());
    }

    #[test]
    fn test_summary_for_two_seats() {
        let seats: Vec<SeatId> = ["1B", "2B"].iter().map(|s| s.parse().unwrap()).collect();
        let summary = FareSummary::for_selection(500, &seats);
        assert_eq!(summary.seat_numbers, vec!["1B", "2B"]);
        assert_eq!(summary.total_fare, 1000);
    }
}
