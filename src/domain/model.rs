use crate::domain::seat::{booking_priority, split_seats};
use serde::Serialize;

/// One reservation boarding as a unit.
///
/// The priority is derived once from the seats; fields are private so the
/// two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    booking_id: i64,
    seats: Vec<String>,
    priority: u64,
}

impl Booking {
    pub fn new(booking_id: i64, seats: Vec<String>) -> Self {
        let priority = booking_priority(&seats);
        Self {
            booking_id,
            seats,
            priority,
        }
    }

    /// Build from a raw `A1,B1` style seat list.
    pub fn from_seat_list(booking_id: i64, raw_seats: &str) -> Self {
        Self::new(booking_id, split_seats(raw_seats))
    }

    pub fn booking_id(&self) -> i64 {
        self.booking_id
    }

    pub fn seats(&self) -> &[String] {
        &self.seats
    }

    /// Row of the furthest seat in this booking.
    pub fn priority(&self) -> u64 {
        self.priority
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    pub sequence: usize,
    pub booking_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardingDetail {
    pub sequence: usize,
    pub booking_id: i64,
    pub seats: Vec<String>,
    pub furthest_seat_distance: u64,
}

/// Payload of the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct BoardingReport {
    pub success: bool,
    pub sequence: Vec<(usize, i64)>,
    pub details: Vec<BoardingDetail>,
    pub total_bookings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_derives_priority() {
        let booking = Booking::from_seat_list(120, "A20,C2");
        assert_eq!(booking.booking_id(), 120);
        assert_eq!(booking.seats(), ["A20", "C2"]);
        assert_eq!(booking.priority(), 20);
    }

    #[test]
    fn test_booking_with_no_seats() {
        let booking = Booking::new(7, Vec::new());
        assert_eq!(booking.priority(), 0);
    }
}
