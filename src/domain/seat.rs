//! Seat label parsing.
//!
//! A seat label is a letter prefix followed by a row number (`A20`, `C2`).
//! Only the row matters for boarding: it is the distance from the front door.

use regex::Regex;
use std::sync::LazyLock;

static ROW_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("row pattern is a valid regex"));

/// Distance of a seat from the front entry.
///
/// Returns the first run of ASCII digits in `seat`, or 0 when there is none.
/// Other Unicode decimal digits (fullwidth `２０`, Arabic-Indic `٣`) are not
/// row numbers here, so `"A２０"` is distance 0. Never fails: `""`, `"ABC"`
/// and other non-seat strings are treated as the front row. Runs too long for `u64` saturate to `u64::MAX`.
pub fn parse_seat_distance(seat: &str) -> u64 {
    match ROW_DIGITS.find(seat) {
        Some(m) => m.as_str().parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

/// Split a comma-separated seat list, trimming each label.
///
/// Empty labels are kept so that a non-empty input always yields at least one seat.
pub fn split_seats(raw: &str) -> Vec<String> {
    raw.split(',').map(|seat| seat.trim().to_string()).collect()
}

/// The furthest distance among `seats`, or 0 for an empty list.
pub fn booking_priority<S: AsRef<str>>(seats: &[S]) -> u64 {
    seats
        .iter()
        .map(|seat| parse_seat_distance(seat.as_ref()))
        .max()
        .unwrap_or(0)
}
