//! Tab-separated booking input and sequence output.
//!
//! Input:
//! ```text
//! Booking_ID	Seats
//! 101	A1,B1
//! 120	A20,C2
//! ```
//! Output:
//! ```text
//! Seq	Booking_ID
//! 1	120
//! 2	101
//! ```

use crate::domain::model::{Booking, SequenceEntry};
use crate::utils::error::{BoardingError, Result};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

pub const DEFAULT_HEADER_TOKEN: &str = "Booking_ID";
pub const SEQUENCE_HEADER: [&str; 2] = ["Seq", "Booking_ID"];

/// Parse booking rows.
///
/// The first line is a header iff it contains `header_token`. Rows with fewer
/// than two fields are skipped; a non-integer booking ID fails the whole parse.
pub fn parse_bookings(content: &str, header_token: &str) -> Result<Vec<Booking>> {
    let first_line = content.lines().next().unwrap_or_default();
    let (body, line_offset) = if first_line.contains(header_token) {
        let rest = content.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
        (rest, 1)
    } else {
        (content, 0)
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut bookings = Vec::new();
    for result in reader.records() {
        let record = result?;
        let fields = significant_fields(&record);
        if fields.len() < 2 {
            continue;
        }

        let booking_id: i64 = fields[0].parse().map_err(|_| {
            BoardingError::InvalidBookingId {
                line: file_line(body, &record, line_offset),
                value: fields[0].to_string(),
            }
        })?;

        let booking = Booking::from_seat_list(booking_id, fields[1]);
        tracing::debug!(
            "Parsed booking {} with seats {:?} (priority {})",
            booking.booking_id(),
            booking.seats(),
            booking.priority()
        );
        bookings.push(booking);
    }

    Ok(bookings)
}

/// 1-based line of `record` in the original file.
///
/// The reader positions a record at the start of any blank lines it skipped
/// before it, so those terminators are stepped over before counting.
fn file_line(body: &str, record: &StringRecord, line_offset: usize) -> usize {
    let bytes = body.as_bytes();
    let mut start = record
        .position()
        .map_or(0, |p| p.byte() as usize)
        .min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\r' | b'\n') {
        start += 1;
    }
    line_offset + bytes[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Fields of a row with leading and trailing empty fields dropped, so a
/// stray tab at either end of a line does not count as a column.
fn significant_fields(record: &StringRecord) -> Vec<&str> {
    let fields: Vec<&str> = record.iter().collect();
    let start = fields.iter().position(|f| !f.is_empty()).unwrap_or(fields.len());
    let end = fields.iter().rposition(|f| !f.is_empty()).map_or(start, |i| i + 1);
    fields[start..end].to_vec()
}

/// Render `Seq\tBooking_ID` followed by one row per entry.
pub fn write_sequence(entries: &[SequenceEntry]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(SEQUENCE_HEADER)?;
    for entry in entries {
        writer.write_record([entry.sequence.to_string(), entry.booking_id.to_string()])?;
    }

    writer
        .into_inner()
        .map_err(|e| BoardingError::IoError(e.into_error()))
}
