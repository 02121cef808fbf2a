use crate::adapters::tabular::{parse_bookings, write_sequence};
use crate::domain::model::{BoardingDetail, BoardingReport, Booking, SequenceEntry};
use crate::domain::ports::Storage;
use crate::utils::error::{BoardingError, Result};
use std::cmp::Reverse;

/// Bookings sorted for boarding: furthest row first, lower ID first on ties.
///
/// The sort is stable, so bookings sharing both priority and ID keep their
/// input order.
fn boarding_order(bookings: &[Booking]) -> Vec<&Booking> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by_key(|b| (Reverse(b.priority()), b.booking_id()));
    sorted
}

/// Assign 1-based sequence numbers to `bookings` in boarding order.
pub fn order(bookings: &[Booking]) -> Vec<SequenceEntry> {
    boarding_order(bookings)
        .into_iter()
        .enumerate()
        .map(|(i, b)| SequenceEntry {
            sequence: i + 1,
            booking_id: b.booking_id(),
        })
        .collect()
}

/// Holds one booking collection and produces its boarding sequence.
///
/// Every load replaces the whole collection. A failed load leaves it empty.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    bookings: Vec<Booking>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `(booking_id, "A1,B1")` pairs.
    pub fn load<I, S>(&mut self, records: I)
    where
        I: IntoIterator<Item = (i64, S)>,
        S: AsRef<str>,
    {
        let bookings = records
            .into_iter()
            .map(|(id, seats)| Booking::from_seat_list(id, seats.as_ref()))
            .collect();
        self.load_bookings(bookings);
    }

    pub fn load_bookings(&mut self, bookings: Vec<Booking>) {
        tracing::info!("Loaded {} bookings", bookings.len());
        self.bookings = bookings;
    }

    /// Load a tab-separated booking file through `storage`.
    pub fn load_from_storage<S: Storage>(
        &mut self,
        storage: &S,
        path: &str,
        header_token: &str,
    ) -> Result<usize> {
        self.bookings.clear();

        tracing::debug!("Reading bookings from: {}", path);
        let data = storage.read_file(path)?;
        let content = String::from_utf8(data).map_err(|e| {
            BoardingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let bookings = parse_bookings(&content, header_token)?;
        let count = bookings.len();
        self.load_bookings(bookings);
        Ok(count)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn order(&self) -> Vec<SequenceEntry> {
        order(&self.bookings)
    }

    pub fn details(&self) -> Vec<BoardingDetail> {
        boarding_order(&self.bookings)
            .into_iter()
            .enumerate()
            .map(|(i, b)| BoardingDetail {
                sequence: i + 1,
                booking_id: b.booking_id(),
                seats: b.seats().to_vec(),
                furthest_seat_distance: b.priority(),
            })
            .collect()
    }

    pub fn report(&self) -> BoardingReport {
        let sequence: Vec<(usize, i64)> = self
            .order()
            .into_iter()
            .map(|entry| (entry.sequence, entry.booking_id))
            .collect();

        BoardingReport {
            success: true,
            total_bookings: sequence.len(),
            sequence,
            details: self.details(),
        }
    }

    /// Write the `Seq\tBooking_ID` file through `storage`.
    pub fn export_to_storage<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let data = write_sequence(&self.order())?;
        storage.write_file(path, &data)?;
        tracing::info!("Boarding sequence written to: {}", path);
        Ok(())
    }
}
