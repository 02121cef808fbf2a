use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;

pub const SAMPLE_FILE_NAME: &str = "sample_bookings.txt";

pub const SAMPLE_BOOKINGS: &str = "Booking_ID\tSeats
101\tA1,B1
120\tA20,C2
105\tA15,B15
130\tC5,D5
115\tA10,B10,C10
140\tD18,C18";

/// Write the sample booking file and echo its content.
pub fn create_sample_file<S: Storage, W: Write>(storage: &S, out: &mut W) -> Result<&'static str> {
    storage.write_file(SAMPLE_FILE_NAME, SAMPLE_BOOKINGS.as_bytes())?;
    tracing::info!("Sample file created: {}", SAMPLE_FILE_NAME);

    let rule = "-".repeat(20);
    writeln!(out, "✓ Sample file created: {}", SAMPLE_FILE_NAME)?;
    writeln!(out, "\nSample content:\n{}\n{}\n{}", rule, SAMPLE_BOOKINGS, rule)?;
    writeln!(out, "\nTry: bus-boarding {}", SAMPLE_FILE_NAME)?;

    Ok(SAMPLE_FILE_NAME)
}
