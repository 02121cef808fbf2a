use crate::app::render::print_results;
use crate::core::sequencer::Sequencer;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const DEFAULT_OUTPUT_FILE: &str = "boarding_sequence.txt";

/// Print `label` and read one trimmed answer. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn collect_bookings<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Vec<(i64, String)>> {
    let mut bookings = Vec::new();

    loop {
        let booking_input = match prompt(input, out, "Booking ID: ")? {
            Some(answer) if !answer.is_empty() => answer,
            _ => break,
        };

        let booking_id: i64 = match booking_input.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(out, "⚠ Invalid booking ID. Please enter a number.")?;
                continue;
            }
        };

        match prompt(input, out, "Seats (comma-separated): ")? {
            Some(seats) if !seats.is_empty() => {
                writeln!(out, "✓ Added: Booking {} -> {}", booking_id, seats)?;
                bookings.push((booking_id, seats));
            }
            Some(_) => writeln!(out, "⚠ Skipped: No seats provided")?,
            None => break,
        }
        writeln!(out)?;
    }

    Ok(bookings)
}

/// Read bookings at a prompt, print the sequence and offer to save it.
///
/// Returns the sequencer when at least one booking was entered.
pub fn run_interactive<R, W, S>(mut input: R, out: &mut W, storage: &S) -> Result<Option<Sequencer>>
where
    R: BufRead,
    W: Write,
    S: Storage,
{
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Bus Boarding Sequence Generator - Interactive Mode")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "\nEnter booking data (press Enter with empty Booking ID to finish):")?;
    writeln!(out, "Format: Booking_ID Seats (e.g., 101 A1,B1)")?;
    writeln!(out, "{}", "-".repeat(30))?;

    let bookings = collect_bookings(&mut input, out)?;
    if bookings.is_empty() {
        writeln!(out, "No bookings entered. Exiting.")?;
        return Ok(None);
    }

    let mut sequencer = Sequencer::new();
    sequencer.load(bookings);
    print_results(&sequencer, true, out)?;

    let save = prompt(&mut input, out, "\nSave results to file? (y/N): ")?
        .map(|answer| answer.to_lowercase())
        .unwrap_or_default();

    if save == "y" || save == "yes" {
        let output_file = match prompt(
            &mut input,
            out,
            &format!("Output filename (default: {}): ", DEFAULT_OUTPUT_FILE),
        )? {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_OUTPUT_FILE.to_string(),
        };

        match sequencer.export_to_storage(storage, &output_file) {
            Ok(()) => writeln!(out, "✓ Results saved to {}", output_file)?,
            Err(e) => {
                tracing::error!("Failed to save {}: {}", output_file, e);
                writeln!(out, "✗ Error saving file: {}", e.user_friendly_message())?;
            }
        }
    }

    Ok(Some(sequencer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(script: &str, storage: &LocalStorage) -> (Option<Sequencer>, String) {
        let mut out = Vec::new();
        let result = run_interactive(Cursor::new(script.to_string()), &mut out, storage).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_interactive_builds_sequence() {
        let storage = LocalStorage::default();
        let (sequencer, text) = run("101\nA1,B1\n120\nA20,C2\n\nn\n", &storage);

        let ids: Vec<i64> = sequencer.unwrap().order().iter().map(|e| e.booking_id).collect();
        assert_eq!(ids, vec![120, 101]);
        assert!(text.contains("✓ Added: Booking 101 -> A1,B1"));
        assert!(text.contains("Seq 2: Booking 101 (Seats: A1, B1, Furthest: Row 1)"));
    }

    #[test]
    fn test_invalid_id_and_empty_seats_are_skipped() {
        let storage = LocalStorage::default();
        let (sequencer, text) = run("abc\n105\n\n110\nB7\n", &storage);

        let sequencer = sequencer.unwrap();
        assert_eq!(sequencer.len(), 1);
        assert_eq!(sequencer.bookings()[0].booking_id(), 110);
        assert!(text.contains("⚠ Invalid booking ID. Please enter a number."));
        assert!(text.contains("⚠ Skipped: No seats provided"));
    }

    #[test]
    fn test_no_bookings() {
        let storage = LocalStorage::default();
        let (sequencer, text) = run("\n", &storage);

        assert!(sequencer.is_none());
        assert!(text.contains("No bookings entered. Exiting."));
    }

    #[test]
    fn test_save_to_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let (_, text) = run("101\nA1\n120\nA20\n\nyes\n\n", &storage);

        assert!(text.contains("✓ Results saved to boarding_sequence.txt"));
        let saved = std::fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
        assert_eq!(saved, "Seq\tBooking_ID\n1\t120\n2\t101\n");
    }

    #[test]
    fn test_save_to_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        run("7\nC3\n\nY\nmine.txt\n", &storage);
        assert!(temp_dir.path().join("mine.txt").exists());
    }
}
