use crate::app::render::{print_results, render_json};
use crate::core::sequencer::Sequencer;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::io::Write;

/// Load the configured input file, print its boarding sequence and export it
/// when an output path is set. Returns the number of bookings loaded.
///
/// With JSON output only the report is written to `out`.
pub fn run_file_mode<S, C, W>(storage: &S, config: &C, out: &mut W) -> Result<usize>
where
    S: Storage,
    C: ConfigProvider,
    W: Write,
{
    let input_path = config.input_path().map(str::to_string);
    let input_path = validate_required_field("input.path", &input_path)?;

    if !config.json_output() {
        writeln!(out, "{}", "=".repeat(50))?;
        writeln!(out, "Bus Boarding Sequence Generator - File Mode")?;
        writeln!(out, "{}", "=".repeat(50))?;
    }

    let mut sequencer = Sequencer::new();
    let count = sequencer.load_from_storage(storage, input_path, config.header_token())?;

    if config.json_output() {
        writeln!(out, "{}", render_json(&sequencer.report())?)?;
    } else {
        writeln!(out, "✓ Loaded booking data from: {}", input_path)?;
        writeln!(out, "✓ Total bookings: {}", count)?;
        print_results(&sequencer, config.show_details(), out)?;
    }

    if let Some(output_path) = config.output_path() {
        sequencer.export_to_storage(storage, output_path)?;
        if !config.json_output() {
            writeln!(out, "\n✓ Results saved to: {}", output_path)?;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::config::Settings;
    use crate::utils::error::BoardingError;
    use tempfile::TempDir;

    fn storage_with_bookings(dir: &TempDir) -> LocalStorage {
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        storage
            .write_file(
                "bookings.txt",
                b"Booking_ID\tSeats\n101\tA1,B1\n120\tA20,C2\n105\tA15,B15\n",
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_file_mode_prints_and_exports() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_bookings(&temp_dir);
        let settings = Settings {
            input_path: Some("bookings.txt".to_string()),
            output_path: Some("sequence.txt".to_string()),
            ..Settings::default()
        };
        let mut out = Vec::new();

        let count = run_file_mode(&storage, &settings, &mut out).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✓ Total bookings: 3"));
        assert!(text.contains("Seq 1: Booking 120 (Seats: A20, C2, Furthest: Row 20)"));
        assert!(text.contains("Results saved to: sequence.txt"));

        let exported = storage.read_file("sequence.txt").unwrap();
        assert_eq!(exported, b"Seq\tBooking_ID\n1\t120\n2\t105\n3\t101\n");
    }

    #[test]
    fn test_file_mode_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_bookings(&temp_dir);
        let settings = Settings {
            input_path: Some("bookings.txt".to_string()),
            output_format: "json".to_string(),
            ..Settings::default()
        };
        let mut out = Vec::new();

        run_file_mode(&storage, &settings, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_bookings"], 3);
        assert_eq!(value["sequence"][2], serde_json::json!([3, 101]));
    }

    #[test]
    fn test_file_mode_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let settings = Settings {
            input_path: Some("absent.txt".to_string()),
            ..Settings::default()
        };

        let mut out = Vec::new();
        let err = run_file_mode(&storage, &settings, &mut out).unwrap_err();
        assert!(matches!(err, BoardingError::NotFound { .. }));
        assert_eq!(err.exit_code(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Bus Boarding Sequence Generator - File Mode"));
        assert!(!text.contains("Total bookings"));

        let err = run_file_mode(&storage, &Settings::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, BoardingError::MissingConfigError { .. }));
    }
}
