use crate::core::sequencer::Sequencer;
use crate::domain::model::{BoardingDetail, BoardingReport, SequenceEntry};
use crate::utils::error::Result;
use std::io::Write;

pub fn render_sequence_table(entries: &[SequenceEntry]) -> String {
    let mut table = String::from("Seq   Booking_ID\n");
    table.push_str(&"-".repeat(15));
    table.push('\n');
    for entry in entries {
        table.push_str(&format!("{:<5} {}\n", entry.sequence, entry.booking_id));
    }
    table
}

pub fn render_detail(detail: &BoardingDetail) -> String {
    format!(
        "Seq {}: Booking {} (Seats: {}, Furthest: Row {})",
        detail.sequence,
        detail.booking_id,
        detail.seats.join(", "),
        detail.furthest_seat_distance
    )
}

pub fn render_json(report: &BoardingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn banner<W: Write>(out: &mut W, title: &str, rule: char) -> Result<()> {
    let line = rule.to_string().repeat(30);
    writeln!(out, "\n{}\n{}\n{}", line, title, line)?;
    Ok(())
}

/// Sequence table followed, when asked, by one detail line per booking.
pub fn print_results<W: Write>(sequencer: &Sequencer, show_details: bool, out: &mut W) -> Result<()> {
    banner(out, "BOARDING SEQUENCE RESULTS", '=')?;
    write!(out, "{}", render_sequence_table(&sequencer.order()))?;

    if show_details {
        banner(out, "DETAILED ANALYSIS", '-')?;
        for detail in sequencer.details() {
            writeln!(out, "{}", render_detail(&detail))?;
        }
    }
    Ok(())
}
