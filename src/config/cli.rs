use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bus-boarding")]
#[command(version)]
#[command(about = "Bus boarding sequence generator: furthest seats board first through the front door")]
#[command(after_help = "Examples:
  bus-boarding bookings.txt
  bus-boarding bookings.txt --output sequence.txt
  bus-boarding --interactive
  bus-boarding --sample

Input file format (tab-separated):
  Booking_ID    Seats
  101           A1,B1
  120           A20,C2")]
pub struct CliConfig {
    /// Input file with booking data
    pub input_file: Option<String>,

    /// Output file for the boarding sequence
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enter bookings at a prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Create a sample input file
    #[arg(short, long)]
    pub sample: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the sequence and details as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the per-booking detail lines
    #[arg(long)]
    pub no_details: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
