#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::tabular::DEFAULT_HEADER_TOKEN;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use toml_config::TomlConfig;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective settings after merging the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub header_token: String,
    pub show_details: bool,
    pub output_format: String,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            header_token: DEFAULT_HEADER_TOKEN.to_string(),
            show_details: true,
            output_format: "text".to_string(),
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let mut settings = Self::default();

        if let Some(input) = config.input {
            settings.input_path = input.path;
            if let Some(token) = input.header_token {
                settings.header_token = token;
            }
        }
        if let Some(output) = config.output {
            settings.output_path = output.path;
            if let Some(show) = output.show_details {
                settings.show_details = show;
            }
            if let Some(format) = output.format {
                settings.output_format = format;
            }
        }
        settings.log_level = config.logging.and_then(|l| l.level);

        settings
    }

    /// Load `--config` when given, then apply the remaining flags on top.
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_toml(TomlConfig::from_file(path)?),
            None => Self::default(),
        };

        if let Some(input) = &cli.input_file {
            settings.input_path = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            settings.output_path = Some(output.clone());
        }
        if cli.json {
            settings.output_format = "json".to_string();
        }
        if cli.no_details {
            settings.show_details = false;
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn header_token(&self) -> &str {
        &self.header_token
    }

    fn show_details(&self) -> bool {
        self.show_details
    }

    fn json_output(&self) -> bool {
        self.output_format == "json"
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input.header_token", &self.header_token)?;

        if let Some(input) = &self.input_path {
            validate_path("input.path", input)?;
        }
        if let Some(output) = &self.output_path {
            validate_path("output.path", output)?;
        }

        validate_one_of("output.format", &self.output_format, &OUTPUT_FORMATS)?;

        if let Some(level) = &self.log_level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
