//! Error formatting with colors for terminal output

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Format error with colors and context
pub struct ErrorFormatter<'a> {
    error: &'a ConfigError,
    use_colors: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    pub fn format(&self) -> String {
        if self.use_colors {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }

    fn format_colored(&self) -> String {
        let cross = "✗".red().bold();
        match self.error {
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => {
                let value_str = format!("'{}'", value);
                format!(
                    "{} Invalid value {} for {}\n  {}: {}\n  {}: {}",
                    cross,
                    value_str.yellow(),
                    field.cyan(),
                    "Valid options".bold(),
                    options,
                    "Hint".bold(),
                    hint.green()
                )
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!(
                "{} {} must be between {} and {}, got {}",
                cross,
                field.cyan(),
                min.green(),
                max.green(),
                value.red()
            ),
            ConfigError::ValidationError { field, message } => {
                format!("{} {}: {}", cross, field.cyan(), message)
            }
            ConfigError::FileNotFound { path } => {
                let path_str = path.display().to_string();
                format!(
                    "{} Configuration file not found: {}",
                    cross,
                    path_str.yellow()
                )
            }
            _ => format!("{} {}", cross, self.format_plain()),
        }
    }

    fn format_plain(&self) -> String {
        self.error.to_string()
    }
}

/// Check if stderr supports colors
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_invalid_enum_plain() {
        let error = ConfigError::invalid_enum("output.format", "xml", &["text", "json"]);
        let formatter = ErrorFormatter {
            error: &error,
            use_colors: false,
        };
        let output = formatter.format();
        assert!(output.contains("Invalid value"));
        assert!(output.contains("'xml'"));
    }

    #[test]
    fn test_colored_output_keeps_message() {
        let error = ConfigError::ValidationError {
            field: "input.roads".to_string(),
            message: "Path cannot be empty".to_string(),
        };
        let formatter = ErrorFormatter {
            error: &error,
            use_colors: true,
        };
        assert!(formatter.format().contains("Path cannot be empty"));
    }
}
