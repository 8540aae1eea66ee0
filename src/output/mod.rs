//
//  confluence-sdk
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `confluence` CLI:
//!
//! - **Table format**: human-readable tables and detail views for the terminal
//! - **JSON format**: the raw API payload, pretty-printed, for scripting
//!
//! JSON output is always the payload exactly as the server sent it, never a
//! re-serialization of the typed wrapper, so no field is lost.
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available output formats
//! - [`OutputWriter`]: main entry point for writing formatted output
//! - [`TableOutput`]: how a response renders in table mode
//! - [`display_field`]: renders a [`Field`] for a table cell

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::fmt::Display;

use crate::api::model::{Field, Response};

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables. This is the default.
    #[default]
    Table,
    /// Raw JSON payload.
    Json,
}

/// Writes command results in the selected format.
///
/// Colors follow [`console::colors_enabled`], which honors `NO_COLOR` and
/// whether stdout is a terminal.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a response: its raw payload in JSON mode, its table rendering
    /// otherwise.
    pub fn write<T: Response + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value.raw_data()),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Plain informational line on stdout.
    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Table-mode rendering of a response.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// Prints a bold section header with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints one `key: value` line of a detail view.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

/// Renders a field for display. Null and absent both show as `-` and a
/// value of an unexpected type as `?`.
///
/// ```rust
/// use confluence_sdk::api::model::Field;
/// use confluence_sdk::output::display_field;
///
/// assert_eq!(display_field(Field::Value(42)), "42");
/// assert_eq!(display_field::<&str>(Field::Null), "-");
/// assert_eq!(display_field::<&str>(Field::Absent), "-");
/// assert_eq!(display_field::<&str>(Field::Mismatch), "?");
/// ```
pub fn display_field<T: Display>(field: Field<T>) -> String {
    match field {
        Field::Value(value) => value.to_string(),
        Field::Null | Field::Absent => "-".to_string(),
        Field::Mismatch => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(OutputWriter::json().format(), OutputFormat::Json);
    }

    #[test]
    fn test_display_field_keeps_falsy_values() {
        assert_eq!(display_field(Field::Value("")), "");
        assert_eq!(display_field(Field::Value(false)), "false");
        assert_eq!(display_field(Field::Value(0)), "0");
    }
}
