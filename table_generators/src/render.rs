use std::fmt::Write;

use crate::{NOTE_COUNT, NoteTable, TuningConstants};

pub const DEFAULT_ARRAY_NAME: &str = "waveStep";

const VALUES_PER_LINE: usize = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `static const u16` array for the C player
    #[default]
    C,
    /// `pub static` array for Rust consumers
    Rust,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "c" => Some(Self::C),
            "rust" | "rs" => Some(Self::Rust),
            _ => None,
        }
    }
}

pub fn render(table: &NoteTable, name: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::C => render_c_array(table, name),
        OutputFormat::Rust => render_rust_array(table, name),
    }
}

/// One `<rounded> <frequency> <running max error>` line per entry.
pub fn render_diagnostics(table: &NoteTable, tuning: &TuningConstants) -> String {
    let mut out = String::new();

    for line in table.diagnostics(tuning) {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {} {}",
            line.rounded_frequency, line.frequency, line.running_error_percent
        );
    }

    out
}

pub fn render_c_array(table: &NoteTable, name: &str) -> String {
    let mut out = format!("static const u16 {}[] =\n{{", name);

    for (i, period) in table.periods().iter().enumerate() {
        if i % VALUES_PER_LINE == 0 {
            out.push_str("\n\t");
        }
        let _ = write!(out, "0x{:04x},", period);
    }

    out.push_str("\n};\n");
    out
}

pub fn render_rust_array(table: &NoteTable, name: &str) -> String {
    let mut values = String::new();

    for line in table.periods().chunks(VALUES_PER_LINE) {
        values.push_str("   ");
        for period in line {
            let _ = write!(values, " {:#06x},", period);
        }
        values.push('\n');
    }

    format!(
        "//! Generated note period table
//! DO NOT EDIT - Generated by generate_note_period_table.rs

/// Oscillator period per note index, lowest pitch first
pub static {}: [u16; {}] = [
{}];
",
        to_screaming_snake_case(name),
        NOTE_COUNT,
        values
    )
}

fn to_screaming_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, to_screaming_snake_case};

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(OutputFormat::from_name("C"), Some(OutputFormat::C));
        assert_eq!(OutputFormat::from_name("rust"), Some(OutputFormat::Rust));
        assert_eq!(OutputFormat::from_name("RS"), Some(OutputFormat::Rust));
        assert_eq!(OutputFormat::from_name("asm"), None);
    }

    #[test]
    fn camel_case_names_become_constants() {
        assert_eq!(to_screaming_snake_case("waveStep"), "WAVE_STEP");
        assert_eq!(to_screaming_snake_case("NOTE_PERIODS"), "NOTE_PERIODS");
        assert_eq!(to_screaming_snake_case("period2Table"), "PERIOD2_TABLE");
    }
}
