use colored::*;
use std::collections::BTreeMap;

use propbag::{ ErrorEntry, OutputFormat, Value };

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a single value in the requested format
pub fn display_value(format: OutputFormat, label: &str, value: &Value) {
    match format {
        OutputFormat::Text => print_result(label, &value.to_string()),
        OutputFormat::Json => {
            let rendered = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
            println!("{}", rendered);
        }
    }
}

/// Print a property listing
pub fn display_properties(format: OutputFormat, properties: &BTreeMap<String, Value>, reserved_prefix: &str) {
    match format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(properties).unwrap_or_else(|_| "{}".to_string());
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            if properties.is_empty() {
                println!("{}", "(no properties)".dimmed());
                return;
            }
            let width = properties.keys().map(|k| k.len()).max().unwrap_or(0);
            for (name, value) in properties {
                let label = format!("{:width$}", name, width = width);
                let label = if name.starts_with(reserved_prefix) {
                    label.dimmed()
                } else {
                    label.bold()
                };
                println!("  {}  {} {}", label, value.to_string().cyan(), format!("({})", value.kind()).dimmed());
            }
        }
    }
}

/// Print error log entries with their positions
pub fn display_errors(format: OutputFormat, entries: &[(usize, ErrorEntry)]) {
    match format {
        OutputFormat::Json => {
            let list: Vec<&ErrorEntry> = entries.iter().map(|(_, entry)| entry).collect();
            let rendered = serde_json::to_string_pretty(&list).unwrap_or_else(|_| "[]".to_string());
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("{}", "(no errors)".dimmed());
                return;
            }
            for (index, entry) in entries {
                let marker = if entry.is_structured() { "*".yellow() } else { " ".normal() };
                println!("  {}{} {}", format!("[{}]", index).red(), marker, entry);
            }
        }
    }
}
