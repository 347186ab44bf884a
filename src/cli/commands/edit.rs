use anyhow::Result;
use log::info;
use std::path::Path;

use crate::cli::commands::{ load_bag, save_bag };
use crate::cli::ui;
use propbag::models::snapshot::{ document_source, read_document };
use propbag::{
    BagOptions,
    ErrorEntry,
    ErrorLog,
    ErrorValue,
    OutputFormat,
    PropbagConfig,
    PropertyAccess,
    Value,
};

/// Overwrite `name` in the bag stored at `file`, returning the previous value
pub fn set_in_file(file: &Path, options: &BagOptions, name: &str, value: Value) -> Result<Option<Value>> {
    let mut bag = load_bag(file, options)?;
    let previous = bag.set(name, value);
    save_bag(file, &bag)?;
    info!("Set {} in {}", name, file.display());
    Ok(previous)
}

/// Ensure `name` is set in the bag stored at `file`, returning its value
pub fn def_in_file(file: &Path, options: &BagOptions, name: &str, default: Value) -> Result<Value> {
    let mut bag = load_bag(file, options)?;
    let value = bag.def(name, default);
    save_bag(file, &bag)?;
    Ok(value)
}

/// Apply the properties of `source_path` to the bag at `file`.
/// Returns the number applied, or `None` when the source is not a mapping.
pub fn merge_into_file(file: &Path, options: &BagOptions, source_path: &Path) -> Result<Option<usize>> {
    let mut bag = load_bag(file, options)?;
    let source = document_source(read_document(source_path)?);
    let count = source.len();

    if !bag.set_properties(source) {
        return Ok(None);
    }
    save_bag(file, &bag)?;
    info!("Merged {} properties from {} into {}", count, source_path.display(), file.display());
    Ok(Some(count))
}

/// Append `entry` to the error log at `file`, returning its index
pub fn add_error_to_file(file: &Path, options: &BagOptions, entry: ErrorEntry) -> Result<usize> {
    let mut bag = load_bag(file, options)?;
    bag.set_error(entry);
    save_bag(file, &bag)?;
    Ok(bag.get_errors().len() - 1)
}

/// Plain entry for a bare message; structured once a code or kind is given
pub fn build_error_entry(message: &str, code: Option<i64>, kind: Option<&str>) -> ErrorEntry {
    if code.is_none() && kind.is_none() {
        return message.into();
    }
    let mut value = ErrorValue::new(message);
    if let Some(code) = code {
        value = value.with_code(code);
    }
    if let Some(kind) = kind {
        value = value.with_kind(kind);
    }
    value.into()
}

/// Set command: overwrite a property and report the previous value
pub fn set(config: &PropbagConfig, format: OutputFormat, file: &Path, name: &str, raw_value: &str) -> Result<()> {
    let previous = set_in_file(file, &config.bag_options(), name, Value::parse_lenient(raw_value))?;
    match previous {
        Some(previous) => ui::display_value(format, "previous", &previous),
        None if format == OutputFormat::Json => println!("null"),
        None => ui::print_result("previous", "(absent)"),
    }
    Ok(())
}

/// Def command: assign a default only when the property is unset
pub fn def(config: &PropbagConfig, format: OutputFormat, file: &Path, name: &str, raw_value: &str) -> Result<()> {
    let value = def_in_file(file, &config.bag_options(), name, Value::parse_lenient(raw_value))?;
    ui::display_value(format, name, &value);
    Ok(())
}

/// Merge command: apply the properties of another document or saved bag
pub fn merge(config: &PropbagConfig, file: &Path, source_path: &Path) -> Result<()> {
    match merge_into_file(file, &config.bag_options(), source_path)? {
        Some(count) => {
            ui::print_success(&format!("Applied {} properties from {}", count, source_path.display()));
        }
        None => {
            ui::print_warning(&format!("{} is not a mapping; nothing applied", source_path.display()));
        }
    }
    Ok(())
}

/// Add-error command: append a plain or structured entry
pub fn add_error(config: &PropbagConfig, file: &Path, message: &str, code: Option<i64>, kind: Option<&str>) -> Result<()> {
    let entry = build_error_entry(message, code, kind);
    let index = add_error_to_file(file, &config.bag_options(), entry)?;
    ui::print_success(&format!("Recorded error #{}", index));
    Ok(())
}
