use anyhow::Result;
use std::path::Path;

use crate::cli::commands::load_bag;
use crate::cli::ui;
use propbag::{ ErrorEntry, ErrorLog, OutputFormat, PropbagConfig, PropertyAccess, PropertyBag, Value };

/// Show command: list properties and a summary of the error log
pub fn show(config: &PropbagConfig, format: OutputFormat, file: &Path, all: bool) -> Result<()> {
    let bag = load_bag(file, &config.bag_options())?;
    let properties = bag.get_properties(!all);

    if format == OutputFormat::Text {
        ui::print_header(&format!("{} {}", bag.describe(), file.display()));
    }
    ui::display_properties(format, &properties, &config.reserved_prefix);

    if format == OutputFormat::Text {
        let hidden = bag.len() - properties.len();
        if hidden > 0 {
            ui::print_info(&format!("{} reserved properties hidden (use --all)", hidden));
        }
        if bag.has_errors() {
            ui::print_warning(&format!("{} errors recorded (use `errors` to list them)", bag.get_errors().len()));
        }
    }
    Ok(())
}

/// Get command: print one property or the default
pub fn get(config: &PropbagConfig, format: OutputFormat, file: &Path, name: &str, default: Option<&str>) -> Result<()> {
    let bag = load_bag(file, &config.bag_options())?;
    let default = default.map(Value::parse_lenient).unwrap_or(Value::Null);
    let value = bag.get(name, default);
    ui::display_value(format, name, &value);
    Ok(())
}

/// Entries the errors command shows, paired with their positions.
/// `None` when a single entry was requested and none exists.
pub fn select_errors(bag: &PropertyBag, index: Option<usize>, last: bool, raw: bool) -> Option<Vec<(usize, ErrorEntry)>> {
    let coerce = !raw;
    if index.is_none() && !last {
        let entries = bag.get_errors()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| (i, if coerce { entry.into_plain() } else { entry }))
            .collect();
        return Some(entries);
    }

    let entry = bag.get_error(index, coerce)?;
    let position = index.unwrap_or_else(|| bag.get_errors().len().saturating_sub(1));
    Some(vec![(position, entry)])
}

/// Errors command: list the log, or one entry of it
pub fn errors(
    config: &PropbagConfig,
    format: OutputFormat,
    file: &Path,
    index: Option<usize>,
    last: bool,
    raw: bool
) -> Result<()> {
    let bag = load_bag(file, &config.bag_options())?;

    match select_errors(&bag, index, last, raw) {
        Some(entries) => ui::display_errors(format, &entries),
        None => match index {
            Some(i) => ui::print_warning(&format!("No error recorded at index {}", i)),
            None => ui::print_info("No errors recorded"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use propbag::ErrorValue;

    fn bag_with_errors() -> PropertyBag {
        let mut bag = PropertyBag::new();
        bag.set_error("first".into());
        bag.set_error(ErrorValue::new("second").with_code(2).into());
        bag
    }

    #[test]
    fn lists_every_entry_coerced_by_default() {
        let entries = select_errors(&bag_with_errors(), None, false, false).unwrap();
        assert_eq!(
            entries,
            vec![(0, ErrorEntry::from("first")), (1, ErrorEntry::from("second"))]
        );
    }

    #[test]
    fn raw_listing_keeps_structured_entries() {
        let entries = select_errors(&bag_with_errors(), None, false, true).unwrap();
        assert!(entries[1].1.is_structured());
    }

    #[test]
    fn last_entry_reports_its_position() {
        let entries = select_errors(&bag_with_errors(), None, true, false).unwrap();
        assert_eq!(entries, vec![(1, ErrorEntry::from("second"))]);
    }

    #[test]
    fn out_of_range_index_selects_nothing() {
        assert_eq!(select_errors(&bag_with_errors(), Some(5), false, false), None);
        assert_eq!(select_errors(&PropertyBag::new(), None, true, false), None);
        assert_eq!(select_errors(&PropertyBag::new(), None, false, false), Some(Vec::new()));
    }
}
