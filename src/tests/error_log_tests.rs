#[cfg(test)]
mod tests {
    use log::debug;

    use crate::implementations::property_bag::PropertyBag;
    use crate::models::error_entry::{ ErrorEntry, ErrorValue };
    use crate::traits::error_log::ErrorLog;
    use crate::traits::property_access::PropertyAccess;

    fn setup() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn plain(message: &str) -> ErrorEntry {
        ErrorEntry::Plain(message.to_string())
    }

    #[test]
    fn test_errors_keep_insertion_order() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set_error("x".into());
        bag.set_error("y".into());

        assert_eq!(bag.get_errors(), vec![plain("x"), plain("y")]);
        assert_eq!(bag.get_error(None, true), Some(plain("y")));
        assert_eq!(bag.get_error(Some(0), true), Some(plain("x")));
        assert_eq!(bag.get_error(Some(5), true), None);
    }

    #[test]
    fn test_empty_log_has_no_last_error() {
        setup();
        let bag = PropertyBag::new();
        assert_eq!(bag.get_error(None, true), None);
        assert_eq!(bag.get_error(Some(0), false), None);
        assert_eq!(bag.last_error_message(), None);
        assert!(!bag.has_errors());
    }

    #[test]
    fn test_structured_error_coerces_to_message() {
        setup();
        let mut bag = PropertyBag::new();
        let structured = ErrorValue::new("Table not found").with_kind("database").with_code(1146);
        bag.set_error(structured.clone().into());

        let coerced = bag.get_error(None, true);
        debug!("Coerced error: {:?}", coerced);
        assert_eq!(coerced, Some(plain("Table not found")));

        let raw = bag.get_error(None, false);
        assert_eq!(raw, Some(ErrorEntry::Structured(structured)));
        assert_eq!(bag.last_error_message().as_deref(), Some("Table not found"));
    }

    #[test]
    fn test_plain_error_ignores_coercion_flag() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set_error("plain".into());
        assert_eq!(bag.get_error(Some(0), false), Some(plain("plain")));
        assert_eq!(bag.get_error(Some(0), true), Some(plain("plain")));
    }

    #[test]
    fn test_get_errors_returns_detached_copy() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set_error("first".into());

        let mut snapshot = bag.get_errors();
        snapshot.push(plain("injected"));
        snapshot.clear();

        bag.set_error("second".into());
        assert_eq!(bag.get_errors(), vec![plain("first"), plain("second")]);
    }

    #[test]
    fn test_errors_are_not_properties() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set_error("hidden".into());
        assert!(bag.get_properties(false).is_empty());
    }

    #[test]
    fn test_rust_errors_can_be_recorded() {
        setup();
        let mut bag = PropertyBag::new();
        let parse_err = "abc".parse::<i64>().unwrap_err();
        bag.set_error(ErrorValue::from_error(&parse_err).into());

        let entry = bag.get_error(None, false).expect("error recorded");
        assert!(entry.is_structured());
        assert_eq!(entry.message(), parse_err.to_string());
    }
}
