#[cfg(test)]
mod tests {
    use log::{ debug, info };
    use std::collections::BTreeMap;

    use crate::implementations::property_bag::PropertyBag;
    use crate::models::source::PropertySource;
    use crate::models::value::Value;
    use crate::traits::property_access::PropertyAccess;

    // Setup function to initialize logging
    fn setup() {
        // Logger may already be initialized by another test, which is fine
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn mapping(pairs: &[(&str, Value)]) -> PropertySource {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<String, Value>>()
            .into()
    }

    #[test]
    fn test_set_then_get_returns_value() {
        setup();
        let mut bag = PropertyBag::new();
        let samples = vec![
            ("title", Value::from("Home")),
            ("count", Value::from(3i64)),
            ("ratio", Value::from(0.5)),
            ("enabled", Value::from(false)),
            ("tags", Value::from(vec!["a", "b"])),
        ];
        for (name, value) in &samples {
            bag.set(name, value.clone());
        }
        for (name, value) in &samples {
            debug!("Checking {}", name);
            assert_eq!(&bag.get(name, Value::Null), value, "value of {} should round-trip", name);
        }
    }

    #[test]
    fn test_get_unset_returns_default() {
        setup();
        let bag = PropertyBag::new();
        assert_eq!(bag.get("missing", Value::from("d")), Value::from("d"));
        assert_eq!(bag.get("missing", Value::from(9i64)), Value::from(9i64));
        assert_eq!(bag.get_or_null("missing"), Value::Null);
        assert!(!bag.has("missing"));
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        setup();
        let mut bag = PropertyBag::new();
        let first = bag.set("p", Value::from("v1"));
        let second = bag.set("p", Value::from("v2"));

        assert_eq!(first, None, "first set should report the absent sentinel");
        assert_eq!(second, Some(Value::from("v1")));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("p", Value::Null), Value::from("v2"));
        assert_eq!(bag.get_properties(false).len(), 1);
    }

    #[test]
    fn test_def_on_unset_assigns_default() {
        setup();
        let mut bag = PropertyBag::new();
        let result = bag.def("lang", Value::from("en"));
        assert_eq!(result, Value::from("en"));
        assert_eq!(bag.get("lang", Value::Null), Value::from("en"));
    }

    #[test]
    fn test_def_on_set_keeps_existing() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set("lang", Value::from("fr"));
        bag.set("other", Value::from(1i64));
        let before = bag.get_properties(false);

        let result = bag.def("lang", Value::from("en"));

        assert_eq!(result, Value::from("fr"));
        assert_eq!(bag.get_properties(false), before, "def should not modify a set property");
    }

    #[test]
    fn test_public_snapshot_hides_reserved_names() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set("name", Value::from("visible"));
        bag.set("_cache", Value::from("hidden"));
        bag.set("__internal", Value::from(1i64));

        let public = bag.get_properties(true);
        info!("Public properties: {:?}", public.keys().collect::<Vec<_>>());
        assert_eq!(public.len(), 1);
        assert!(public.keys().all(|k| !k.starts_with('_')));

        let all = bag.get_properties(false);
        assert_eq!(all.len(), 3);
        assert!(all.contains_key("_cache"));
        assert!(all.contains_key("__internal"));
    }

    #[test]
    fn test_snapshot_is_independent_and_stable() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set("b", Value::from(2i64));
        bag.set("a", Value::from(1i64));

        let mut snapshot = bag.get_properties(true);
        snapshot.insert("c".to_string(), Value::from(3i64));

        assert!(!bag.get_properties(true).contains_key("c"));
        let first: Vec<String> = bag.get_properties(true).into_keys().collect();
        let second: Vec<String> = bag.get_properties(true).into_keys().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_properties_from_mapping() {
        setup();
        let mut bag = PropertyBag::new();
        let ok = bag.set_properties(
            mapping(&[("a", Value::from(1i64)), ("b", Value::from(2i64))])
        );
        assert!(ok);
        assert_eq!(bag.get("a", Value::Null), Value::from(1i64));
        assert_eq!(bag.get("b", Value::Null), Value::from(2i64));
    }

    #[test]
    fn test_set_properties_rejects_scalar() {
        setup();
        let mut bag = PropertyBag::new();
        bag.set("keep", Value::from(true));
        let before = bag.clone();

        assert!(!bag.set_properties("not a mapping".into()));
        assert!(!bag.set_properties(Value::from(42i64).into()));
        assert!(!bag.set_properties(Value::Null.into()));
        assert_eq!(bag, before, "unsupported sources must not mutate the bag");
    }

    #[test]
    fn test_set_properties_empty_mapping_succeeds() {
        setup();
        let mut bag = PropertyBag::new();
        assert!(bag.set_properties(BTreeMap::<String, Value>::new().into()));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_set_properties_from_list_uses_indices() {
        setup();
        let mut bag = PropertyBag::new();
        assert!(bag.set_properties(Value::from(vec!["zero", "one"]).into()));
        assert_eq!(bag.get("0", Value::Null), Value::from("zero"));
        assert_eq!(bag.get("1", Value::Null), Value::from("one"));
    }

    #[test]
    fn test_set_properties_from_other_object_copies_public_only() {
        setup();
        let mut origin = PropertyBag::new();
        origin.set("title", Value::from("Home"));
        origin.set("_token", Value::from("secret"));

        let copy = PropertyBag::from_source(&origin);
        assert_eq!(copy.get("title", Value::Null), Value::from("Home"));
        assert_eq!(copy.get("_token", Value::from("none")), Value::from("none"));
    }

    #[test]
    fn test_construct_equals_set_properties() {
        setup();
        let constructed = PropertyBag::from_source(mapping(&[("k", Value::from("v"))]));

        let mut populated = PropertyBag::new();
        populated.set_properties(mapping(&[("k", Value::from("v"))]));

        assert_eq!(constructed.get_properties(true), populated.get_properties(true));
        assert_eq!(constructed.get_properties(false), populated.get_properties(false));
    }

    #[test]
    fn test_construct_ignores_unsupported_input() {
        setup();
        let bag = PropertyBag::from_source("plain text");
        assert!(bag.is_empty());
    }

    #[test]
    fn test_bag_can_be_shared_behind_mutex() {
        setup();
        use std::sync::{ Arc, Mutex };

        let shared = Arc::new(Mutex::new(PropertyBag::new()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let mut bag = shared.lock().unwrap();
                    bag.def("winner", Value::from(i as i64));
                    bag.set(&format!("worker_{}", i), Value::from(true));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let bag = shared.lock().unwrap();
        assert_eq!(bag.len(), 5);
        assert!(bag.get("winner", Value::Null).as_i64().is_some());
    }
}
