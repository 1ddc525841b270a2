//! Integration tests for `#[derive(Enumerable)]`.
//!
//! Derived structs play the role of custom source structures: declared fields
//! are their own entries, and `#[enumerable(skip)]` fields are never seen by
//! the transform.

#![cfg(feature = "derive")]

use std::{cell::RefCell, marker::PhantomData};

use map_keys::{Enumerable, MapKeys, map_keys};

#[derive(Enumerable)]
struct Foo {
    a: i32,
    b: i32,
    c: i32,
    d: i32,
    e: i32,
    #[enumerable(skip)]
    f: i32,
    #[enumerable(skip)]
    g: i32,
}

fn foo() -> Foo {
    Foo {
        a: 1,
        b: 2,
        c: 3,
        d: 4,
        e: 5,
        f: 6,
        g: 7,
    }
}

mod skipped_fields {
    use super::*;

    #[test]
    fn are_never_passed_to_the_transform() {
        let source = foo();
        let seen = RefCell::new(Vec::new());
        let mapped = map_keys(&source, |key, _, _| {
            assert!(key != "f" && key != "g", "skipped field {key} was enumerated");
            seen.borrow_mut().push(key.to_owned());
            key.to_owned()
        });

        assert_eq!(seen.into_inner(), ["a", "b", "c", "d", "e"]);
        assert_eq!(mapped.keys().collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
        assert_eq!(mapped["e"], &5);
        // Skipped fields still exist on the source.
        assert_eq!(source.f + source.g, 13);
    }

    #[test]
    fn values_point_into_the_struct() {
        let source = foo();
        let mapped = source.map_keys(|key, _, _| key.to_uppercase());
        assert!(std::ptr::eq(mapped["A"], &source.a));
        assert!(std::ptr::eq(mapped["E"], &source.e));
    }
}

mod field_keys {
    use super::*;

    #[derive(Enumerable)]
    struct Headers {
        #[enumerable(rename = "content-type")]
        content_type: String,
        r#type: String,
    }

    #[derive(Enumerable)]
    struct Triple(u8, u8, u8);

    #[test]
    fn rename_and_raw_identifiers() {
        let source = Headers {
            content_type: "text/plain".to_owned(),
            r#type: "note".to_owned(),
        };
        let keys: Vec<_> = source
            .own_entries()
            .map(|(key, _)| key.into_owned())
            .collect();
        assert_eq!(keys, ["content-type", "type"]);
    }

    #[test]
    fn tuple_structs_enumerate_indices() {
        let source = Triple(7, 8, 9);
        let mapped = map_keys(&source, |key, value, _| format!("{key}{value}"));
        assert_eq!(mapped.keys().collect::<Vec<_>>(), ["07", "18", "29"]);
    }
}

mod value_types {
    use super::*;

    #[derive(Enumerable)]
    #[enumerable(value = Vec<u8>)]
    struct Buffers {
        head: Vec<u8>,
        tail: Vec<u8>,
    }

    #[derive(Enumerable)]
    #[enumerable(value = String)]
    struct Empty {}

    #[derive(Enumerable)]
    struct Tagged<T> {
        id: u64,
        _marker: PhantomData<T>,
    }

    struct NotKeyable;

    #[derive(Enumerable)]
    struct Generic<V> {
        left: V,
        right: V,
    }

    #[test]
    fn explicit_value_type() {
        let source = Buffers {
            head: vec![1],
            tail: vec![2, 3],
        };
        let mapped = map_keys(&source, |_, value, _| value.len());
        assert_eq!(mapped["2"], &vec![2, 3]);
        assert_eq!(mapped["1"], &vec![1]);
    }

    #[test]
    fn empty_struct_yields_empty_map() {
        let source = Empty {};
        let mapped = map_keys(&source, |key, _, _| key.to_owned());
        assert!(mapped.is_empty());
    }

    #[test]
    fn phantom_markers_are_not_enumerated() {
        let source = Tagged::<NotKeyable> {
            id: 42,
            _marker: PhantomData,
        };
        let mapped = map_keys(&source, |key, _, _| key.to_owned());
        assert_eq!(mapped.keys().collect::<Vec<_>>(), ["id"]);
    }

    #[test]
    fn generic_value_type() {
        let source = Generic {
            left: "l".to_owned(),
            right: "r".to_owned(),
        };
        let mapped = map_keys(&source, |_, value, _| value.clone());
        assert!(std::ptr::eq(mapped["l"], &source.left));
        assert!(std::ptr::eq(mapped["r"], &source.right));
    }
}

mod wrapped_sources {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn boxed_and_shared_structs_enumerate_like_the_struct() {
        let boxed = Box::new(foo());
        let shared = Arc::new(foo());
        let from_box = map_keys(&boxed, |key, _, _| key.to_owned());
        let from_arc = map_keys(&shared, |key, _, _| key.to_owned());
        assert_eq!(from_box.len(), 5);
        assert_eq!(
            from_box.keys().collect::<Vec<_>>(),
            from_arc.keys().collect::<Vec<_>>()
        );
    }
}
