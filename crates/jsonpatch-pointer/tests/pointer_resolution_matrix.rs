use jsonpatch_pointer::{
    array_index, find, find_by_pointer, format_json_pointer, get, is_child, parent,
    parse_json_pointer, validate_json_pointer, JsonPointerError, ReferenceKey,
};
use serde_json::json;

#[test]
fn rfc6901_section5_matrix() {
    let doc = json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    });

    let cases = [
        ("", doc.clone()),
        ("/foo", json!(["bar", "baz"])),
        ("/foo/0", json!("bar")),
        ("/", json!(0)),
        ("/a~1b", json!(1)),
        ("/c%d", json!(2)),
        ("/e^f", json!(3)),
        ("/g|h", json!(4)),
        ("/i\\j", json!(5)),
        ("/k\"l", json!(6)),
        ("/ ", json!(7)),
        ("/m~0n", json!(8)),
    ];

    for (pointer, expected) in cases {
        let r = find_by_pointer(pointer, &doc).unwrap_or_else(|e| panic!("{pointer:?}: {e}"));
        assert_eq!(r.val, &expected, "pointer {pointer:?}");
    }
}

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = ["", "/", "/foo", "/foo/bar", "/a~0b/c~1d", "/arr/0", "/~0/~1"];

    for pointer in cases {
        let path = parse_json_pointer(pointer).expect("valid pointer");
        let out = format_json_pointer(&path);
        assert_eq!(out, pointer);
    }
}

#[test]
fn pointer_find_and_get_matrix() {
    let doc = json!({"foo": {"bar": [10, 20, null]}});

    assert_eq!(
        get(&doc, &parse_json_pointer("/foo/bar/0").unwrap()),
        Some(&json!(10))
    );
    assert_eq!(get(&doc, &parse_json_pointer("/foo/bar/3").unwrap()), None);

    let r = find(&doc, &parse_json_pointer("/foo/bar/1").unwrap()).expect("find ok");
    assert_eq!(r.val, &json!(20));
    assert_eq!(r.key, Some(ReferenceKey::Index(1)));
    assert_eq!(r.obj, Some(&json!([10, 20, null])));

    let r = find(&doc, &parse_json_pointer("/foo/bar/2").unwrap()).expect("find null ok");
    assert_eq!(r.val, &json!(null));
}

#[test]
fn pointer_error_matrix() {
    let doc = json!({"arr": [1, 2, 3], "obj": {"k": "v"}, "leaf": 1});

    let cases = [
        ("/arr/-1", JsonPointerError::InvalidIndex),
        ("/arr/01", JsonPointerError::InvalidIndex),
        ("/arr/1.0", JsonPointerError::InvalidIndex),
        ("/arr/x", JsonPointerError::InvalidIndex),
        ("/arr/3", JsonPointerError::NotFound),
        ("/arr/-", JsonPointerError::NotFound),
        ("/obj/missing", JsonPointerError::NotFound),
        ("/missing/k", JsonPointerError::NotFound),
        ("/leaf/0", JsonPointerError::NotFound),
        ("arr", JsonPointerError::PointerInvalid),
        ("/obj/~2", JsonPointerError::PointerInvalid),
    ];

    for (pointer, expected) in cases {
        assert_eq!(
            find_by_pointer(pointer, &doc).map(|r| r.val.clone()),
            Err(expected),
            "pointer {pointer:?}"
        );
    }
}

#[test]
fn insertion_index_matrix() {
    assert_eq!(array_index("-", 3, true), Ok(3));
    assert_eq!(array_index("3", 3, true), Ok(3));
    assert_eq!(array_index("0", 0, true), Ok(0));
    assert_eq!(array_index("1", 0, true), Err(JsonPointerError::NotFound));
}

#[test]
fn pointer_validation_and_relationships() {
    assert!(validate_json_pointer("/foo/bar").is_ok());
    assert!(validate_json_pointer("foo/bar").is_err());

    let p = parse_json_pointer("/foo/bar").unwrap();
    let q = parse_json_pointer("/foo/bar/baz").unwrap();
    assert!(is_child(&p, &q));

    let parent_path = parent(&p).expect("has parent");
    assert_eq!(parent_path, ["foo".to_string()]);
}
