use cowpath::{Value, keys, open, value};
use cowpath_testhelpers::setup;

fn at<'v>(root: &'v Value, path: &[&str]) -> &'v Value {
    path.iter().fold(root, |v, key| {
        v.get(key)
            .unwrap_or_else(|| panic!("no {key} in {v}"))
    })
}

#[test]
fn edited_path_is_copied_the_rest_is_shared() {
    setup();
    let original = value!({
        "a": { "b": { "c": 1 }, "side": [1, 2] },
        "other": { "deep": { "x": true } },
    });
    let edited = open(original.clone())
        .unwrap()
        .set("a.b.c", &[], 2)
        .unwrap()
        .close()
        .unwrap();

    assert!(!edited.ptr_eq(&original));
    assert!(!at(&edited, &["a"]).ptr_eq(at(&original, &["a"])));
    assert!(!at(&edited, &["a", "b"]).ptr_eq(at(&original, &["a", "b"])));

    assert!(at(&edited, &["a", "side"]).ptr_eq(at(&original, &["a", "side"])));
    assert!(at(&edited, &["other"]).ptr_eq(at(&original, &["other"])));

    assert_eq!(
        original,
        value!({
            "a": { "b": { "c": 1 }, "side": [1, 2] },
            "other": { "deep": { "x": true } },
        })
    );
}

#[test]
fn closing_without_edits_still_copies_the_root() {
    setup();
    let original = value!({ "a": { "b": 1 } });
    let edited = open(original.clone()).unwrap().close().unwrap();
    assert_eq!(edited, original);
    assert!(!edited.ptr_eq(&original));
    assert!(at(&edited, &["a"]).ptr_eq(at(&original, &["a"])));
}

#[test]
fn containers_are_copied_once_per_session() {
    setup();
    let original = value!({ "a": { "x": 0, "y": 0 } });
    let mut session = open(original.clone()).unwrap();

    session.set("a.x", &[], 1).unwrap();
    let first = session.peek().unwrap().get("a").unwrap().node_id();
    session.set("a.y", &[], 2).unwrap();
    let second = session.peek().unwrap().get("a").unwrap().node_id();
    assert_eq!(first, second);

    assert_eq!(session.close().unwrap(), value!({ "a": { "x": 1, "y": 2 } }));
    assert_eq!(original, value!({ "a": { "x": 0, "y": 0 } }));
}

#[test]
fn handed_out_handles_are_not_mutated() {
    setup();
    let mut session = open(value!({ "a": { "x": 0 } })).unwrap();
    session.set("a.x", &[], 1).unwrap();

    let snapshot = session.get("a", &[]).unwrap().cloned().unwrap();
    session.set("a.x", &[], 2).unwrap();

    assert_eq!(snapshot, value!({ "x": 1 }));
    assert_eq!(session.close().unwrap(), value!({ "a": { "x": 2 } }));
}

#[test]
fn array_edits_replace_the_array() {
    setup();
    let original = value!({ "list": [{ "n": 1 }, { "n": 2 }] });
    let mut session = open(original.clone()).unwrap();
    session.insert("list", &[], Some(1), [value!({ "n": 9 })]).unwrap();
    let edited = session.close().unwrap();

    let before = at(&original, &["list"]);
    let after = at(&edited, &["list"]);
    assert!(!after.ptr_eq(before));
    assert_eq!(before, &value!([{ "n": 1 }, { "n": 2 }]));

    // The elements themselves are shared.
    assert!(after.get_index(0).unwrap().ptr_eq(before.get_index(0).unwrap()));
    assert!(after.get_index(2).unwrap().ptr_eq(before.get_index(1).unwrap()));
}

#[test]
fn independent_sessions_on_one_value() {
    setup();
    let original = value!({ "items": { "a": { "x": 1 }, "b": { "x": 1 } } });

    let left = open(original.clone())
        .unwrap()
        .set("items.{}.x", &keys!["a"], 2)
        .unwrap()
        .close()
        .unwrap();
    let right = open(original.clone())
        .unwrap()
        .set("items.{}.x", &keys!["b"], 3)
        .unwrap()
        .close()
        .unwrap();

    assert_eq!(left, value!({ "items": { "a": { "x": 2 }, "b": { "x": 1 } } }));
    assert_eq!(right, value!({ "items": { "a": { "x": 1 }, "b": { "x": 3 } } }));
    assert!(!at(&left, &["items", "b"]).ptr_eq(at(&right, &["items", "b"])));
    assert!(at(&left, &["items", "b"]).ptr_eq(at(&original, &["items", "b"])));
    assert!(at(&right, &["items", "a"]).ptr_eq(at(&original, &["items", "a"])));
}

#[test]
fn failed_edits_leave_the_value_unchanged() {
    setup();
    let original = value!({ "a": { "b": null } });
    let mut session = open(original.clone()).unwrap();
    session.set("a.b.c", &[], 1).unwrap_err();
    assert_eq!(session.close().unwrap(), original);
}
