use super::*;

fn three() -> ContextTable {
    ContextTable::new([("black", 0.0), ("background", 0.3), ("white", 1.0)]).unwrap()
}

#[test]
fn default_table_is_black_then_white() {
    let t = ContextTable::default();
    assert_eq!(t.names().collect::<Vec<_>>(), vec!["black", "white"]);
    assert_eq!(t.values(), vec![0.0, 1.0]);
    assert_eq!(t.reversed_values(), vec![1.0, 0.0]);
}

#[test]
fn without_returns_a_copy_and_keeps_order() {
    let t = three();
    let (rest, removed) = t.without("background").unwrap();
    assert_eq!(removed, 0.3);
    assert_eq!(rest.values(), vec![0.0, 1.0]);
    // Source table unchanged.
    assert_eq!(t.len(), 3);
    assert!(t.contains("background"));
}

#[test]
fn unknown_names_fail_lookup() {
    let t = ContextTable::default();
    assert!(matches!(t.get("grey"), Err(StimError::UnknownContext(_))));
    assert!(matches!(t.without("grey"), Err(StimError::UnknownContext(_))));
}

#[test]
fn construction_rejects_duplicates_and_empty() {
    assert!(ContextTable::new([("a", 0.0), ("a", 1.0)]).is_err());
    assert!(ContextTable::new(Vec::<(String, f64)>::new()).is_err());
    assert!(ContextTable::new([("", 0.0)]).is_err());
}

#[test]
fn json_keeps_document_order() {
    let t: ContextTable =
        serde_json::from_str(r#"{"white": 1.0, "background": 0.3, "black": 0.0}"#).unwrap();
    assert_eq!(
        t.names().collect::<Vec<_>>(),
        vec!["white", "background", "black"]
    );
    let back = serde_json::to_string(&t).unwrap();
    assert_eq!(back, r#"{"white":1.0,"background":0.3,"black":0.0}"#);
}
