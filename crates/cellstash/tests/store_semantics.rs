//! End-to-end semantics of the store over the in-memory workbook.

use std::sync::Arc;

use cellstash::{MemoryWorkbook, SheetVisibility, Store, StoreError, TabularDocument};
use cellstash_doc::{DATA_START_ROW, STORE_SHEET_NAME};
use serde::{Deserialize, Serialize};

fn fixture() -> Arc<MemoryWorkbook> {
    Arc::new(MemoryWorkbook::with_sheets(["Sheet1", "Sheet2"]))
}

#[test]
fn roundtrip_without_flush() {
    let mut store = Store::new(fixture());
    store.put("name", "widget").unwrap();
    store.put("count", 12i64).unwrap();
    store.put("enabled", true).unwrap();

    assert_eq!(store.get("name", String::new()).unwrap(), "widget");
    assert_eq!(store.get("count", 0i64).unwrap(), 12);
    assert!(store.get("enabled", false).unwrap());
}

#[test]
fn empty_key_fails_on_get_and_put() {
    let mut store = Store::new(fixture());
    assert!(matches!(store.put("", 1i64), Err(StoreError::EmptyKey)));
    assert!(matches!(store.get("", 0i64), Err(StoreError::EmptyKey)));
}

#[test]
fn invalid_scope_leaves_active_scope_unchanged() {
    let mut store = Store::new(fixture());
    store.set_scope("Sheet1").unwrap();

    let err = store.set_scope("bogus").unwrap_err();
    assert!(matches!(err, StoreError::InvalidScope { ref scope } if scope == "bogus"));
    assert_eq!(store.scope().unwrap().as_str(), "Sheet1");
}

#[test]
fn global_scope_valid_on_sheetless_document() {
    let doc = Arc::new(MemoryWorkbook::new());
    let mut store = Store::new(doc);
    store.set_scope("").unwrap();
    store.put("k", 1i64).unwrap();
    assert_eq!(store.get("k", 0i64).unwrap(), 1);
}

#[test]
fn use_active_sheet_adopts_selection() {
    let doc = fixture();
    let mut store = Store::new(doc.clone());
    store.use_active_sheet().unwrap();
    assert_eq!(store.scope().unwrap().as_str(), "Sheet1");

    doc.set_active("Sheet2").unwrap();
    store.use_active_sheet().unwrap();
    assert_eq!(store.scope().unwrap().as_str(), "Sheet2");
}

#[test]
fn use_active_sheet_without_selection_fails() {
    let mut store = Store::new(Arc::new(MemoryWorkbook::new()));
    assert!(matches!(
        store.use_active_sheet(),
        Err(StoreError::NoActiveSheet)
    ));
}

#[test]
fn clamped_get_bounds_stored_values() {
    let mut store = Store::new(fixture());

    store.put("width", 333i64).unwrap();
    assert_eq!(store.get_clamped("width", 0, 200, 400).unwrap(), 333);

    store.put("width", 123i64).unwrap();
    assert_eq!(store.get_clamped("width", 0, 200, 400).unwrap(), 200);

    store.put("width", 423i64).unwrap();
    assert_eq!(store.get_clamped("width", 0, 200, 400).unwrap(), 400);
}

#[test]
fn clamped_get_bounds_the_default_too() {
    let mut store = Store::new(fixture());
    assert_eq!(store.get_clamped("missing", 100, 200, 400).unwrap(), 200);
    assert_eq!(store.get_clamped("missing", 900, 200, 400).unwrap(), 400);
}

#[test]
fn missing_keys_return_defaults() {
    let mut store = Store::new(fixture());
    assert_eq!(store.get("nope", 5i64).unwrap(), 5);
    assert_eq!(store.get("nope", String::from("d")).unwrap(), "d");
    assert!(!store.has_key("nope").unwrap());
}

#[test]
fn cross_instance_persistence_through_flush() {
    let doc = fixture();

    let mut a = Store::new(doc.clone());
    a.set_scope("Sheet2").unwrap();
    a.put("threshold", 17i64).unwrap();
    a.put("label", "alpha").unwrap();
    a.flush().unwrap();
    assert!(!a.is_dirty());

    let mut b = Store::new(doc);
    b.set_scope("Sheet2").unwrap();
    assert_eq!(b.get("threshold", 0i64).unwrap(), 17);
    assert_eq!(b.get("label", String::new()).unwrap(), "alpha");
}

#[test]
fn flush_is_idempotent() {
    let doc = fixture();
    let mut store = Store::new(doc.clone());
    store.put("a", 1i64).unwrap();
    store.set_scope("Sheet1").unwrap();
    store.put("b", true).unwrap();

    store.flush().unwrap();
    let first = doc.read_rows().unwrap();
    store.flush().unwrap();
    let second = doc.read_rows().unwrap();
    assert_eq!(first, second);
}

#[test]
fn backend_is_read_exactly_once_across_scopes() {
    let doc = fixture();
    let mut store = Store::new(doc.clone());
    assert_eq!(doc.read_calls(), 0);

    store.get("x", 0i64).unwrap();
    store.set_scope("Sheet1").unwrap();
    store.get("y", 0i64).unwrap();
    store.set_scope("Sheet2").unwrap();
    assert!(!store.has_key("z").unwrap());

    assert_eq!(doc.read_calls(), 1);
}

#[test]
fn eager_flush_preserves_rows_it_never_saw() {
    let doc = fixture();

    let mut a = Store::new(doc.clone());
    a.put("kept", 9i64).unwrap();
    a.flush().unwrap();

    // A brand-new store that flushes without ever reading or writing must
    // not erase the persisted rows.
    let mut b = Store::new(doc.clone());
    b.flush().unwrap();

    let mut c = Store::new(doc);
    assert_eq!(c.get("kept", 0i64).unwrap(), 9);
}

#[test]
fn last_flush_wins_across_instances() {
    let doc = fixture();

    let mut a = Store::new(doc.clone());
    let mut b = Store::new(doc.clone());

    // Both stores load the (empty) table up front.
    a.get("x", 0i64).unwrap();
    b.get("x", 0i64).unwrap();

    a.put("from_a", 1i64).unwrap();
    a.flush().unwrap();

    b.put("from_b", 2i64).unwrap();
    b.flush().unwrap();

    // B never saw A's record, so B's flush overwrote it.
    let mut c = Store::new(doc);
    assert!(!c.has_key("from_a").unwrap());
    assert_eq!(c.get("from_b", 0i64).unwrap(), 2);
}

#[test]
fn flushed_table_is_very_hidden_at_the_reserved_offset() {
    let doc = fixture();
    let mut store = Store::new(doc.clone());
    store.put("only", 1i64).unwrap();
    store.flush().unwrap();

    assert_eq!(
        doc.sheet_visibility(STORE_SHEET_NAME),
        Some(SheetVisibility::VeryHidden)
    );
    assert_eq!(
        doc.raw_cell(STORE_SHEET_NAME, DATA_START_ROW, 1).as_deref(),
        Some("only")
    );
    assert_eq!(
        doc.raw_cell(STORE_SHEET_NAME, DATA_START_ROW, 2).as_deref(),
        Some("i:1")
    );
    // Reserved flag rows stay blank.
    assert_eq!(doc.raw_cell(STORE_SHEET_NAME, 0, 0), None);
    assert_eq!(doc.raw_cell(STORE_SHEET_NAME, 1, 0), None);
}

#[test]
fn object_roundtrip_through_flush() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct WindowGeometry {
        left: i32,
        top: i32,
        width: u32,
        height: u32,
    }

    let doc = fixture();
    let geometry = WindowGeometry {
        left: -4,
        top: 32,
        width: 800,
        height: 600,
    };

    let mut a = Store::new(doc.clone());
    a.put_object("geometry", &geometry).unwrap();
    a.flush().unwrap();

    let mut b = Store::new(doc);
    let back: WindowGeometry = b.get_object("geometry").unwrap().unwrap();
    assert_eq!(back, geometry);
    assert_eq!(b.get_object::<WindowGeometry>("absent").unwrap(), None);
}

#[test]
fn rename_races_surface_as_invalid_scope() {
    // A scope validated earlier can go stale if the sheet disappears; only
    // the next set_scope notices, which mirrors the live-document reality.
    let doc = Arc::new(MemoryWorkbook::with_sheets(["Temp"]));
    let mut store = Store::new(doc);
    store.set_scope("Temp").unwrap();
    assert!(store.set_scope("Renamed").is_err());
    assert_eq!(store.scope().unwrap().as_str(), "Temp");
}
