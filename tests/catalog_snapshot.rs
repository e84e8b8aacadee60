use std::fs;

use catalog_recs::catalog::{Availability, CatalogSnapshot, Edition, Item, SnapshotError};
use catalog_recs::types::{ItemId, Sku};
use tempfile::tempdir;

fn game(id: &str, sku: &str) -> Item {
    Item::new(id, id.to_uppercase())
        .with_tag("Arcade")
        .with_edition(Edition::new(sku, "PC", Availability::Available))
}

#[test]
fn positions_follow_input_order() {
    let snapshot = CatalogSnapshot::new(vec![game("b", "b-1"), game("a", "a-1"), game("c", "c-1")]).unwrap();

    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.position(&ItemId::from("b")), Some(0));
    assert_eq!(snapshot.position(&ItemId::from("a")), Some(1));
    assert_eq!(snapshot.position(&ItemId::from("c")), Some(2));
    assert_eq!(snapshot.position(&ItemId::from("z")), None);
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let result = CatalogSnapshot::new(vec![game("a", "a-1"), game("a", "a-2")]);

    assert!(matches!(result, Err(SnapshotError::DuplicateItemId(id)) if id == "a"));
}

#[test]
fn sku_shared_between_items_is_rejected() {
    let result = CatalogSnapshot::new(vec![game("a", "shared"), game("b", "shared")]);

    match result {
        Err(SnapshotError::DuplicateSku { sku, first, second }) => {
            assert_eq!(sku, "shared");
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        }
        other => panic!("expected DuplicateSku, got {other:?}"),
    }
}

#[test]
fn sku_lookup_resolves_owning_item() {
    let item = game("a", "a-std").with_edition(Edition::new("a-dlx", "PS5", Availability::PreOrder));
    let snapshot = CatalogSnapshot::new(vec![item, game("b", "b-1")]).unwrap();

    assert_eq!(snapshot.item_for_sku(&Sku::from("a-dlx")).map(|i| i.id.as_str()), Some("a"));
    assert_eq!(snapshot.item_for_sku(&Sku::from("b-1")).map(|i| i.id.as_str()), Some("b"));
    assert!(snapshot.item_for_sku(&Sku::from("nope")).is_none());
}

#[test]
fn json_file_roundtrip_preserves_order_and_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let original = CatalogSnapshot::new(vec![game("z", "z-1"), game("m", "m-1"), game("a", "a-1")]).unwrap();
    original.to_json_writer(fs::File::create(&path).unwrap()).unwrap();

    let loaded = CatalogSnapshot::from_json_reader(fs::File::open(&path).unwrap()).unwrap();

    let ids: Vec<&str> = loaded.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "m", "a"]);
    assert_eq!(loaded.version(), original.version());
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let result = CatalogSnapshot::from_json_reader("[{\"id\": 5}]".as_bytes());

    assert!(matches!(result, Err(SnapshotError::Serialization(_))));
}
