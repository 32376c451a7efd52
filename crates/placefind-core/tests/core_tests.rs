use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

use placefind_core::store::{LocationSnapshot, MemoryLocationStore};
use placefind_core::traits::LocationStore;
use placefind_core::types::{City, Place};
use placefind_core::Error;

#[test]
fn snapshot_from_json_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("locations.json");
    fs::write(
        &path,
        r#"{
            "cities": [
                { "id": "c1", "name": "Abidjan", "region": "Lagunes",
                  "latitude": 5.35, "longitude": -4.01 }
            ],
            "places": [
                { "id": "p1", "name": "Cocody", "kind": "commune",
                  "commune_name": "Cocody", "parent_city_id": "c1" },
                { "id": "p2", "name": "Riviera", "kind": "neighborhood",
                  "commune_name": "Cocody", "parent_city_id": "c1" }
            ]
        }"#,
    )
    .unwrap();

    let snapshot = LocationSnapshot::from_json_file(&path).expect("load");
    assert_eq!(snapshot.cities.len(), 1);
    assert_eq!(snapshot.cities[0].latitude, Some(5.35));
    assert_eq!(snapshot.places.len(), 2);
    assert_eq!(snapshot.commune_count(), 1);
}

#[test]
fn missing_snapshot_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = LocationSnapshot::from_json_file(&tmp.path().join("nope.json")).expect_err("missing");
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}

#[test]
fn readers_keep_their_snapshot_across_replace() {
    let store = Arc::new(MemoryLocationStore::with_snapshot(LocationSnapshot::new(
        vec![City::new("c1", "Abidjan", "Lagunes")],
        vec![],
    )));
    let before = store.cities();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            store.begin_refresh();
            store.replace(LocationSnapshot::new(
                vec![City::new("c1", "Abidjan", "Lagunes"), City::new("c2", "Bouaké", "Gbêkê")],
                vec![Place::commune("p1", "Cocody")],
            ));
        })
    };
    writer.join().unwrap();

    assert_eq!(before.len(), 1, "an already-taken snapshot is immutable");
    assert_eq!(store.cities().len(), 2);
    assert_eq!(store.places().len(), 1);
    assert!(!store.is_loading());
}
