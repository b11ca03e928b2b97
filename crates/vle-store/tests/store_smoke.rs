use vle_data::{DataError, convert, smolen_1991};
use vle_store::*;

fn scratch(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn write_and_load_dataset() {
    let dir = scratch("vle_store_roundtrip");
    let path = dir.join("PTXY-Smolen.json");

    let dataset = convert(&smolen_1991()).unwrap();
    write_dataset(&path, &dataset).unwrap();

    let loaded = load_dataset(&path).unwrap();
    assert_eq!(loaded, dataset);

    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|name| name != "PTXY-Smolen.json")
        .collect();
    assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
}

#[test]
fn foreign_scratch_file_is_left_alone() {
    let dir = scratch("vle_store_foreign_scratch");
    let path = dir.join("out.json");
    let foreign = dir.join("out.json.tmp");
    std::fs::write(&foreign, "another writer").unwrap();

    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();

    assert_eq!(std::fs::read_to_string(&foreign).unwrap(), "another writer");
    assert_eq!(load_dataset(&path).unwrap().len(), 198);
}

#[test]
fn output_layout_matches_fitter_schema() {
    let dir = scratch("vle_store_layout");
    let path = dir.join("PTXY-Smolen.json");
    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"about\": {\n    \"names\": [\n      \"Ammonia\",\n      \"Water\"\n    ]\n  },\n  \"data\": ["));
    assert!(text.contains("\"rho' (guess,mol/m3)\": -1,"));
    assert!(text.contains("\"rho'' (guess,mol/m3)\": -1,"));
    assert!(text.contains("\"type\": \"PTXY\""));
    assert!(!text.contains("BibTeX"));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &value["data"][0];
    assert_eq!(first["T (K)"], 293.15);
    assert_eq!(first["x (molar)"][1], 0.9518);
    assert_eq!(first["y (molar)"][1], 0.351);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = scratch("vle_store_rerun");
    let path = dir.join("out.json");

    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_file_is_overwritten() {
    let dir = scratch("vle_store_overwrite");
    let path = dir.join("out.json");
    std::fs::write(&path, "stale contents").unwrap();

    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();
    let loaded = load_dataset(&path).unwrap();
    assert_eq!(loaded.len(), 198);
}

#[test]
fn shape_mismatch_writes_nothing() {
    let dir = scratch("vle_store_shape_mismatch");
    let path = dir.join("out.json");

    let mut tables = smolen_1991();
    tables.series[0].p.pop();

    let result: StoreResult<()> = convert(&tables)
        .map_err(StoreError::from)
        .and_then(|ds| write_dataset(&path, &ds));

    assert!(matches!(
        result,
        Err(StoreError::Data(DataError::ShapeMismatch { .. }))
    ));
    assert!(!path.exists());
}

#[test]
fn missing_file_is_not_found() {
    let dir = scratch("vle_store_missing");
    let err = load_dataset(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn nested_output_directory_is_created() {
    let dir = scratch("vle_store_nested");
    let path = dir.join("a").join("b").join("out.json");
    write_dataset(&path, &convert(&smolen_1991()).unwrap()).unwrap();
    assert!(path.exists());
}
