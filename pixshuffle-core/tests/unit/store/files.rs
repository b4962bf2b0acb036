use super::*;
use crate::offset::generate::generate_offset_maps;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pixshuffle_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn writes_both_maps_and_manifest_into_new_dir() {
    let base = temp_dir("store_write");
    let dir = base.join("nested").join("out");
    let maps = generate_offset_maps(6, 4, "store").unwrap();

    let written = write_offset_maps(&maps, &dir).unwrap();
    assert_eq!(written.shuffle, dir.join("offset_map.png"));
    assert_eq!(written.unshuffle, dir.join("inv_offset_map.png"));
    assert_eq!(written.manifest, dir.join(MANIFEST_FILE_NAME));

    let shuffle = read_encoded_png(&written.shuffle).unwrap();
    assert_eq!(shuffle, encode_offset_map(&maps.shuffle, 6, 4).unwrap());
    let unshuffle = read_encoded_png(&written.unshuffle).unwrap();
    assert_eq!(unshuffle, encode_offset_map(&maps.unshuffle, 6, 4).unwrap());

    let manifest = read_manifest(&dir).unwrap();
    assert_eq!(manifest, MapManifest::for_maps(&maps));
    assert_eq!(manifest.seed.as_str(), "store");
    assert_eq!(manifest.file_name(OffsetKind::Unshuffle), "inv_offset_map.png");

    std::fs::remove_dir_all(&base).ok();
}

#[test]
fn directory_creation_failure_is_io_error() {
    let base = temp_dir("store_blocked");
    std::fs::create_dir_all(&base).unwrap();
    // A regular file where the output directory should go.
    let blocker = base.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let maps = generate_offset_maps(2, 2, "io").unwrap();
    let err = write_offset_maps(&maps, &blocker.join("out")).unwrap_err();
    assert!(matches!(err, PixshuffleError::Io { .. }), "{err}");
    assert!(err.to_string().contains("failed to create output directory"));

    std::fs::remove_dir_all(&base).ok();
}

#[test]
fn missing_manifest_is_io_error() {
    let dir = temp_dir("store_missing");
    assert!(matches!(
        read_manifest(&dir),
        Err(PixshuffleError::Io { .. })
    ));
    assert!(matches!(
        read_encoded_png(&dir.join("offset_map.png")),
        Err(PixshuffleError::Io { .. })
    ));
}

#[test]
fn manifest_json_shape_is_stable() {
    let maps = generate_offset_maps(3, 2, "tok").unwrap();
    let v = serde_json::to_value(MapManifest::for_maps(&maps)).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "seed": "tok",
            "width": 3,
            "height": 2,
            "shuffle": "offset_map.png",
            "unshuffle": "inv_offset_map.png"
        })
    );
}

fn staging_leftovers(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().ends_with(STAGING_SUFFIX))
        .collect()
}

#[test]
fn successful_write_leaves_no_staging_files() {
    let dir = temp_dir("store_staging_clean");
    let maps = generate_offset_maps(5, 3, "clean").unwrap();
    write_offset_maps(&maps, &dir).unwrap();
    // Overwrite in place; the second pass replaces files through rename.
    write_offset_maps(&maps, &dir).unwrap();

    assert!(staging_leftovers(&dir).is_empty());
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 3);
    assert_eq!(
        staging_path(&dir.join("offset_map.png")),
        dir.join("offset_map.png.tmp")
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn failed_rename_keeps_manifest_out_and_cleans_staging() {
    let dir = temp_dir("store_rename_fail");
    // A directory occupying the shuffle map's name makes its rename fail.
    std::fs::create_dir_all(dir.join(OffsetKind::Shuffle.file_name())).unwrap();

    let maps = generate_offset_maps(4, 4, "blocked").unwrap();
    let err = write_offset_maps(&maps, &dir).unwrap_err();
    assert!(matches!(err, PixshuffleError::Io { .. }), "{err}");
    assert!(err.to_string().contains("into place"), "{err}");

    assert!(!dir.join(MANIFEST_FILE_NAME).exists());
    assert!(!dir.join(OffsetKind::Unshuffle.file_name()).exists());
    assert!(staging_leftovers(&dir).is_empty());

    std::fs::remove_dir_all(&dir).ok();
}
