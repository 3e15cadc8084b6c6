use std::fs;
use std::path::PathBuf;

use super::{SoundRecord, SoundStore, StoreError, TABLE_FILE_NAME};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    p.push(format!("tilepad_store_test_{}_{}", name, nonce));
    p
}

fn sample_records() -> Vec<SoundRecord> {
    vec![
        SoundRecord {
            file_name: "airhorn.wav".to_string(),
            sound_name: "Airhorn".to_string(),
            looping: false,
            x: 12.0,
            y: 40.5,
            volume: 0.75,
        },
        SoundRecord {
            file_name: "rain.ogg".to_string(),
            sound_name: "Rain, heavy".to_string(),
            looping: true,
            x: 300.0,
            y: 0.0,
            volume: 0.0,
        },
        SoundRecord {
            file_name: "airhorn.wav".to_string(),
            sound_name: "Airhorn".to_string(),
            looping: false,
            x: 0.0,
            y: 0.0,
            volume: 1.0,
        },
    ]
}

#[test]
fn load_creates_missing_directory_and_table() {
    let dir = unique_temp_dir("missing");
    let store = SoundStore::new(&dir);

    let records = store.load().unwrap();
    assert!(records.is_empty());
    assert!(dir.join(TABLE_FILE_NAME).is_file());

    // The freshly created empty file loads again without complaint.
    assert!(store.load().unwrap().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_then_load_preserves_every_field() {
    let dir = unique_temp_dir("roundtrip");
    let store = SoundStore::new(&dir);
    let records = sample_records();

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_save_writes_header_only() {
    let dir = unique_temp_dir("empty");
    let store = SoundStore::new(&dir);

    store.save(&[]).unwrap();
    let text = fs::read_to_string(store.table_path()).unwrap();
    assert_eq!(text.trim_end(), "file_name,sound_name,loop,x,y,volume");
    assert!(store.load().unwrap().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reads_tables_written_with_python_booleans() {
    let dir = unique_temp_dir("legacy");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(TABLE_FILE_NAME),
        "file_name,sound_name,loop,x,y,volume\r\n\
         bell.wav,Bell,True,0,0,1\r\n\
         drum.mp3,Drum,False,10,20,0.5\r\n",
    )
    .unwrap();

    let loaded = SoundStore::new(&dir).load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded[0].looping);
    assert!(!loaded[1].looping);
    assert_eq!(loaded[1].volume, 0.5);
    assert_eq!((loaded[1].x, loaded[1].y), (10.0, 20.0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn saved_loop_flag_uses_capitalised_words() {
    let dir = unique_temp_dir("flag");
    let store = SoundStore::new(&dir);
    store.save(&sample_records()).unwrap();

    let text = fs::read_to_string(store.table_path()).unwrap();
    assert!(text.contains(",True,"));
    assert!(text.contains(",False,"));
    assert!(text.contains("\"Rain, heavy\""));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn columns_are_matched_by_name() {
    let dir = unique_temp_dir("reordered");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(TABLE_FILE_NAME),
        "volume,y,x,loop,sound_name,file_name\n0.25,5,6,false,Beep,beep.wav\n",
    )
    .unwrap();

    let loaded = SoundStore::new(&dir).load().unwrap();
    assert_eq!(loaded[0].file_name, "beep.wav");
    assert_eq!(loaded[0].volume, 0.25);
    assert_eq!((loaded[0].x, loaded[0].y), (6.0, 5.0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_loop_flag_is_rejected() {
    let dir = unique_temp_dir("badloop");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(TABLE_FILE_NAME),
        "file_name,sound_name,loop,x,y,volume\nok.wav,Ok,True,0,0,1\nbad.wav,Bad,maybe,0,0,1\n",
    )
    .unwrap();

    match SoundStore::new(&dir).load() {
        Err(StoreError::InvalidField { line, field, value }) => {
            assert_eq!(line, 3);
            assert_eq!(field, "loop");
            assert_eq!(value, "maybe");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_number_is_rejected() {
    let dir = unique_temp_dir("badnum");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(TABLE_FILE_NAME),
        "file_name,sound_name,loop,x,y,volume\nbad.wav,Bad,True,0,0,loud\n",
    )
    .unwrap();

    match SoundStore::new(&dir).load() {
        Err(StoreError::InvalidField { field, value, .. }) => {
            assert_eq!(field, "volume");
            assert_eq!(value, "loud");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let dir = unique_temp_dir("nonfinite");
    fs::create_dir_all(&dir).unwrap();
    let table = dir.join(TABLE_FILE_NAME);
    let store = SoundStore::new(&dir);

    fs::write(&table, "file_name,sound_name,loop,x,y,volume\na.wav,A,True,inf,0,1\n").unwrap();
    match store.load() {
        Err(StoreError::InvalidField { line, field, value }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "x");
            assert_eq!(value, "inf");
        }
        other => panic!("expected InvalidField, got {other:?}"),
    }

    fs::write(&table, "file_name,sound_name,loop,x,y,volume\na.wav,A,True,0,NaN,1\n").unwrap();
    match store.load() {
        Err(StoreError::InvalidField { field, .. }) => assert_eq!(field, "y"),
        other => panic!("expected InvalidField, got {other:?}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn short_row_is_an_error() {
    let dir = unique_temp_dir("short");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(TABLE_FILE_NAME),
        "file_name,sound_name,loop,x,y,volume\nshort.wav,Short,True\n",
    )
    .unwrap();

    assert!(matches!(
        SoundStore::new(&dir).load(),
        Err(StoreError::Csv(_))
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_replaces_previous_contents() {
    let dir = unique_temp_dir("replace");
    let store = SoundStore::new(&dir);
    let mut records = sample_records();

    store.save(&records).unwrap();
    records.truncate(1);
    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
    assert!(!dir.join("sounds.csv.tmp").exists());

    let _ = fs::remove_dir_all(&dir);
}
