use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::gor::train::{TrainingExample, train};
use crate::input::{InputError, normalize_sequence};
use crate::model::profile::Profile;
use crate::model::thresholds::GOR_MAX_WINDOW;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir(prefix: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "kira_secstruct_{}_{}_{}",
        prefix,
        std::process::id(),
        id
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_model() -> GorModel {
    let mut model = GorModel::empty(3).unwrap();
    model.helix[0][0] = 1.0 / 3.0;
    model.helix[1][4] = 0.1;
    model.strand[2][19] = 2.0f64.sqrt() / 7.0;
    model.coil[1][7] = 1e-17;
    model
}

#[test]
fn test_invalid_window() {
    assert!(matches!(GorModel::empty(0), Err(GorError::InvalidWindow(0))));
    assert!(matches!(GorModel::empty(4), Err(GorError::InvalidWindow(4))));
    let model = GorModel::empty(17).unwrap();
    assert_eq!(model.half_window(), 8);
    assert_eq!(model.helix.len(), 17);
}

#[test]
fn test_normalize_rows_keeps_zero_rows() {
    let mut model = GorModel::empty(3).unwrap();
    model.helix[0][0] = 3.0;
    model.helix[0][1] = 1.0;
    model.normalize_rows();
    assert_eq!(model.helix[0][0], 0.75);
    assert_eq!(model.helix[0][1], 0.25);
    assert!(model.helix[1].iter().all(|&v| v == 0.0));
    assert!(model.coil.iter().flatten().all(|&v| v == 0.0));
}

#[test]
fn test_save_load_round_trip_is_exact() {
    let dir = temp_dir("model");
    let path = dir.join("nested").join("gor_model.json");
    let model = sample_model();
    model.save(&path).unwrap();
    let loaded = GorModel::load(&path).unwrap();
    assert_eq!(loaded, model);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_json_field_names() {
    let value = serde_json::to_value(sample_model()).unwrap();
    let obj = value.as_object().unwrap();
    for key in ["window_size", "aa_list", "H", "E", "C"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj["aa_list"][0], "A");
    assert_eq!(obj["aa_list"][19], "V");
    assert_eq!(obj["H"].as_array().unwrap().len(), 3);
}

#[test]
fn test_validate_rejects_bad_models() {
    let mut even = sample_model();
    even.window_size = 2;
    assert!(matches!(even.validate(), Err(GorError::InvalidModel(_))));

    let mut short = sample_model();
    short.aa_list.pop();
    assert!(matches!(short.validate(), Err(GorError::InvalidModel(_))));

    let mut dup = sample_model();
    dup.aa_list[1] = 'A';
    assert!(matches!(dup.validate(), Err(GorError::InvalidModel(_))));

    let mut rows = sample_model();
    rows.coil.pop();
    assert!(matches!(rows.validate(), Err(GorError::InvalidModel(_))));

    assert!(sample_model().validate().is_ok());
}

#[test]
fn test_load_rejects_invalid_files() {
    let dir = temp_dir("model_bad");
    let missing = dir.join("absent.json");
    assert!(matches!(
        GorModel::load(&missing),
        Err(GorError::Input(InputError::MissingInput(_)))
    ));

    let garbage = dir.join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(GorModel::load(&garbage), Err(GorError::Model(_))));

    let even = dir.join("even.json");
    let mut model = sample_model();
    model.window_size = 4;
    fs::write(&even, serde_json::to_string(&model).unwrap()).unwrap();
    assert!(matches!(GorModel::load(&even), Err(GorError::InvalidModel(_))));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_window_cap() {
    assert!(GorModel::empty(GOR_MAX_WINDOW).is_ok());
    assert!(matches!(
        GorModel::empty(GOR_MAX_WINDOW + 2),
        Err(GorError::InvalidWindow(_))
    ));
    assert!(matches!(
        GorModel::empty(usize::MAX),
        Err(GorError::InvalidWindow(usize::MAX))
    ));
}

#[test]
fn test_trained_model_round_trip_is_exact() {
    let example = |id: &str, seq: &str, labels: &str| TrainingExample {
        id: id.to_string(),
        profile: Profile::one_hot(&normalize_sequence(seq).unwrap(), &AA_ORDER),
        labels: labels.chars().map(SecondaryClass::reduce_dssp).collect(),
    };
    let model = train(
        &[
            example("p1", "MKVLAAGEEWR", "CHHHHHCEEEC"),
            example("p2", "GDTYVVKILQ", "CCEEEEHHHC"),
            example("p3", "ACDEFGH", "HHHCCEE"),
        ],
        5,
    )
    .unwrap();

    let dir = temp_dir("model_trained");
    let path = dir.join("gor_model.json");
    model.save(&path).unwrap();
    let loaded = GorModel::load(&path).unwrap();
    assert_eq!(loaded, model);
    let _ = fs::remove_dir_all(&dir);
}
