use super::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::input::dssp::parse_labels;
use crate::input::fasta::parse_sequence_file;
use crate::input::ids::parse_ids;
use crate::input::pssm::{parse_pssm, parse_pssm_record};
use crate::model::residue::{SecondaryClass, aa_index, labels_to_string};
use crate::model::thresholds::ChouFasmanParams;

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

fn pssm_line(i: usize, aa: char, percent_col: usize) -> String {
    let scores = vec!["-2"; 20].join(" ");
    let percents: Vec<&str> = (0..20)
        .map(|j| if j == percent_col { "75" } else { "0" })
        .collect();
    format!("{:>5} {} {}  {}  0.71 0.20", i, aa, scores, percents.join(" "))
}

fn pssm_file(body: &[String]) -> String {
    let mut lines = vec![
        String::new(),
        "Last position-specific scoring matrix computed".to_string(),
        "           A  R  N  D  C  Q  E  G  H  I  L  K  M  F  P  S  T  W  Y  V".to_string(),
    ];
    lines.extend(body.iter().cloned());
    lines.extend(
        [
            "",
            "                      K         Lambda",
            "Standard Ungapped    0.1330     0.3160",
            "Standard Gapped      0.0410     0.2670",
            "PSI Ungapped         0.1380     0.3165",
            "PSI Gapped           0.0410     0.2670",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    lines.join("\n") + "\n"
}

fn dssp_row(i: usize, aa: char, ss: char) -> String {
    format!("{:>5}{:>5} A {}  {}   0   0   64", i, i, aa, ss)
}

#[test]
fn test_normalize_sequence() {
    let seq = normalize_sequence(" ac de\nfg\t").unwrap();
    assert_eq!(seq.as_str(), "ACDEFG");
    assert_eq!(seq.len(), 6);
    assert_eq!(seq.residue(2), 'D');

    let subst = normalize_sequence("AUBZOJ").unwrap();
    assert_eq!(subst.as_str(), "AXXXXX");

    assert!(normalize_sequence("").unwrap().is_empty());
    assert!(matches!(
        normalize_sequence("AC-DE"),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        normalize_sequence("AC*"),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_parse_fasta_first_record() {
    let dir = temp_dir("fasta");
    let path = dir.join("p.fasta");
    fs::write(&path, ";comment\n>p1 first\nACDE\n\nfghi\n>p2 second\nWWWW\n").unwrap();
    assert_eq!(parse_sequence_file(&path).unwrap().as_str(), "ACDEFGHI");

    let bare = dir.join("bare.txt");
    fs::write(&bare, "ACD\nEFG\n").unwrap();
    assert_eq!(parse_sequence_file(&bare).unwrap().as_str(), "ACDEFG");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_fasta_gz() {
    let dir = temp_dir("fasta_gz");
    let path = dir.join("p.fasta.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(b">p1\nMKV\nLA\n").unwrap();
    encoder.finish().unwrap();
    assert_eq!(parse_sequence_file(&path).unwrap().as_str(), "MKVLA");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_fasta_errors() {
    let dir = temp_dir("fasta_err");
    let header_only = dir.join("header.fasta");
    fs::write(&header_only, ">p1\n\n").unwrap();
    assert!(matches!(
        parse_sequence_file(&header_only),
        Err(InputError::InvalidInput(_))
    ));

    let empty = dir.join("empty.fasta");
    fs::write(&empty, "").unwrap();
    assert!(matches!(
        parse_sequence_file(&empty),
        Err(InputError::InvalidInput(_))
    ));

    assert!(matches!(
        parse_sequence_file(&dir.join("absent.fasta")),
        Err(InputError::MissingInput(_))
    ));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_pssm() {
    let dir = temp_dir("pssm");
    let path = dir.join("p.pssm");
    let a = aa_index('A').unwrap();
    let w = aa_index('W').unwrap();
    fs::write(
        &path,
        pssm_file(&[pssm_line(1, 'M', a), "short line".to_string(), pssm_line(2, 'K', w)]),
    )
    .unwrap();

    let (profile, sequence) = parse_pssm_record(&path).unwrap();
    assert_eq!(sequence.as_str(), "MK");
    assert_eq!(profile.len(), 2);
    assert_eq!(profile.rows()[0][a], 0.75);
    assert_eq!(profile.rows()[1][w], 0.75);
    assert_eq!(profile.rows()[1][a], 0.0);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_pssm_short_file_is_empty() {
    let dir = temp_dir("pssm_short");
    let path = dir.join("p.pssm");
    fs::write(&path, "header\nheader\nheader\n").unwrap();
    assert!(parse_pssm(&path).unwrap().is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_pssm_wrong_column_count() {
    let dir = temp_dir("pssm_cols");
    let path = dir.join("p.pssm");
    let wide = format!("{} 0.5", pssm_line(1, 'A', 0));
    fs::write(&path, pssm_file(&[wide])).unwrap();
    assert!(matches!(parse_pssm(&path), Err(InputError::Parse(_))));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_labels_dssp_table() {
    let dir = temp_dir("dssp");
    let path = dir.join("p.dssp");
    let text = [
        "==== Secondary Structure Definition by the program DSSP ====".to_string(),
        "  #  RESIDUE AA STRUCTURE BP1 BP2  ACC".to_string(),
        dssp_row(1, 'M', ' '),
        dssp_row(2, 'K', 'H'),
        dssp_row(3, 'V', 'G'),
        dssp_row(4, 'L', 'I'),
        dssp_row(5, 'A', 'E'),
        dssp_row(6, 'A', 'B'),
        dssp_row(7, 'G', 'T'),
        dssp_row(8, 'S', 'S'),
        "   9        !".to_string(),
    ]
    .join("\n");
    fs::write(&path, text).unwrap();
    let labels = parse_labels(&path).unwrap();
    assert_eq!(labels_to_string(&labels), "CHHHEECC");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_labels_two_line_record() {
    let dir = temp_dir("labels");
    let path = dir.join("p.dssp");
    fs::write(&path, ">p1\n HGIEBTS- \n").unwrap();
    let labels = parse_labels(&path).unwrap();
    assert_eq!(labels_to_string(&labels), "HHHEECCC");
    assert_eq!(labels[3], SecondaryClass::Strand);

    let single = dir.join("single.dssp");
    fs::write(&single, ">p1\n").unwrap();
    assert!(parse_labels(&single).unwrap().is_empty());

    let empty = dir.join("empty.dssp");
    fs::write(&empty, "").unwrap();
    assert!(matches!(parse_labels(&empty), Err(InputError::Parse(_))));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_ids() {
    let dir = temp_dir("ids");
    let path = dir.join("ids.txt");
    fs::write(&path, "1abc\n\n  2xyz \r\n").unwrap();
    assert_eq!(parse_ids(&path).unwrap(), vec!["1abc", "2xyz"]);

    let empty = dir.join("empty.txt");
    fs::write(&empty, "\n  \n").unwrap();
    assert!(matches!(parse_ids(&empty), Err(InputError::Parse(_))));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_json_partial_params() {
    let dir = temp_dir("json");
    let path = dir.join("params.json");
    fs::write(&path, r#"{ "helix_filter": 1.10 }"#).unwrap();
    let params: ChouFasmanParams = load_json(&path).unwrap();
    assert_eq!(params.helix_filter, 1.10);
    assert_eq!(params.strand_filter, 1.05);
    assert_eq!(params.helix_nucleation.window, 6);

    let bad = dir.join("bad.json");
    fs::write(&bad, "[1, 2").unwrap();
    assert!(matches!(
        load_json::<ChouFasmanParams>(&bad),
        Err(InputError::Parse(_))
    ));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_require_dir() {
    let dir = temp_dir("require");
    assert!(require_dir(&dir).is_ok());
    let file = dir.join("f.txt");
    fs::write(&file, "x").unwrap();
    assert!(matches!(require_dir(&file), Err(InputError::MissingInput(_))));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_parse_pssm_rejects_multi_char_residue() {
    let dir = temp_dir("pssm_residue");
    let path = dir.join("p.pssm");
    let bad = pssm_line(1, 'M', 0).replacen(" M ", " MK ", 1);
    fs::write(&path, pssm_file(&[bad, pssm_line(2, 'K', 1)])).unwrap();
    assert!(matches!(parse_pssm_record(&path), Err(InputError::Parse(_))));
    let _ = fs::remove_dir_all(&dir);
}
