use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use segalign::error::Error;
use segalign::filtering::CategoryFilter;
use segalign::io::{DocumentStore, JsonStore, PayloadWriter};
use segalign::pipelines::extract::types::TitlePayload;
use segalign::pipelines::{extract::ExtractOptions, Extract, Pipeline};
use segalign::segment::{Flattener, Span};

const CATEGORIES: &str = r#"["Madhyamaka", "Prasangika", "Bodhicaryavatara", "Root text""#;

fn write_store(dir: &Path) {
    let mut index = File::create(dir.join("index.jsonl")).unwrap();
    for title in ["Chapter 1", "Chapter 2/3", "No root"] {
        writeln!(index, r#"{{"categories": {}, "{}"]}}"#, CATEGORIES, title).unwrap();
    }
    writeln!(index, r#"{{"categories": ["Madhyamaka", "Commentary"]}}"#).unwrap();

    std::fs::create_dir(dir.join("texts")).unwrap();
    let mut texts = File::create(dir.join("texts").join("0.jsonl")).unwrap();
    let lines = [
        r#"{"title": "Chapter 1", "chapter": [["ཀ<br>", ""], ["ཁག"]], "actualLanguage": "bo", "versionTitle": "Derge [bo]", "versionSource": "derge"}"#,
        r#"{"title": "Chapter 1", "chapter": [["甲 <br/>", ""], ["乙丙"]], "actualLanguage": "he", "versionTitle": "Taisho [zh] ", "versionSource": "taisho"}"#,
        r#"{"title": "Chapter 1", "chapter": [["a", "b"], ["cd"]], "actualLanguage": "en", "versionTitle": "English", "versionSource": "web"}"#,
        r#"{"title": "Chapter 2/3", "chapter": [["x", "y"]], "actualLanguage": "bo", "versionTitle": "Derge", "versionSource": "derge"}"#,
        r#"{"title": "Chapter 2/3", "chapter": [["z"]], "actualLanguage": "en", "versionTitle": "English", "versionSource": "web"}"#,
        r#"{"title": "No root", "chapter": [["z"]], "actualLanguage": "en", "versionTitle": "English", "versionSource": "web"}"#,
    ];
    for line in lines {
        writeln!(texts, "{}", line).unwrap();
    }
}

fn read_payload(path: &Path) -> TitlePayload {
    serde_json::from_reader(File::open(path).unwrap()).unwrap()
}

#[test_log::test]
fn extract_store() {
    let store_dir = tempfile::tempdir().unwrap();
    write_store(store_dir.path());
    let dst = tempfile::tempdir().unwrap();
    let dst_path = dst.path().join("json").join("Madhyamaka");

    let store = JsonStore::open(store_dir.path()).unwrap();
    let writer = PayloadWriter::new(&dst_path).unwrap();
    let options = ExtractOptions {
        flattener: Flattener::new(true),
        ..Default::default()
    };
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    let report = Extract::new(store, writer, CategoryFilter::default(), options)
        .with_date(date)
        .run()
        .unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].title, "No root");
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].title, "Chapter 2/3");

    let payload = read_payload(&dst_path.join("Chapter 1.json"));
    let root = &payload.root_texts[0];
    assert_eq!(root.content, "ཀཁག");
    assert_eq!(root.metadata.colophon, "ཀ");
    assert_eq!(root.metadata.incipit_title.get("bo").unwrap(), "Derge");
    assert_eq!(root.metadata.date, date);
    assert_eq!(root.segment_annotation.len(), 3);

    assert_eq!(payload.translations.len(), 2);
    let zh = payload
        .translations
        .iter()
        .find(|t| t.record.metadata.language == "zh")
        .unwrap();
    assert_eq!(zh.record.content, "甲乙丙");
    assert_eq!(zh.record.metadata.incipit_title.get("zh").unwrap(), "Taisho");
    assert_eq!(zh.alignment_annotation, vec![Span::new(0, 1), Span::new(1, 3)]);
    assert_eq!(zh.target_annotation, vec![Span::new(0, 1), Span::new(1, 3)]);
    assert_eq!(zh.record.segment_annotation.len(), 2);

    let en = payload
        .translations
        .iter()
        .find(|t| t.record.metadata.language == "en")
        .unwrap();
    // the root's empty fragment is aligned with "b"
    assert_eq!(
        en.alignment_annotation,
        vec![Span::new(0, 1), Span::new(1, 2), Span::new(2, 4)]
    );
    assert_eq!(
        en.target_annotation,
        vec![Span::new(0, 1), Span::new(1, 1), Span::new(1, 3)]
    );

    let partial = read_payload(&dst_path.join("Chapter 2_3.json"));
    assert_eq!(partial.translations[0].alignment_annotation, vec![Span::new(0, 1)]);
    assert!(!dst_path.join("No root.json").exists());
}

#[test]
fn raw_json_layout() {
    let store_dir = tempfile::tempdir().unwrap();
    write_store(store_dir.path());
    let dst = tempfile::tempdir().unwrap();

    let store = JsonStore::open(store_dir.path()).unwrap();
    let writer = PayloadWriter::new(dst.path()).unwrap();
    let options = ExtractOptions {
        flattener: Flattener::new(false),
        ..Default::default()
    };
    Extract::new(store, writer, CategoryFilter::default(), options)
        .run()
        .unwrap();

    let raw = std::fs::read_to_string(dst.path().join("Chapter 1.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // without normalization, markup stays in the content
    assert_eq!(value["root_texts"][0]["content"], "ཀ<br>ཁག");
    assert_eq!(value["root_texts"][0]["segment_annotation"][0]["span"]["end"], 5);
    assert_eq!(value["root_texts"][0]["metadata"]["text_type"], "root");
    assert_eq!(value["root_texts"][0]["metadata"]["license"], "CC0");
    assert_eq!(value["translations"][0]["metadata"]["text_type"], "translation");
    assert!(value["translations"][0]["alignment_annotation"][0]["start"].is_number());
    // non-ASCII is kept as is
    assert!(raw.contains("ཀ<br>ཁག"));
}

#[test]
fn titles_selection() {
    let store_dir = tempfile::tempdir().unwrap();
    write_store(store_dir.path());
    let store = JsonStore::open(store_dir.path()).unwrap();

    let titles = store.titles(&CategoryFilter::default()).unwrap();
    assert_eq!(titles, vec!["Chapter 1", "Chapter 2/3", "No root"]);

    let commentaries = store
        .titles(&CategoryFilter::new(vec!["Commentary".to_string()]))
        .unwrap();
    assert_eq!(commentaries, vec!["Commentary"]);
}

#[test]
fn missing_store() {
    assert!(matches!(
        JsonStore::open(Path::new("fzjoijzoecijzoiej")),
        Err(Error::Custom(_))
    ));
}
