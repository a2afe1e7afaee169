//! File handles built from files on disk.

use assettype::{
    classify, AssetError, AssetRecord, AssetTypeCategory, Classification, Classifier,
    ClassifierConfig, FileHandle, SignalSource,
};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

use crate::common::{PDF_MAGIC, PNG_MAGIC};

fn temp_with(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut tmp = Builder::new().suffix(suffix).tempfile().unwrap();
    tmp.write_all(content).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn lenient() -> Classifier {
    Classifier::with_config(ClassifierConfig::with_fallbacks())
}

#[test]
fn content_beats_misleading_name() {
    let tmp = temp_with(".mp4", PNG_MAGIC);
    let handle = FileHandle::open(tmp.path(), &ClassifierConfig::default()).unwrap();

    let result = lenient().classify(&handle.into());
    assert_eq!(result.category, AssetTypeCategory::Image);
    assert_eq!(result.source, SignalSource::Content);
}

#[test]
fn name_used_when_content_is_opaque() {
    let tmp = temp_with(".csv", b"sku,price\nA-1,9.99\n");
    let handle = FileHandle::open(tmp.path(), &ClassifierConfig::default()).unwrap();

    let result = lenient().classify(&handle.into());
    assert_eq!(result.category, AssetTypeCategory::Spreadsheet);
    assert_eq!(result.source, SignalSource::Extension);
    assert_eq!(result.extension.as_deref(), Some("csv"));
}

#[test]
fn default_ignores_content_and_name() {
    let tmp = temp_with(".pdf", PDF_MAGIC);
    let handle = FileHandle::open(tmp.path(), &ClassifierConfig::default()).unwrap();

    assert_eq!(classify(handle.clone()), Classification::unknown());
    assert_eq!(lenient().detect(&handle.into()), AssetTypeCategory::Pdf);
}

#[test]
fn record_url_beats_opened_handle() {
    let tmp = temp_with(".bin", PDF_MAGIC);
    let handle = FileHandle::open(tmp.path(), &ClassifierConfig::default()).unwrap();
    let record = AssetRecord::new()
        .with_file(handle)
        .with_url("https://cdn.example.com/x.png");

    assert_eq!(classify(record.clone()).category, AssetTypeCategory::Image);
    assert_eq!(lenient().detect(&record.into()), AssetTypeCategory::Image);
}

#[test]
fn opened_handle_sniffed_when_url_is_opaque() {
    let tmp = temp_with(".bin", PDF_MAGIC);
    let handle = FileHandle::open(tmp.path(), &ClassifierConfig::default()).unwrap();
    let record = AssetRecord::new()
        .with_file(handle)
        .with_url("https://cdn.example.com/blob/8f3a");

    assert_eq!(classify(record.clone()).category, AssetTypeCategory::Unknown);
    let result = lenient().classify(&record.into());
    assert_eq!(result.category, AssetTypeCategory::Pdf);
    assert_eq!(result.source, SignalSource::Content);
}

#[test]
fn oversized_files_are_rejected() {
    let tmp = temp_with(".png", &[0u8; 2048]);
    let config = ClassifierConfig {
        max_file_size: 1024,
        ..ClassifierConfig::default()
    };
    match FileHandle::open(tmp.path(), &config) {
        Err(AssetError::FileTooLarge { size, limit }) => {
            assert_eq!(size, 2048);
            assert_eq!(limit, 1024);
        }
        other => panic!("expected FileTooLarge, got {:?}", other),
    }
}
