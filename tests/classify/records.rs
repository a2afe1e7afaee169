//! Classification of backend-shaped JSON records.

use assettype::{
    classify, classify_all, detect_type, summarize, AssetInput, AssetRecord, AssetTypeCategory,
    SignalSource,
};

use crate::common::{fixtures, mixed_inputs};

#[test]
fn fixtures_classify_as_expected() {
    let cases = [
        (fixtures::product_media(), AssetTypeCategory::Image),
        (fixtures::legacy_asset(), AssetTypeCategory::Spreadsheet),
        (fixtures::import_attachment(), AssetTypeCategory::Model),
        (fixtures::pending_upload(), AssetTypeCategory::Document),
        (fixtures::opaque_asset(), AssetTypeCategory::Unknown),
    ];

    for (value, expected) in cases {
        assert_eq!(detect_type(&value), expected, "{}", value);
    }
}

#[test]
fn provenance_reports_the_deciding_signal() {
    let result = classify(&fixtures::product_media());
    assert_eq!(result.source, SignalSource::Mime);
    assert_eq!(result.mime.as_deref(), Some("image/jpeg"));

    let result = classify(&fixtures::import_attachment());
    assert_eq!(result.source, SignalSource::Extension);
    assert_eq!(result.extension.as_deref(), Some("glb"));

    let result = classify(&fixtures::opaque_asset());
    assert_eq!(result.source, SignalSource::Absent);
    assert!(result.mime.is_none());
}

#[test]
fn record_from_json_text() {
    let record = AssetRecord::from_json_str(
        r#"{"mime_type": "model/stl", "url": "https://cdn.example.com/part.pdf"}"#,
    )
    .unwrap();
    assert_eq!(detect_type(record), AssetTypeCategory::Model);

    assert!(AssetRecord::from_json_str("{\"type\": ").is_err());
}

#[test]
fn batch_matches_single_classification() {
    let inputs = mixed_inputs();
    let batch = classify_all(&inputs);
    let single: Vec<AssetTypeCategory> = inputs.iter().map(|i| detect_type(i)).collect();
    assert_eq!(batch, single);
}

#[test]
fn summary_counts_cover_every_input() {
    let inputs = mixed_inputs();
    let counts = summarize(&inputs);
    assert_eq!(counts.total(), inputs.len());
    assert_eq!(counts.get(AssetTypeCategory::Image), 2);
    assert_eq!(counts.get(AssetTypeCategory::Document), 2);
    assert_eq!(counts.get(AssetTypeCategory::Unknown), 2);
    assert_eq!(counts.get(AssetTypeCategory::Audio), 1);

    let json = serde_json::to_value(&counts).unwrap();
    assert_eq!(json["counts"]["image"], 2);
}

#[test]
fn large_batches_stay_ordered() {
    let inputs: Vec<AssetInput> = (0..1000)
        .map(|i| match i % 3 {
            0 => AssetInput::from(format!("frame-{}.png", i)),
            1 => AssetInput::from(format!("take-{}.mov", i)),
            _ => AssetInput::Empty,
        })
        .collect();
    let categories = classify_all(&inputs);
    for (i, category) in categories.iter().enumerate() {
        let expected = match i % 3 {
            0 => AssetTypeCategory::Image,
            1 => AssetTypeCategory::Video,
            _ => AssetTypeCategory::Unknown,
        };
        assert_eq!(*category, expected);
    }
}
