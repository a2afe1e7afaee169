//! Behavioural properties of the public classification API.

use assettype::{
    detect_type, detect_type_from_extension, is_image_asset, is_image_type, AssetInput,
    AssetRecord, AssetTypeCategory, FileHandle,
};
use serde_json::json;

use crate::common::mixed_inputs;

#[test]
fn every_input_resolves_to_a_category() {
    let mut inputs = mixed_inputs();
    inputs.extend([
        AssetInput::from_json(&json!(null)),
        AssetInput::from_json(&json!({})),
        AssetInput::from_json(&json!([1, 2, 3])),
        AssetInput::from_json(&json!({ "type": { "nested": true }, "url": 7 })),
        AssetInput::Text("....".into()),
        AssetInput::Text("?#/\\.".into()),
        AssetInput::Filename("\u{1F600}.\u{00E9}".into()),
    ]);

    for input in &inputs {
        let category = detect_type(input);
        assert!(
            AssetTypeCategory::ALL.contains(&category),
            "{:?} produced {:?}",
            input,
            category
        );
    }
}

#[test]
fn classification_is_deterministic() {
    for input in mixed_inputs() {
        assert_eq!(detect_type(&input), detect_type(&input));
    }
}

#[test]
fn explicit_type_wins_over_url() {
    let record = AssetRecord::new()
        .with_type("video")
        .with_url("https://x/image.jpg");
    assert_eq!(detect_type(record), AssetTypeCategory::Video);
}

#[test]
fn alternate_type_fields() {
    assert_eq!(
        detect_type(AssetRecord::new().with_asset_type("image/jpeg")),
        AssetTypeCategory::Image
    );
    assert_eq!(
        detect_type(AssetRecord::new().with_content_type("audio/mp3")),
        AssetTypeCategory::Audio
    );
    assert_eq!(
        detect_type(AssetRecord::new().with_mime_type("application/pdf")),
        AssetTypeCategory::Pdf
    );
}

#[test]
fn nested_file_delegation() {
    let record = AssetRecord::new()
        .with_name("test.jpg")
        .with_file(FileHandle::new("test.jpg", "image/jpeg"));
    assert_eq!(detect_type(record), AssetTypeCategory::Image);
}

#[test]
fn url_with_query_string() {
    assert_eq!(
        detect_type_from_extension("https://example.com/path/to/image.png?width=100"),
        AssetTypeCategory::Image
    );
    assert_eq!(
        detect_type_from_extension("https://example.com/data.xlsx?query=param"),
        AssetTypeCategory::Spreadsheet
    );
}

#[test]
fn case_insensitive_type_names() {
    assert!(is_image_type("IMAGE"));
    assert!(is_image_type("Image/PNG"));
    assert_eq!(detect_type("VIDEO/QUICKTIME"), AssetTypeCategory::Video);
    assert_eq!(detect_type_from_extension("SCAN.TIFF"), AssetTypeCategory::Image);
}

#[test]
fn extension_without_mime() {
    let record = AssetRecord::new()
        .with_url("https://example.com/image-no-type.jpg")
        .with_name("Image without type");
    assert_eq!(detect_type(record), AssetTypeCategory::Image);
}

#[test]
fn unknown_fallbacks() {
    assert_eq!(
        detect_type_from_extension("noextension"),
        AssetTypeCategory::Unknown
    );
    assert_eq!(
        detect_type("application/octet-stream"),
        AssetTypeCategory::Unknown
    );
    assert_eq!(detect_type(AssetInput::Empty), AssetTypeCategory::Unknown);
}

#[test]
fn image_asset_negative_cases() {
    assert!(!is_image_asset(AssetInput::Empty));
    assert!(!is_image_asset(AssetRecord::new().with_type("video")));
    assert!(!is_image_asset(
        AssetRecord::new().with_url("https://example.com/files/document.pdf")
    ));
}

#[test]
fn every_extension_in_the_table_round_trips_through_a_url() {
    for (category, extensions) in assettype::classify::extension::EXTENSION_TABLE {
        for ext in *extensions {
            let url = format!("https://cdn.example.com/assets/file.{}?v=3", ext.to_uppercase());
            assert_eq!(
                detect_type(AssetInput::Filename(url.clone())),
                *category,
                "{}",
                url
            );
        }
    }
}
