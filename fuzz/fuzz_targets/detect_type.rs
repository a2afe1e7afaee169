#![no_main]
use libfuzzer_sys::fuzz_target;

use assettype::{AssetInput, AssetTypeCategory, Classifier, ClassifierConfig, FileHandle};

fuzz_target!(|data: &[u8]| {
    let lenient = Classifier::with_config(ClassifierConfig::with_fallbacks());
    let text = String::from_utf8_lossy(data).into_owned();

    let inputs = [
        AssetInput::Text(text.clone()),
        AssetInput::Filename(text.clone()),
        AssetInput::File(FileHandle::new(text.clone(), "").with_content(data)),
    ];
    for input in &inputs {
        let category = assettype::detect_type(input);
        assert!(AssetTypeCategory::ALL.contains(&category));
        assert!(AssetTypeCategory::ALL.contains(&lenient.detect(input)));
    }

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = assettype::detect_type(&value);
    }
});
