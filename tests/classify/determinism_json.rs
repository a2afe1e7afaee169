use assettype::{classify, Classification};

use crate::common::mixed_inputs;

#[test]
fn json_output_is_stable_for_same_input() {
    for input in mixed_inputs() {
        let j1 = classify(&input).to_json_string().expect("json1");
        let j2 = classify(&input).to_json_string().expect("json2");
        assert_eq!(j1, j2, "JSON outputs differ across identical runs");
    }
}

#[test]
fn json_schema_round_trips() {
    for input in mixed_inputs() {
        let a = classify(&input);
        let j = a.to_json_string().expect("json");
        let back = Classification::from_json_str(&j).expect("from json");
        assert_eq!(a, back);
    }
}
