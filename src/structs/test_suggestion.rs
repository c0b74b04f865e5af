use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::enums::test_kind::TestKind;
use crate::helpers::serde_helper::{lenient_string, value_to_text, FromLooseValue};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct TestSuggestion {
    #[serde(rename = "type", default)]
    pub kind: TestKind,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub what_to_test: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub example_test_code: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromLooseValue for TestSuggestion {
    fn from_loose_value(value: Value) -> Self {
        Self {
            title: value_to_text(value),
            ..Self::default()
        }
    }
}
