use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::enums::severity::Severity;
use crate::helpers::serde_helper::{lenient_string, value_to_text, FromLooseValue};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct DesignFlaw {
    #[serde(default)]
    pub severity: Severity,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub why_it_matters: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub evidence: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub fix: String,

    /// Keys the model added beyond the schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromLooseValue for DesignFlaw {
    fn from_loose_value(value: Value) -> Self {
        Self {
            title: value_to_text(value),
            ..Self::default()
        }
    }
}
