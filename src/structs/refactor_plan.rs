use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::helpers::serde_helper::{lenient_string, lenient_string_list, value_to_text, FromLooseValue};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct RefactorPlan {
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub goals: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub patch: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RefactorPlan {
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty() && self.patch.trim().is_empty()
    }
}

/// A bare list is read as goals, any other value as the patch.
impl FromLooseValue for RefactorPlan {
    fn from_loose_value(value: Value) -> Self {
        match value {
            Value::Array(goals) => Self {
                goals: goals.into_iter().map(value_to_text).collect(),
                ..Self::default()
            },
            other => Self {
                patch: value_to_text(other),
                ..Self::default()
            },
        }
    }
}
