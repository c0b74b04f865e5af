use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::helpers::serde_helper::lenient_string;

/// Category of a suggested test.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub enum TestKind {
    #[default]
    Unit,
    Integration,
    Edge,
    Other(String),
}

impl TestKind {
    /// Case-insensitive label lookup. Blank labels are `Unit`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "unit" | "" => Self::Unit,
            "integration" => Self::Integration,
            "edge" | "edge-case" | "edge_case" => Self::Edge,
            _ => Self::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Edge => "edge",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TestKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TestKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_string(deserializer).map(|label| Self::from_label(&label))
    }
}
