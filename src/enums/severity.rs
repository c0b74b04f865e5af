use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::helpers::serde_helper::lenient_string;

/// How badly a design flaw hurts the code under review.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Default)]
pub enum Severity {
    Blocker,
    Major,
    #[default]
    Minor,
    /// Label outside the known scale, kept as the model wrote it.
    Other(String),
}

impl Severity {
    /// Case-insensitive label lookup. Blank labels are `Minor`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "blocker" => Self::Blocker,
            "major" => Self::Major,
            "minor" | "" => Self::Minor,
            _ => Self::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Blocker => "blocker",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_string(deserializer).map(|label| Self::from_label(&label))
    }
}
