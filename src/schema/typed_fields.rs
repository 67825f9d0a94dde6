use crate::shared::ids::validate_identifier_value;
pub use crate::shared::ids::{FieldName, StageName, TabName};
use crate::shared::serde_ext::parse_via_string;
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        for segment in raw.split('.') {
            let segment = segment.trim();
            validate_identifier_value("field path segment", segment)?;
            segments.push(segment.to_string());
        }
        Ok(Self(segments))
    }

    pub fn from_segments<I, S>(raw_segments: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = Vec::new();
        for raw in raw_segments {
            validate_identifier_value("field path segment", raw.as_ref())?;
            segments.push(raw.as_ref().to_string());
        }
        if segments.is_empty() {
            return Err("field path must have at least one segment".to_string());
        }
        Ok(Self(segments))
    }

    pub fn for_field(tab: &TabName, stage: &StageName, field: &FieldName) -> Self {
        Self(vec![
            tab.as_str().to_string(),
            stage.as_str().to_string(),
            field.as_str().to_string(),
        ])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn to_dotted(&self) -> String {
        self.0.join(".")
    }

    pub fn leaf(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_dotted())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_via_string(deserializer, "field path", Self::parse)
    }
}
