use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// One dated line of the resume: an experience or a project.
///
/// For projects, `company` holds the project title and `role` its summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
}

impl ResumeEntry {
    pub fn new(
        year: impl Into<String>,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            company: company.into(),
            role: role.into(),
        }
    }

    /// Copy with every field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.year.trim(), self.company.trim(), self.role.trim())
    }

    /// True when all three fields are blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.year.trim().is_empty() && self.company.trim().is_empty() && self.role.trim().is_empty()
    }
}

/// The singleton resume document.
///
/// Only the two entry lists are typed; every other field (skills, hobbies,
/// education, timestamps) is carried through verbatim in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    #[serde(default, deserialize_with = "lenient_entries")]
    pub experiences: Vec<ResumeEntry>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub projects: Vec<ResumeEntry>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl ResumeSection {
    /// Build a section from a stored JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the document is not a JSON object,
    /// or [`CoreError::Json`] if an entry list has an unusable shape.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::Validation(
                "resume document must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize back into a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Accept strings, numbers, booleans, and null where a string is expected.
///
/// Admin payloads routinely send `"year": 2024` or `"role": null`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Accept a missing, null, or non-array list as empty; skip non-object items.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<ResumeEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
        .collect()
}
