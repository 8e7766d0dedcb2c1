//! Hero identity: name, gender, profession and age.

use serde::{Deserialize, Serialize};

/// Identity fields. Empty strings and a missing or zero age count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub age: Option<u32>,
}

fn write_text_once(field: &mut String, value: Option<String>) -> bool {
    match value {
        Some(value) if !value.is_empty() && field.is_empty() => {
            *field = value;
            true
        }
        _ => false,
    }
}

impl Identity {
    /// Check if a non-empty name is stored.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Check if a non-zero age is stored.
    pub fn has_age(&self) -> bool {
        self.age.is_some_and(|age| age > 0)
    }

    /// True if ANY identity field is set.
    pub fn is_any_set(&self) -> bool {
        self.has_name() || !self.gender.is_empty() || !self.profession.is_empty() || self.has_age()
    }

    /// Apply the provided fields under the write-once-if-unset rule.
    ///
    /// Returns the number of fields actually written.
    pub fn apply(&mut self, info: BasicInfo) -> usize {
        let mut written = 0;
        written += usize::from(write_text_once(&mut self.name, info.name));
        written += usize::from(write_text_once(&mut self.gender, info.gender));
        written += usize::from(write_text_once(&mut self.profession, info.profession));
        if let Some(age) = info.age.filter(|&age| age > 0) {
            if !self.has_age() {
                self.age = Some(age);
                written += 1;
            }
        }
        written
    }
}

/// Sparse identity patch. Also the output shape of attribute extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl BasicInfo {
    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set the profession.
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    /// Set the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Number of fields present in the patch.
    pub fn len(&self) -> usize {
        [
            self.name.is_some(),
            self.gender.is_some(),
            self.profession.is_some(),
            self.age.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Check if the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
