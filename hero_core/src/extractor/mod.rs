//! Attribute Extractor - derives identity fields from free-form player text.
//!
//! Extraction runs an ordered list of independent matchers over the same text:
//! 1. **Name**: "我叫<letters>"
//! 2. **Gender**: "<男|女>勇者"
//! 3. **Profession**: "我是<letters><keyword>"
//! 4. **Age**: "<digits>岁"
//!
//! A text may satisfy any subset of the rules. Nothing matching is an empty
//! result, not an error. Captures are literal: no trimming, no range checks.

mod matchers;

pub use matchers::*;

use hero_rules::BasicInfo;
use serde::{Deserialize, Serialize};

/// Identity fields an extractor can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoField {
    Name,
    Gender,
    Profession,
    Age,
}

/// A matcher writes its field into the result when it hits and reports whether it did.
pub type Matcher = fn(&str, &mut BasicInfo) -> bool;

fn apply_name(text: &str, info: &mut BasicInfo) -> bool {
    info.name = match_name(text);
    info.name.is_some()
}

fn apply_gender(text: &str, info: &mut BasicInfo) -> bool {
    info.gender = match_gender(text);
    info.gender.is_some()
}

fn apply_profession(text: &str, info: &mut BasicInfo) -> bool {
    info.profession = match_profession(text);
    info.profession.is_some()
}

fn apply_age(text: &str, info: &mut BasicInfo) -> bool {
    info.age = match_age(text);
    info.age.is_some()
}

/// Result of one extraction pass with the fields that matched, in matcher order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub info: BasicInfo,
    pub matched: Vec<InfoField>,
}

impl ExtractionReport {
    /// Check if no matcher hit.
    pub fn is_miss(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Runs the matcher list over player text.
#[derive(Clone)]
pub struct AttributeExtractor {
    matchers: Vec<(InfoField, Matcher)>,
}

impl std::fmt::Debug for AttributeExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeExtractor")
            .field("fields", &self.fields())
            .finish()
    }
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self {
            matchers: vec![
                (InfoField::Name, apply_name as Matcher),
                (InfoField::Gender, apply_gender),
                (InfoField::Profession, apply_profession),
                (InfoField::Age, apply_age),
            ],
        }
    }
}

impl AttributeExtractor {
    /// Create an extractor with the standard matcher list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields this extractor looks for, in order.
    pub fn fields(&self) -> Vec<InfoField> {
        self.matchers.iter().map(|(field, _)| *field).collect()
    }

    /// Extract whatever fields the text contains.
    pub fn extract(&self, text: &str) -> BasicInfo {
        self.extract_with_report(text).info
    }

    /// Extract and record which matchers hit.
    pub fn extract_with_report(&self, text: &str) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        for (field, matcher) in &self.matchers {
            if matcher(text, &mut report.info) {
                report.matched.push(*field);
            }
        }
        tracing::debug!("Extracted {:?} from player text", report.matched);
        report
    }
}

/// Extract identity fields with the standard matcher list.
pub fn extract_basic_info(text: &str) -> BasicInfo {
    AttributeExtractor::new().extract(text)
}
