//! Diagnostic Aggregator
//!
//! Collapses the raw messages produced by the checks into the final result:
//! duplicates removed, errors first, and a verdict derived from what is left.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const ALL_COMPATIBLE: &str = "All selected components are compatible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

impl Message {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.text)
    }
}

/// Wire shape of a result: `{ "isCompatible": bool, "messages": ["ERROR: ...", ...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub is_compatible: bool,
    pub messages: Vec<String>,
}

/// Outcome of one compatibility evaluation.
///
/// Only [`aggregate`] builds these, so the verdict always agrees with the messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "CompatibilityReport")]
pub struct CompatibilityResult {
    is_compatible: bool,
    messages: Vec<Message>,
}

impl CompatibilityResult {
    /// Result for a request that never reached the engine (e.g. an unresolvable product).
    pub fn failure(text: impl Into<String>) -> Self {
        aggregate(vec![Message::error(text)])
    }

    pub fn is_compatible(&self) -> bool {
        self.is_compatible
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .count()
    }

    pub fn to_report(&self) -> CompatibilityReport {
        CompatibilityReport {
            is_compatible: self.is_compatible,
            messages: self.messages.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl From<CompatibilityResult> for CompatibilityReport {
    fn from(result: CompatibilityResult) -> Self {
        result.to_report()
    }
}

/// Dedup, order and judge a batch of raw check messages.
pub fn aggregate<I>(raw: I) -> CompatibilityResult
where
    I: IntoIterator<Item = Message>,
{
    let mut seen: HashSet<Message> = HashSet::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for message in raw {
        if seen.contains(&message) {
            log::debug!("Dropping duplicate diagnostic: {}", message);
            continue;
        }
        seen.insert(message.clone());
        match message.severity {
            Severity::Error => errors.push(message),
            Severity::Warning => warnings.push(message),
            Severity::Info => infos.push(message),
        }
    }

    let is_compatible = errors.is_empty();

    let mut messages = errors;
    messages.append(&mut warnings);
    messages.append(&mut infos);

    if messages.is_empty() {
        messages.push(Message::info(ALL_COMPATIBLE));
    }

    CompatibilityResult {
        is_compatible,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_errors_then_warnings_then_infos() {
        let result = aggregate(vec![
            Message::info("first info"),
            Message::warning("first warning"),
            Message::error("first error"),
            Message::info("second info"),
            Message::error("second error"),
        ]);

        let texts: Vec<&str> = result.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "first error",
                "second error",
                "first warning",
                "first info",
                "second info"
            ]
        );
        assert!(!result.is_compatible());
    }

    #[test]
    fn test_deduplicates_by_severity_and_text() {
        let result = aggregate(vec![
            Message::warning("thin margin"),
            Message::warning("thin margin"),
            Message::info("thin margin"),
        ]);

        assert_eq!(result.messages().len(), 2);
        assert_eq!(result.count(Severity::Warning), 1);
        assert_eq!(result.count(Severity::Info), 1);
        assert!(result.is_compatible());
    }

    #[test]
    fn test_empty_input_yields_single_compatible_info() {
        let result = aggregate(Vec::new());
        assert!(result.is_compatible());
        assert_eq!(result.messages(), &[Message::info(ALL_COMPATIBLE)]);
    }

    #[test]
    fn test_warnings_alone_keep_build_compatible() {
        let result = aggregate(vec![Message::warning("CPU may bottleneck GPU")]);
        assert!(result.is_compatible());
    }

    #[test]
    fn test_failure_shape() {
        let result = CompatibilityResult::failure("Product 42 not found");
        assert!(!result.is_compatible());
        assert_eq!(result.messages().len(), 1);
        assert_eq!(result.messages()[0].severity, Severity::Error);
    }

    #[test]
    fn test_serialized_form_prefixes_severity() {
        let result = aggregate(vec![
            Message::info("socket ok"),
            Message::error("too long"),
        ]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isCompatible"], serde_json::json!(false));
        assert_eq!(
            json["messages"],
            serde_json::json!(["ERROR: too long", "INFO: socket ok"])
        );
    }
}
