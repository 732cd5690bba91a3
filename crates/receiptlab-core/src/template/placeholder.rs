//! Placeholder tokens and template inspection

use crate::receipt::ReceiptRequest;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One of the six named tokens in the receipt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placeholder {
    FromText,
    ToText,
    ToNumber,
    PurposeText,
    Date,
    Price,
}

impl Placeholder {
    /// All placeholders, in substitution order
    pub const ALL: [Placeholder; 6] = [
        Placeholder::FromText,
        Placeholder::ToText,
        Placeholder::ToNumber,
        Placeholder::PurposeText,
        Placeholder::Date,
        Placeholder::Price,
    ];

    /// Bare token name, e.g. `FROM_TEXT`
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::FromText => "FROM_TEXT",
            Placeholder::ToText => "TO_TEXT",
            Placeholder::ToNumber => "TO_NUMBER",
            Placeholder::PurposeText => "PURPOSE_TEXT",
            Placeholder::Date => "DATE",
            Placeholder::Price => "PRICE",
        }
    }

    /// Literal marker as it appears in the template, e.g. `{{FROM_TEXT}}`
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::FromText => "{{FROM_TEXT}}",
            Placeholder::ToText => "{{TO_TEXT}}",
            Placeholder::ToNumber => "{{TO_NUMBER}}",
            Placeholder::PurposeText => "{{PURPOSE_TEXT}}",
            Placeholder::Date => "{{DATE}}",
            Placeholder::Price => "{{PRICE}}",
        }
    }

    /// Request field feeding this placeholder
    pub fn value_in(self, request: &ReceiptRequest) -> &str {
        match self {
            Placeholder::FromText => &request.from_text,
            Placeholder::ToText => &request.to_text,
            Placeholder::ToNumber => &request.to_number,
            Placeholder::PurposeText => &request.purpose,
            Placeholder::Date => &request.date,
            Placeholder::Price => &request.price,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Occurrence count of a single placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderStatus {
    pub placeholder: Placeholder,
    pub occurrences: usize,
}

/// Placeholder inventory of a loaded template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateReport {
    pub path: PathBuf,
    pub placeholders: Vec<PlaceholderStatus>,
}

impl TemplateReport {
    pub(crate) fn scan(path: PathBuf, source: &str) -> Self {
        let placeholders = Placeholder::ALL
            .iter()
            .map(|&placeholder| PlaceholderStatus {
                placeholder,
                occurrences: source.matches(placeholder.token()).count(),
            })
            .collect();
        Self { path, placeholders }
    }

    /// Placeholders absent from the template; their values are dropped
    pub fn missing(&self) -> Vec<Placeholder> {
        self.placeholders
            .iter()
            .filter(|status| status.occurrences == 0)
            .map(|status| status.placeholder)
            .collect()
    }

    /// Placeholders appearing more than once; only the first is replaced
    pub fn duplicated(&self) -> Vec<Placeholder> {
        self.placeholders
            .iter()
            .filter(|status| status.occurrences > 1)
            .map(|status| status.placeholder)
            .collect()
    }

    /// True when every placeholder appears exactly once
    pub fn is_complete(&self) -> bool {
        self.placeholders
            .iter()
            .all(|status| status.occurrences == 1)
    }
}
