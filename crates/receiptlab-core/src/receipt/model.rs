use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Transfer details submitted for a receipt
///
/// Every field is free text. Empty strings are accepted and substituted as-is;
/// rejecting them is up to the caller-facing boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    /// Sender name
    pub from_text: String,
    /// Receiver name
    pub to_text: String,
    /// Receiver account identifier (e.g. IBAN)
    pub to_number: String,
    /// Transfer purpose
    pub purpose: String,
    /// Transfer date, not parsed
    pub date: String,
    /// Amount as entered
    pub price: String,
}

impl ReceiptRequest {
    /// Wire names of the fields that are empty
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("fromText", &self.from_text),
            ("toText", &self.to_text),
            ("toNumber", &self.to_number),
            ("purpose", &self.purpose),
            ("date", &self.date),
            ("price", &self.price),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Today's local date, used when no date is given
    ///
    /// Always ISO `YYYY-MM-DD` in the Gregorian calendar, not a locale
    /// format, so the same day renders the same on every host.
    pub fn today() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }
}

/// Outcome of `receipt.generate`
///
/// Serializes as `{ "success": true, "html": ... }` or
/// `{ "success": false, "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ResultWire", try_from = "ResultWire")]
pub enum ReceiptResult {
    Success { html: String },
    Failure { error: String },
}

impl ReceiptResult {
    pub fn success(html: impl Into<String>) -> Self {
        ReceiptResult::Success { html: html.into() }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ReceiptResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ReceiptResult::Success { .. })
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            ReceiptResult::Success { html } => Some(html),
            ReceiptResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReceiptResult::Success { .. } => None,
            ReceiptResult::Failure { error } => Some(error),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ResultWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ReceiptResult> for ResultWire {
    fn from(result: ReceiptResult) -> Self {
        match result {
            ReceiptResult::Success { html } => ResultWire {
                success: true,
                html: Some(html),
                error: None,
            },
            ReceiptResult::Failure { error } => ResultWire {
                success: false,
                html: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ResultWire> for ReceiptResult {
    type Error = String;

    fn try_from(wire: ResultWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.html, wire.error) {
            (true, Some(html), _) => Ok(ReceiptResult::Success { html }),
            (true, None, _) => Err("successful result is missing 'html'".to_string()),
            (false, _, Some(error)) => Ok(ReceiptResult::Failure { error }),
            (false, _, None) => Err("failed result is missing 'error'".to_string()),
        }
    }
}
