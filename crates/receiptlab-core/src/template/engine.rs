//! Placeholder substitution

use super::placeholder::{Placeholder, TemplateReport};
use crate::receipt::ReceiptRequest;
use std::path::{Path, PathBuf};

/// A loaded receipt template
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    source: String,
}

impl Template {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute the request into this template
    pub fn render(&self, request: &ReceiptRequest) -> String {
        render(&self.source, request)
    }

    /// Count placeholder occurrences
    pub fn report(&self) -> TemplateReport {
        TemplateReport::scan(self.path.clone(), &self.source)
    }
}

/// Replace the first occurrence of each placeholder with its request value
///
/// Token positions are taken from the unmodified template, so text inserted
/// for one placeholder is never scanned for another. Values are copied
/// verbatim; a missing token drops its value.
pub fn render(template: &str, request: &ReceiptRequest) -> String {
    let mut slots: Vec<(usize, Placeholder)> = Placeholder::ALL
        .iter()
        .filter_map(|&placeholder| {
            template
                .find(placeholder.token())
                .map(|pos| (pos, placeholder))
        })
        .collect();
    slots.sort_by_key(|&(pos, _)| pos);

    let extra: usize = slots
        .iter()
        .map(|&(_, placeholder)| placeholder.value_in(request).len())
        .sum();
    let mut output = String::with_capacity(template.len() + extra);
    let mut cursor = 0;

    // Distinct tokens cannot overlap: each starts with "{{" and has no inner braces
    for (pos, placeholder) in slots {
        output.push_str(&template[cursor..pos]);
        output.push_str(placeholder.value_in(request));
        cursor = pos + placeholder.token().len();
    }
    output.push_str(&template[cursor..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReceiptRequest {
        ReceiptRequest {
            from_text: "Ahmed Mohammed".into(),
            to_text: "Sara Ali".into(),
            to_number: "SA1234567890123456789012".into(),
            purpose: "Financial transfer".into(),
            date: "2025-12-01".into(),
            price: "1000".into(),
        }
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        let template =
            "From {{FROM_TEXT}} to {{TO_TEXT}} ({{TO_NUMBER}}) for {{PURPOSE_TEXT}} on {{DATE}}: {{PRICE}}";
        let result = render(template, &request());
        assert_eq!(
            result,
            "From Ahmed Mohammed to Sara Ali (SA1234567890123456789012) for Financial transfer on 2025-12-01: 1000"
        );
    }

    #[test]
    fn test_render_order_independent_of_template_layout() {
        let template = "{{PRICE}}|{{DATE}}|{{FROM_TEXT}}";
        let result = render(template, &request());
        assert_eq!(result, "1000|2025-12-01|Ahmed Mohammed");
    }

    #[test]
    fn test_render_first_occurrence_only() {
        let template = "{{PRICE}} and again {{PRICE}}";
        let result = render(template, &request());
        assert_eq!(result, "1000 and again {{PRICE}}");
    }

    #[test]
    fn test_render_missing_token_drops_value() {
        let template = "Only {{FROM_TEXT}}";
        let result = render(template, &request());
        assert_eq!(result, "Only Ahmed Mohammed");
    }

    #[test]
    fn test_render_value_with_token_is_not_resubstituted() {
        let mut req = request();
        req.from_text = "{{TO_TEXT}}".into();
        let template = "<p>{{FROM_TEXT}}</p><p>{{TO_TEXT}}</p>";
        let result = render(template, &req);
        assert_eq!(result, "<p>{{TO_TEXT}}</p><p>Sara Ali</p>");
    }

    #[test]
    fn test_render_value_with_own_token_is_kept_literal() {
        let mut req = request();
        req.price = "{{PRICE}}".into();
        let result = render("{{PRICE}} SAR", &req);
        assert_eq!(result, "{{PRICE}} SAR");
    }

    #[test]
    fn test_render_values_are_not_escaped() {
        let mut req = request();
        req.purpose = "<b>rent & bills</b>".into();
        let result = render("<td>{{PURPOSE_TEXT}}</td>", &req);
        assert_eq!(result, "<td><b>rent & bills</b></td>");
    }

    #[test]
    fn test_render_empty_value() {
        let mut req = request();
        req.to_number = String::new();
        let result = render("[{{TO_NUMBER}}]", &req);
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_render_multibyte_text_around_tokens() {
        let mut req = request();
        req.from_text = "أحمد محمد".into();
        let result = render("إيصال التحويل: {{FROM_TEXT}} ✓", &req);
        assert_eq!(result, "إيصال التحويل: أحمد محمد ✓");
    }

    #[test]
    fn test_render_no_placeholders() {
        let template = "This is plain text with no placeholders.";
        assert_eq!(render(template, &request()), template);
    }
}
