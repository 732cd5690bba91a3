use super::model::{ReceiptRequest, ReceiptResult};
use crate::config::{consts::GENERATE_FAILED_MESSAGE, Config};
use crate::error::{ReceiptlabError, Result};
use crate::template::{Placeholder, TemplateReport, TemplateStore};

/// Substitution service behind `receipt.generate`
///
/// Holds no mutable state. Each call reads the template afresh, so the
/// service can be shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct ReceiptService {
    store: TemplateStore,
    strict: bool,
}

impl ReceiptService {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            strict: false,
        }
    }

    /// Build from configuration: template location and strict mode
    pub fn from_config(config: &Config) -> Self {
        Self::new(TemplateStore::new(config.template_path())).strict(config.template.strict)
    }

    /// In strict mode a missing placeholder fails generation
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Generate the receipt document, surfacing the typed error
    pub fn try_generate(&self, request: &ReceiptRequest) -> Result<String> {
        let template = self.store.load()?;

        let report = template.report();
        self.ensure_complete(&report)?;
        for placeholder in report.missing() {
            tracing::warn!(
                placeholder = placeholder.name(),
                path = %template.path().display(),
                "placeholder not found in template, value dropped"
            );
        }

        Ok(template.render(request))
    }

    /// Generate the receipt document
    ///
    /// Never fails: any error is logged and reported as a generic failure
    /// result, with no partial document.
    pub fn generate(&self, request: &ReceiptRequest) -> ReceiptResult {
        match self.try_generate(request) {
            Ok(html) => ReceiptResult::success(html),
            Err(err) => {
                tracing::error!(error = %err, "error generating receipt");
                ReceiptResult::failure(GENERATE_FAILED_MESSAGE)
            }
        }
    }

    /// Load the template and report placeholder occurrences
    pub fn check(&self) -> Result<TemplateReport> {
        Ok(self.store.load()?.report())
    }

    /// In strict mode, fail when the report lists a missing placeholder
    pub fn ensure_complete(&self, report: &TemplateReport) -> Result<()> {
        let missing = report.missing();
        if self.strict && !missing.is_empty() {
            return Err(ReceiptlabError::TemplateIncomplete {
                path: report.path.clone(),
                missing: join_names(&missing),
            });
        }
        Ok(())
    }
}

fn join_names(placeholders: &[Placeholder]) -> String {
    placeholders
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use receiptlab_testkit::{temp_dir_in_workspace, TempDir};

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

    fn service_for(source: &str) -> (TempDir, ReceiptService) {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("template.html");
        std::fs::write(&path, source).unwrap();
        let service = ReceiptService::new(TemplateStore::new(path));
        (temp, service)
    }

    #[test]
    fn test_generate_missing_template_returns_failure() {
        let temp = temp_dir_in_workspace();
        let service = ReceiptService::new(TemplateStore::new(temp.path().join("nope.html")));

        let result = service.generate(&request());
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Failed to generate receipt"));
        assert!(result.html().is_none());
    }

    #[test]
    fn test_generate_silently_drops_missing_placeholder() {
        let (_temp, service) = service_for("<p>{{FROM_TEXT}}</p>");
        let result = service.generate(&request());
        assert_eq!(result.html(), Some("<p>Ahmed Mohammed</p>"));
    }

    #[test]
    fn test_strict_mode_rejects_missing_placeholder() {
        let (_temp, service) = service_for("<p>{{FROM_TEXT}}</p>");
        let service = service.strict(true);

        match service.try_generate(&request()) {
            Err(ReceiptlabError::TemplateIncomplete { missing, .. }) => {
                assert_eq!(missing, "TO_TEXT, TO_NUMBER, PURPOSE_TEXT, DATE, PRICE");
            }
            other => panic!("Expected TemplateIncomplete, got {:?}", other),
        }
        assert_eq!(
            service.generate(&request()).error(),
            Some("Failed to generate receipt")
        );
    }

    #[test]
    fn test_check_reports_template() {
        let (_temp, service) = service_for("{{PRICE}} {{PRICE}}");
        let report = service.check().unwrap();
        assert_eq!(report.duplicated(), vec![Placeholder::Price]);
        assert_eq!(report.missing().len(), 5);
    }

    #[test]
    fn test_ensure_complete_only_fails_in_strict_mode() {
        let (_temp, service) = service_for("{{FROM_TEXT}} {{PRICE}}");
        let report = service.check().unwrap();
        assert!(service.ensure_complete(&report).is_ok());

        let strict = service.strict(true);
        let err = strict.ensure_complete(&report).unwrap_err();
        assert_eq!(err.code(), "TEMPLATE_INCOMPLETE");
        assert!(err.to_string().contains("TO_TEXT, TO_NUMBER, PURPOSE_TEXT, DATE"));
    }

    #[test]
    fn test_ensure_complete_accepts_duplicates() {
        let (_temp, service) = service_for(
            "{{FROM_TEXT}}{{TO_TEXT}}{{TO_NUMBER}}{{PURPOSE_TEXT}}{{DATE}}{{PRICE}}{{PRICE}}",
        );
        let service = service.strict(true);
        let report = service.check().unwrap();
        assert!(service.ensure_complete(&report).is_ok());
    }

    #[test]
    fn test_from_config_uses_template_path_and_strict() {
        let temp = temp_dir_in_workspace();
        let mut config = Config::with_base_dir(temp.path());
        config.template.strict = true;

        let service = ReceiptService::from_config(&config);
        assert!(service.is_strict());
        assert_eq!(
            service.store().path(),
            temp.path().join("templates/receipt-template.html")
        );
    }
}
