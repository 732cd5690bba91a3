//! Template module - receipt template store and placeholder substitution
//!
//! The receipt template is a static HTML document carrying six placeholder
//! tokens. Substitution is pure text replacement: each token's first
//! occurrence is replaced with the matching request field, verbatim.
//!
//! ## Syntax
//!
//! - Tokens: `{{FROM_TEXT}}`, `{{TO_TEXT}}`, `{{TO_NUMBER}}`,
//!   `{{PURPOSE_TEXT}}`, `{{DATE}}`, `{{PRICE}}`
//! - No spaces inside the braces, no escaping, no nesting
//! - Anything else in the document is copied unchanged

pub mod engine;
pub mod placeholder;
pub mod store;

pub use engine::{render, Template};
pub use placeholder::{Placeholder, PlaceholderStatus, TemplateReport};
pub use store::TemplateStore;
