//! Receipt template fixtures
//!
//! The fixture is the workspace's own `templates/receipt-template.html`, so
//! tests exercise the document that ships.

use std::path::{Path, PathBuf};

/// Contents of the bundled receipt template
pub const RECEIPT_TEMPLATE: &str = include_str!("../../../templates/receipt-template.html");

/// Absolute path of the bundled receipt template
pub fn bundled_template_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent() // crates/receiptlab-testkit -> crates
        .and_then(Path::parent) // crates -> workspace root
        .expect("testkit lives two levels below the workspace root")
        .join("templates")
        .join("receipt-template.html")
}

/// Write the bundled template into `dir` and return its path
pub fn write_receipt_template(dir: &Path) -> PathBuf {
    write_template(dir, "receipt-template.html", RECEIPT_TEMPLATE)
}

/// Write an arbitrary template into `dir` and return its path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("Failed to write template {}: {}", path.display(), e));
    path
}
