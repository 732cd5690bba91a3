//! Test utilities for receiptlab
//!
//! This crate provides shared testing utilities used across the receiptlab workspace.

mod fixtures;

pub use fixtures::{
    RECEIPT_TEMPLATE, bundled_template_path, write_receipt_template, write_template,
};
pub use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate directory, so every crate gets its own
/// gitignored `.tmp/`.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use receiptlab_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let tmp_base = std::env::current_dir()
        .expect("Failed to determine current directory")
        .join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp/ directory");
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_creates_in_tmp() {
        let temp = temp_dir_in_workspace();
        let path = temp.path();

        assert!(
            path.to_string_lossy().contains(".tmp"),
            "Path should contain .tmp, got: {}",
            path.display()
        );
        assert!(path.is_dir(), "Path should be a directory");
    }

    #[test]
    fn test_temp_dir_auto_cleanup() {
        let path = {
            let temp = temp_dir_in_workspace();
            let p = temp.path().to_path_buf();
            assert!(p.exists(), "Directory should exist before drop");
            p
        };

        assert!(
            !path.exists(),
            "Directory should not exist after drop: {}",
            path.display()
        );
    }

    #[test]
    fn test_multiple_temp_dirs_unique() {
        let temp1 = temp_dir_in_workspace();
        let temp2 = temp_dir_in_workspace();
        assert_ne!(temp1.path(), temp2.path());
    }

    #[test]
    fn test_write_receipt_template_has_all_tokens_once() {
        let temp = temp_dir_in_workspace();
        let path = write_receipt_template(temp.path());
        let content = std::fs::read_to_string(path).unwrap();

        for token in [
            "{{FROM_TEXT}}",
            "{{TO_TEXT}}",
            "{{TO_NUMBER}}",
            "{{PURPOSE_TEXT}}",
            "{{DATE}}",
            "{{PRICE}}",
        ] {
            assert_eq!(content.matches(token).count(), 1, "{token}");
        }
    }

    #[test]
    fn test_bundled_template_path_exists() {
        assert!(bundled_template_path().is_file());
    }
}
