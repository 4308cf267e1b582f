// 📄 Input Sources
// Plain-text lists driving a run: registry identifiers to watch and
// report recipients. One item per line, blanks ignored.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Registry identifiers to monitor: trimmed, non-blank lines
pub fn read_registry_ids(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry id list '{}'", path.display()))?;

    Ok(non_blank_lines(&contents))
}

/// Report recipients: trimmed, non-blank lines that look like e-mail
/// addresses (contain '@'); everything else is ignored
pub fn read_recipients(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipient list '{}'", path.display()))?;

    Ok(non_blank_lines(&contents)
        .into_iter()
        .filter(|line| line.contains('@'))
        .collect())
}

fn non_blank_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("krs-monitor-test-{}", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_registry_ids_skips_blanks() {
        let path = write_temp("ids.txt", "0000123456\n\n  0000654321  \n\n");

        let ids = read_registry_ids(&path).unwrap();
        assert_eq!(ids, vec!["0000123456", "0000654321"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_recipients_requires_at_sign() {
        let path = write_temp(
            "recipients.txt",
            "alice@example.com\nnot-an-address\n\nbob@example.org\n",
        );

        let recipients = read_recipients(&path).unwrap();
        assert_eq!(recipients, vec!["alice@example.com", "bob@example.org"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("krs-monitor-test-definitely-missing.txt");
        assert!(read_registry_ids(&path).is_err());
        assert!(read_recipients(&path).is_err());
    }
}
