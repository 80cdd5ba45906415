//! Secret list loading
//!
//! Reads a list of secrets from a text file, one code per line.

use crate::core::Guess;
use std::fs;
use std::io;
use std::path::Path;

/// Load secrets from a file
///
/// Returns the valid codes in file order, skipping blank lines, `#`
/// comments and anything that is not four distinct digits 1-9.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bulls_cows::secrets::loader::load_from_file;
///
/// let secrets = load_from_file("data/secrets.txt").unwrap();
/// println!("Loaded {} secrets", secrets.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Guess>> {
    let content = fs::read_to_string(path)?;
    Ok(secrets_from_text(&content))
}

/// Parse one secret per line
#[must_use]
pub fn secrets_from_text(text: &str) -> Vec<Guess> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                trimmed.parse().ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_lines() {
        let secrets = secrets_from_text("1234\n 5678 \n9 8 7 6\n");

        assert_eq!(secrets.len(), 3);
        assert_eq!(secrets[0].to_string(), "1234");
        assert_eq!(secrets[1].to_string(), "5678");
        assert_eq!(secrets[2].to_string(), "9876");
    }

    #[test]
    fn skips_invalid_blank_and_comment_lines() {
        let text = "# secrets\n1234\n\n1123\n0123\n12345\nabcd\n4321\n";
        let secrets = secrets_from_text(text);

        // Only 1234 and 4321 are valid codes
        assert_eq!(secrets.len(), 2);
        assert_eq!(secrets[0].to_string(), "1234");
        assert_eq!(secrets[1].to_string(), "4321");
    }

    #[test]
    fn empty_text() {
        assert!(secrets_from_text("").is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/secrets.txt").is_err());
    }
}
