use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, bail};
use std::fs;

/// Split the contents of a URL file into identifiers.
///
/// Identifiers are separated by newlines or commas. Surrounding whitespace is
/// trimmed and empty entries are skipped.
#[must_use]
pub fn parse_identifiers(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Read identifiers from `path`, failing if the file is unreadable or lists nothing.
pub fn read_identifiers(path: &Utf8Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading URL file '{path}'"))?;
    let identifiers = parse_identifiers(&text);
    if identifiers.is_empty() {
        bail!("URL file '{path}' does not list any identifiers");
    }

    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_newline_and_comma_separated() {
        let text = "https://huggingface.co/a/b\nhttps://github.com/x/y, https://huggingface.co/datasets/d\r\n";
        assert_eq!(
            parse_identifiers(text),
            ["https://huggingface.co/a/b", "https://github.com/x/y", "https://huggingface.co/datasets/d"]
        );
    }

    #[test]
    fn test_blanks_are_skipped() {
        assert!(parse_identifiers("\n  \n,,\n").is_empty());
        assert_eq!(parse_identifiers(",,a,,\n\nb"), ["a", "b"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("missing.txt")).unwrap();
        assert!(read_identifiers(&path).is_err());
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("urls.txt")).unwrap();
        fs::write(&path, "\n\n").unwrap();
        assert!(read_identifiers(&path).is_err());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("urls.txt")).unwrap();
        fs::write(&path, "https://huggingface.co/google/bert\n").unwrap();
        assert_eq!(read_identifiers(&path).unwrap(), ["https://huggingface.co/google/bert"]);
    }
}
