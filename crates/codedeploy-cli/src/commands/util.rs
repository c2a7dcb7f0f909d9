//! Shared helpers for command handlers.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Read a JSON payload from `path`, or from stdin when `path` is `-` or absent.
pub fn read_payload(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Mask all but the last four characters of a secret for display.
pub fn mask(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "****".into();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_payload_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"deploymentId":"d-1"}}"#).unwrap();
        let text = read_payload(Some(file.path())).unwrap();
        assert_eq!(text, r#"{"deploymentId":"d-1"}"#);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_payload(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn mask_keeps_only_the_tail() {
        assert_eq!(mask("abcdefgh"), "****efgh");
        assert_eq!(mask("abc"), "****");
    }
}
