use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Error type for reading an intent script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not read stdin: {0}")]
    StdinError(#[source] io::Error),
}

/// Read a script from `path`, or from stdin when `path` is absent or `-`.
pub fn read_script(path: Option<&Path>) -> Result<String, ScriptError> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|e| ScriptError::ReadError {
                path: p.to_path_buf(),
                source: e,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(ScriptError::StdinError)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_script_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trip.pk");
        fs::write(&path, "add Socks\n").unwrap();
        assert_eq!(read_script(Some(&path)).unwrap(), "add Socks\n");
    }

    #[test]
    fn test_read_missing_script_names_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.pk");
        let err = read_script(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.pk"));
    }
}
