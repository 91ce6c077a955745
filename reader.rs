use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use encoding_rs::UTF_8;
use log::{debug, error};

use crate::error::WordCountError;

/// Read the whole file as UTF-8 and return it lower-cased.
///
/// A missing file becomes [`WordCountError::FileNotFound`]; every other
/// failure is returned as-is for the caller to surface.
pub fn read_lowercased(path: &Path) -> Result<String, WordCountError> {
    let bytes = read_bytes(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            error!("input file missing: {}", path.display());
            WordCountError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WordCountError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    // BOM はそのまま残す (plain utf-8 read)
    let text = UTF_8
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| WordCountError::Encoding {
            path: path.to_path_buf(),
        })?;
    Ok(text.to_lowercase())
}

fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn lowercases_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Hello WORLD ÄÖ カタカナ").unwrap();
        let text = read_lowercased(file.path()).unwrap();
        assert_eq!(text, "hello world äö カタカナ");
    }

    #[test]
    fn missing_file_is_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        match read_lowercased(&path) {
            Err(WordCountError::FileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'a', 0xff, 0xfe, b'b']).unwrap();
        assert!(matches!(
            read_lowercased(file.path()),
            Err(WordCountError::Encoding { .. })
        ));
    }

    #[test]
    fn directory_is_a_plain_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_lowercased(dir.path()),
            Err(WordCountError::Io { .. })
        ));
    }
}
