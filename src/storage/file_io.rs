//! File I/O utilities with whole-file replacement
//!
//! Writes go to a sibling temporary file that is then renamed over the
//! target, so the ledger file is either the old content or the new content.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Read a text file, returning `None` if it doesn't exist
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_text_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<String>, LedgerError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write newline-terminated lines to a file, replacing it in one step
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    if let Err(e) = write_lines(&temp_path, lines) {
        let _ = fs::remove_file(&temp_path);
        return Err(LedgerError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_lines<I, S>(path: &Path, lines: I) -> std::io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()
}

/// `data.csv` -> `data.csv.tmp`, next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert_eq!(read_text_if_exists(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_lines_atomic(&path, ["a,b", "c,d"]).unwrap();

        let text = read_text_if_exists(&path).unwrap().unwrap();
        assert_eq!(text, "a,b\nc,d\n");
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_lines_atomic(&path, ["one", "two", "three"]).unwrap();
        write_lines_atomic(&path, ["only"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "only\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_lines_atomic(&path, ["x"]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_lines_atomic(&path, ["x"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, b"ok,\xff\n").unwrap();

        let text = read_text_if_exists(&path).unwrap().unwrap();
        assert!(text.starts_with("ok,"));
    }
}
