use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::Document;

/// Input file read when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "questions.txt";

/// Export file written when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "quizzes.json";

/// Read a UTF-8 text file, reporting a missing file separately.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound(path.to_path_buf()),
        _ => ConvertError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })
}

/// Load a previously exported document.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json_content = read_input(path)?;
    Document::from_json(&json_content)
}

/// Serialize `document` and move it into place at `path`.
///
/// The JSON goes to a sibling temporary file first, so `path` either keeps
/// its previous content or holds the complete new document.
pub fn write_document<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let json_content = document.to_json()?;
    let tmp_path = temporary_path(path);

    debug!(path = %tmp_path.display(), bytes = json_content.len(), "writing export");

    let write_err = |source: io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(err) = fs::write(&tmp_path, json_content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(err));
    }

    fs::rename(&tmp_path, path).map_err(|err| {
        let _ = fs::remove_file(&tmp_path);
        write_err(err)
    })
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
