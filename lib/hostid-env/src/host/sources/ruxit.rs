use std::{
    fs::File,
    io::{BufRead as _, BufReader},
    path::Path,
};

use snafu::ResultExt as _;

use super::{NotFoundOrUnreadable, SourceError};
use crate::host::HOST_ID_PREFIX;

/// Reads a host identifier from a `ruxithost.id` file.
///
/// Only the first line is read. It is expected to hold the bare hexadecimal host token, which is trimmed and prefixed
/// with `HOST-`. The content is not validated here.
///
/// Returns an empty string if the file is empty.
///
/// # Errors
///
/// If the file cannot be opened or its first line cannot be read, an error is returned.
pub fn read_first_line_id(path: &Path) -> Result<String, SourceError> {
    let file = File::open(path).context(NotFoundOrUnreadable { path })?;

    let mut first_line = Vec::new();
    let bytes_read = BufReader::new(file)
        .read_until(b'\n', &mut first_line)
        .context(NotFoundOrUnreadable { path })?;
    if bytes_read == 0 {
        return Ok(String::new());
    }

    // Invalid UTF-8 is kept (replaced) so the value still fails validation instead of looking unreadable.
    Ok(format!("{}{}", HOST_ID_PREFIX, String::from_utf8_lossy(&first_line).trim()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn prefixes_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");
        fs::write(&path, "AAF98EFF909EE3F6").unwrap();

        assert_eq!(read_first_line_id(&path).unwrap(), "HOST-AAF98EFF909EE3F6");
    }

    #[test]
    fn ignores_subsequent_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");
        fs::write(&path, "  AAF98EFF909EE3F6  \r\n\t\t\t\tasdfsdf\n").unwrap();

        assert_eq!(read_first_line_id(&path).unwrap(), "HOST-AAF98EFF909EE3F6");
    }

    #[test]
    fn does_not_validate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");
        fs::write(&path, "ZZF98EFF909EE3F6\n").unwrap();

        assert_eq!(read_first_line_id(&path).unwrap(), "HOST-ZZF98EFF909EE3F6");
    }

    #[test]
    fn invalid_utf8_first_line_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");
        fs::write(&path, b"AAF9\xff8EFF\n").unwrap();

        let host_id = read_first_line_id(&path).unwrap();
        assert_eq!(host_id, "HOST-AAF9\u{FFFD}8EFF");
    }

    #[test]
    fn empty_file_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");
        fs::write(&path, "").unwrap();

        assert_eq!(read_first_line_id(&path).unwrap(), "");
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ruxithost.id");

        assert!(matches!(
            read_first_line_id(&path),
            Err(SourceError::NotFoundOrUnreadable { .. })
        ));
    }
}
