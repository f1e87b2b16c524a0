use std::{fs, path::Path};

use snafu::ResultExt as _;
use tracing::debug;

use super::{NotFoundOrUnreadable, SourceError};

/// File name suffix that marks a properties file's content as a redirect to another properties file.
pub const PROPERTIES_SUFFIX: &str = ".properties";

/// Reads the value of `key` from the properties file at `path`.
///
/// The file holds `key = value` lines. Blank lines and lines starting with `#` are ignored, as are lines without an
/// `=`. Only the first `=` on a line separates key from value, and both are trimmed. The value of the first matching
/// line is returned.
///
/// If the entire trimmed content of the file itself ends in `.properties`, it is treated as the path of the file that
/// actually holds the properties. This redirect is followed at most once.
///
/// Returns an empty string if no line matches `key`.
///
/// # Errors
///
/// If the file, or the file it redirects to, cannot be read, an error is returned.
pub fn read_property(path: &Path, key: &str) -> Result<String, SourceError> {
    let mut content = read_trimmed(path)?;
    if content.ends_with(PROPERTIES_SUFFIX) {
        debug!(path = %path.display(), redirect = %content, "Following properties file redirect.");
        content = read_trimmed(Path::new(&content))?;
    }

    Ok(find_property(&content, key).unwrap_or_default().to_string())
}

/// Finds the value of `key` in properties-formatted `content`.
///
/// Returns `None` if no line matches.
pub fn find_property<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(line_key, _)| line_key.trim() == key)
        .map(|(_, value)| value.trim())
}

// Invalid UTF-8 is replaced rather than rejected, so a stray Latin-1 comment doesn't hide the rest of the file.
fn read_trimmed(path: &Path) -> Result<String, SourceError> {
    let content = fs::read(path).context(NotFoundOrUnreadable { path })?;
    Ok(String::from_utf8_lossy(&content).trim().to_string())
}
