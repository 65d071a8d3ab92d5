use super::LoadError;

/// Paste the clipboard's text contents into the passage.
pub fn load() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}
