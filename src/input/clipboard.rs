use arboard::Clipboard;

use super::LoadError;

/// Reads the clipboard as a guess, collapsing line breaks into spaces.
pub fn read_guess() -> Result<String, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let guess = flatten_lines(&text);
    if guess.is_empty() {
        return Err(LoadError::Clipboard("clipboard is empty".to_string()));
    }
    Ok(guess)
}

fn flatten_lines(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
