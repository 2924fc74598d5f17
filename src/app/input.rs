use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text entry for the command deck.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLine {
    text: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Removes the last grapheme cluster, not just the last char.
    pub fn backspace(&mut self) {
        if let Some((index, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(index);
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Terminal columns the text occupies.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}
