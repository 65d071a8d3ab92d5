/// Running buffer of characters the user has retyped over the passage.
///
/// This is a progress counter, not a correctness tracker: any printable
/// key advances it regardless of whether the character matches the
/// passage at that position. Only its word count is used downstream.
#[derive(Debug)]
pub struct TypingTracker {
    typed: String,
    chars: usize,
    cap: usize,
}

impl TypingTracker {
    pub fn new(cap: usize) -> Self {
        Self {
            typed: String::new(),
            chars: 0,
            cap,
        }
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Length of the typed prefix in characters.
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Append one literal character, up to the cap.
    pub fn append(&mut self, ch: char) {
        if self.chars < self.cap {
            self.typed.push(ch);
            self.chars += 1;
        }
    }

    /// Remove the last character; no-op when already empty.
    pub fn delete_last(&mut self) {
        if self.typed.pop().is_some() {
            self.chars -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.typed.clear();
        self.chars = 0;
    }
}
