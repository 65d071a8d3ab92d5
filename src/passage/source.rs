/// The canonical passage to be spoken, populated by direct edits,
/// clipboard paste, or a file load. Replacing it invalidates any typing
/// progress; `App::set_text` performs that reset explicitly.
#[derive(Debug, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
