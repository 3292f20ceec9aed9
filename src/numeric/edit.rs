//! Click-to-edit text entry.

use super::transform::{is_decimal_char, parse_decimal};

/// How an edit session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditExit {
    /// `Enter` or `Escape`: focus goes back to the display element.
    Keyboard,
    /// Focus moved elsewhere; it is not redirected.
    Blur,
}

impl EditExit {
    /// Whether presentation should return focus to the display element.
    pub fn restores_focus(self) -> bool {
        matches!(self, EditExit::Keyboard)
    }
}

/// The text buffer of a widget in edit mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    text: String,
    all_selected: bool,
}

impl EditSession {
    /// Starts editing with `text` fully selected.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            all_selected: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the whole buffer is selected, so typing replaces it.
    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    /// Replaces the buffer wholesale, as a native text field reports it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.all_selected = false;
    }

    /// Types characters. Anything that cannot appear in a number is dropped.
    ///
    /// Returns `true` if the buffer changed.
    pub fn insert(&mut self, typed: &str) -> bool {
        let accepted: String = typed.chars().filter(|ch| is_decimal_char(*ch)).collect();
        if accepted.is_empty() {
            return false;
        }
        if self.all_selected {
            self.text.clear();
            self.all_selected = false;
        }
        self.text.push_str(&accepted);
        true
    }

    /// Deletes the selection, or the last character when nothing is selected.
    pub fn backspace(&mut self) {
        if self.all_selected {
            self.text.clear();
            self.all_selected = false;
        } else {
            self.text.pop();
        }
    }

    /// The number typed so far, if the buffer holds a well-formed decimal.
    pub fn parsed(&self) -> Option<f64> {
        parse_decimal(&self.text)
    }
}
