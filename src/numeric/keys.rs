//! Discrete keyboard increment/decrement and edit-mode keys.

/// Keys a widget reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Backspace,
    /// Printable text produced by the key.
    Character(String),
    Other,
}

/// What a key press means for a widget in its current mode.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    /// Move the value by `direction` effective steps.
    Step { direction: f64 },
    BeginEdit,
    CommitEdit,
    CancelEdit,
    Type(String),
    Erase,
    Ignore,
}

/// Result of delivering a key to a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// The widget did nothing with the key.
    Ignored,
    /// The key was consumed.
    Handled,
    /// The key was consumed and the host's default behavior (scrolling)
    /// must be suppressed.
    HandledPreventDefault,
}

impl KeyResponse {
    pub fn is_handled(self) -> bool {
        !matches!(self, KeyResponse::Ignored)
    }

    pub fn prevents_default(self) -> bool {
        matches!(self, KeyResponse::HandledPreventDefault)
    }
}

/// Maps keys to actions. Stateless; the mode is supplied per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyStepController;

impl KeyStepController {
    pub fn classify(&self, key: &WidgetKey, editing: bool) -> KeyAction {
        if editing {
            return match key {
                WidgetKey::Enter => KeyAction::CommitEdit,
                WidgetKey::Escape => KeyAction::CancelEdit,
                WidgetKey::Backspace => KeyAction::Erase,
                WidgetKey::Character(text) => KeyAction::Type(text.clone()),
                // Arrows move the caret of the text field.
                _ => KeyAction::Ignore,
            };
        }
        match key {
            WidgetKey::ArrowUp | WidgetKey::ArrowRight => KeyAction::Step { direction: 1.0 },
            WidgetKey::ArrowDown | WidgetKey::ArrowLeft => KeyAction::Step { direction: -1.0 },
            WidgetKey::Enter => KeyAction::BeginEdit,
            _ => KeyAction::Ignore,
        }
    }
}
