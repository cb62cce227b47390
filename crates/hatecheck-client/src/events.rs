//! User events delivered to the controller

/// Keys the controller cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Char(char),
}

/// A key press with its modifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyChord {
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    /// Same key with Ctrl held
    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    /// Ctrl+Enter submits
    pub fn is_submit_shortcut(&self) -> bool {
        self.ctrl && self.key == Key::Enter
    }
}

/// Everything a user can do to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The text field now holds this value
    Input(String),
    /// Clear button
    Clear,
    /// Analyze button
    Submit,
    /// Key press inside the text field
    Key(KeyChord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ctrl_enter_submits() {
        assert!(KeyChord::ctrl(Key::Enter).is_submit_shortcut());
        assert!(!KeyChord::new(Key::Enter).is_submit_shortcut());
        assert!(!KeyChord::ctrl(Key::Char('s')).is_submit_shortcut());
    }
}
