//! Keyboard shortcuts understood by the editor.

/// Modifier keys held during a key or pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: false,
    };

    /// Ctrl on Linux/Windows or Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Whether a click or marquee should add to the selection.
    pub fn additive(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// An editing command bound to a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignerCommand {
    Undo,
    Copy,
    Paste,
    Group,
    Ungroup,
    Delete,
}

impl DesignerCommand {
    /// Maps a key press to a command.
    ///
    /// `key` is the logical key name as reported by the windowing layer
    /// (`"z"`, `"Delete"`, `"Backspace"`, ...); matching is case-insensitive.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        if modifiers.command() {
            return match key.as_str() {
                "z" => Some(DesignerCommand::Undo),
                "c" => Some(DesignerCommand::Copy),
                "v" => Some(DesignerCommand::Paste),
                "g" if modifiers.shift => Some(DesignerCommand::Ungroup),
                "g" => Some(DesignerCommand::Group),
                _ => None,
            };
        }
        match key.as_str() {
            "delete" | "backspace" => Some(DesignerCommand::Delete),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::Undo => "Undo",
            DesignerCommand::Copy => "Copy",
            DesignerCommand::Paste => "Paste",
            DesignerCommand::Group => "Group",
            DesignerCommand::Ungroup => "Ungroup",
            DesignerCommand::Delete => "Delete",
        }
    }
}
