// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A formatting command, as offered by an editor's menus.
///
/// See [`RichEditor::do_action`](crate::RichEditor::do_action).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// Toggle bold.
    Bold,
    /// Toggle italic.
    Italic,
    /// Toggle underline.
    Underline,
    /// Toggle strikethrough.
    Strikethrough,
    /// Toggle superscript.
    Superscript,
    /// Toggle subscript.
    Subscript,
    /// Set the typeface to `"serif"`.
    Serif,
    /// Set the typeface to `"sans"`.
    Sans,
    /// Set the typeface to `"monospace"`.
    Monospace,
    /// Align to the start edge.
    AlignNormal,
    /// Center.
    AlignCenter,
    /// Align to the end edge.
    AlignOpposite,
}

impl EditorAction {
    /// The typeface this action applies, if it is a typeface action.
    pub fn typeface(self) -> Option<&'static str> {
        match self {
            Self::Serif => Some("serif"),
            Self::Sans => Some("sans"),
            Self::Monospace => Some("monospace"),
            _ => None,
        }
    }
}

/// A key released together with modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// The key, as the character it produces without modifiers.
    pub key: char,
    /// Whether Ctrl was held.
    pub ctrl: bool,
}

impl Shortcut {
    /// A key pressed with Ctrl.
    pub const fn ctrl(key: char) -> Self {
        Self { key, ctrl: true }
    }

    /// The action bound to this shortcut: Ctrl+B, Ctrl+I and Ctrl+U toggle bold, italic and
    /// underline.
    pub fn action(self) -> Option<EditorAction> {
        if !self.ctrl {
            return None;
        }
        match self.key.to_ascii_lowercase() {
            'b' => Some(EditorAction::Bold),
            'i' => Some(EditorAction::Italic),
            'u' => Some(EditorAction::Underline),
            _ => None,
        }
    }
}
