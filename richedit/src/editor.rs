// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;
use span_store::{Error, Operation, SpanWatcher, SpannedText};

use crate::catalog::{self, ActiveEffects};
use crate::effect::{AnyEffect, Effect};
use crate::image::{self, ImageKeyWatcher, ImageSpanWatcher};
use crate::{Alignment, EditorAction, InlineImage, Selection, Shortcut, Span};

/// Options for a [`RichEditor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Whether [`RichEditor::handle_shortcut`] acts on Ctrl+B, Ctrl+I and Ctrl+U.
    pub keyboard_shortcuts: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            keyboard_shortcuts: true,
        }
    }
}

impl EditorOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables keyboard shortcuts.
    pub fn keyboard_shortcuts(mut self, enabled: bool) -> Self {
        self.keyboard_shortcuts = enabled;
        self
    }
}

/// Observer of selection changes.
pub trait SelectionListener {
    /// Called with the new selection and the effects present in it, in catalog order.
    fn on_selection_changed(&mut self, selection: Selection, effects: &[&'static dyn AnyEffect]);
}

impl<F: FnMut(Selection, &[&'static dyn AnyEffect])> SelectionListener for F {
    fn on_selection_changed(&mut self, selection: Selection, effects: &[&'static dyn AnyEffect]) {
        self(selection, effects);
    }
}

/// A rich text buffer together with a selection, driving effects through that selection.
///
/// This is the host-facing surface: everything it does is also available as free functions
/// over any [`SpanStore`](span_store::SpanStore), but the editor keeps the selection and the
/// observers in one place.
pub struct RichEditor {
    buffer: SpannedText<String, Span>,
    anchor: usize,
    focus: usize,
    options: EditorOptions,
    selection_listener: Option<Box<dyn SelectionListener>>,
}

impl fmt::Debug for RichEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichEditor")
            .field("buffer", &self.buffer)
            .field("anchor", &self.anchor)
            .field("focus", &self.focus)
            .field("options", &self.options)
            .field("selection_listener", &self.selection_listener.is_some())
            .finish()
    }
}

impl RichEditor {
    /// Creates an editor over `text` with a caret at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, EditorOptions::default())
    }

    /// Creates an editor over `text` with the given options.
    pub fn with_options(text: impl Into<String>, options: EditorOptions) -> Self {
        Self {
            buffer: SpannedText::new(text.into()),
            anchor: 0,
            focus: 0,
            options,
            selection_listener: None,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// The text and its spans.
    pub fn buffer(&self) -> &SpannedText<String, Span> {
        &self.buffer
    }

    /// The current options.
    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Enables or disables keyboard shortcuts.
    pub fn set_keyboard_shortcuts_enabled(&mut self, enabled: bool) {
        self.options.keyboard_shortcuts = enabled;
    }

    /// The normalized selection.
    pub fn selection(&self) -> Selection {
        Selection::from_anchor_focus(self.anchor, self.focus)
    }

    /// Moves the selection. Both ends must be in bounds and on character boundaries.
    pub fn select(&mut self, anchor: usize, focus: usize) -> Result<(), Error> {
        self.buffer
            .range(Selection::from_anchor_focus(anchor, focus).as_range())
            .map_err(|e| e.during(Operation::Select))?;
        self.set_selection(anchor, focus);
        Ok(())
    }

    /// Selects the whole text.
    pub fn select_all(&mut self) {
        self.set_selection(0, self.buffer.as_str().len());
    }

    /// Replaces the selected text, leaving a caret after the inserted text.
    ///
    /// Spans are not extended over the inserted text.
    pub fn replace_selection(&mut self, text: &str) -> Result<(), Error> {
        let selection = self.selection();
        self.buffer.replace_range(selection.as_range(), text)?;
        let caret = selection.start() + text.len();
        self.set_selection(caret, caret);
        Ok(())
    }

    /// Sets `effect` to `value` over the selection, or clears it for `None`.
    pub fn apply_effect<E: Effect + ?Sized>(
        &mut self,
        effect: &E,
        value: Option<E::Value>,
    ) -> Result<(), Error> {
        let selection = self.selection();
        effect.apply_to_selection(&mut self.buffer, selection, value)
    }

    /// Flips an on/off effect over the selection.
    ///
    /// The effect is switched off if it is present anywhere in the selection, and on otherwise.
    pub fn toggle_effect<E: Effect<Value = bool> + ?Sized>(
        &mut self,
        effect: &E,
    ) -> Result<(), Error> {
        let selection = self.selection();
        let on = effect.value_in_selection(&self.buffer, selection) == Some(true);
        effect.apply_to_selection(&mut self.buffer, selection, Some(!on))
    }

    /// Returns `true` if `effect` is present in the selection.
    pub fn has_effect(&self, effect: &dyn AnyEffect) -> bool {
        effect.exists_in_selection(&self.buffer, self.selection())
    }

    /// Reads the value of `effect` in the selection.
    pub fn effect_value<E: Effect + ?Sized>(&self, effect: &E) -> Option<E::Value> {
        effect.value_in_selection(&self.buffer, self.selection())
    }

    /// The catalog effects present in the selection.
    pub fn active_effects(&self) -> ActiveEffects {
        catalog::active_effects(&self.buffer, self.selection())
    }

    /// Replaces the selection with `image`, remembered under `key`.
    ///
    /// The selection then covers the image, or sits right after it if it was a caret.
    pub fn insert_image(&mut self, key: &str, image: InlineImage) -> Result<(), Error> {
        let selection = self.selection();
        let selection = image::insert_image(&mut self.buffer, selection, key, image)?;
        self.set_selection(selection.start(), selection.end());
        Ok(())
    }

    /// Replaces image spans with the images in `images`, looked up by image key.
    pub fn set_image_spans(&mut self, images: &HashMap<String, InlineImage>) -> Result<usize, Error> {
        image::set_image_spans(&mut self.buffer, images)
    }

    /// Recreates image spans from their keys, see [`image::restore_image_spans`].
    pub fn restore_image_spans(
        &mut self,
        resolver: impl FnMut(&str) -> Option<InlineImage>,
    ) -> Result<usize, Error> {
        image::restore_image_spans(&mut self.buffer, resolver)
    }

    /// Sets the observer told about images whose text was deleted.
    pub fn set_image_span_watcher(&mut self, watcher: impl ImageSpanWatcher + 'static) {
        let watcher: Box<dyn SpanWatcher<Span>> = Box::new(ImageKeyWatcher::new(watcher));
        self.buffer.set_span_watcher(Some(watcher));
    }

    /// Removes the image span watcher.
    pub fn clear_image_span_watcher(&mut self) {
        self.buffer.set_span_watcher(None);
    }

    /// Sets the observer of selection changes.
    pub fn set_selection_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.selection_listener = Some(Box::new(listener));
    }

    /// Removes the selection listener.
    pub fn clear_selection_listener(&mut self) {
        self.selection_listener = None;
    }

    /// Runs the action bound to `shortcut`, if shortcuts are enabled.
    ///
    /// Returns whether the shortcut was handled.
    pub fn handle_shortcut(&mut self, shortcut: Shortcut) -> Result<bool, Error> {
        if !self.options.keyboard_shortcuts {
            return Ok(false);
        }
        let Some(action) = shortcut.action() else {
            return Ok(false);
        };
        self.do_action(action)?;
        Ok(true)
    }

    /// Runs a formatting command over the selection.
    pub fn do_action(&mut self, action: EditorAction) -> Result<(), Error> {
        log::debug!("action {action:?} over {:?}", self.selection().as_range());
        match action {
            EditorAction::Bold => self.toggle_effect(&catalog::BOLD),
            EditorAction::Italic => self.toggle_effect(&catalog::ITALIC),
            EditorAction::Underline => self.toggle_effect(&catalog::UNDERLINE),
            EditorAction::Strikethrough => self.toggle_effect(&catalog::STRIKETHROUGH),
            EditorAction::Superscript => self.toggle_effect(&catalog::SUPERSCRIPT),
            EditorAction::Subscript => self.toggle_effect(&catalog::SUBSCRIPT),
            EditorAction::Serif | EditorAction::Sans | EditorAction::Monospace => {
                let family = action.typeface().map(Into::into);
                self.apply_effect(&catalog::TYPEFACE, family)
            }
            EditorAction::AlignNormal => {
                self.apply_effect(&catalog::LINE_ALIGNMENT, Some(Alignment::Start))
            }
            EditorAction::AlignCenter => {
                self.apply_effect(&catalog::LINE_ALIGNMENT, Some(Alignment::Middle))
            }
            EditorAction::AlignOpposite => {
                self.apply_effect(&catalog::LINE_ALIGNMENT, Some(Alignment::End))
            }
        }
    }

    fn set_selection(&mut self, anchor: usize, focus: usize) {
        if (anchor, focus) == (self.anchor, self.focus) {
            return;
        }
        self.anchor = anchor;
        self.focus = focus;
        let selection = self.selection();
        if let Some(listener) = self.selection_listener.as_mut() {
            let effects = catalog::active_effects(&self.buffer, selection);
            listener.on_selection_changed(selection, &effects);
        }
    }
}
