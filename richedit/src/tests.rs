// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::{ControlFlow, Range};

use hashbrown::HashMap;
use span_store::{Attribute, ErrorKind, Operation, SpanStore, SpannedText};

use crate::catalog::{BOLD, ITALIC, LINE_ALIGNMENT, LINK, TYPEFACE, UNDERLINE};
use crate::image::restore_image_spans;
use crate::{
    for_each_matching_span, reduce_matching_spans, Alignment, AnnotationKey, AnyEffect,
    EditorAction, EditorOptions, Effect, InlineImage, RichEditor, Selection, Shortcut, Span,
    SpanKind, TextStyle,
};

fn spans(editor: &RichEditor, kind: SpanKind) -> Vec<(Range<usize>, Span)> {
    let mut spans: Vec<_> = editor
        .buffer()
        .spans_iter()
        .filter(|(_, _, span)| span.kind() == kind)
        .map(|(_, range, span)| (range, span.clone()))
        .collect();
    spans.sort_by_key(|(range, _)| (range.start, range.end));
    spans
}

fn typeface(name: &str) -> Span {
    Span::Typeface(name.into())
}

fn active_names(editor: &RichEditor) -> Vec<&'static str> {
    editor.active_effects().iter().map(|e| e.name()).collect()
}

fn image(id: u64) -> InlineImage {
    InlineImage {
        id,
        width: 32.0,
        height: 24.0,
    }
}

#[test]
fn straddling_span_is_split_around_new_value() {
    let mut editor = RichEditor::new("0123456789");
    editor.select_all();
    editor.apply_effect(&TYPEFACE, Some("serif".into())).unwrap();

    editor.select(3, 7).unwrap();
    editor
        .apply_effect(&TYPEFACE, Some("monospace".into()))
        .unwrap();

    assert_eq!(
        spans(&editor, SpanKind::Typeface),
        vec![
            (0..3, typeface("serif")),
            (3..7, typeface("monospace")),
            (7..10, typeface("serif")),
        ]
    );
}

#[test]
fn spans_straddling_each_side_keep_their_own_values() {
    let mut buffer = SpannedText::new(String::from("0123456789"));
    buffer.install(typeface("a"), 0..4).unwrap();
    buffer.install(typeface("b"), 6..10).unwrap();

    TYPEFACE
        .apply_to_selection(&mut buffer, Selection::new(2, 8), Some("c".into()))
        .unwrap();

    let mut got: Vec<_> = buffer
        .spans_iter()
        .map(|(_, range, span)| (range, span.clone()))
        .collect();
    got.sort_by_key(|(range, _)| range.start);
    assert_eq!(
        got,
        vec![
            (0..2, typeface("a")),
            (2..8, typeface("c")),
            (8..10, typeface("b")),
        ]
    );
}

#[test]
fn spans_sticking_out_on_one_side_merge_into_one_fragment() {
    let mut buffer = SpannedText::new(String::from("0123456789"));
    buffer.install(typeface("a"), 0..4).unwrap();
    buffer.install(typeface("b"), 6..10).unwrap();
    buffer.install(typeface("c"), 1..9).unwrap();

    TYPEFACE
        .apply_to_selection(&mut buffer, Selection::new(3, 7), Some("z".into()))
        .unwrap();

    let mut got: Vec<_> = buffer
        .spans_iter()
        .map(|(_, range, span)| (range, span.clone()))
        .collect();
    got.sort_by_key(|(range, _)| range.start);
    // One fragment per side, reaching the furthest span; the last span visited gives its value.
    assert_eq!(
        got,
        vec![
            (0..3, typeface("c")),
            (3..7, typeface("z")),
            (7..10, typeface("c")),
        ]
    );
}

#[test]
fn rejected_selection_leaves_spans_alone() {
    let mut buffer = SpannedText::new(String::from("0123456789"));
    TYPEFACE
        .apply_to_selection(&mut buffer, Selection::whole(10), Some("serif".into()))
        .unwrap();

    let err = TYPEFACE
        .apply_to_selection(&mut buffer, Selection::new(5, 40), Some("mono".into()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    assert_eq!(
        TYPEFACE.value_in_selection(&buffer, Selection::new(0, 5)),
        Some("serif".into())
    );
    assert_eq!(buffer.spans_len(), 1);

    // U+FFFC is 3 bytes; 2..3 ends inside it.
    let mut buffer = SpannedText::new(String::from("a\u{FFFC}b"));
    BOLD.apply_to_selection(&mut buffer, Selection::whole(5), Some(true)).unwrap();
    let err = BOLD
        .apply_to_selection(&mut buffer, Selection::new(2, 3), Some(false))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
    let bold: Vec<_> = buffer
        .spans_iter()
        .map(|(_, range, span)| (range, span.clone()))
        .collect();
    assert_eq!(bold, vec![(0..5, Span::Style(TextStyle::Bold))]);
}

#[test]
fn later_value_overwrites_earlier_one() {
    let mut editor = RichEditor::new("Hello world");
    editor.select(2, 8).unwrap();
    editor.apply_effect(&TYPEFACE, Some("serif".into())).unwrap();
    editor.apply_effect(&TYPEFACE, Some("sans".into())).unwrap();
    assert_eq!(
        spans(&editor, SpanKind::Typeface),
        vec![(2..8, typeface("sans"))]
    );

    editor.select_all();
    editor
        .apply_effect(&TYPEFACE, Some("monospace".into()))
        .unwrap();
    assert_eq!(
        spans(&editor, SpanKind::Typeface),
        vec![(0..11, typeface("monospace"))]
    );
    assert_eq!(editor.effect_value(&TYPEFACE).as_deref(), Some("monospace"));
}

#[test]
fn clearing_only_touches_the_selection() {
    let mut editor = RichEditor::new("0123456789");
    editor.select_all();
    editor.toggle_effect(&BOLD).unwrap();
    editor.toggle_effect(&UNDERLINE).unwrap();

    editor.select(3, 7).unwrap();
    editor.apply_effect(&BOLD, None).unwrap();

    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![
            (0..3, Span::Style(TextStyle::Bold)),
            (7..10, Span::Style(TextStyle::Bold)),
        ]
    );
    assert_eq!(
        spans(&editor, SpanKind::Underline),
        vec![(0..10, Span::Underline)]
    );
    assert!(!editor.has_effect(&BOLD));
    assert!(editor.has_effect(&UNDERLINE));
}

#[test]
fn false_clears_like_none() {
    let mut editor = RichEditor::new("abcdef");
    editor.select(1, 5).unwrap();
    editor.apply_effect(&ITALIC, Some(true)).unwrap();
    editor.select(2, 4).unwrap();
    editor.apply_effect(&ITALIC, Some(false)).unwrap();
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![
            (1..2, Span::Style(TextStyle::Italic)),
            (4..5, Span::Style(TextStyle::Italic)),
        ]
    );
}

#[test]
fn clearing_without_spans_is_a_no_op() {
    let mut editor = RichEditor::new("abc");
    editor.select_all();
    editor.apply_effect(&LINK, None).unwrap();
    editor.apply_effect(&BOLD, None).unwrap();
    assert_eq!(editor.buffer().spans_len(), 0);
}

#[test]
fn toggling_twice_restores_active_effects() {
    let mut editor = RichEditor::new("Hello world");
    editor.select_all();
    editor.toggle_effect(&ITALIC).unwrap();
    editor.select(3, 8).unwrap();

    let before = active_names(&editor);
    assert_eq!(before, vec!["italic"]);

    editor.toggle_effect(&BOLD).unwrap();
    assert_eq!(active_names(&editor), vec!["bold", "italic"]);
    editor.toggle_effect(&BOLD).unwrap();
    assert_eq!(active_names(&editor), before);
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![(0..11, Span::Style(TextStyle::Italic))]
    );
}

#[test]
fn marker_presence_is_existence_not_coverage() {
    let mut editor = RichEditor::new("0123456789");
    editor.select(0, 2).unwrap();
    editor.toggle_effect(&BOLD).unwrap();
    editor.select_all();
    assert_eq!(editor.effect_value(&BOLD), Some(true));

    // Toggling a partially bold selection switches it off everywhere.
    editor.toggle_effect(&BOLD).unwrap();
    assert!(spans(&editor, SpanKind::Style).is_empty());
}

#[test]
fn bold_and_italic_share_a_kind_but_not_spans() {
    let mut editor = RichEditor::new("abcdef");
    editor.select_all();
    editor.toggle_effect(&BOLD).unwrap();
    editor.toggle_effect(&ITALIC).unwrap();
    editor.select(2, 4).unwrap();
    editor.apply_effect(&ITALIC, None).unwrap();

    assert!(editor.has_effect(&BOLD));
    assert!(!editor.has_effect(&ITALIC));
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![
            (0..2, Span::Style(TextStyle::Italic)),
            (0..6, Span::Style(TextStyle::Bold)),
            (4..6, Span::Style(TextStyle::Italic)),
        ]
    );
}

#[test]
fn caret_sees_adjacent_spans_and_gets_zero_width_spans() {
    let mut editor = RichEditor::new("abc");
    editor.select(0, 3).unwrap();
    editor.toggle_effect(&UNDERLINE).unwrap();
    editor.select(3, 3).unwrap();
    assert!(editor.has_effect(&UNDERLINE));

    let mut editor = RichEditor::new("abc");
    editor.select(1, 1).unwrap();
    editor.toggle_effect(&BOLD).unwrap();
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![(1..1, Span::Style(TextStyle::Bold))]
    );
    assert!(editor.has_effect(&BOLD));
}

#[test]
fn typing_inside_a_span_keeps_it_whole() {
    let mut editor = RichEditor::new("Hello world");
    editor.select(0, 5).unwrap();
    editor.toggle_effect(&BOLD).unwrap();

    editor.select(2, 2).unwrap();
    editor.replace_selection("--").unwrap();
    assert_eq!(editor.text(), "He--llo world");
    assert_eq!(editor.selection(), Selection::caret(4));
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![(0..7, Span::Style(TextStyle::Bold))]
    );

    // Typing right after the span does not extend it.
    editor.select(7, 7).unwrap();
    editor.replace_selection("!").unwrap();
    assert_eq!(
        spans(&editor, SpanKind::Style),
        vec![(0..7, Span::Style(TextStyle::Bold))]
    );
}

#[test]
fn links_and_image_keys_do_not_see_each_other() {
    let mut editor = RichEditor::new("see  here");
    editor.select(4, 4).unwrap();
    editor.insert_image("1", image(7)).unwrap();

    editor.select_all();
    assert_eq!(editor.effect_value(&LINK), None);
    assert!(!editor.has_effect(&LINK));

    editor
        .apply_effect(&LINK, Some("https://example.com".into()))
        .unwrap();
    assert_eq!(
        editor.effect_value(&LINK).as_deref(),
        Some("https://example.com")
    );

    editor.apply_effect(&LINK, None).unwrap();
    let annotations = spans(&editor, SpanKind::Annotation);
    assert_eq!(annotations, vec![(4..7, AnnotationKey::ImageSpanKey.span("1"))]);
}

#[test]
fn deleting_an_image_reports_its_key_once() {
    let removed = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut editor = RichEditor::new("ab");
    let sink = removed.clone();
    editor.set_image_span_watcher(move |key: &str| sink.borrow_mut().push(key.to_string()));

    editor.select(1, 1).unwrap();
    editor.insert_image("1", image(1)).unwrap();
    assert_eq!(editor.text(), "a\u{FFFC}b");
    assert_eq!(editor.selection(), Selection::caret(4));
    assert_eq!(spans(&editor, SpanKind::Image), vec![(1..4, Span::Image(image(1)))]);

    editor.select(1, 4).unwrap();
    editor.replace_selection("").unwrap();
    assert_eq!(editor.text(), "ab");
    assert_eq!(removed.borrow().as_slice(), &[String::from("1")]);
    assert!(spans(&editor, SpanKind::Image).is_empty());
    assert!(spans(&editor, SpanKind::Annotation).is_empty());
}

#[test]
fn inserting_over_a_selection_selects_the_image() {
    let mut editor = RichEditor::new("one two");
    editor.select(4, 7).unwrap();
    editor.insert_image("2", image(2)).unwrap();
    assert_eq!(editor.text(), "one \u{FFFC}");
    assert_eq!(editor.selection(), Selection::new(4, 7));
}

#[test]
fn restore_rebuilds_images_at_their_key_ranges() {
    // As persisted: placeholders and their keys survive, the images do not.
    let mut buffer = SpannedText::new(String::from("x\u{FFFC}y\u{FFFC}z"));
    buffer
        .install(AnnotationKey::ImageSpanKey.span("1"), 1..4)
        .unwrap();
    buffer
        .install(AnnotationKey::ImageSpanKey.span("2"), 5..8)
        .unwrap();
    buffer.install(AnnotationKey::Link.span("3"), 0..9).unwrap();

    let mut asked = Vec::new();
    let restored = restore_image_spans(&mut buffer, |key| {
        asked.push(key.to_string());
        key.parse().ok().map(image)
    })
    .unwrap();

    assert_eq!(restored, 2);
    assert_eq!(asked, vec!["1", "2"]);
    let images: Vec<_> = buffer
        .spans_iter()
        .filter_map(|(_, range, span)| span.as_image().map(|img| (range, img.id)))
        .collect();
    assert_eq!(images, vec![(1..4, 1), (5..8, 2)]);
}

#[test]
fn restore_replaces_stale_images_and_skips_unknown_keys() {
    let mut editor = RichEditor::new("");
    editor.insert_image("1", image(1)).unwrap();
    editor.insert_image("2", image(2)).unwrap();
    assert_eq!(editor.text(), "\u{FFFC}\u{FFFC}");

    let mut fresh = HashMap::new();
    fresh.insert(String::from("1"), image(10));
    assert_eq!(editor.set_image_spans(&fresh).unwrap(), 1);
    assert_eq!(
        spans(&editor, SpanKind::Image),
        vec![(0..3, Span::Image(image(10))), (3..6, Span::Image(image(2)))]
    );

    assert_eq!(editor.restore_image_spans(|_| None).unwrap(), 0);
    assert_eq!(spans(&editor, SpanKind::Image).len(), 2);
}

#[test]
fn selection_listener_sees_active_effects() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut editor = RichEditor::new("Hello world");
    editor.select(0, 5).unwrap();
    editor.toggle_effect(&BOLD).unwrap();

    let sink = seen.clone();
    editor.set_selection_listener(move |sel: Selection, effects: &[&'static dyn AnyEffect]| {
        let names: Vec<_> = effects.iter().map(|e| e.name()).collect();
        sink.borrow_mut().push((sel, names));
    });

    editor.select(4, 2).unwrap();
    // Same selection again: not a change.
    editor.select(4, 2).unwrap();
    editor.select(8, 8).unwrap();

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            (Selection::new(2, 4), vec!["bold"]),
            (Selection::caret(8), vec![]),
        ]
    );
}

#[test]
fn shortcuts_respect_options() {
    let mut editor = RichEditor::new("abc");
    editor.select_all();
    assert!(editor.handle_shortcut(Shortcut::ctrl('b')).unwrap());
    assert!(editor.has_effect(&BOLD));
    assert!(!editor.handle_shortcut(Shortcut::ctrl('q')).unwrap());

    let mut editor =
        RichEditor::with_options("abc", EditorOptions::new().keyboard_shortcuts(false));
    editor.select_all();
    assert!(!editor.handle_shortcut(Shortcut::ctrl('b')).unwrap());
    assert!(!editor.has_effect(&BOLD));

    editor.set_keyboard_shortcuts_enabled(true);
    assert!(editor.handle_shortcut(Shortcut::ctrl('u')).unwrap());
    assert!(editor.has_effect(&UNDERLINE));
}

#[test]
fn actions_set_typeface_and_alignment() {
    let mut editor = RichEditor::new("Title\nbody");
    editor.select_all();
    editor.do_action(EditorAction::Serif).unwrap();
    editor.do_action(EditorAction::AlignCenter).unwrap();
    editor.select(0, 5).unwrap();
    editor.do_action(EditorAction::Monospace).unwrap();
    editor.do_action(EditorAction::Strikethrough).unwrap();

    assert_eq!(editor.effect_value(&LINE_ALIGNMENT), Some(Alignment::Middle));
    assert_eq!(
        editor.effect_value(&TYPEFACE),
        Some(Arc::<str>::from("monospace"))
    );
    assert_eq!(
        active_names(&editor),
        vec!["strikethrough", "line_alignment", "typeface"]
    );

    editor.select(6, 10).unwrap();
    assert_eq!(editor.effect_value(&TYPEFACE).as_deref(), Some("serif"));
    editor.do_action(EditorAction::AlignOpposite).unwrap();
    assert_eq!(editor.effect_value(&LINE_ALIGNMENT), Some(Alignment::End));
}

#[test]
fn select_validates_offsets() {
    let mut editor = RichEditor::new("a\u{FFFC}");
    let err = editor.select(0, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
    assert_eq!(err.operation(), Operation::Select);

    let err = editor.select(9, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidBounds);
    assert_eq!(editor.selection(), Selection::caret(0));
}

#[test]
fn iteration_stops_early_and_reduces_from_zero() {
    let mut buffer = SpannedText::new(String::from("0123456789"));
    for start in [0, 3, 6] {
        buffer.install(Span::Underline, start..start + 2).unwrap();
    }

    let mut visited = 0;
    for_each_matching_span::<Span, _>(
        &buffer,
        Selection::whole(10),
        SpanKind::Underline,
        |_| true,
        |_, _| {
            visited += 1;
            ControlFlow::Break(())
        },
    );
    assert_eq!(visited, 1);

    let untouched = reduce_matching_spans::<Span, _, _>(
        &mut buffer,
        Selection::whole(10),
        SpanKind::Typeface,
        |_| true,
        42,
        |_, _, acc| {
            *acc = 0;
            ControlFlow::Continue(())
        },
    );
    assert_eq!(untouched, 42);

    let removed = reduce_matching_spans::<Span, _, _>(
        &mut buffer,
        Selection::new(2, 7),
        SpanKind::Underline,
        |_| true,
        0,
        |buffer, id, acc| {
            buffer.remove(id);
            *acc += 1;
            ControlFlow::Continue(())
        },
    );
    assert_eq!(removed, 2);
    assert_eq!(buffer.spans_len(), 1);
}

#[test]
fn catalog_lookup_by_name() {
    let bold = crate::catalog::effect_named("bold").unwrap();
    assert_eq!(bold.name(), "bold");
    assert_eq!(
        crate::catalog::effect_named("line_alignment").map(|e| e.name()),
        Some("line_alignment")
    );
    assert!(crate::catalog::effect_named("blink").is_none());
    assert_eq!(UNDERLINE.marker(), &Span::Underline);
}

#[test]
fn effects_work_on_a_bare_store() {
    let mut buffer = SpannedText::new(String::from("abcdef"));
    let all = Selection::whole(6);
    BOLD.apply_to_selection(&mut buffer, all, Some(true)).unwrap();
    assert_eq!(BOLD.value_in_selection(&buffer, Selection::new(2, 3)), Some(true));
    assert_eq!(ITALIC.value_in_selection(&buffer, all), Some(false));
    assert_eq!(TYPEFACE.value_in_selection(&buffer, all), None);
}
