use blocknote_core::{
    BlockId, BlockSequenceEngine, CursorHint, Direction, EditorConfig, SequentialBlockIdGenerator,
    SplitMode,
};

type Engine = BlockSequenceEngine<SequentialBlockIdGenerator>;

fn engine_with(contents: &[&str]) -> Engine {
    engine_with_config(EditorConfig::default(), contents)
}

fn engine_with_config(config: EditorConfig, contents: &[&str]) -> Engine {
    let mut engine = BlockSequenceEngine::with_config(config, SequentialBlockIdGenerator::new());
    let mut current = engine.focused_block_id().clone();
    engine.update_content(&current, contents[0]);
    for content in &contents[1..] {
        let directive = engine
            .split(&current, usize::MAX)
            .expect("split on existing block");
        current = directive.focus_block_id;
        engine.update_content(&current, *content);
    }
    engine
}

fn ids(engine: &Engine) -> Vec<String> {
    engine
        .blocks()
        .iter()
        .map(|block| block.id().to_string())
        .collect()
}

fn contents(engine: &Engine) -> Vec<String> {
    engine
        .blocks()
        .iter()
        .map(|block| block.content().to_string())
        .collect()
}

fn id(value: &str) -> BlockId {
    BlockId::from(value)
}

#[test]
fn initial_document_has_one_focused_empty_block() {
    let engine = BlockSequenceEngine::new(SequentialBlockIdGenerator::new());

    assert_eq!(engine.document().len(), 1);
    assert_eq!(engine.blocks()[0].id(), &id("1"));
    assert!(engine.blocks()[0].is_empty());
    assert_eq!(engine.focused_block_id(), &id("1"));
    assert!(!engine.drag_state().is_active());
}

#[test]
fn split_sole_block_appends_empty_block_and_focuses_it() {
    let mut engine = engine_with(&["x"]);

    let directive = engine.split(&id("1"), 1).expect("split should apply");

    assert_eq!(ids(&engine), vec!["1", "2"]);
    assert_eq!(contents(&engine), vec!["x", ""]);
    assert_eq!(directive.focus_block_id, id("2"));
    assert_eq!(directive.cursor_hint, CursorHint::Start);
    assert_eq!(engine.focused_block_id(), &id("2"));
}

#[test]
fn split_mid_content_keeps_text_in_append_mode() {
    let mut engine = engine_with(&["hello"]);

    engine.split(&id("1"), 2).expect("split should apply");

    assert_eq!(contents(&engine), vec!["hello", ""]);
}

#[test]
fn split_inserts_after_source_and_preserves_order_everywhere() {
    for len in 1..=5 {
        for at in 0..len {
            let labels: Vec<String> = (0..len).map(|n| format!("b{n}")).collect();
            let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let mut engine = engine_with(&label_refs);
            let before = ids(&engine);

            let directive = engine
                .split(&id(&before[at]), 0)
                .expect("split should apply");

            let after = ids(&engine);
            assert_eq!(after.len(), len + 1);
            assert_eq!(after[at + 1], directive.focus_block_id.to_string());
            let without_new: Vec<String> = after
                .iter()
                .filter(|value| **value != directive.focus_block_id.to_string())
                .cloned()
                .collect();
            assert_eq!(without_new, before, "len={len} at={at}");
        }
    }
}

#[test]
fn split_at_caret_moves_right_hand_content() {
    let config = EditorConfig {
        split_mode: SplitMode::AtCaret,
        ..EditorConfig::default()
    };
    let mut engine = engine_with_config(config, &["hello", "tail"]);

    let directive = engine.split(&id("1"), 2).expect("split should apply");

    assert_eq!(ids(&engine), vec!["1", "3", "2"]);
    assert_eq!(contents(&engine), vec!["he", "llo", "tail"]);
    assert_eq!(directive.cursor_hint, CursorHint::Start);
}

#[test]
fn split_at_caret_clamps_offset_past_end() {
    let config = EditorConfig {
        split_mode: SplitMode::AtCaret,
        ..EditorConfig::default()
    };
    let mut engine = engine_with_config(config, &["abc"]);

    engine.split(&id("1"), 99).expect("split should apply");

    assert_eq!(contents(&engine), vec!["abc", ""]);
}

#[test]
fn split_unknown_block_is_noop() {
    let mut engine = engine_with(&["a", "b"]);
    let before = engine.snapshot();

    assert!(engine.split(&id("missing"), 0).is_none());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn delete_empty_middle_block_focuses_previous_at_end() {
    let mut engine = engine_with(&["x", "", "y"]);

    let directive = engine.delete_if_empty(&id("2")).expect("delete should apply");

    assert_eq!(ids(&engine), vec!["1", "3"]);
    assert_eq!(contents(&engine), vec!["x", "y"]);
    assert_eq!(directive.focus_block_id, id("1"));
    assert_eq!(directive.cursor_hint, CursorHint::End);
    assert_eq!(engine.focused_block_id(), &id("1"));
}

#[test]
fn delete_first_block_focuses_following() {
    let mut engine = engine_with(&["", "y"]);

    let directive = engine.delete_if_empty(&id("1")).expect("delete should apply");

    assert_eq!(ids(&engine), vec!["2"]);
    assert_eq!(directive.focus_block_id, id("2"));
    assert_eq!(directive.cursor_hint, CursorHint::End);
}

#[test]
fn delete_resolves_focus_by_position_even_when_block_was_not_focused() {
    let mut engine = engine_with(&["a", "", "c"]);
    assert_eq!(engine.focused_block_id(), &id("3"));

    engine.delete_if_empty(&id("2")).expect("delete should apply");

    assert_eq!(engine.focused_block_id(), &id("1"));
}

#[test]
fn delete_non_empty_block_changes_nothing() {
    let mut engine = engine_with(&["a", "b", "c"]);
    engine.begin_drag(&id("1"));
    engine.drag_over(&id("3"));
    let before = engine.snapshot();

    assert!(engine.delete_if_empty(&id("2")).is_none());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn delete_sole_block_changes_nothing() {
    let mut engine = engine_with(&[""]);
    let before = engine.snapshot();

    assert!(engine.delete_if_empty(&id("1")).is_none());
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.document().len(), 1);
}

#[test]
fn delete_decrements_count_and_keeps_order_at_every_position() {
    for len in 2..=5 {
        for at in 0..len {
            let mut labels: Vec<String> = (0..len).map(|n| format!("b{n}")).collect();
            labels[at] = String::new();
            let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let mut engine = engine_with(&label_refs);
            let before = ids(&engine);
            let removed = before[at].clone();

            let directive = engine
                .delete_if_empty(&id(&removed))
                .expect("delete should apply");

            let expected_focus = if at > 0 {
                before[at - 1].clone()
            } else {
                before[1].clone()
            };
            let mut expected = before.clone();
            expected.remove(at);
            assert_eq!(ids(&engine), expected, "len={len} at={at}");
            assert_eq!(directive.focus_block_id.to_string(), expected_focus);
        }
    }
}

#[test]
fn deleted_block_clears_drag_references() {
    let mut engine = engine_with(&["a", "", "c"]);
    engine.begin_drag(&id("2"));
    engine.drag_over(&id("3"));

    engine.delete_if_empty(&id("2")).expect("delete should apply");

    assert!(!engine.drag_state().is_active());
    assert!(engine.drag_state().drop_target().is_none());
}

#[test]
fn move_focus_previous_from_second_block() {
    let mut engine = engine_with(&["", "hi"]);
    assert_eq!(engine.focused_block_id(), &id("2"));
    let before = engine.document().clone();

    let directive = engine
        .move_focus(&id("2"), Direction::Previous)
        .expect("focus should move");

    assert_eq!(directive.focus_block_id, id("1"));
    assert_eq!(directive.cursor_hint, CursorHint::Unspecified);
    assert_eq!(engine.focused_block_id(), &id("1"));
    assert_eq!(engine.document(), &before);
}

#[test]
fn move_focus_next_and_boundaries() {
    let mut engine = engine_with(&["a", "b"]);
    engine.focus_block(&id("1"));

    assert!(engine.move_focus(&id("1"), Direction::Previous).is_none());
    assert_eq!(engine.focused_block_id(), &id("1"));

    let directive = engine
        .move_focus(&id("1"), Direction::Next)
        .expect("focus should move");
    assert_eq!(directive.focus_block_id, id("2"));

    assert!(engine.move_focus(&id("2"), Direction::Next).is_none());
    assert_eq!(engine.focused_block_id(), &id("2"));
}

#[test]
fn move_focus_from_unknown_block_is_noop() {
    let mut engine = engine_with(&["a", "b"]);

    assert!(engine.move_focus(&id("9"), Direction::Next).is_none());
    assert_eq!(engine.focused_block_id(), &id("2"));
}

#[test]
fn update_content_replaces_verbatim_without_focus_change() {
    let mut engine = engine_with(&["a", "b"]);

    assert!(engine.update_content(&id("1"), "  new\ttext  "));
    assert_eq!(engine.blocks()[0].content(), "  new\ttext  ");
    assert_eq!(engine.focused_block_id(), &id("2"));

    assert!(!engine.update_content(&id("missing"), "ignored"));
    assert_eq!(contents(&engine), vec!["  new\ttext  ", "b"]);
}

#[test]
fn focus_block_reports_only_real_changes() {
    let mut engine = engine_with(&["a", "b"]);

    assert!(engine.focus_block(&id("2")).is_none());
    assert!(engine.focus_block(&id("missing")).is_none());

    let directive = engine.focus_block(&id("1")).expect("focus should change");
    assert_eq!(directive.focus_block_id, id("1"));
    assert_eq!(directive.cursor_hint, CursorHint::Unspecified);
}

#[test]
fn block_ids_are_never_reused_after_deletion() {
    let mut engine = engine_with(&["a"]);
    let second = engine.split(&id("1"), 0).expect("split").focus_block_id;
    engine.delete_if_empty(&second).expect("delete");

    let third = engine.split(&id("1"), 0).expect("split").focus_block_id;

    assert_ne!(second, third);
}
