//! Scrolling tests - auto-scroll deferral, scrollback, wheel, resize

mod common;

use common::{numbered_lines, select, test_model, test_runtime};
use postwin::config::PostConfig;
use postwin::keymap::{Command, Modifiers};
use postwin::messages::{InputMsg, Msg, PostMsg, SettingsMsg};
use postwin::model::Position;
use postwin::update::update;

// ========================================================================
// Auto-scroll
// ========================================================================

#[test]
fn test_auto_scroll_happens_on_next_turn() {
    let mut rt = test_runtime("", 10);
    rt.post(numbered_lines(30));

    // Still where it was until the event loop turns
    assert_eq!(rt.model().viewport.top_line, 0);

    rt.turn();
    assert_eq!(rt.model().viewport.top_line, 21);
    assert!(rt.model().is_at_bottom());
}

#[test]
fn test_auto_scroll_off_leaves_view_alone() {
    let mut rt = test_runtime(&numbered_lines(30), 10);
    rt.model_mut().actions.set_checked(Command::AutoScroll, false);
    rt.model_mut().viewport.top_line = 5;

    rt.post(numbered_lines(30));
    rt.turn();
    rt.turn();

    assert_eq!(rt.model().viewport.top_line, 5);
}

#[test]
fn test_posts_from_other_threads() {
    let mut rt = test_runtime("", 5);
    let tx = rt.sender();

    let handle = std::thread::spawn(move || {
        for i in 0..20 {
            tx.send(Msg::post(format!("out {}\n", i))).unwrap();
        }
    });
    handle.join().unwrap();

    // First turn posts, second runs the deferred scroll
    rt.turn();
    rt.turn();

    assert_eq!(rt.model().document.line_count(), 21);
    assert_eq!(rt.model().viewport.top_line, 16);
}

#[test]
fn test_enabling_auto_scroll_jumps_to_bottom() {
    let mut model = test_model(&numbered_lines(40), 10);
    model.actions.set_checked(Command::AutoScroll, false);

    update(&mut model, Msg::Post(PostMsg::SetAutoScroll(true)));

    assert_eq!(model.viewport.top_line, 31);
}

#[test]
fn test_scroll_to_bottom_with_short_document() {
    let mut model = test_model("one\ntwo\n", 10);
    update(&mut model, Msg::Post(PostMsg::ScrollToBottom));
    assert_eq!(model.viewport.top_line, 0);
}

// ========================================================================
// Scrollback
// ========================================================================

#[test]
fn test_scrollback_keeps_newest_lines() {
    let config = PostConfig {
        scrollback: 5,
        ..PostConfig::default()
    };
    let mut rt = test_runtime("", 10);
    rt.dispatch(Msg::Settings(SettingsMsg::Apply(Box::new(config))));

    rt.post(numbered_lines(8));

    let model = rt.model();
    assert_eq!(model.document.line_count(), 5);
    assert_eq!(model.document.text(), "line4\nline5\nline6\nline7\n");
}

#[test]
fn test_scrollback_zero_keeps_everything() {
    let config = PostConfig {
        scrollback: 0,
        ..PostConfig::default()
    };
    let mut rt = test_runtime("", 10);
    rt.dispatch(Msg::Settings(SettingsMsg::Apply(Box::new(config))));

    rt.post(numbered_lines(5000));
    assert_eq!(rt.model().document.line_count(), 5001);
}

#[test]
fn test_trimming_shifts_selection_up() {
    let config = PostConfig {
        scrollback: 4,
        ..PostConfig::default()
    };
    let mut model = test_model("", 10);
    update(
        &mut model,
        Msg::Settings(SettingsMsg::Apply(Box::new(config))),
    );
    update(&mut model, Msg::post("a\nbb\ncc\n"));
    select(&mut model, 2, 0, 2);
    assert_eq!(model.selected_text(), "cc");

    update(&mut model, Msg::post("dd\n"));

    assert_eq!(model.selection.anchor, Position::new(1, 0));
    assert_eq!(model.selected_text(), "cc");
}

// ========================================================================
// Wheel and resize
// ========================================================================

#[test]
fn test_wheel_scrolls_three_lines_per_notch() {
    let mut model = test_model(&numbered_lines(50), 10);
    model.viewport.top_line = 20;

    update(
        &mut model,
        Msg::Input(InputMsg::Wheel {
            delta: 1,
            mods: Modifiers::NONE,
        }),
    );
    assert_eq!(model.viewport.top_line, 17);

    update(
        &mut model,
        Msg::Input(InputMsg::Wheel {
            delta: -2,
            mods: Modifiers::NONE,
        }),
    );
    assert_eq!(model.viewport.top_line, 23);
}

#[test]
fn test_wheel_with_command_modifier_zooms() {
    let mut model = test_model("", 10);
    let size = model.font.size;

    update(
        &mut model,
        Msg::Input(InputMsg::Wheel {
            delta: 3,
            mods: Modifiers::cmd(),
        }),
    );

    assert_eq!(model.font.size, size + 1);
    assert_eq!(model.viewport.top_line, 0);
}

#[test]
fn test_resize_keeps_bottom_when_following() {
    let mut model = test_model(&numbered_lines(50), 10);
    model.scroll_to_bottom();
    assert_eq!(model.viewport.top_line, 41);

    update(
        &mut model,
        Msg::Post(PostMsg::Resize { visible_lines: 20 }),
    );
    assert_eq!(model.viewport.top_line, 31);
}

#[test]
fn test_resize_clamps_top_line() {
    let mut model = test_model(&numbered_lines(50), 10);
    model.actions.set_checked(Command::AutoScroll, false);
    model.viewport.top_line = 41;

    update(
        &mut model,
        Msg::Post(PostMsg::Resize { visible_lines: 40 }),
    );
    assert_eq!(model.viewport.top_line, 11);
}
