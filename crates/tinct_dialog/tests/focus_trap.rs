mod support;

use tinct_core::{KeyCode, Modifiers};
use tinct_dialog::{DialogHost, DialogOptions};

use support::{build, page};

const TAB: KeyCode = KeyCode::TAB;

#[test]
fn tab_cycle_through_three_buttons_returns_to_first() {
    let (doc, _trigger) = page();
    let built = build(&doc, 3, DialogOptions::default());
    let [b0, b1, b2] = built.buttons[..] else {
        panic!("expected three buttons");
    };

    built.dialog.open();
    assert_eq!(doc.active(), Some(b0));

    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(b1));
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(b2));
    let event = doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(b0));
    assert!(event.default_prevented);
}

#[test]
fn shift_tab_from_first_wraps_to_last() {
    let (doc, _trigger) = page();
    let built = build(&doc, 3, DialogOptions::default());

    built.dialog.open();
    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(built.buttons[2]));

    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(built.buttons[1]));
}

#[test]
fn single_focusable_wraps_to_itself() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());
    let only = built.buttons[0];

    built.dialog.open();
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(only));
    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(only));
}

#[test]
fn empty_dialog_pins_focus_to_container() {
    let (doc, _trigger) = page();
    let built = build(&doc, 0, DialogOptions::default());

    built.dialog.open();
    assert_eq!(doc.active(), Some(built.container));

    let event = doc.press_key(TAB, Modifiers::NONE);
    assert!(event.default_prevented);
    assert_eq!(doc.active(), Some(built.container));

    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(built.container));
}

#[test]
fn escaped_focus_is_pulled_back() {
    let (doc, trigger) = page();
    let built = build(&doc, 2, DialogOptions::default());

    built.dialog.open();
    doc.focus_element(trigger);
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(built.buttons[0]));

    doc.focus_element(trigger);
    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(built.buttons[1]));
}

#[test]
fn shift_tab_from_container_goes_to_last() {
    let (doc, _trigger) = page();
    let built = build(&doc, 2, DialogOptions::default());

    built.dialog.open();
    doc.focus_element(built.container);
    doc.press_key(TAB, Modifiers::shift_only());
    assert_eq!(doc.active(), Some(built.buttons[1]));
}

#[test]
fn focusables_are_requeried_on_every_press() {
    let (doc, _trigger) = page();
    let built = build(&doc, 2, DialogOptions::default());
    let [b0, b1] = built.buttons[..] else {
        panic!("expected two buttons");
    };

    built.dialog.open();
    let added = doc.element("button").text("late").child_of(built.container);

    doc.focus_element(b1);
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(added));

    doc.set_disabled(b0, true);
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(b1));
}

#[test]
fn disabled_and_hidden_elements_are_skipped() {
    let (doc, _trigger) = page();
    let built = build(&doc, 0, DialogOptions::default());
    let container = built.container;
    doc.element("button").disabled().child_of(container);
    doc.element("a").href("#").aria_hidden().child_of(container);
    doc.element("div").tabindex(-1).child_of(container);
    let input = doc.element("input").child_of(container);
    let link = doc.element("a").href("#help").child_of(container);

    built.dialog.open();
    assert_eq!(doc.active(), Some(input));

    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(link));
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(input));
}

#[test]
fn trap_disabled_lets_tab_leave() {
    let (doc, trigger) = page();
    let built = build(&doc, 2, DialogOptions::new().trap_focus(false));

    built.dialog.open();
    doc.focus_element(built.buttons[1]);
    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(trigger));
}

#[test]
fn explicit_initial_focus_wins() {
    let (doc, _trigger) = page();
    let built = build(&doc, 3, DialogOptions::default());
    built
        .dialog
        .set_options(DialogOptions::new().initial_focus(built.buttons[2]));

    built.dialog.open();
    assert_eq!(doc.active(), Some(built.buttons[2]));
}

#[test]
fn detached_initial_focus_override_falls_back() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());
    let stray = doc.element("button").build();
    built
        .dialog
        .set_options(DialogOptions::new().initial_focus(stray));

    built.dialog.open();
    assert_eq!(doc.active(), Some(built.buttons[0]));
}

#[test]
fn autofocus_marker_counts_as_initial_target() {
    let (doc, _trigger) = page();
    let built = build(&doc, 0, DialogOptions::default());
    let marked = doc.element("div").autofocus().child_of(built.container);
    doc.element("button").child_of(built.container);

    built.dialog.open();
    assert_eq!(doc.active(), Some(marked));
}

#[test]
fn tab_listener_only_registered_while_open() {
    let (doc, trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());

    built.dialog.open();
    built.dialog.close();
    assert_eq!(doc.listener_count(), 0);
    assert!(!doc.is_connected(built.overlay));

    doc.press_key(TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(trigger));
}
