mod support;

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tinct_core::{KeyCode, Modifiers};
use tinct_dialog::{CloseReason, DialogHost, DialogOptions, ScrollPolicy};

use support::{build, page};

fn record_closes(dialog: &tinct_dialog::DialogController) -> Rc<RefCell<Vec<CloseReason>>> {
    let reasons = Rc::new(RefCell::new(Vec::new()));
    let sink = reasons.clone();
    dialog.on_close(move |reason| sink.borrow_mut().push(reason));
    reasons
}

#[test]
fn open_then_close_restores_scroll_and_focus() {
    let (doc, trigger) = page();
    doc.set_scroll_policy(ScrollPolicy::new("auto"));
    let built = build(&doc, 2, DialogOptions::default());

    built.dialog.open();
    assert_eq!(doc.scroll_policy(), ScrollPolicy::hidden());
    assert_eq!(doc.active(), Some(built.buttons[0]));

    built.dialog.close();
    assert_eq!(doc.scroll_policy(), ScrollPolicy::new("auto"));
    assert_eq!(doc.active(), Some(trigger));
}

#[test]
fn unset_scroll_policy_is_restored_as_unset() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());

    built.dialog.open();
    built.dialog.close();
    assert_eq!(doc.scroll_policy(), ScrollPolicy::unset());
}

#[test]
fn no_prior_focus_leaves_nothing_focused() {
    let doc = Rc::new(tinct_dialog::headless::Document::new());
    let built = build(&doc, 1, DialogOptions::default());

    built.dialog.open();
    built.dialog.close();
    assert_eq!(doc.active(), None);
}

#[test]
fn escape_closes_only_when_enabled() {
    let (doc, trigger) = page();
    let built = build(&doc, 1, DialogOptions::new().close_on_esc(false));
    let reasons = record_closes(&built.dialog);

    built.dialog.open();
    let event = doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    assert!(built.dialog.is_open());
    assert!(!event.propagation_stopped);

    built
        .dialog
        .set_options(DialogOptions::new().close_on_esc(true));
    let event = doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    assert!(!built.dialog.is_open());
    assert!(event.propagation_stopped);
    assert_eq!(doc.active(), Some(trigger));
    assert_eq!(*reasons.borrow(), vec![CloseReason::Escape]);
}

#[test]
fn overlay_click_dismisses_but_body_click_does_not() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());
    let reasons = record_closes(&built.dialog);

    built.dialog.open();
    doc.click(built.container);
    doc.click(built.buttons[0]);
    assert!(built.dialog.is_open());

    doc.click(built.overlay);
    assert!(!built.dialog.is_open());
    assert_eq!(*reasons.borrow(), vec![CloseReason::Overlay]);
}

#[test]
fn overlay_click_ignored_when_disabled() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::new().close_on_overlay(false));

    built.dialog.open();
    doc.click(built.overlay);
    assert!(built.dialog.is_open());
}

#[test]
fn detached_prior_focus_is_not_restored() {
    let (doc, trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());

    built.dialog.open();
    doc.remove(trigger);
    built.dialog.close();

    assert_eq!(doc.active(), None);
}

#[test]
fn portal_target_precedence() {
    let (doc, _trigger) = page();

    let built = build(&doc, 1, DialogOptions::default());
    built.dialog.open();
    assert_eq!(doc.parent(built.overlay), Some(doc.body()));
    built.dialog.close();

    let modal_root = doc.element("div").id("modal-root").child_of(doc.body());
    built.dialog.open();
    assert_eq!(doc.parent(built.overlay), Some(modal_root));
    built.dialog.close();

    let explicit = doc.element("section").child_of(doc.body());
    built
        .dialog
        .set_options(DialogOptions::new().container(explicit));
    built.dialog.open();
    assert_eq!(doc.parent(built.overlay), Some(explicit));
    built.dialog.close();

    assert_eq!(doc.parent(built.overlay), None);
}

#[test]
fn detached_container_falls_back_and_focus_moves_in() {
    let (doc, trigger) = page();
    let modal_root = doc.element("div").id("modal-root").child_of(doc.body());
    let detached = doc.element("section").build();
    let built = build(&doc, 1, DialogOptions::new().container(detached));

    built.dialog.open();
    assert_eq!(doc.parent(built.overlay), Some(modal_root));
    assert_eq!(doc.active(), Some(built.buttons[0]));

    built.dialog.close();
    assert_eq!(doc.active(), Some(trigger));
}

#[test]
fn custom_fallback_mount_id() {
    let (doc, _trigger) = page();
    let portal = doc.element("div").id("portal").child_of(doc.body());
    let built = build(&doc, 1, DialogOptions::new().fallback_mount_id("portal"));

    built.dialog.open();
    assert_eq!(
        built.dialog.with_session(|s| s.map(|s| s.portal_target())),
        Some(portal)
    );
}

#[test]
fn nested_escape_closes_only_innermost() {
    let (doc, trigger) = page();
    let outer = build(&doc, 2, DialogOptions::default());
    let inner = build(&doc, 2, DialogOptions::default());

    outer.dialog.open();
    doc.focus_element(outer.buttons[1]);
    inner.dialog.open();
    assert_eq!(doc.active(), Some(inner.buttons[0]));

    doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    assert!(!inner.dialog.is_open());
    assert!(outer.dialog.is_open());
    assert_eq!(doc.active(), Some(outer.buttons[1]));

    doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    assert!(!outer.dialog.is_open());
    assert_eq!(doc.active(), Some(trigger));
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn nested_dialog_owns_tab() {
    let (doc, _trigger) = page();
    let outer = build(&doc, 2, DialogOptions::default());
    let inner = build(&doc, 2, DialogOptions::default());

    outer.dialog.open();
    inner.dialog.open();

    doc.press_key(KeyCode::TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(inner.buttons[1]));
    doc.press_key(KeyCode::TAB, Modifiers::NONE);
    assert_eq!(doc.active(), Some(inner.buttons[0]));
}

#[test]
fn repeated_cycles_leak_nothing() {
    let (doc, trigger) = page();
    doc.set_scroll_policy(ScrollPolicy::new("scroll"));
    let built = build(&doc, 3, DialogOptions::default());

    for _ in 0..5 {
        built.dialog.open();
        assert_eq!(doc.listener_count(), 2);
        doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    }

    assert_eq!(doc.listener_count(), 0);
    assert_eq!(doc.scroll_policy(), ScrollPolicy::new("scroll"));
    assert_eq!(doc.active(), Some(trigger));
    assert!(!doc.is_connected(built.overlay));
}

#[test]
fn reopen_creates_fresh_session() {
    let (doc, trigger) = page();
    let other = doc.element("button").child_of(doc.body());
    let built = build(&doc, 1, DialogOptions::default());

    built.dialog.open();
    assert_eq!(
        built.dialog.with_session(|s| s.and_then(|s| s.prior_focus())),
        Some(trigger)
    );
    built.dialog.close();

    doc.focus_element(other);
    built.dialog.open();
    assert_eq!(
        built.dialog.with_session(|s| s.and_then(|s| s.prior_focus())),
        Some(other)
    );
    built.dialog.close();
    assert_eq!(doc.active(), Some(other));
}

#[test]
fn close_callback_can_reopen() {
    let (doc, _trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());
    let handle = built.dialog.handle();
    let reopened = Rc::new(RefCell::new(false));

    let flag = reopened.clone();
    built.dialog.on_close(move |reason| {
        if reason == CloseReason::Overlay && !*flag.borrow() {
            *flag.borrow_mut() = true;
            handle.open();
        }
    });

    built.dialog.open();
    doc.click(built.overlay);

    assert!(*reopened.borrow());
    assert!(built.dialog.is_open());
    assert_eq!(doc.listener_count(), 2);
    assert_eq!(doc.scroll_policy(), ScrollPolicy::hidden());
}

#[test]
fn dropping_open_controller_reports_unmount() {
    let (doc, trigger) = page();
    let built = build(&doc, 1, DialogOptions::default());
    let reasons = record_closes(&built.dialog);

    built.dialog.open();
    drop(built.dialog);

    assert_eq!(*reasons.borrow(), vec![CloseReason::Unmount]);
    assert_eq!(doc.listener_count(), 0);
    assert_eq!(doc.scroll_policy(), ScrollPolicy::unset());
    assert_eq!(doc.active(), Some(trigger));
}
