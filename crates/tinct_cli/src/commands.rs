//! Subcommand implementations
//!
//! Each command returns its output as text so `main` only has to print it.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Serialize;
use tinct_core::{KeyCode, Modifiers, NodeId};
use tinct_dialog::headless::Document;
use tinct_dialog::{DialogHost, DialogOptions};
use tinct_theme::{
    detect_system_dark, ColorRole, PaletteBundle, ResolvedMode, StaticSystemSignal, ThemeError,
    ThemePreference, ThemeResolver, ThemeScope, TokenProvider,
};
use tinct_widgets::{ButtonConfig, ButtonVariant, Element, Modal, Widget};

/// Output format for `tinct palette`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Css,
    Json,
    Toml,
}

/// Where the system dark-mode signal comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SystemScheme {
    Light,
    Dark,
    /// Probe the environment
    #[default]
    Detect,
}

impl SystemScheme {
    fn is_dark(self) -> Option<bool> {
        match self {
            SystemScheme::Light => Some(false),
            SystemScheme::Dark => Some(true),
            SystemScheme::Detect => detect_system_dark(),
        }
    }
}

/// Resolver for one CLI invocation
pub fn resolver(preference: ThemePreference, system: SystemScheme) -> ThemeResolver {
    let mut builder = ThemeResolver::builder().preference(preference);
    match system.is_dark() {
        Some(dark) => builder = builder.system_signal(Rc::new(StaticSystemSignal::new(dark))),
        None => tracing::debug!("no system color scheme detected"),
    }
    builder.build()
}

#[derive(Debug, Serialize)]
struct PaletteExport {
    preference: ThemePreference,
    mode: ResolvedMode,
    colors: IndexMap<String, String>,
}

/// Render the resolved palette
pub fn palette(resolver: &ThemeResolver, format: Format) -> Result<String> {
    let export = PaletteExport {
        preference: resolver.preference(),
        mode: resolver.resolved_mode(),
        colors: resolver.palette().to_css_variable_map(),
    };

    match format {
        Format::Css => {
            let mut out = format!("/* tinct: {} ({}) */\n:root {{\n", export.preference, export.mode);
            for (role, value) in &export.colors {
                writeln!(out, "  --tinct-{role}: {value};")?;
            }
            out.push_str("}\n");
            Ok(out)
        }
        Format::Json => {
            serde_json::to_string_pretty(&export).context("Failed to serialize palette as JSON")
        }
        Format::Toml => toml::to_string_pretty(&export).context("Failed to serialize palette as TOML"),
    }
}

/// Every role with its light and dark value
pub fn roles() -> Result<String> {
    let bundle = PaletteBundle::default();
    let light = bundle.palette(ResolvedMode::Light);
    let dark = bundle.palette(ResolvedMode::Dark);

    let mut out = format!("{:<16}{:<10}{}\n", "role", "light", "dark");
    for role in ColorRole::all() {
        writeln!(
            out,
            "{:<16}{:<10}{}",
            role.to_string(),
            light.get(role).to_css(),
            dark.get(role).to_css()
        )?;
    }
    Ok(out)
}

/// Scripted walkthrough of a modal in a headless document
///
/// Opens a confirmation dialog over a page, cycles focus with Tab and
/// Shift+Tab, dismisses it and reports what the page looks like afterwards.
pub fn demo(scope: &ThemeScope, options: DialogOptions) -> Result<Vec<String>, ThemeError> {
    let doc = Rc::new(Document::new());
    let body = doc.body();
    doc.element("div")
        .id(&options.fallback_mount_id)
        .child_of(body);
    let trigger = doc
        .element("button")
        .id("open-dialog")
        .text("Delete project")
        .child_of(body);
    doc.focus_element(trigger);

    let modal = Modal::new()
        .title("Delete project")
        .child(Element::new("p").text("This cannot be undone."))
        .action(
            ButtonConfig::new("Cancel")
                .variant(ButtonVariant::Outline)
                .test_id("cancel")
                .render(scope)?,
        )
        .action(ButtonConfig::new("Delete").test_id("delete").render(scope)?)
        .options(options)
        .mount(scope, &doc)?;

    let transcript = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&transcript);
    modal.on_close(move |reason| log.borrow_mut().push(format!("closed: {reason}")));
    let say = |line: String| transcript.borrow_mut().push(line);

    modal.open();
    say(format!(
        "open: mounted into {}, focus on {}, scroll {}",
        describe(&doc, doc.parent(modal.elements().overlay)),
        describe(&doc, doc.active()),
        doc.scroll_policy().as_str().unwrap_or("unset"),
    ));

    let presses = [
        ("Tab", Modifiers::NONE),
        ("Tab", Modifiers::NONE),
        ("Tab", Modifiers::NONE),
        ("Shift+Tab", Modifiers::shift_only()),
    ];
    for (label, modifiers) in presses {
        doc.press_key(KeyCode::TAB, modifiers);
        say(format!("{label}: focus on {}", describe(&doc, doc.active())));
    }

    say("Escape".to_string());
    doc.press_key(KeyCode::ESCAPE, Modifiers::NONE);
    if modal.is_open() {
        say("Escape ignored; clicking close button".to_string());
        if let Some(close) = modal.close_button() {
            doc.click(close);
        }
    }

    say(format!(
        "restored: focus on {}, scroll {}",
        describe(&doc, doc.active()),
        doc.scroll_policy().as_str().unwrap_or("unset"),
    ));
    drop(modal);
    say(format!("unmounted: {} listeners left", doc.listener_count()));

    let lines = transcript.borrow().clone();
    Ok(lines)
}

/// Short label for a node: test id, `#id`, or tag
fn describe(doc: &Document, node: Option<NodeId>) -> String {
    let Some(node) = node else {
        return "nothing".to_string();
    };
    if let Some(test_id) = doc.attribute(node, "data-testid") {
        return test_id;
    }
    if let Some(id) = doc.attribute(node, "id") {
        return format!("#{id}");
    }
    doc.tag(node).unwrap_or_else(|| "?".to_string())
}
