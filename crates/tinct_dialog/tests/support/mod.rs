#![allow(dead_code)]

use std::rc::Rc;

use tinct_core::NodeId;
use tinct_dialog::headless::Document;
use tinct_dialog::{DialogController, DialogElements, DialogHost, DialogOptions};

pub struct Built {
    pub dialog: DialogController,
    pub overlay: NodeId,
    pub container: NodeId,
    pub buttons: Vec<NodeId>,
}

/// Page with a focused trigger button
pub fn page() -> (Rc<Document>, NodeId) {
    let doc = Rc::new(Document::new());
    let trigger = doc.element("button").id("trigger").child_of(doc.body());
    doc.focus_element(trigger);
    (doc, trigger)
}

/// Detached dialog with `buttons` buttons in its body
pub fn build(doc: &Rc<Document>, buttons: usize, options: DialogOptions) -> Built {
    let overlay = doc
        .element("div")
        .attr("data-testid", "modal-overlay")
        .build();
    let container = doc
        .element("div")
        .attr("role", "dialog")
        .attr("data-testid", "modal")
        .tabindex(-1)
        .child_of(overlay);
    let buttons = (0..buttons)
        .map(|i| doc.element("button").text(&format!("b{i}")).child_of(container))
        .collect();

    let dialog = DialogController::new(
        doc.clone(),
        DialogElements { overlay, container },
        options,
    );
    Built {
        dialog,
        overlay,
        container,
        buttons,
    }
}
