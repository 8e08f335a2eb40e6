//! Modal dialog
//!
//! [`Modal`] renders the overlay, the dialog surface, a header with a close
//! button, the body and an optional actions row. [`Modal::mount`] puts the
//! rendered tree into a headless [`Document`] and hands its lifecycle to a
//! [`DialogController`].

use std::rc::Rc;

use tinct_core::{event_types, Event, NodeId, Subscription};
use tinct_dialog::headless::Document;
use tinct_dialog::{
    CloseReason, DialogController, DialogElements, DialogHandle, DialogHost, DialogOptions,
    HostListener,
};
use tinct_theme::{ThemeError, ThemeScope, UseTheme};
use tracing::debug;

use crate::button::{states, ButtonConfig, ButtonSize, ButtonVariant};
use crate::element::{slug, Element};
use crate::widget::Widget;

/// Accessible name of the header close button
pub const CLOSE_LABEL: &str = "Close dialog";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ModalSize {
    pub fn width(self) -> &'static str {
        match self {
            ModalSize::Sm => "400px",
            ModalSize::Md => "500px",
            ModalSize::Lg => "600px",
        }
    }
}

/// Modal dialog description
#[derive(Clone, Debug, Default)]
pub struct Modal {
    title: Option<String>,
    title_id: Option<String>,
    size: ModalSize,
    body: Vec<Element>,
    actions: Vec<Element>,
    options: DialogOptions,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Heading id; derived from the title when omitted
    pub fn title_id(mut self, id: impl Into<String>) -> Self {
        self.title_id = Some(id.into());
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.body.push(child);
        self
    }

    /// Add an element to the right-aligned actions row
    pub fn action(mut self, action: Element) -> Self {
        self.actions.push(action);
        self
    }

    /// Dismissal, focus and portal behavior once mounted
    pub fn options(mut self, options: DialogOptions) -> Self {
        self.options = options;
        self
    }

    fn heading_id(&self) -> Option<String> {
        let title = self.title.as_deref()?;
        Some(
            self.title_id
                .clone()
                .unwrap_or_else(|| format!("modal-title-{}", slug(title))),
        )
    }

    fn overlay(&self) -> Element {
        Element::new("div")
            .test_id("modal-overlay")
            .attr("aria-hidden", "false")
            .css("position", "fixed")
            .css("inset", "0")
            .css("background-color", "rgba(0, 0, 0, 0.5)")
            .css("display", "flex")
            .css("align-items", "center")
            .css("justify-content", "center")
            .css("z-index", "1000")
    }

    fn dialog(&self, theme: &UseTheme) -> Element {
        let colors = theme.colors();
        let heading_id = self.heading_id();

        let mut header = Element::new("div")
            .css("display", "flex")
            .css("justify-content", "space-between")
            .css("align-items", "center")
            .css("margin-bottom", "1rem");
        if let (Some(title), Some(id)) = (&self.title, &heading_id) {
            header = header.child(
                Element::new("h2")
                    .attr("id", id.clone())
                    .css("font-size", "1.25rem")
                    .css("font-weight", "600")
                    .css("color", colors.text_primary.to_css())
                    .css("margin", "0")
                    .text(title.clone()),
            );
        }
        let close = ButtonConfig::new("\u{00d7}")
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .aria_label(CLOSE_LABEL)
            .test_id("modal-close");
        header = header.child(close.render_state(theme, states::IDLE));

        let mut dialog = Element::new("div")
            .test_id("modal")
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("tabindex", "-1")
            .css("background-color", colors.surface.to_css())
            .css("border-radius", "0.5rem")
            .css("padding", "1.5rem")
            .css("width", self.size.width())
            .css("max-width", "90vw")
            .css("max-height", "90vh")
            .css("overflow", "auto")
            .css("outline", "none")
            .child(header)
            .child(
                Element::new("div")
                    .test_id("modal-body")
                    .children(self.body.iter().cloned()),
            );
        if let Some(id) = heading_id {
            dialog = dialog.attr("aria-labelledby", id);
        }
        if !self.actions.is_empty() {
            dialog = dialog.child(
                Element::new("div")
                    .test_id("modal-actions")
                    .css("margin-top", "1.5rem")
                    .css("display", "flex")
                    .css("gap", "0.5rem")
                    .css("justify-content", "flex-end")
                    .children(self.actions.iter().cloned()),
            );
        }
        dialog
    }

    /// Render into `doc` and attach a controller; the modal starts closed
    pub fn mount(&self, scope: &ThemeScope, doc: &Rc<Document>) -> Result<MountedModal, ThemeError> {
        let theme = scope.use_theme_for("Modal")?;

        let overlay = self.overlay().materialize(doc);
        let container = self.dialog(&theme).materialize(doc);
        doc.append_child(overlay, container);

        let host: Rc<dyn DialogHost> = doc.clone();
        let controller = DialogController::new(
            host,
            DialogElements { overlay, container },
            self.options.clone(),
        );

        let close_button = doc.query(container, "data-testid", "modal-close");
        let close_listener = close_button.map(|button| {
            let handle = controller.handle();
            let listener: HostListener = Rc::new(move |event: &mut Event| {
                if event.target == Some(button) && handle.is_open() {
                    handle.close();
                }
            });
            doc.listen(event_types::CLICK, listener)
        });

        debug!(?overlay, ?container, "modal mounted");
        Ok(MountedModal {
            _close_listener: close_listener,
            controller,
            close_button,
        })
    }
}

impl Widget for Modal {
    /// The full overlay tree, as shown while open
    fn render(&self, scope: &ThemeScope) -> Result<Element, ThemeError> {
        let theme = scope.use_theme_for("Modal")?;
        Ok(self.overlay().child(self.dialog(&theme)))
    }
}

/// A modal materialized in a headless document
pub struct MountedModal {
    // Released before the controller closes the dialog
    _close_listener: Option<Subscription>,
    controller: DialogController,
    close_button: Option<NodeId>,
}

impl MountedModal {
    pub fn open(&self) {
        self.controller.open();
    }

    pub fn close(&self) {
        self.controller.close();
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn elements(&self) -> DialogElements {
        self.controller.elements()
    }

    /// Header close button
    pub fn close_button(&self) -> Option<NodeId> {
        self.close_button
    }

    pub fn on_close<F>(&self, callback: F)
    where
        F: Fn(CloseReason) + 'static,
    {
        self.controller.on_close(callback);
    }

    pub fn handle(&self) -> DialogHandle {
        self.controller.handle()
    }

    pub fn controller(&self) -> &DialogController {
        &self.controller
    }
}
