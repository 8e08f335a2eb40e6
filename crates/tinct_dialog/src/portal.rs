//! Portal target resolution and mounting

use std::rc::Rc;

use tinct_core::NodeId;
use tracing::warn;

use crate::host::DialogHost;
use crate::options::DialogOptions;

/// Where an opening dialog is mounted
///
/// Precedence: the explicit container while it is attached, then the
/// element with `fallback_mount_id`, then the document body.
pub fn resolve_target(host: &dyn DialogHost, options: &DialogOptions) -> NodeId {
    options
        .container
        .filter(|&container| {
            let connected = host.is_connected(container);
            if !connected {
                warn!(?container, "dialog container is detached, using fallback mount");
            }
            connected
        })
        .or_else(|| host.element_by_id(&options.fallback_mount_id))
        .unwrap_or_else(|| host.body())
}

/// Mounted dialog root, unmounted when released or dropped
pub struct PortalMount {
    host: Rc<dyn DialogHost>,
    node: Option<NodeId>,
    target: NodeId,
}

impl PortalMount {
    pub fn attach(host: Rc<dyn DialogHost>, node: NodeId, target: NodeId) -> Self {
        host.mount(node, target);
        Self {
            host,
            node: Some(node),
            target,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(node) = self.node.take() {
            self.host.unmount(node);
        }
    }
}

impl Drop for PortalMount {
    fn drop(&mut self) {
        self.detach();
    }
}
