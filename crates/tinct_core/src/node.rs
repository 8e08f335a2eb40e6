//! Element identity

use slotmap::new_key_type;

new_key_type! {
    /// Identifier of an element owned by a host document
    pub struct NodeId;
}
