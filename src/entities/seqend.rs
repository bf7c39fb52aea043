//! Sequence end sentinel

use super::EntityCommon;
use crate::io::dxf::TagsManager;
use crate::types::{Handle, HandleAllocator};

/// Terminates a vertex sequence
///
/// The handle is drawn once when the parent is built, so rendering the
/// parent repeatedly always produces the same sentinel. Owner and layer are
/// taken from the parent at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seqend {
    handle: Handle,
}

impl Seqend {
    /// Create a sentinel with a fresh handle
    pub fn new(handles: &mut HandleAllocator) -> Self {
        Seqend {
            handle: handles.next(),
        }
    }

    /// Sentinel handle
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Write the sentinel mirroring the parent's owner and layer
    pub fn write_tags(&self, writer: &mut TagsManager, parent: &EntityCommon) {
        writer.write_entity_type("SEQEND");
        writer.write_handle(self.handle);
        writer.write_optional(330, parent.owner);
        writer.write_subclass("AcDbEntity");
        writer.write_layer(parent.layer());
    }
}
