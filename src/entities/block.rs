//! Block definition - a named, ordered container of entities

use crate::entities::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator, Vector3};
use bitflags::bitflags;
use tracing::trace;

bitflags! {
    /// Block type flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockFlags: i16 {
        const NONE = 0;
        /// Anonymous block generated by hatching, dimensioning and the like
        const ANONYMOUS = 1;
        /// Block has non-constant attribute definitions
        const NON_CONSTANT_ATTRIBUTES = 2;
        /// Block is an external reference
        const XREF = 4;
        /// Block is an xref overlay
        const XREF_OVERLAY = 8;
        /// Block is externally dependent
        const EXTERNALLY_DEPENDENT = 16;
        const RESOLVED_XREF = 32;
        const REFERENCED_XREF = 64;
    }
}

/// BlockEnd - marks the end of a block definition
///
/// Owner and layer mirror the block it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEnd {
    handle: Handle,
}

impl BlockEnd {
    /// Create a new block end with a fresh handle
    pub fn new(handles: &mut HandleAllocator) -> Self {
        BlockEnd {
            handle: handles.next(),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    fn write_tags(&self, writer: &mut TagsManager, block: &EntityCommon) {
        writer.write_entity_type("ENDBLK");
        writer.write_handle(self.handle);
        writer.write_optional(330, block.owner);
        writer.write_subclass("AcDbEntity");
        writer.write_layer(block.layer());
        writer.write_subclass("AcDbBlockEnd");
    }
}

/// A block definition
///
/// The BLOCK record is owned by its BLOCK_RECORD table entry, and every
/// entity added to the block is owned by that same record. The two reserved
/// spaces are blocks too: their entities live in the ENTITIES section, so
/// they are created with [`write_entities`](Self::write_entities) off.
#[derive(Debug)]
pub struct Block {
    pub common: EntityCommon,
    name: String,
    end: BlockEnd,
    /// Base point (insertion point) for the block
    pub base_point: Vector3,
    /// X-ref path name (for external references)
    pub xref_path: String,
    pub flags: BlockFlags,
    /// Write the owned entities between BLOCK and ENDBLK
    pub write_entities: bool,
    entities: Vec<Box<dyn Entity>>,
}

impl Block {
    /// Model space block name
    pub const MODEL_SPACE: &'static str = "*Model_Space";
    /// Paper space block name
    pub const PAPER_SPACE: &'static str = "*Paper_Space";

    /// Create a block owned by the block record `record`
    ///
    /// The block takes its handle before its end marker does.
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>, record: Handle) -> Self {
        let mut common = EntityCommon::new(handles);
        common.owner = Some(record);
        let name = name.into();
        let write_entities = !Self::is_space_name(&name);
        Block {
            common,
            end: BlockEnd::new(handles),
            name,
            base_point: Vector3::ZERO,
            xref_path: String::new(),
            flags: BlockFlags::NONE,
            write_entities,
            entities: Vec::new(),
        }
    }

    /// Check if `name` is one of the two reserved space names
    pub fn is_space_name(name: &str) -> bool {
        name.eq_ignore_ascii_case(Self::MODEL_SPACE) || name.eq_ignore_ascii_case(Self::PAPER_SPACE)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the owning block record
    pub fn record_handle(&self) -> Handle {
        self.common.owner.unwrap_or(Handle::NULL)
    }

    pub fn end(&self) -> &BlockEnd {
        &self.end
    }

    /// Attach an entity, making the block's record its owner
    pub fn add_entity<E: Entity + 'static>(&mut self, entity: E) -> Handle {
        self.add_boxed(Box::new(entity))
    }

    /// Attach an already boxed entity
    pub fn add_boxed(&mut self, mut entity: Box<dyn Entity>) -> Handle {
        entity.set_owner(self.record_handle());
        let handle = entity.handle();
        trace!(block = %self.name, entity = entity.entity_type(), %handle, "entity attached");
        self.entities.push(entity);
        handle
    }

    /// Entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|e| e.as_ref())
    }

    /// Find an entity by handle
    pub fn entity(&self, handle: Handle) -> Option<&dyn Entity> {
        self.entities().find(|e| e.handle() == handle)
    }

    /// Find an entity by handle, mutably
    pub fn entity_mut(&mut self, handle: Handle) -> Option<&mut (dyn Entity + 'static)> {
        self.entities
            .iter_mut()
            .find(|e| e.handle() == handle)
            .map(|e| e.as_mut())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl DxfRecord for Block {
    fn write_tags(&self, writer: &mut TagsManager) {
        // colour, line type and the like belong to the block's entities
        self.common.write_header(writer, self.entity_type());
        writer.write_subclass("AcDbBlockBegin");
        writer.write_name(&self.name);
        writer.write(70, self.flags.bits());
        writer.write_point3d(10, self.base_point);
        writer.write_name_at(3, &self.name);
        writer.write(1, &self.xref_path);
        self.common.write_extended_data(writer);
        if self.write_entities {
            for entity in &self.entities {
                entity.write_tags(writer);
            }
        }
        self.end.write_tags(writer, &self.common);
    }
}

impl Entity for Block {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "BLOCK"
    }
}
