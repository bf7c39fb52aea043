//! Block record table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Units};

/// A block record table entry
///
/// Every block definition, including the model and paper spaces, has one.
/// Entities in the block are owned by this record.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecordEntry {
    pub common: EntryCommon,
    /// Block name
    pub name: String,
    /// Insertion units
    pub units: Units,
    /// Block can be exploded
    pub explodable: bool,
    /// Block scales uniformly
    pub scale_uniformly: bool,
}

impl BlockRecordEntry {
    /// Create a new block record
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        BlockRecordEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            units: Units::Unitless,
            explodable: true,
            scale_uniformly: false,
        }
    }
}

impl DxfRecord for BlockRecordEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbBlockTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.units.code());
        writer.write(280, self.explodable);
        writer.write(281, self.scale_uniformly);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for BlockRecordEntry {
    const TABLE_NAME: &'static str = "BLOCK_RECORD";

    fn common(&self) -> &EntryCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntryCommon {
        &mut self.common
    }

    fn name(&self) -> &str {
        &self.name
    }
}
