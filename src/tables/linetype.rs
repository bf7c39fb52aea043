//! Line type table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::HandleAllocator;

/// A line type table entry
///
/// Pattern elements are dash lengths: positive draws, negative is a gap,
/// zero is a dot.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTypeEntry {
    pub common: EntryCommon,
    /// Line type name
    pub name: String,
    /// Description shown to users
    pub description: String,
    pub elements: Vec<f64>,
    pub flags: i16,
}

impl LineTypeEntry {
    pub const BY_BLOCK: &'static str = "ByBlock";
    pub const BY_LAYER: &'static str = "ByLayer";
    pub const CONTINUOUS: &'static str = "Continuous";

    /// Create a new line type
    pub fn new(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        description: impl Into<String>,
        elements: Vec<f64>,
    ) -> Self {
        LineTypeEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            description: description.into(),
            elements,
            flags: 0,
        }
    }

    pub fn by_block(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, Self::BY_BLOCK, "", Vec::new())
    }

    pub fn by_layer(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, Self::BY_LAYER, "", Vec::new())
    }

    pub fn continuous(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, Self::CONTINUOUS, "Solid line", Vec::new())
    }

    /// Total pattern length
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.abs()).sum()
    }
}

impl DxfRecord for LineTypeEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbLinetypeTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write(3, &self.description);
        // alignment code, always 'A'
        writer.write(72, 65i16);
        writer.write(73, self.elements.len());
        writer.write(40, self.pattern_length());
        for element in &self.elements {
            writer.write(49, *element);
            writer.write(74, 0i16);
        }
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for LineTypeEntry {
    const TABLE_NAME: &'static str = "LTYPE";

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
