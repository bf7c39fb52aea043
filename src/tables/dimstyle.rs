//! Dimension style table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator};

/// A dimension style table entry
///
/// Only the commonly tuned variables are carried; everything else takes
/// the reader's defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyleEntry {
    pub common: EntryCommon,
    /// Style name
    pub name: String,
    pub flags: i16,
    /// Overall scale (DIMSCALE)
    pub scale: f64,
    /// Arrow size (DIMASZ)
    pub arrow_size: f64,
    /// Extension line offset (DIMEXO)
    pub extension_offset: f64,
    /// Extension line extension (DIMEXE)
    pub extension_extension: f64,
    /// Text height (DIMTXT)
    pub text_height: f64,
    /// Gap around text (DIMGAP)
    pub text_gap: f64,
    /// Text above dimension line (DIMTAD)
    pub text_above: i16,
    /// Decimal places (DIMDEC)
    pub decimal_places: i16,
    /// Text style (DIMTXSTY)
    pub text_style: Option<Handle>,
}

impl DimStyleEntry {
    /// Create a new dimension style with metric-ish defaults
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        DimStyleEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
            scale: 1.0,
            arrow_size: 2.5,
            extension_offset: 0.625,
            extension_extension: 1.25,
            text_height: 2.5,
            text_gap: 0.625,
            text_above: 1,
            decimal_places: 2,
            text_style: None,
        }
    }

    /// Create the "Standard" dimension style
    pub fn standard(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "Standard")
    }
}

impl DxfRecord for DimStyleEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common
            .write_base_with_handle_code(writer, Self::TABLE_NAME, 105);
        writer.write_subclass("AcDbDimStyleTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write(40, self.scale);
        writer.write(41, self.arrow_size);
        writer.write(42, self.extension_offset);
        writer.write(44, self.extension_extension);
        writer.write(140, self.text_height);
        writer.write(147, self.text_gap);
        writer.write(77, self.text_above);
        writer.write(271, self.decimal_places);
        writer.write_optional(340, self.text_style);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for DimStyleEntry {
    const TABLE_NAME: &'static str = "DIMSTYLE";

    fn common(&self) -> &EntryCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntryCommon {
        &mut self.common
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn write_table_extra(writer: &mut TagsManager, count: usize) {
        writer.write_subclass("AcDbDimStyleTable");
        writer.write(71, count);
    }
}
