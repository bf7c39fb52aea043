//! Text style table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::HandleAllocator;
use bitflags::bitflags;

bitflags! {
    /// Text generation flags (group code 71)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i16 {
        const NONE = 0;
        /// Text is backward (mirrored in X)
        const BACKWARD = 2;
        /// Text is upside down (mirrored in Y)
        const UPSIDE_DOWN = 4;
    }
}

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyleEntry {
    pub common: EntryCommon,
    /// Style name
    pub name: String,
    pub flags: i16,
    /// Fixed text height, 0 when not fixed
    pub height: f64,
    pub width_factor: f64,
    /// Oblique angle in degrees
    pub oblique_angle: f64,
    pub generation: TextGenerationFlags,
    /// Last height used
    pub last_height: f64,
    /// Primary font file name
    pub font: String,
    /// Big font file name
    pub big_font: String,
}

impl TextStyleEntry {
    /// Create a new text style
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>, font: impl Into<String>) -> Self {
        TextStyleEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            generation: TextGenerationFlags::NONE,
            last_height: 2.5,
            font: font.into(),
            big_font: String::new(),
        }
    }

    /// Create the "Standard" style
    pub fn standard(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "Standard", "txt")
    }
}

impl DxfRecord for TextStyleEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbTextStyleTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write(40, self.height);
        writer.write(41, self.width_factor);
        writer.write(50, self.oblique_angle);
        writer.write(71, self.generation.bits());
        writer.write(42, self.last_height);
        writer.write(3, &self.font);
        writer.write(4, &self.big_font);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for TextStyleEntry {
    const TABLE_NAME: &'static str = "STYLE";

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
