//! Layer table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Color, Handle, HandleAllocator};
use bitflags::bitflags;

bitflags! {
    /// Layer flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i16 {
        const NONE = 0;
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
        const XREF_DEPENDENT = 16;
        const XREF_RESOLVED = 32;
        const REFERENCED = 64;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    pub common: EntryCommon,
    /// Layer name
    pub name: String,
    pub flags: LayerFlags,
    /// Layer color
    pub color: Color,
    /// Layer is off; written as a negative color index
    pub off: bool,
    /// Line type name
    pub line_type: String,
    /// Plotting flag, `None` leaves the application default
    pub plot: Option<bool>,
    /// Line weight in 1/100 mm
    pub line_weight: Option<i16>,
    /// Plot style name object
    pub plot_style: Option<Handle>,
    /// Material object
    pub material: Option<Handle>,
}

impl LayerEntry {
    /// Default layer name
    pub const DEFAULT: &'static str = "0";

    /// Create a new layer with white color and continuous line type
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        LayerEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: LayerFlags::NONE,
            color: Color::WHITE,
            off: false,
            line_type: "Continuous".to_string(),
            plot: None,
            line_weight: None,
            plot_style: None,
            material: None,
        }
    }

    /// Create the default layer "0"
    pub fn default_layer(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, Self::DEFAULT)
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }
}

impl DxfRecord for LayerEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbLayerTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags.bits());
        let aci = self.color.aci();
        writer.write(62, if self.off { -aci } else { aci });
        writer.write_optional(420, self.color.true_color());
        writer.write(6, &self.line_type);
        writer.write_optional(290, self.plot);
        writer.write_optional(370, self.line_weight);
        writer.write_optional(390, self.plot_style);
        writer.write_optional(347, self.material);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for LayerEntry {
    const TABLE_NAME: &'static str = "LAYER";

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
