//! Viewport table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector2, Vector3};

/// A viewport configuration table entry
#[derive(Debug, Clone, PartialEq)]
pub struct VPortEntry {
    pub common: EntryCommon,
    /// Viewport name, "*Active" for the current one
    pub name: String,
    pub flags: i16,
    /// Lower-left corner in display coordinates
    pub lower_left: Vector2,
    /// Upper-right corner in display coordinates
    pub upper_right: Vector2,
    /// View center in drawing coordinates
    pub view_center: Vector2,
    pub snap_base: Vector2,
    pub snap_spacing: Vector2,
    pub grid_spacing: Vector2,
    /// View direction from the target
    pub view_direction: Vector3,
    pub view_target: Vector3,
    pub view_height: f64,
    pub aspect_ratio: f64,
    pub lens_length: f64,
}

impl VPortEntry {
    pub const ACTIVE: &'static str = "*Active";

    /// Create a new viewport
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        VPortEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
            lower_left: Vector2::ZERO,
            upper_right: Vector2::new(1.0, 1.0),
            view_center: Vector2::ZERO,
            snap_base: Vector2::ZERO,
            snap_spacing: Vector2::new(10.0, 10.0),
            grid_spacing: Vector2::new(10.0, 10.0),
            view_direction: Vector3::UNIT_Z,
            view_target: Vector3::ZERO,
            view_height: 200.0,
            aspect_ratio: 1.0,
            lens_length: 50.0,
        }
    }

    /// Create the "*Active" viewport
    pub fn active(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, Self::ACTIVE)
    }
}

impl DxfRecord for VPortEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbViewportTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write_point2d(10, self.lower_left);
        writer.write_point2d(11, self.upper_right);
        writer.write_point2d(12, self.view_center);
        writer.write_point2d(13, self.snap_base);
        writer.write_point2d(14, self.snap_spacing);
        writer.write_point2d(15, self.grid_spacing);
        writer.write_point3d(16, self.view_direction);
        writer.write_point3d(17, self.view_target);
        writer.write(40, self.view_height);
        writer.write(41, self.aspect_ratio);
        writer.write(42, self.lens_length);
        // front and back clipping planes, snap rotation, view twist
        writer.write(43, 0.0);
        writer.write(44, 0.0);
        writer.write(50, 0.0);
        writer.write(51, 0.0);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for VPortEntry {
    const TABLE_NAME: &'static str = "VPORT";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::Tag;

    #[test]
    fn test_vport_codes() {
        let mut handles = HandleAllocator::new();
        let vport = VPortEntry::active(&mut handles);
        let mut writer = TagsManager::new();
        vport.write_tags(&mut writer);
        let codes: Vec<i32> = writer.tags().iter().map(Tag::code).collect();
        assert_eq!(
            &codes[4..],
            &[
                100, 2, 70, 10, 20, 11, 21, 12, 22, 13, 23, 14, 24, 15, 25, 16, 26, 36, 17, 27, 37, 40,
                41, 42, 43, 44, 50, 51
            ]
        );
    }
}
