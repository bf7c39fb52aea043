//! View table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector2, Vector3};

/// A named view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    pub common: EntryCommon,
    /// View name
    pub name: String,
    pub flags: i16,
    pub height: f64,
    pub width: f64,
    /// View center in drawing coordinates
    pub center: Vector2,
    /// View direction from the target
    pub direction: Vector3,
    pub target: Vector3,
    pub lens_length: f64,
}

impl ViewEntry {
    /// Create a view of the given size centered on `center`
    pub fn new(
        handles: &mut HandleAllocator,
        name: impl Into<String>,
        center: Vector2,
        width: f64,
        height: f64,
    ) -> Self {
        ViewEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
            height,
            width,
            center,
            direction: Vector3::UNIT_Z,
            target: Vector3::ZERO,
            lens_length: 50.0,
        }
    }
}

impl DxfRecord for ViewEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbViewTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write(40, self.height);
        writer.write_point2d(10, self.center);
        writer.write(41, self.width);
        writer.write_point3d(11, self.direction);
        writer.write_point3d(12, self.target);
        writer.write(42, self.lens_length);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for ViewEntry {
    const TABLE_NAME: &'static str = "VIEW";

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

    #[test]
    fn test_view_tags() {
        let mut handles = HandleAllocator::new();
        let view = ViewEntry::new(&mut handles, "Plan", Vector2::new(50.0, 25.0), 100.0, 50.0);
        assert!(view.to_dxf_string().contains(
            "100\nAcDbViewTableRecord\n2\nPlan\n70\n0\n40\n50\n10\n50\n20\n25\n41\n100\n11\n0\n21\n0\n31\n1"
        ));
    }
}
