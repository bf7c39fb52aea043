//! User coordinate system table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A named user coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct UcsEntry {
    pub common: EntryCommon,
    /// UCS name
    pub name: String,
    pub flags: i16,
    pub origin: Vector3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
}

impl UcsEntry {
    /// Create a UCS aligned with the world axes
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>, origin: Vector3) -> Self {
        UcsEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
            origin,
            x_axis: Vector3::new(1.0, 0.0, 0.0),
            y_axis: Vector3::new(0.0, 1.0, 0.0),
        }
    }
}

impl DxfRecord for UcsEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbUCSTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        writer.write_point3d(10, self.origin);
        writer.write_point3d(11, self.x_axis);
        writer.write_point3d(12, self.y_axis);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for UcsEntry {
    const TABLE_NAME: &'static str = "UCS";

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
    fn test_ucs_axes() {
        let mut handles = HandleAllocator::new();
        let ucs = UcsEntry::new(&mut handles, "Shifted", Vector3::new(10.0, 0.0, 0.0));
        assert!(ucs.to_dxf_string().ends_with(
            "10\n10\n20\n0\n30\n0\n11\n1\n21\n0\n31\n0\n12\n0\n22\n1\n32\n0"
        ));
    }
}
