//! Block reference entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A reference to a block definition (INSERT)
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Common entity data
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    /// Insertion point
    pub insert_point: Vector3,
    /// Scale along X, Y, Z
    pub scale: Option<Vector3>,
    /// Rotation angle in degrees
    pub rotation: Option<f64>,
    /// Column count for arrays
    pub column_count: Option<i16>,
    /// Row count for arrays
    pub row_count: Option<i16>,
    /// Column spacing for arrays
    pub column_spacing: Option<f64>,
    /// Row spacing for arrays
    pub row_spacing: Option<f64>,
    /// Extrusion direction
    pub normal: Option<Vector3>,
}

impl Insert {
    /// Create a new insert
    pub fn new(handles: &mut HandleAllocator, block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(handles),
            block_name: block_name.into(),
            insert_point,
            scale: None,
            rotation: None,
            column_count: None,
            row_count: None,
            column_spacing: None,
            row_spacing: None,
            normal: None,
        }
    }

    /// Lay the insert out as a rectangular array
    pub fn set_array(&mut self, columns: i16, rows: i16, column_spacing: f64, row_spacing: f64) {
        self.column_count = Some(columns);
        self.row_count = Some(rows);
        self.column_spacing = Some(column_spacing);
        self.row_spacing = Some(row_spacing);
    }
}

impl DxfRecord for Insert {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbBlockReference");
        writer.write_name(&self.block_name);
        writer.write_point3d(10, self.insert_point);
        if let Some(scale) = self.scale {
            writer.write(41, scale.x);
            writer.write(42, scale.y);
            writer.write(43, scale.z);
        }
        writer.write_optional(50, self.rotation);
        writer.write_optional(70, self.column_count);
        writer.write_optional(71, self.row_count);
        writer.write_optional(44, self.column_spacing);
        writer.write_optional(45, self.row_spacing);
        writer.write_optional_point3d(210, self.normal);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "INSERT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_tags() {
        let mut handles = HandleAllocator::new();
        let mut insert = Insert::new(&mut handles, "Door", Vector3::new(10.0, 0.0, 0.0));
        insert.scale = Some(Vector3::new(2.0, 2.0, 1.0));
        insert.rotation = Some(45.0);
        assert!(insert.to_dxf_string().ends_with(
            "100\nAcDbBlockReference\n2\nDoor\n10\n10\n20\n0\n30\n0\n41\n2\n42\n2\n43\n1\n50\n45"
        ));
    }

    #[test]
    fn test_array() {
        let mut handles = HandleAllocator::new();
        let mut insert = Insert::new(&mut handles, "Bolt", Vector3::ZERO);
        insert.set_array(3, 2, 5.0, 7.5);
        assert!(insert.to_dxf_string().ends_with("70\n3\n71\n2\n44\n5\n45\n7.5"));
    }
}
