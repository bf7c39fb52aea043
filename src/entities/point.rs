//! Point entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A point entity in 3D space
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location of the point
    pub location: Vector3,
    /// Thickness (extrusion in Z direction)
    pub thickness: Option<f64>,
}

impl Point {
    /// Create a new point at a specific location
    pub fn new(handles: &mut HandleAllocator, location: Vector3) -> Self {
        Point {
            common: EntityCommon::new(handles),
            location,
            thickness: None,
        }
    }

    /// Create a new point with coordinates
    pub fn from_coords(handles: &mut HandleAllocator, x: f64, y: f64, z: f64) -> Self {
        Point::new(handles, Vector3::new(x, y, z))
    }
}

impl DxfRecord for Point {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbPoint");
        writer.write_optional(39, self.thickness);
        writer.write_point3d(10, self.location);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POINT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_exact_output() {
        let mut handles = HandleAllocator::new();
        let point = Point::from_coords(&mut handles, 24445787874545.336, 47854548454.54874, 0.14111122215556);
        assert_eq!(
            point.to_dxf_string(),
            "0\nPOINT\n5\n1\n100\nAcDbEntity\n8\n0\n100\nAcDbPoint\n\
             10\n24445787874545.336\n20\n47854548454.54874\n30\n0.14111122215556"
        );
    }

    #[test]
    fn test_point_thickness() {
        let mut handles = HandleAllocator::new();
        let mut point = Point::new(&mut handles, Vector3::ZERO);
        point.thickness = Some(2.0);
        assert!(point.to_dxf_string().contains("AcDbPoint\n39\n2\n10\n0"));
    }
}
