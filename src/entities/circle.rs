//! Circle entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A circle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: Option<f64>,
}

impl Circle {
    /// Create a new circle
    pub fn new(handles: &mut HandleAllocator, center: Vector3, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(handles),
            center,
            radius,
            thickness: None,
        }
    }

    /// Get the diameter
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

impl DxfRecord for Circle {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbCircle");
        writer.write_optional(39, self.thickness);
        writer.write_point3d(10, self.center);
        writer.write(40, self.radius);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }
}
