//! Arc entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A circular arc, angles in degrees counter-clockwise from the X axis
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: Option<f64>,
}

impl Arc {
    /// Create a new arc
    pub fn new(
        handles: &mut HandleAllocator,
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            common: EntityCommon::new(handles),
            center,
            radius,
            start_angle,
            end_angle,
            thickness: None,
        }
    }

    /// Sweep angle in degrees, always in `[0, 360)`
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(360.0)
    }
}

impl DxfRecord for Arc {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbCircle");
        writer.write_optional(39, self.thickness);
        writer.write_point3d(10, self.center);
        writer.write(40, self.radius);
        writer.write_subclass("AcDbArc");
        writer.write(50, self.start_angle);
        writer.write(51, self.end_angle);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ARC"
    }
}
