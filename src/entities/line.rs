//! Line entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// A line segment entity
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// End point
    pub end: Vector3,
    /// Thickness (extrusion in Z direction)
    pub thickness: Option<f64>,
}

impl Line {
    /// Create a new line from start to end
    pub fn new(handles: &mut HandleAllocator, start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::new(handles),
            start,
            end,
            thickness: None,
        }
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }
}

impl DxfRecord for Line {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbLine");
        writer.write_optional(39, self.thickness);
        writer.write_point3d(10, self.start);
        writer.write_point3d(11, self.end);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }
}
