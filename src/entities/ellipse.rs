//! Ellipse entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};
use std::f64::consts::TAU;

/// An ellipse or elliptical arc
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center
    pub major_axis: Vector3,
    /// Ratio of minor axis to major axis
    pub minor_axis_ratio: f64,
    /// Start parameter in radians (0 for a full ellipse)
    pub start_parameter: f64,
    /// End parameter in radians (2π for a full ellipse)
    pub end_parameter: f64,
    /// Extrusion direction
    pub normal: Option<Vector3>,
}

impl Ellipse {
    /// Create a full ellipse
    pub fn new(
        handles: &mut HandleAllocator,
        center: Vector3,
        major_axis: Vector3,
        minor_axis_ratio: f64,
    ) -> Self {
        Ellipse {
            common: EntityCommon::new(handles),
            center,
            major_axis,
            minor_axis_ratio,
            start_parameter: 0.0,
            end_parameter: TAU,
            normal: None,
        }
    }

    /// Create an elliptical arc
    pub fn arc(
        handles: &mut HandleAllocator,
        center: Vector3,
        major_axis: Vector3,
        minor_axis_ratio: f64,
        start_parameter: f64,
        end_parameter: f64,
    ) -> Self {
        Ellipse {
            start_parameter,
            end_parameter,
            ..Self::new(handles, center, major_axis, minor_axis_ratio)
        }
    }

    /// Get the major axis length
    pub fn major_axis_length(&self) -> f64 {
        self.major_axis.length()
    }

    /// Get the minor axis length
    pub fn minor_axis_length(&self) -> f64 {
        self.major_axis_length() * self.minor_axis_ratio
    }
}

impl DxfRecord for Ellipse {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbEllipse");
        writer.write_point3d(10, self.center);
        writer.write_point3d(11, self.major_axis);
        writer.write_optional_point3d(210, self.normal);
        writer.write(40, self.minor_axis_ratio);
        writer.write(41, self.start_parameter);
        writer.write(42, self.end_parameter);
        self.common.write_extended_data(writer);
    }
}

impl Entity for Ellipse {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "ELLIPSE"
    }
}
