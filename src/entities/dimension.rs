//! Dimension entities

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector2, Vector3};

/// Dimension type values (group code 70, low bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionType {
    Rotated = 0,
    Aligned = 1,
    Angular = 2,
    Diameter = 3,
    Radius = 4,
    Angular3Point = 5,
    Ordinate = 6,
}

impl DimensionType {
    /// Block reference is referenced by this dimension only
    pub const BLOCK_REFERENCE: i16 = 32;
    /// Text has been positioned by the user
    pub const USER_TEXT_LOCATION: i16 = 128;
}

/// Data shared by every dimension kind
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionData {
    /// Common entity data
    pub common: EntityCommon,
    pub dimension_type: DimensionType,
    /// Anonymous block holding the dimension graphics
    pub block_name: Option<String>,
    /// Definition point (meaning depends on the kind)
    pub definition_point: Vector3,
    /// Middle point of the text
    pub text_middle_point: Option<Vector3>,
    /// Attachment point (1 top left .. 9 bottom right)
    pub attachment_point: Option<i16>,
    /// Explicit text, "<>" is the measurement
    pub text: Option<String>,
    /// Text rotation in degrees
    pub text_rotation: Option<f64>,
    /// Dimension style name
    pub style_name: Option<String>,
}

impl DimensionData {
    pub fn new(handles: &mut HandleAllocator, dimension_type: DimensionType, definition_point: Vector3) -> Self {
        DimensionData {
            common: EntityCommon::new(handles),
            dimension_type,
            block_name: None,
            definition_point,
            text_middle_point: None,
            attachment_point: None,
            text: None,
            text_rotation: None,
            style_name: None,
        }
    }

    fn type_flags(&self) -> i16 {
        let mut flags = self.dimension_type as i16 | DimensionType::BLOCK_REFERENCE;
        if self.text_middle_point.is_some() {
            flags |= DimensionType::USER_TEXT_LOCATION;
        }
        flags
    }

    /// Write the entity base and the `AcDbDimension` group
    pub fn write_base(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, "DIMENSION");
        writer.write_subclass("AcDbDimension");
        writer.write_optional(2, self.block_name.as_deref());
        writer.write_point3d(10, self.definition_point);
        writer.write_optional_point3d(11, self.text_middle_point);
        writer.write(70, self.type_flags());
        writer.write_optional(71, self.attachment_point);
        writer.write_optional(1, self.text.as_deref());
        writer.write_optional(53, self.text_rotation);
        writer.write_optional(3, self.style_name.as_deref());
    }
}

/// Point offset perpendicular to the direction `from -> to`, measured from `to`
fn offset_from(from: Vector3, to: Vector3, offset: f64) -> Vector3 {
    let direction = (to - from).xy();
    let length = direction.length();
    if length == 0.0 {
        return to;
    }
    let normal = Vector2::new(-direction.y, direction.x) * (offset / length);
    to + Vector3::from(normal)
}

macro_rules! impl_dimension_entity {
    ($type:ty) => {
        impl Entity for $type {
            fn common(&self) -> &EntityCommon {
                &self.data.common
            }

            fn common_mut(&mut self) -> &mut EntityCommon {
                &mut self.data.common
            }

            fn entity_type(&self) -> &'static str {
                "DIMENSION"
            }
        }
    };
}

/// Distance between two points measured along the line joining them
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedDimension {
    pub data: DimensionData,
    /// First extension line origin
    pub first_point: Vector3,
    /// Second extension line origin
    pub second_point: Vector3,
}

impl AlignedDimension {
    /// Create an aligned dimension with its dimension line `offset` away
    /// from the measured points
    pub fn new(handles: &mut HandleAllocator, first_point: Vector3, second_point: Vector3, offset: f64) -> Self {
        let definition_point = offset_from(first_point, second_point, offset);
        AlignedDimension {
            data: DimensionData::new(handles, DimensionType::Aligned, definition_point),
            first_point,
            second_point,
        }
    }

    pub fn measurement(&self) -> f64 {
        (self.second_point - self.first_point).length()
    }
}

impl DxfRecord for AlignedDimension {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.data.write_base(writer);
        writer.write_subclass("AcDbAlignedDimension");
        writer.write_point3d(13, self.first_point);
        writer.write_point3d(14, self.second_point);
        self.data.common.write_extended_data(writer);
    }
}

impl_dimension_entity!(AlignedDimension);

/// Distance projected onto a direction (horizontal, vertical or rotated)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDimension {
    pub data: DimensionData,
    pub first_point: Vector3,
    pub second_point: Vector3,
    /// Direction of the dimension line in degrees
    pub angle: f64,
}

impl LinearDimension {
    /// Create a linear dimension whose dimension line runs at `angle`,
    /// `offset` away from the second point
    pub fn new(
        handles: &mut HandleAllocator,
        first_point: Vector3,
        second_point: Vector3,
        angle: f64,
        offset: f64,
    ) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        let direction = Vector3::new(cos, sin, 0.0);
        let definition_point = offset_from(second_point - direction, second_point, offset);
        LinearDimension {
            data: DimensionData::new(handles, DimensionType::Rotated, definition_point),
            first_point,
            second_point,
            angle,
        }
    }

    pub fn measurement(&self) -> f64 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let delta = self.second_point - self.first_point;
        (delta.x * cos + delta.y * sin).abs()
    }
}

impl DxfRecord for LinearDimension {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.data.write_base(writer);
        writer.write_subclass("AcDbAlignedDimension");
        writer.write_point3d(13, self.first_point);
        writer.write_point3d(14, self.second_point);
        writer.write(50, self.angle);
        writer.write_subclass("AcDbRotatedDimension");
        self.data.common.write_extended_data(writer);
    }
}

impl_dimension_entity!(LinearDimension);

/// Radius of an arc or circle
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDimension {
    pub data: DimensionData,
    /// Point on the curve the leader points at
    pub chord_point: Vector3,
    pub leader_length: f64,
}

impl RadialDimension {
    /// `center` becomes the definition point
    pub fn new(handles: &mut HandleAllocator, center: Vector3, chord_point: Vector3, leader_length: f64) -> Self {
        RadialDimension {
            data: DimensionData::new(handles, DimensionType::Radius, center),
            chord_point,
            leader_length,
        }
    }
}

impl DxfRecord for RadialDimension {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.data.write_base(writer);
        writer.write_subclass("AcDbRadialDimension");
        writer.write_point3d(15, self.chord_point);
        writer.write(40, self.leader_length);
        self.data.common.write_extended_data(writer);
    }
}

impl_dimension_entity!(RadialDimension);

/// Diameter of an arc or circle
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterDimension {
    pub data: DimensionData,
    /// Far chord point, the near one is the definition point
    pub far_chord_point: Vector3,
    pub leader_length: f64,
}

impl DiameterDimension {
    pub fn new(
        handles: &mut HandleAllocator,
        near_chord_point: Vector3,
        far_chord_point: Vector3,
        leader_length: f64,
    ) -> Self {
        DiameterDimension {
            data: DimensionData::new(handles, DimensionType::Diameter, near_chord_point),
            far_chord_point,
            leader_length,
        }
    }
}

impl DxfRecord for DiameterDimension {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.data.write_base(writer);
        writer.write_subclass("AcDbDiametricDimension");
        writer.write_point3d(15, self.far_chord_point);
        writer.write(40, self.leader_length);
        self.data.common.write_extended_data(writer);
    }
}

impl_dimension_entity!(DiameterDimension);
