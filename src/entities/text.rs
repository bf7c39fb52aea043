//! Text entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};

/// Text horizontal alignment (group code 72)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    /// Left aligned
    #[default]
    Left = 0,
    /// Center aligned
    Center = 1,
    /// Right aligned
    Right = 2,
    /// Aligned (fit between two points)
    Aligned = 3,
    /// Middle (centered horizontally and vertically)
    Middle = 4,
    /// Fit (fit between two points, adjust height)
    Fit = 5,
}

/// Text vertical alignment (group code 73)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    /// Baseline
    #[default]
    Baseline = 0,
    /// Bottom
    Bottom = 1,
    /// Middle
    Middle = 2,
    /// Top
    Top = 3,
}

/// A single-line text entity
///
/// When either alignment is set, the second alignment point is written
/// too, falling back to the insertion point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// Insertion point (first alignment point)
    pub insertion_point: Vector3,
    /// Text height
    pub height: f64,
    /// Rotation angle in degrees
    pub rotation: Option<f64>,
    /// Width scale factor
    pub width_factor: Option<f64>,
    /// Oblique angle in degrees
    pub oblique_angle: Option<f64>,
    /// Text style name
    pub style: Option<String>,
    /// Horizontal alignment
    pub horizontal_alignment: Option<TextHorizontalAlignment>,
    /// Vertical alignment
    pub vertical_alignment: Option<TextVerticalAlignment>,
    /// Second alignment point
    pub alignment_point: Option<Vector3>,
}

impl Text {
    /// Create a new text entity
    pub fn new(
        handles: &mut HandleAllocator,
        value: impl Into<String>,
        insertion_point: Vector3,
        height: f64,
    ) -> Self {
        Text {
            common: EntityCommon::new(handles),
            value: value.into(),
            insertion_point,
            height,
            rotation: None,
            width_factor: None,
            oblique_angle: None,
            style: None,
            horizontal_alignment: None,
            vertical_alignment: None,
            alignment_point: None,
        }
    }

    /// Set both alignments
    pub fn align(&mut self, horizontal: TextHorizontalAlignment, vertical: TextVerticalAlignment) {
        self.horizontal_alignment = Some(horizontal);
        self.vertical_alignment = Some(vertical);
    }

    fn is_aligned(&self) -> bool {
        self.horizontal_alignment.is_some() || self.vertical_alignment.is_some()
    }
}

impl DxfRecord for Text {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbText");
        writer.write_point3d(10, self.insertion_point);
        writer.write(40, self.height);
        writer.write(1, &self.value);
        writer.write_optional(50, self.rotation);
        writer.write_optional(41, self.width_factor);
        writer.write_optional(51, self.oblique_angle);
        writer.write_optional(7, self.style.as_deref());
        writer.write_optional(72, self.horizontal_alignment.map(|a| a as i16));
        if self.is_aligned() {
            writer.write_point3d(11, self.alignment_point.unwrap_or(self.insertion_point));
        }
        writer.write_subclass("AcDbText");
        writer.write_optional(73, self.vertical_alignment.map(|a| a as i16));
        self.common.write_extended_data(writer);
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }
}
