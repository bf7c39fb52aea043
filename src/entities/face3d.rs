//! Face3D entity (3D face)

use crate::entities::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Invisible edge flags for Face3D (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InvisibleEdgeFlags: i16 {
        const NONE = 0;
        const FIRST = 1;
        const SECOND = 2;
        const THIRD = 4;
        const FOURTH = 8;
    }
}

/// A 3D face with three or four corners
///
/// A triangle repeats its third corner as the fourth.
#[derive(Debug, Clone, PartialEq)]
pub struct Face3D {
    pub common: EntityCommon,
    pub first_corner: Vector3,
    pub second_corner: Vector3,
    pub third_corner: Vector3,
    pub fourth_corner: Vector3,
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3D {
    /// Create a four-cornered face
    pub fn new(
        handles: &mut HandleAllocator,
        first: Vector3,
        second: Vector3,
        third: Vector3,
        fourth: Vector3,
    ) -> Self {
        Face3D {
            common: EntityCommon::new(handles),
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
            invisible_edges: InvisibleEdgeFlags::NONE,
        }
    }

    /// Create a triangular face
    pub fn triangle(handles: &mut HandleAllocator, first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::new(handles, first, second, third, third)
    }

    pub fn is_triangle(&self) -> bool {
        self.third_corner == self.fourth_corner
    }
}

impl DxfRecord for Face3D {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbFace");
        writer.write_point3d(10, self.first_corner);
        writer.write_point3d(11, self.second_corner);
        writer.write_point3d(12, self.third_corner);
        writer.write_point3d(13, self.fourth_corner);
        if !self.invisible_edges.is_empty() {
            writer.write(70, self.invisible_edges.bits());
        }
        self.common.write_extended_data(writer);
    }
}

impl Entity for Face3D {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "3DFACE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::Tag;

    #[test]
    fn test_triangle() {
        let mut handles = HandleAllocator::new();
        let face = Face3D::triangle(
            &mut handles,
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(face.is_triangle());
        assert!(!face.to_dxf_string().contains("\n70\n"));
    }

    #[test]
    fn test_invisible_edges() {
        let mut handles = HandleAllocator::new();
        let mut face = Face3D::new(
            &mut handles,
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        face.invisible_edges = InvisibleEdgeFlags::FIRST | InvisibleEdgeFlags::THIRD;
        let mut writer = TagsManager::new();
        face.write_tags(&mut writer);
        let last = writer.tags().last().unwrap();
        assert_eq!(last, &Tag::new(70, 5i16));
    }
}
