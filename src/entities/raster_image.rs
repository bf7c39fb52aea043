//! Raster image entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Image display flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ImageDisplayFlags: i16 {
        /// No flags.
        const NONE = 0;
        /// Show image.
        const SHOW_IMAGE = 1;
        /// Show image when not aligned with screen.
        const SHOW_NOT_ALIGNED = 2;
        /// Use clipping boundary.
        const USE_CLIPPING_BOUNDARY = 4;
        /// Transparency is on.
        const TRANSPARENCY_ON = 8;
    }
}

/// A raster image placed in the drawing
///
/// The picture itself lives in an IMAGEDEF object; the entity references it
/// together with the IMAGEDEF_REACTOR linking the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Common entity data
    pub common: EntityCommon,
    /// Lower-left corner of the image
    pub insertion_point: Vector3,
    /// Direction and size of one pixel along the image rows
    pub u_vector: Vector3,
    /// Direction and size of one pixel along the image columns
    pub v_vector: Vector3,
    /// Image size in pixels
    pub size: Vector2,
    /// IMAGEDEF object handle
    pub definition: Handle,
    /// IMAGEDEF_REACTOR object handle
    pub definition_reactor: Handle,
    pub flags: ImageDisplayFlags,
    pub clipping: bool,
    /// 0-100
    pub brightness: u8,
    /// 0-100
    pub contrast: u8,
    /// 0-100
    pub fade: u8,
    /// Rectangular clip boundary, pixel coordinates
    pub clip_boundary: [Vector2; 2],
}

impl Image {
    /// Create an image entity
    ///
    /// `scale` is the drawing size of one pixel and `rotation` the angle of
    /// the image rows in degrees.
    pub fn new(
        handles: &mut HandleAllocator,
        insertion_point: Vector3,
        size: Vector2,
        scale: f64,
        rotation: f64,
        definition: Handle,
    ) -> Self {
        let (sin, cos) = rotation.to_radians().sin_cos();
        Image {
            common: EntityCommon::new(handles),
            insertion_point,
            u_vector: Vector3::new(scale * cos, scale * sin, 0.0),
            v_vector: Vector3::new(-scale * sin, scale * cos, 0.0),
            size,
            definition,
            definition_reactor: Handle::NULL,
            flags: ImageDisplayFlags::SHOW_IMAGE
                | ImageDisplayFlags::SHOW_NOT_ALIGNED
                | ImageDisplayFlags::USE_CLIPPING_BOUNDARY,
            clipping: false,
            brightness: 50,
            contrast: 50,
            fade: 0,
            clip_boundary: [
                Vector2::new(-0.5, -0.5),
                Vector2::new(size.x - 0.5, size.y - 0.5),
            ],
        }
    }
}

impl DxfRecord for Image {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbRasterImage");
        writer.write(90, 0i32);
        writer.write_point3d(10, self.insertion_point);
        writer.write_point3d(11, self.u_vector);
        writer.write_point3d(12, self.v_vector);
        writer.write_point2d(13, self.size);
        writer.write(340, self.definition);
        writer.write(70, self.flags.bits());
        writer.write(280, self.clipping);
        writer.write(281, self.brightness);
        writer.write(282, self.contrast);
        writer.write(283, self.fade);
        writer.write(360, self.definition_reactor);
        // rectangular clip
        writer.write(71, 1i16);
        writer.write(91, self.clip_boundary.len());
        for vertex in &self.clip_boundary {
            writer.write_point2d(14, *vertex);
        }
        self.common.write_extended_data(writer);
    }
}

impl Entity for Image {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "IMAGE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrotated_vectors() {
        let mut handles = HandleAllocator::new();
        let image = Image::new(
            &mut handles,
            Vector3::ZERO,
            Vector2::new(640.0, 480.0),
            0.5,
            0.0,
            Handle::new(0x30),
        );
        assert_eq!(image.u_vector, Vector3::new(0.5, 0.0, 0.0));
        assert_eq!(image.v_vector, Vector3::new(0.0, 0.5, 0.0));
        assert_eq!(image.clip_boundary[1], Vector2::new(639.5, 479.5));
    }

    #[test]
    fn test_image_references() {
        let mut handles = HandleAllocator::new();
        let mut image = Image::new(
            &mut handles,
            Vector3::ZERO,
            Vector2::new(10.0, 20.0),
            1.0,
            90.0,
            Handle::new(0x30),
        );
        image.definition_reactor = Handle::new(0x31);
        let output = image.to_dxf_string();
        assert!(output.contains("13\n10\n23\n20\n340\n30\n70\n7\n280\n0\n281\n50\n282\n50\n283\n0\n360\n31"));
        assert!(output.ends_with("71\n1\n91\n2\n14\n-0.5\n24\n-0.5\n14\n9.5\n24\n19.5"));
    }
}
