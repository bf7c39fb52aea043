//! ImageDefinition object - Raster image definition

use super::ObjectCommon;
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator, Vector2};

/// Resolution unit for image definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionUnit {
    /// No units specified
    #[default]
    None = 0,
    /// Centimeters
    Centimeters = 2,
    /// Inches
    Inches = 5,
}

/// Image definition reactor
///
/// Links an image definition to an image entity that references it. The
/// image entity is its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDefinitionReactor {
    pub common: ObjectCommon,
}

impl ImageDefinitionReactor {
    /// Object type name
    pub const OBJECT_TYPE: &'static str = "IMAGEDEF_REACTOR";

    /// Create a new reactor for an image entity
    pub fn new(handles: &mut HandleAllocator, image: Handle) -> Self {
        ImageDefinitionReactor {
            common: ObjectCommon::new(handles, image),
        }
    }

    pub fn handle(&self) -> Handle {
        self.common.handle
    }
}

impl DxfRecord for ImageDefinitionReactor {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::OBJECT_TYPE);
        writer.write_subclass("AcDbRasterImageDefReactor");
        // class version
        writer.write(90, 2i32);
        writer.write(330, self.common.owner);
    }
}

/// Image definition object
///
/// Holds the path and pixel size of a picture placed by one or more IMAGE
/// entities. It is owned by the ACAD_IMAGE_DICT dictionary and lists its
/// reactors among the persistent reactors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDefinition {
    pub common: ObjectCommon,
    /// Path to the image file
    pub file_name: String,
    /// Image size in pixels
    pub size: Vector2,
    /// Default size of one pixel in resolution units
    pub pixel_size: Vector2,
    pub is_loaded: bool,
    pub resolution_unit: ResolutionUnit,
}

impl ImageDefinition {
    /// Object type name
    pub const OBJECT_TYPE: &'static str = "IMAGEDEF";

    /// Create a new image definition
    pub fn new(handles: &mut HandleAllocator, owner: Handle, file_name: impl Into<String>, size: Vector2) -> Self {
        ImageDefinition {
            common: ObjectCommon::new(handles, owner),
            file_name: file_name.into(),
            size,
            pixel_size: Vector2::new(1.0, 1.0),
            is_loaded: true,
            resolution_unit: ResolutionUnit::None,
        }
    }

    pub fn handle(&self) -> Handle {
        self.common.handle
    }

    /// Register a reactor
    pub fn add_reactor(&mut self, reactor: Handle) {
        self.common.reactors.add(330, reactor);
    }
}

impl DxfRecord for ImageDefinition {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::OBJECT_TYPE);
        writer.write_subclass("AcDbRasterImageDef");
        writer.write(90, 0i32);
        writer.write(1, &self.file_name);
        writer.write_point2d(10, self.size);
        writer.write_point2d(11, self.pixel_size);
        writer.write(280, self.is_loaded);
        writer.write(281, self.resolution_unit as i16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_lists_reactors() {
        let mut handles = HandleAllocator::new();
        let mut definition = ImageDefinition::new(&mut handles, Handle::new(0x20), "logo.png", Vector2::new(64.0, 32.0));
        definition.add_reactor(Handle::new(0x22));
        assert_eq!(
            definition.to_dxf_string(),
            "0\nIMAGEDEF\n5\n1\n102\n{ACAD_REACTORS\n330\n22\n102\n}\n330\n20\n\
             100\nAcDbRasterImageDef\n90\n0\n1\nlogo.png\n10\n64\n20\n32\n11\n1\n21\n1\n280\n1\n281\n0"
        );
    }

    #[test]
    fn test_reactor_points_at_image() {
        let mut handles = HandleAllocator::new();
        let reactor = ImageDefinitionReactor::new(&mut handles, Handle::new(0x21));
        assert_eq!(
            reactor.to_dxf_string(),
            "0\nIMAGEDEF_REACTOR\n5\n1\n330\n21\n100\nAcDbRasterImageDefReactor\n90\n2\n330\n21"
        );
    }
}
