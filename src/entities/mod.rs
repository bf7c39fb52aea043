//! CAD entity types and traits

use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Color, Handle, HandleAllocator};
use crate::xdata::{ApplicationDefined, ExtendedData};
use std::fmt;

pub mod point;
pub mod line;
pub mod circle;
pub mod arc;
pub mod ellipse;
pub mod lwpolyline;
pub mod polyline3d;
pub mod seqend;
pub mod text;
pub mod insert;
pub mod face3d;
pub mod spline;
pub mod hatch;
pub mod raster_image;
pub mod dimension;
pub mod block;

pub use point::Point;
pub use line::Line;
pub use circle::Circle;
pub use arc::Arc;
pub use ellipse::Ellipse;
pub use lwpolyline::{LwPolyline, LwPolylineFlags, LwVertex, RectangleCorners};
pub use polyline3d::{Polyline3D, PolylineFlags, Vertex3D};
pub use seqend::Seqend;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};
pub use insert::Insert;
pub use face3d::{Face3D, InvisibleEdgeFlags};
pub use spline::{Spline, SplineFlags};
pub use hatch::*;
pub use raster_image::{Image, ImageDisplayFlags};
pub use dimension::*;
pub use block::{Block, BlockEnd, BlockFlags};

/// Base trait for all CAD entities
///
/// Emission comes from the [`DxfRecord`] supertrait. Every implementation
/// starts its `write_tags` with [`EntityCommon::write_base`], then writes its
/// subclass marker and fields, and ends with
/// [`EntityCommon::write_extended_data`].
pub trait Entity: DxfRecord + fmt::Debug {
    /// Shared entity data
    fn common(&self) -> &EntityCommon;

    /// Shared entity data, mutably
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Record name written with group code 0
    fn entity_type(&self) -> &'static str;

    /// Get the entity's unique handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Handle of the container the entity is attached to
    fn owner(&self) -> Option<Handle> {
        self.common().owner
    }

    /// Link the entity to its container
    fn set_owner(&mut self, owner: Handle) {
        self.common_mut().owner = Some(owner);
    }

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        self.common().layer()
    }

    /// Set the entity's layer name
    fn set_layer(&mut self, layer: String) {
        self.common_mut().layer = Some(layer);
    }
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Owning container (block record) handle, set when attached
    pub owner: Option<Handle>,
    /// Layer name, `None` writes the default layer "0"
    pub layer: Option<String>,
    /// Line type name
    pub line_type: Option<String>,
    /// Color
    pub color: Option<Color>,
    /// Line type scale
    pub line_type_scale: Option<f64>,
    /// Visibility flag
    pub invisible: bool,
    /// Line weight in 1/100 mm
    pub line_weight: Option<i16>,
    /// Persistent reactors
    pub reactors: ApplicationDefined,
    /// Extended data (XDATA)
    pub extended_data: ExtendedData,
}

impl EntityCommon {
    /// Layer used when none is set
    pub const DEFAULT_LAYER: &'static str = "0";

    /// Create common entity data with a fresh handle
    pub fn new(handles: &mut HandleAllocator) -> Self {
        EntityCommon {
            handle: handles.next(),
            owner: None,
            layer: None,
            line_type: None,
            color: None,
            line_type_scale: None,
            invisible: false,
            line_weight: None,
            reactors: ApplicationDefined::reactors(),
            extended_data: ExtendedData::new(),
        }
    }

    /// Create with a specific layer
    pub fn with_layer(handles: &mut HandleAllocator, layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: Some(layer.into()),
            ..Self::new(handles)
        }
    }

    /// Effective layer name
    pub fn layer(&self) -> &str {
        self.layer.as_deref().unwrap_or(Self::DEFAULT_LAYER)
    }

    /// Write the entity base: record name, handle, owner, reactors,
    /// `AcDbEntity` marker, layer and the optional common properties.
    pub fn write_base(&self, writer: &mut TagsManager, entity_type: &str) {
        self.write_header(writer, entity_type);
        writer.write_optional(6, self.line_type.as_deref());
        if let Some(color) = self.color {
            writer.write(62, color.aci());
            writer.write_optional(420, color.true_color());
        }
        writer.write_optional(48, self.line_type_scale);
        if self.invisible {
            writer.write(60, 1i16);
        }
        writer.write_optional(370, self.line_weight);
    }

    /// Write the entity base up to and including the layer, without the
    /// optional common properties
    ///
    /// Used by records whose fixed order has no room for them (BLOCK).
    pub fn write_header(&self, writer: &mut TagsManager, entity_type: &str) {
        writer.write_entity_type(entity_type);
        writer.write_handle(self.handle);
        writer.write_optional(330, self.owner);
        self.reactors.write_tags(writer);
        writer.write_subclass("AcDbEntity");
        writer.write_layer(self.layer());
    }

    /// Write the extended data that closes an entity record
    pub fn write_extended_data(&self, writer: &mut TagsManager) {
        self.extended_data.write_tags(writer);
    }
}
