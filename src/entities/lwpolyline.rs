//! Lightweight polyline entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector2};
use bitflags::bitflags;

bitflags! {
    /// Lightweight polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LwPolylineFlags: i16 {
        /// No flags
        const NONE = 0;
        /// Closed polyline
        const CLOSED = 1;
        /// Linetype pattern generated continuously around vertices
        const PLINEGEN = 128;
    }
}

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location (2D, the polyline's elevation gives Z)
    pub location: Vector2,
    /// Starting width
    pub start_width: Option<f64>,
    /// Ending width
    pub end_width: Option<f64>,
    /// Bulge (tangent of 1/4 the included angle, negative is clockwise)
    pub bulge: Option<f64>,
}

impl LwVertex {
    /// Create a new vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            start_width: None,
            end_width: None,
            bulge: None,
        }
    }

    /// Create a vertex with a bulge
    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex {
            bulge: Some(bulge),
            ..Self::new(location)
        }
    }
}

impl From<Vector2> for LwVertex {
    fn from(location: Vector2) -> Self {
        LwVertex::new(location)
    }
}

/// Corner treatment for [`LwPolyline::rectangle`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RectangleCorners {
    /// Sharp corners
    #[default]
    Square,
    /// Rounded corners with the given radius
    Fillet(f64),
    /// Cut corners, distances measured along the incoming and outgoing sides
    Chamfer(f64, f64),
}

/// A lightweight polyline entity
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices
    pub vertices: Vec<LwVertex>,
    /// Flags
    pub flags: LwPolylineFlags,
    /// Constant width, used instead of per-vertex widths
    pub constant_width: Option<f64>,
    /// Elevation (Z coordinate of every vertex)
    pub elevation: Option<f64>,
    /// Thickness
    pub thickness: Option<f64>,
}

impl LwPolyline {
    /// Create a new polyline
    pub fn new(handles: &mut HandleAllocator, vertices: Vec<LwVertex>) -> Self {
        LwPolyline {
            common: EntityCommon::new(handles),
            vertices,
            flags: LwPolylineFlags::NONE,
            constant_width: None,
            elevation: None,
            thickness: None,
        }
    }

    /// Create a polyline through the given points
    pub fn from_points(handles: &mut HandleAllocator, points: &[Vector2], closed: bool) -> Self {
        let mut polyline = Self::new(handles, points.iter().copied().map(LwVertex::from).collect());
        polyline.set_closed(closed);
        polyline
    }

    /// Create a closed rectangle from two opposite corners
    ///
    /// Vertices run from `top_left` through the top right, bottom right and
    /// bottom left corners. Fillets and chamfers replace each corner with a
    /// pair of vertices.
    pub fn rectangle(
        handles: &mut HandleAllocator,
        top_left: Vector2,
        bottom_right: Vector2,
        corners: RectangleCorners,
    ) -> Self {
        let outline = [
            top_left,
            Vector2::new(bottom_right.x, top_left.y),
            bottom_right,
            Vector2::new(top_left.x, bottom_right.y),
        ];

        let mut vertices = Vec::with_capacity(8);
        for i in 0..outline.len() {
            let prev = outline[(i + outline.len() - 1) % outline.len()];
            let corner = outline[i];
            let next = outline[(i + 1) % outline.len()];
            match corners {
                RectangleCorners::Square => vertices.push(LwVertex::new(corner)),
                RectangleCorners::Fillet(radius) => {
                    let turn = cross(corner - prev, next - corner);
                    // quarter arc: tan(90° / 4)
                    let bulge = (std::f64::consts::PI / 8.0).tan().copysign(turn);
                    vertices.push(LwVertex::with_bulge(toward(corner, prev, radius), bulge));
                    vertices.push(LwVertex::new(toward(corner, next, radius)));
                }
                RectangleCorners::Chamfer(first, second) => {
                    vertices.push(LwVertex::new(toward(corner, prev, first)));
                    vertices.push(LwVertex::new(toward(corner, next, second)));
                }
            }
        }

        let mut polyline = Self::new(handles, vertices);
        polyline.set_closed(true);
        polyline
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, vertex: impl Into<LwVertex>) {
        self.vertices.push(vertex.into());
    }

    /// Check if the polyline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(LwPolylineFlags::CLOSED)
    }

    /// Set whether the polyline is closed
    pub fn set_closed(&mut self, closed: bool) {
        self.flags.set(LwPolylineFlags::CLOSED, closed);
    }
}

fn cross(a: Vector2, b: Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Point at `distance` from `from` in the direction of `to`
fn toward(from: Vector2, to: Vector2, distance: f64) -> Vector2 {
    let direction = to - from;
    let length = direction.length();
    if length == 0.0 {
        return from;
    }
    from + direction * (distance / length)
}

impl DxfRecord for LwPolyline {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbPolyline");
        writer.write(90, self.vertices.len());
        writer.write(70, self.flags.bits());
        writer.write_optional(43, self.constant_width);
        writer.write_optional(38, self.elevation);
        writer.write_optional(39, self.thickness);
        for vertex in &self.vertices {
            writer.write_point2d(10, vertex.location);
            writer.write_optional(40, vertex.start_width);
            writer.write_optional(41, vertex.end_width);
            writer.write_optional(42, vertex.bulge);
        }
        self.common.write_extended_data(writer);
    }
}

impl Entity for LwPolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "LWPOLYLINE"
    }
}
