//! 3D polyline entity with its vertex records

use super::{Entity, EntityCommon, Seqend};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i16 {
        /// No flags
        const NONE = 0;
        /// Closed polyline (or mesh closed in M direction)
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Mesh closed in N direction
        const CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Linetype pattern generated continuously around vertices
        const CONTINUOUS_LINETYPE = 128;
    }
}

/// Vertex flag marking a 3D polyline vertex
const VERTEX_3D_POLYLINE: i16 = 32;

/// A vertex of a [`Polyline3D`]
///
/// Vertices are self-contained records with their own handle. Their owner
/// is the polyline and their layer follows the polyline's.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex3D {
    handle: Handle,
    /// Vertex location
    pub location: Vector3,
}

impl Vertex3D {
    /// Create a vertex with a fresh handle
    pub fn new(handles: &mut HandleAllocator, location: Vector3) -> Self {
        Vertex3D {
            handle: handles.next(),
            location,
        }
    }

    /// Vertex handle
    pub fn handle(&self) -> Handle {
        self.handle
    }

    fn write_tags(&self, writer: &mut TagsManager, polyline: &EntityCommon) {
        writer.write_entity_type("VERTEX");
        writer.write_handle(self.handle);
        writer.write(330, polyline.handle);
        writer.write_subclass("AcDbEntity");
        writer.write_layer(polyline.layer());
        writer.write_subclass("AcDbVertex");
        writer.write_subclass("AcDb3dPolylineVertex");
        writer.write_point3d(10, self.location);
        writer.write(70, VERTEX_3D_POLYLINE);
    }
}

/// A 3D polyline: header record, one VERTEX record per point, then SEQEND
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline3D {
    /// Common entity data
    pub common: EntityCommon,
    /// Flags, [`PolylineFlags::POLYLINE_3D`] is always written
    pub flags: PolylineFlags,
    vertices: Vec<Vertex3D>,
    seqend: Seqend,
}

impl Polyline3D {
    /// Create a polyline through the given points
    ///
    /// The polyline takes its handle first, then each vertex in order, then
    /// the sequence end.
    pub fn new(handles: &mut HandleAllocator, points: &[Vector3], closed: bool) -> Self {
        let common = EntityCommon::new(handles);
        let vertices = points
            .iter()
            .map(|p| Vertex3D::new(handles, *p))
            .collect();
        let seqend = Seqend::new(handles);
        let mut flags = PolylineFlags::POLYLINE_3D;
        flags.set(PolylineFlags::CLOSED, closed);
        Polyline3D {
            common,
            flags,
            vertices,
            seqend,
        }
    }

    /// Append a vertex
    ///
    /// The vertex is emitted before the sequence end even though its handle
    /// is newer.
    pub fn add_vertex(&mut self, handles: &mut HandleAllocator, location: Vector3) -> Handle {
        let vertex = Vertex3D::new(handles, location);
        let handle = vertex.handle();
        self.vertices.push(vertex);
        handle
    }

    /// Get the vertices
    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    /// Sequence end sentinel
    pub fn seqend(&self) -> &Seqend {
        &self.seqend
    }

    /// Check if the polyline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}

impl DxfRecord for Polyline3D {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDb3dPolyline");
        // vertices follow
        writer.write(66, 1i16);
        writer.write_point3d(10, Vector3::ZERO);
        writer.write(70, (self.flags | PolylineFlags::POLYLINE_3D).bits());
        self.common.write_extended_data(writer);
        for vertex in &self.vertices {
            vertex.write_tags(writer, &self.common);
        }
        self.seqend.write_tags(writer, &self.common);
    }
}

impl Entity for Polyline3D {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }
}
