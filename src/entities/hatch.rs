//! Hatch entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Boundary path type flags (group code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoundaryPathFlags: i32 {
        const DEFAULT = 0;
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// Hatch style (group code 75)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchStyle {
    /// Hatch odd parity areas
    #[default]
    Odd = 0,
    /// Hatch outermost area only
    Outermost = 1,
    /// Hatch through entire area
    Entire = 2,
}

/// Hatch pattern type (group code 76)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatchPatternType {
    UserDefined = 0,
    #[default]
    Predefined = 1,
    Custom = 2,
}

/// Gradient shape names (group code 470)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientType {
    #[default]
    Linear,
    Cylinder,
    InvCylinder,
    Spherical,
    InvSpherical,
    Hemispherical,
    InvHemispherical,
    Curved,
    InvCurved,
}

impl GradientType {
    pub fn name(self) -> &'static str {
        match self {
            GradientType::Linear => "LINEAR",
            GradientType::Cylinder => "CYLINDER",
            GradientType::InvCylinder => "INVCYLINDER",
            GradientType::Spherical => "SPHERICAL",
            GradientType::InvSpherical => "INVSPHERICAL",
            GradientType::Hemispherical => "HEMISPHERICAL",
            GradientType::InvHemispherical => "INVHEMISPHERICAL",
            GradientType::Curved => "CURVED",
            GradientType::InvCurved => "INVCURVED",
        }
    }
}

/// A vertex of a polyline boundary path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryVertex {
    pub location: Vector2,
    pub bulge: Option<f64>,
}

impl From<Vector2> for BoundaryVertex {
    fn from(location: Vector2) -> Self {
        BoundaryVertex { location, bulge: None }
    }
}

/// An edge of an edge boundary path (group code 72 gives the edge type)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryEdge {
    /// Straight segment
    Line { start: Vector2, end: Vector2 },
    /// Circular arc, angles in degrees
    Arc {
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
}

impl BoundaryEdge {
    fn write_tags(&self, writer: &mut TagsManager) {
        match self {
            BoundaryEdge::Line { start, end } => {
                writer.write(72, 1i16);
                writer.write_point2d(10, *start);
                writer.write_point2d(11, *end);
            }
            BoundaryEdge::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                counter_clockwise,
            } => {
                writer.write(72, 2i16);
                writer.write_point2d(10, *center);
                writer.write(40, *radius);
                writer.write(50, *start_angle);
                writer.write(51, *end_angle);
                writer.write(73, *counter_clockwise);
            }
        }
    }
}

/// A single boundary loop
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryPath {
    /// Polyline loop
    Polyline {
        vertices: Vec<BoundaryVertex>,
        closed: bool,
    },
    /// Loop made of line and arc edges
    Edges(Vec<BoundaryEdge>),
}

/// Ordered set of boundary loops with their type flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HatchBoundaryPaths {
    paths: Vec<(BoundaryPath, BoundaryPathFlags)>,
}

impl HatchBoundaryPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closed polyline loop
    pub fn add_polyline_path(&mut self, vertices: Vec<BoundaryVertex>, flags: BoundaryPathFlags) {
        self.paths.push((
            BoundaryPath::Polyline {
                vertices,
                closed: true,
            },
            flags | BoundaryPathFlags::POLYLINE,
        ));
    }

    /// Add an edge loop
    pub fn add_edges_path(&mut self, edges: Vec<BoundaryEdge>, flags: BoundaryPathFlags) {
        self.paths.push((BoundaryPath::Edges(edges), flags));
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl DxfRecord for HatchBoundaryPaths {
    fn write_tags(&self, writer: &mut TagsManager) {
        writer.write(91, self.paths.len());
        for (path, flags) in &self.paths {
            writer.write(92, flags.bits());
            match path {
                BoundaryPath::Polyline { vertices, closed } => {
                    let has_bulge = vertices.iter().any(|v| v.bulge.is_some());
                    writer.write(72, has_bulge);
                    writer.write(73, *closed);
                    writer.write(93, vertices.len());
                    for vertex in vertices {
                        writer.write_point2d(10, vertex.location);
                        if has_bulge {
                            writer.write(42, vertex.bulge.unwrap_or(0.0));
                        }
                    }
                }
                BoundaryPath::Edges(edges) => {
                    writer.write(93, edges.len());
                    for edge in edges {
                        edge.write_tags(writer);
                    }
                }
            }
            // no source boundary objects
            writer.write(97, 0i32);
        }
    }
}

/// Pattern fill
#[derive(Debug, Clone, PartialEq)]
pub struct HatchPattern {
    pub name: String,
    /// Pattern angle in degrees
    pub angle: f64,
    pub scale: f64,
    pub double: bool,
}

impl HatchPattern {
    pub const SOLID: &'static str = "SOLID";

    pub fn new(name: impl Into<String>) -> Self {
        HatchPattern {
            name: name.into(),
            angle: 0.0,
            scale: 1.0,
            double: false,
        }
    }

    pub fn solid() -> Self {
        Self::new(Self::SOLID)
    }

    pub fn is_solid(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::SOLID)
    }
}

/// Gradient fill
#[derive(Debug, Clone, PartialEq)]
pub struct HatchGradient {
    pub gradient_type: GradientType,
    /// First color index
    pub first_color: i16,
    /// Second color index, `None` for a one-color gradient
    pub second_color: Option<i16>,
    /// Gradient angle in degrees
    pub angle: f64,
    /// Centered when zero, shifted otherwise
    pub shift: f64,
    pub tint: f64,
}

impl HatchGradient {
    pub fn new(gradient_type: GradientType, first_color: i16, second_color: Option<i16>) -> Self {
        HatchGradient {
            gradient_type,
            first_color,
            second_color,
            angle: 0.0,
            shift: 0.0,
            tint: 0.0,
        }
    }
}

/// How a hatch is filled
#[derive(Debug, Clone, PartialEq)]
pub enum HatchFill {
    Pattern(HatchPattern),
    Gradient(HatchGradient),
}

impl HatchFill {
    fn is_solid(&self) -> bool {
        match self {
            HatchFill::Pattern(pattern) => pattern.is_solid(),
            HatchFill::Gradient(_) => true,
        }
    }
}

/// A filled or patterned area
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    pub boundary: HatchBoundaryPaths,
    pub fill: HatchFill,
    pub style: HatchStyle,
    pub pattern_type: HatchPatternType,
    /// Elevation of the hatch plane
    pub elevation: f64,
    /// Extrusion direction
    pub normal: Vector3,
}

impl Hatch {
    /// Create a new hatch
    pub fn new(handles: &mut HandleAllocator, boundary: HatchBoundaryPaths, fill: HatchFill) -> Self {
        Hatch {
            common: EntityCommon::new(handles),
            boundary,
            fill,
            style: HatchStyle::Odd,
            pattern_type: HatchPatternType::Predefined,
            elevation: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a solid filled hatch
    pub fn solid(handles: &mut HandleAllocator, boundary: HatchBoundaryPaths) -> Self {
        Self::new(handles, boundary, HatchFill::Pattern(HatchPattern::solid()))
    }
}

impl DxfRecord for Hatch {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbHatch");
        writer.write_point3d(10, Vector3::new(0.0, 0.0, self.elevation));
        writer.write_point3d(210, self.normal);
        let pattern_name = match &self.fill {
            HatchFill::Pattern(pattern) => pattern.name.as_str(),
            HatchFill::Gradient(_) => HatchPattern::SOLID,
        };
        writer.write_name(pattern_name);
        writer.write(70, self.fill.is_solid());
        // not associative
        writer.write(71, 0i16);
        self.boundary.write_tags(writer);
        writer.write(75, self.style as i16);
        writer.write(76, self.pattern_type as i16);
        if let HatchFill::Pattern(pattern) = &self.fill {
            if !pattern.is_solid() {
                writer.write(52, pattern.angle);
                writer.write(41, pattern.scale);
                writer.write(77, pattern.double);
                writer.write(78, 0i16);
            }
        }
        writer.write(98, 0i32);
        if let HatchFill::Gradient(gradient) = &self.fill {
            writer.write(450, 1i32);
            writer.write(451, 0i32);
            writer.write(452, gradient.second_color.is_none());
            writer.write(453, 2i16);
            writer.write(460, gradient.angle.to_radians());
            writer.write(461, gradient.shift);
            writer.write(462, gradient.tint);
            writer.write(463, 0.0);
            writer.write(63, gradient.first_color);
            writer.write(463, 1.0);
            writer.write(63, gradient.second_color.unwrap_or(gradient.first_color));
            writer.write(470, gradient.gradient_type.name());
        }
        self.common.write_extended_data(writer);
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }
}
