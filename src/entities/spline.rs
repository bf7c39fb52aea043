//! Spline entity

use super::{Entity, EntityCommon};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{HandleAllocator, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Spline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i16 {
        const NONE = 0;
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A NURBS curve
///
/// Knots default to a clamped uniform vector sized for the control points
/// and degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Curve degree
    pub degree: i16,
    /// Flags
    pub flags: SplineFlags,
    /// Control points
    pub control_points: Vec<Vector3>,
    /// Fit points
    pub fit_points: Vec<Vector3>,
    /// Knot vector
    pub knots: Vec<f64>,
    /// Control point weights, empty for a non-rational curve
    pub weights: Vec<f64>,
    /// Normal vector of a planar spline
    pub normal: Option<Vector3>,
}

impl Spline {
    /// Knot tolerance (group code 42)
    pub const KNOT_TOLERANCE: f64 = 0.0000001;
    /// Control point tolerance (group code 43)
    pub const CONTROL_POINT_TOLERANCE: f64 = 0.0000001;
    /// Fit tolerance (group code 44)
    pub const FIT_TOLERANCE: f64 = 0.0000000001;

    /// Create a spline from control points with clamped uniform knots
    ///
    /// The degree is capped at `control_points - 1`, the highest a curve
    /// through that many points can have.
    pub fn new(handles: &mut HandleAllocator, control_points: Vec<Vector3>, degree: i16) -> Self {
        let max_degree = i16::try_from(control_points.len().saturating_sub(1)).unwrap_or(i16::MAX);
        let degree = degree.clamp(0, max_degree);
        let knots = clamped_knots(control_points.len(), degree as usize);
        Spline {
            common: EntityCommon::new(handles),
            degree,
            flags: SplineFlags::NONE,
            control_points,
            fit_points: Vec::new(),
            knots,
            weights: Vec::new(),
            normal: None,
        }
    }

    /// Create a spline with explicit knots
    pub fn with_knots(
        handles: &mut HandleAllocator,
        control_points: Vec<Vector3>,
        degree: i16,
        knots: Vec<f64>,
    ) -> Self {
        Spline {
            knots,
            ..Self::new(handles, control_points, degree)
        }
    }

    /// Set control point weights, marking the spline rational
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.flags.set(SplineFlags::RATIONAL, !weights.is_empty());
        self.weights = weights;
    }
}

/// `degree + 1` zeros, the interior knots 1, 2, ..., then `degree + 1`
/// copies of the last value: `control_points + degree + 1` knots in all.
/// `degree` must be below `control_points`.
fn clamped_knots(control_points: usize, degree: usize) -> Vec<f64> {
    if control_points == 0 {
        return Vec::new();
    }
    let spans = control_points.saturating_sub(degree);
    let mut knots = Vec::with_capacity(control_points + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree + 1));
    knots.extend((1..spans).map(|k| k as f64));
    knots.extend(std::iter::repeat(spans as f64).take(degree + 1));
    knots
}

impl DxfRecord for Spline {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, self.entity_type());
        writer.write_subclass("AcDbSpline");
        writer.write_optional_point3d(210, self.normal);
        writer.write(70, self.flags.bits());
        writer.write(71, self.degree);
        writer.write(72, self.knots.len());
        writer.write(73, self.control_points.len());
        writer.write(74, self.fit_points.len());
        writer.write(42, Self::KNOT_TOLERANCE);
        writer.write(43, Self::CONTROL_POINT_TOLERANCE);
        writer.write(44, Self::FIT_TOLERANCE);
        for knot in &self.knots {
            writer.write(40, *knot);
        }
        for weight in &self.weights {
            writer.write(41, *weight);
        }
        for point in &self.control_points {
            writer.write_point3d(10, *point);
        }
        for point in &self.fit_points {
            writer.write_point3d(11, *point);
        }
        self.common.write_extended_data(writer);
    }
}

impl Entity for Spline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type(&self) -> &'static str {
        "SPLINE"
    }
}
