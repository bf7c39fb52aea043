//! Test document builders.
//!
//! `create_all_entities_document()` produces a document holding one instance
//! of every entity kind the library writes, plus a user block and an image,
//! laid out on a grid.

#![allow(dead_code)]

use dxfwriter::entities::*;
use dxfwriter::{Color, Document, ImageOptions, Vector2, Vector3};

/// Name of the user block defined by [`create_all_entities_document`]
pub const BLOCK_NAME: &str = "Marker";

/// Create a document containing every supported entity kind
pub fn create_all_entities_document() -> Document {
    let mut doc = Document::new();
    doc.add_layer("Geometry", Color::GREEN, "Continuous").unwrap();
    doc.add_line_type("Dashed", "Dashed __ __ __", vec![0.5, -0.25]).unwrap();
    doc.set_current_layer("Geometry").unwrap();

    let sp = 25.0;

    // Row 1 - basic geometry
    let point = Point::from_coords(doc.handles(), 0.0, 0.0, 0.0);
    doc.add_entity(point);

    let line = Line::new(doc.handles(), Vector3::new(sp, 0.0, 0.0), Vector3::new(sp + 10.0, 10.0, 0.0));
    doc.add_entity(line);

    let mut circle = Circle::new(doc.handles(), Vector3::new(2.0 * sp, 0.0, 0.0), 5.0);
    circle.common.color = Some(Color::RED);
    doc.add_entity(circle);

    let arc = Arc::new(doc.handles(), Vector3::new(3.0 * sp, 0.0, 0.0), 5.0, 0.0, 180.0);
    doc.add_entity(arc);

    let ellipse = Ellipse::new(
        doc.handles(),
        Vector3::new(4.0 * sp, 0.0, 0.0),
        Vector3::new(8.0, 0.0, 0.0),
        0.5,
    );
    doc.add_entity(ellipse);

    // Row 2 - polylines and curves
    let rectangle = LwPolyline::rectangle(
        doc.handles(),
        Vector2::new(0.0, sp + 10.0),
        Vector2::new(10.0, sp),
        RectangleCorners::Fillet(1.0),
    );
    doc.add_entity(rectangle);

    let polyline = Polyline3D::new(
        doc.handles(),
        &[
            Vector3::new(sp, sp, 0.0),
            Vector3::new(sp + 5.0, sp + 5.0, 5.0),
            Vector3::new(sp + 10.0, sp, 0.0),
        ],
        false,
    );
    doc.add_entity(polyline);

    let spline = Spline::new(
        doc.handles(),
        vec![
            Vector3::new(2.0 * sp, sp, 0.0),
            Vector3::new(2.0 * sp + 3.0, sp + 8.0, 0.0),
            Vector3::new(2.0 * sp + 7.0, sp - 2.0, 0.0),
            Vector3::new(2.0 * sp + 10.0, sp + 4.0, 0.0),
        ],
        3,
    );
    doc.add_entity(spline);

    let mut text = Text::new(doc.handles(), "Label", Vector3::new(3.0 * sp, sp, 0.0), 2.5);
    text.align(TextHorizontalAlignment::Center, TextVerticalAlignment::Middle);
    text.alignment_point = Some(Vector3::new(3.0 * sp, sp, 0.0));
    doc.add_entity(text);

    let face = Face3D::triangle(
        doc.handles(),
        Vector3::new(4.0 * sp, sp, 0.0),
        Vector3::new(4.0 * sp + 10.0, sp, 0.0),
        Vector3::new(4.0 * sp + 5.0, sp + 8.0, 2.0),
    );
    doc.add_entity(face);

    // Row 3 - hatch and dimensions
    let mut boundary = HatchBoundaryPaths::new();
    boundary.add_polyline_path(
        vec![
            Vector2::new(0.0, 2.0 * sp).into(),
            Vector2::new(10.0, 2.0 * sp).into(),
            Vector2::new(10.0, 2.0 * sp + 10.0).into(),
            Vector2::new(0.0, 2.0 * sp + 10.0).into(),
        ],
        BoundaryPathFlags::EXTERNAL,
    );
    let hatch = Hatch::solid(doc.handles(), boundary);
    doc.add_entity(hatch);

    let aligned = AlignedDimension::new(
        doc.handles(),
        Vector3::new(sp, 2.0 * sp, 0.0),
        Vector3::new(sp + 10.0, 2.0 * sp, 0.0),
        3.0,
    );
    doc.add_entity(aligned);

    let linear = LinearDimension::new(
        doc.handles(),
        Vector3::new(2.0 * sp, 2.0 * sp, 0.0),
        Vector3::new(2.0 * sp + 10.0, 2.0 * sp + 4.0, 0.0),
        0.0,
        3.0,
    );
    doc.add_entity(linear);

    let radial = RadialDimension::new(
        doc.handles(),
        Vector3::new(3.0 * sp, 2.0 * sp, 0.0),
        Vector3::new(3.0 * sp + 5.0, 2.0 * sp, 0.0),
        2.0,
    );
    doc.add_entity(radial);

    let diameter = DiameterDimension::new(
        doc.handles(),
        Vector3::new(4.0 * sp - 5.0, 2.0 * sp, 0.0),
        Vector3::new(4.0 * sp + 5.0, 2.0 * sp, 0.0),
        2.0,
    );
    doc.add_entity(diameter);

    // Row 4 - block reference and image
    doc.add_block(BLOCK_NAME).unwrap();
    let cross_a = Line::new(doc.handles(), Vector3::new(-1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    let cross_b = Line::new(doc.handles(), Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    doc.add_entity_to_block(BLOCK_NAME, cross_a).unwrap();
    doc.add_entity_to_block(BLOCK_NAME, cross_b).unwrap();

    let insert = Insert::new(doc.handles(), BLOCK_NAME, Vector3::new(0.0, 3.0 * sp, 0.0));
    doc.add_entity(insert);

    doc.add_image(ImageOptions {
        path: "images/site.png".to_string(),
        name: "site".to_string(),
        insertion_point: Vector3::new(sp, 3.0 * sp, 0.0),
        size: Vector2::new(640.0, 480.0),
        scale: 0.01,
        rotation: 30.0,
    })
    .unwrap();

    doc
}
