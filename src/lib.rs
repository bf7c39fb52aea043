//! # dxfwriter
//!
//! A pure Rust library for building CAD drawings in memory and writing them
//! as ASCII DXF.
//!
//! ## Features
//!
//! - Symbol tables (layers, line types, text styles, dimension styles, block records)
//! - Blocks, block references and model space entities
//! - Polylines, splines, hatches, dimensions and raster images
//! - Extended data and application-defined groups
//! - Deterministic output: the same document always renders the same text
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfwriter::{Color, Document, Line, Vector3};
//!
//! let mut doc = Document::new();
//! doc.add_layer("Walls", Color::RED, "Continuous")?;
//! doc.set_current_layer("Walls")?;
//!
//! let line = Line::new(doc.handles(), Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
//! doc.add_entity(line);
//!
//! let text = doc.to_dxf_string();
//! assert!(text.ends_with("0\nEOF"));
//! # Ok::<(), dxfwriter::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `DxfRecord` - Anything that emits itself as a run of tags
//! - `Entity` - Trait for graphical entities
//! - `TableEntry` - Trait for table entries
//! - `Document` - Central document structure, owner of the handle allocator

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod types;
pub mod tables;
pub mod header;
pub mod document;
pub mod io;
pub mod xdata;
pub mod objects;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, DxfVersion, Handle, HandleAllocator, Units, Vector2, Vector3};

pub use document::{Document, ImageOptions};
pub use header::Header;
pub use io::dxf::{DxfRecord, Tag, TagValue, TagsManager};
pub use io::{write_dxf, DxfWriter};
pub use tables::TableEntry;
pub use xdata::{ApplicationDefined, ExtendedData, XDataValue};

// Re-export entity types
pub use entities::{
    AlignedDimension, Arc, Block, Circle, DiameterDimension, Ellipse, Entity, Face3D, Hatch,
    Image, Insert, Line, LinearDimension, LwPolyline, Point, Polyline3D, RadialDimension, Spline,
    Text,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
