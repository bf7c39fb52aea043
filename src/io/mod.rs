//! I/O module for writing CAD files in DXF format

pub mod dxf;

pub use dxf::{write_dxf, DxfWriter};
