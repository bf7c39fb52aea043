//! DXF (Drawing Exchange Format) tag emission and writing

mod record;
mod tag;
mod tags_manager;
mod writer;

pub use record::{DxfRecord, SectionKind};
pub use tag::{Tag, TagValue};
pub use tags_manager::TagsManager;
pub use writer::{write_dxf, DxfTextWriter, DxfWriter, SectionWriter};
