//! DXF writer module

mod section_writer;
mod text_writer;

pub use section_writer::SectionWriter;
pub use text_writer::DxfTextWriter;

use crate::document::Document;
use crate::error::Result;
use crate::io::dxf::{SectionKind, TagsManager};
use std::io::Write;
use tracing::debug;

/// DXF document writer
///
/// Renders the whole document in one traversal: every section in fixed
/// order, then the end-of-file record.
pub struct DxfWriter<'a> {
    document: &'a Document,
}

impl<'a> DxfWriter<'a> {
    /// Create a new DXF writer
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Emit the document into `writer`
    pub fn write_tags(&self, writer: &mut TagsManager) {
        let start = writer.len();
        {
            let mut sections = SectionWriter::new(writer);
            for kind in SectionKind::ORDER {
                sections.write(kind, self.document);
            }
        }
        writer.write_eof();
        debug!(
            tags = writer.len() - start,
            handle_seed = %self.document.handle_seed(),
            "document emitted"
        );
    }

    /// Render the document as DXF text
    pub fn write_to_string(&self) -> String {
        let mut writer = TagsManager::new();
        self.write_tags(&mut writer);
        writer.render()
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut tags = TagsManager::new();
        self.write_tags(&mut tags);
        let mut text_writer = DxfTextWriter::new(writer);
        text_writer.write_tags(tags.tags())?;
        text_writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }
}

/// Write a document as DXF text to `writer`
pub fn write_dxf<W: Write>(document: &Document, writer: W) -> Result<()> {
    DxfWriter::new(document).write_to_writer(writer)
}
