//! DXF section writers
//!
//! Writes each top-level section of a document: HEADER, TABLES, BLOCKS,
//! ENTITIES and OBJECTS.

use crate::document::Document;
use crate::io::dxf::{DxfRecord, SectionKind, TagsManager};

/// Writes the sections of a document into one tag stream
pub struct SectionWriter<'a> {
    writer: &'a mut TagsManager,
}

impl<'a> SectionWriter<'a> {
    /// Create a new section writer
    pub fn new(writer: &'a mut TagsManager) -> Self {
        Self { writer }
    }

    /// Wrap `body` in the begin and end markers of `kind`
    pub fn write_section(&mut self, kind: SectionKind, body: impl FnOnce(&mut TagsManager)) {
        self.writer.write_section_start(kind.name());
        body(&mut *self.writer);
        self.writer.write_section_end();
    }

    /// Write any section of `document`
    pub fn write(&mut self, kind: SectionKind, document: &Document) {
        match kind {
            SectionKind::Header => self.write_header(document),
            SectionKind::Tables => self.write_tables(document),
            SectionKind::Blocks => self.write_blocks(document),
            SectionKind::Entities => self.write_entities(document),
            SectionKind::Objects => self.write_objects(document),
        }
    }

    /// Write the HEADER section
    pub fn write_header(&mut self, document: &Document) {
        self.write_section(SectionKind::Header, |w| {
            document.header.write_tags(w, document.handle_seed())
        });
    }

    /// Write the TABLES section
    pub fn write_tables(&mut self, document: &Document) {
        self.write_section(SectionKind::Tables, |w| document.tables.write_tags(w));
    }

    /// Write the BLOCKS section
    pub fn write_blocks(&mut self, document: &Document) {
        self.write_section(SectionKind::Blocks, |w| {
            for block in document.blocks() {
                block.write_tags(w);
            }
        });
    }

    /// Write the ENTITIES section
    pub fn write_entities(&mut self, document: &Document) {
        self.write_section(SectionKind::Entities, |w| {
            for entity in document.model_space().entities() {
                entity.write_tags(w);
            }
        });
    }

    /// Write the OBJECTS section
    pub fn write_objects(&mut self, document: &Document) {
        self.write_section(SectionKind::Objects, |w| document.objects.write_tags(w));
    }
}
