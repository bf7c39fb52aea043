//! The emission contract shared by every record and the top-level sections

use super::tags_manager::TagsManager;

/// Anything that can append its tags to a [`TagsManager`]
///
/// Implementations call their base emission first (for example
/// [`EntityCommon::write_base`](crate::entities::EntityCommon::write_base)),
/// then write their own subclass marker and fields in the order their record
/// publishes. Containers write a begin marker, their children, and exactly
/// one end marker.
pub trait DxfRecord {
    /// Append this record's tags
    fn write_tags(&self, writer: &mut TagsManager);

    /// Emit into a fresh manager and render the result
    fn to_dxf_string(&self) -> String {
        let mut writer = TagsManager::new();
        self.write_tags(&mut writer);
        writer.render()
    }
}

/// Top-level sections of a DXF document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Tables,
    Blocks,
    Entities,
    Objects,
}

impl SectionKind {
    /// Render order of the sections
    pub const ORDER: [SectionKind; 5] = [
        SectionKind::Header,
        SectionKind::Tables,
        SectionKind::Blocks,
        SectionKind::Entities,
        SectionKind::Objects,
    ];

    /// Name written after `2` in the section start marker
    pub const fn name(self) -> &'static str {
        match self {
            SectionKind::Header => "HEADER",
            SectionKind::Tables => "TABLES",
            SectionKind::Blocks => "BLOCKS",
            SectionKind::Entities => "ENTITIES",
            SectionKind::Objects => "OBJECTS",
        }
    }
}
