//! Registered application table entry

use super::{EntryCommon, TableEntry};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::HandleAllocator;

/// A registered application name, referenced by extended data
#[derive(Debug, Clone, PartialEq)]
pub struct AppIdEntry {
    pub common: EntryCommon,
    /// Application name
    pub name: String,
    pub flags: i16,
}

impl AppIdEntry {
    /// Create a new application ID
    pub fn new(handles: &mut HandleAllocator, name: impl Into<String>) -> Self {
        AppIdEntry {
            common: EntryCommon::new(handles),
            name: name.into(),
            flags: 0,
        }
    }

    /// Create the "ACAD" application ID
    pub fn acad(handles: &mut HandleAllocator) -> Self {
        Self::new(handles, "ACAD")
    }
}

impl DxfRecord for AppIdEntry {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::TABLE_NAME);
        writer.write_subclass("AcDbRegAppTableRecord");
        writer.write_name(&self.name);
        writer.write(70, self.flags);
        self.common.extended_data.write_tags(writer);
    }
}

impl TableEntry for AppIdEntry {
    const TABLE_NAME: &'static str = "APPID";

    fn common(&self) -> &EntryCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntryCommon {
        &mut self.common
    }

    fn name(&self) -> &str {
        &self.name
    }
}
