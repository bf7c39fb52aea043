//! Dictionary object

use super::ObjectCommon;
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator};
use indexmap::IndexMap;

/// Dictionary object - maps names to object handles
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    pub common: ObjectCommon,
    /// Dictionary entries in insertion order
    entries: IndexMap<String, Handle>,
    /// Hard owner flag, entries are owned by the dictionary
    pub hard_owner: Option<bool>,
    /// Duplicate record cloning flag
    pub duplicate_cloning: i16,
}

impl Dictionary {
    /// Object type name
    pub const OBJECT_TYPE: &'static str = "DICTIONARY";

    /// Create a new dictionary owned by `owner`
    pub fn new(handles: &mut HandleAllocator, owner: Handle) -> Self {
        Dictionary {
            common: ObjectCommon::new(handles, owner),
            entries: IndexMap::new(),
            hard_owner: None,
            duplicate_cloning: 1,
        }
    }

    pub fn handle(&self) -> Handle {
        self.common.handle
    }

    /// Add or replace an entry
    pub fn add_entry(&mut self, key: impl Into<String>, handle: Handle) {
        self.entries.insert(key.into(), handle);
    }

    /// Get a handle by key
    pub fn get(&self, key: &str) -> Option<Handle> {
        self.entries.get(key).copied()
    }

    /// Iterate over entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, Handle)> {
        self.entries.iter().map(|(k, h)| (k.as_str(), *h))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DxfRecord for Dictionary {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.common.write_base(writer, Self::OBJECT_TYPE);
        writer.write_subclass("AcDbDictionary");
        writer.write_optional(280, self.hard_owner);
        writer.write(281, self.duplicate_cloning);
        for (key, handle) in &self.entries {
            writer.write(3, key);
            writer.write(350, *handle);
        }
    }
}
