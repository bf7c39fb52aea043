//! Symbol tables and their entries

use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator};
use crate::xdata::{ApplicationDefined, ExtendedData};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use tracing::trace;

pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod block_record;
pub mod dimstyle;
pub mod appid;
pub mod view;
pub mod vport;
pub mod ucs;

pub use layer::{LayerEntry, LayerFlags};
pub use linetype::LineTypeEntry;
pub use textstyle::{TextGenerationFlags, TextStyleEntry};
pub use block_record::BlockRecordEntry;
pub use dimstyle::DimStyleEntry;
pub use appid::AppIdEntry;
pub use view::ViewEntry;
pub use vport::VPortEntry;
pub use ucs::UcsEntry;

/// Data shared by all table entries
#[derive(Debug, Clone, PartialEq)]
pub struct EntryCommon {
    pub handle: Handle,
    /// Owning table handle, set when the entry is added
    pub owner: Handle,
    pub extended_data: ExtendedData,
}

impl EntryCommon {
    /// Create entry data with a fresh handle
    pub fn new(handles: &mut HandleAllocator) -> Self {
        EntryCommon {
            handle: handles.next(),
            owner: Handle::NULL,
            extended_data: ExtendedData::new(),
        }
    }

    /// Write the entry base: record name, handle, owner and the
    /// `AcDbSymbolTableRecord` marker
    pub fn write_base(&self, writer: &mut TagsManager, entry_type: &str) {
        self.write_base_with_handle_code(writer, entry_type, 5);
    }

    /// Entry base for records whose handle uses another group code
    /// (DIMSTYLE uses 105)
    pub fn write_base_with_handle_code(&self, writer: &mut TagsManager, entry_type: &str, handle_code: i32) {
        writer.write_entity_type(entry_type);
        writer.write(handle_code, self.handle);
        writer.write(330, self.owner);
        writer.write_subclass("AcDbSymbolTableRecord");
    }
}

/// Base trait for all table entries
pub trait TableEntry: DxfRecord + fmt::Debug {
    /// Table name, also the record name of each entry
    const TABLE_NAME: &'static str;

    fn common(&self) -> &EntryCommon;

    fn common_mut(&mut self) -> &mut EntryCommon;

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Get the entry's unique handle
    fn handle(&self) -> Handle {
        self.common().handle
    }

    /// Table-level tags written after the entry count
    fn write_table_extra(_writer: &mut TagsManager, _count: usize) {}
}

/// A symbol table: named entries kept in insertion order
///
/// Names are unique without regard to case.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    handle: Handle,
    owner: Handle,
    /// Extension dictionary reference
    pub xdictionary: ApplicationDefined,
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new(handles: &mut HandleAllocator) -> Self {
        Table {
            handle: handles.next(),
            owner: Handle::NULL,
            xdictionary: ApplicationDefined::xdictionary(),
            entries: IndexMap::new(),
        }
    }

    /// Table name
    pub fn name(&self) -> &'static str {
        T::TABLE_NAME
    }

    /// Get the table's handle
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Add an entry, making this table its owner
    pub fn add(&mut self, mut entry: T) -> Result<&mut T> {
        match self.entries.entry(entry.name().to_uppercase()) {
            Entry::Occupied(_) => Err(DxfError::DuplicateEntry {
                table: T::TABLE_NAME,
                name: entry.name().to_string(),
            }),
            Entry::Vacant(slot) => {
                entry.common_mut().owner = self.handle;
                trace!(table = T::TABLE_NAME, name = entry.name(), handle = %entry.handle(), "entry added");
                Ok(slot.insert(entry))
            }
        }
    }

    /// Add an entry unless one with the same name exists
    pub(crate) fn add_or_keep(&mut self, entry: T) -> &mut T {
        let key = entry.name().to_uppercase();
        let owner = self.handle;
        self.entries.entry(key).or_insert_with(|| {
            let mut entry = entry;
            entry.common_mut().owner = owner;
            entry
        })
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Get a mutable entry by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: TableEntry> DxfRecord for Table<T> {
    fn write_tags(&self, writer: &mut TagsManager) {
        writer.write_entity_type("TABLE");
        writer.write_name(T::TABLE_NAME);
        writer.write_handle(self.handle);
        self.xdictionary.write_tags(writer);
        writer.write(330, self.owner);
        writer.write_subclass("AcDbSymbolTable");
        writer.write(70, self.entries.len());
        T::write_table_extra(writer, self.entries.len());
        for entry in self.entries.values() {
            entry.write_tags(writer);
        }
        writer.write_entity_type("ENDTAB");
    }
}

/// The nine standard tables of a document
#[derive(Debug, Clone)]
pub struct Tables {
    pub vports: Table<VPortEntry>,
    pub line_types: Table<LineTypeEntry>,
    pub layers: Table<LayerEntry>,
    pub text_styles: Table<TextStyleEntry>,
    pub views: Table<ViewEntry>,
    pub ucss: Table<UcsEntry>,
    pub app_ids: Table<AppIdEntry>,
    pub dim_styles: Table<DimStyleEntry>,
    pub block_records: Table<BlockRecordEntry>,
}

impl Tables {
    /// Create the standard tables with their default entries
    ///
    /// Block records start empty; the document adds the two spaces.
    pub fn new(handles: &mut HandleAllocator) -> Self {
        let mut tables = Tables {
            vports: Table::new(handles),
            line_types: Table::new(handles),
            layers: Table::new(handles),
            text_styles: Table::new(handles),
            views: Table::new(handles),
            ucss: Table::new(handles),
            app_ids: Table::new(handles),
            dim_styles: Table::new(handles),
            block_records: Table::new(handles),
        };

        tables.vports.add_or_keep(VPortEntry::active(handles));
        tables.line_types.add_or_keep(LineTypeEntry::by_block(handles));
        tables.line_types.add_or_keep(LineTypeEntry::by_layer(handles));
        tables.line_types.add_or_keep(LineTypeEntry::continuous(handles));
        tables.layers.add_or_keep(LayerEntry::default_layer(handles));
        let style = tables.text_styles.add_or_keep(TextStyleEntry::standard(handles)).handle();
        tables.app_ids.add_or_keep(AppIdEntry::acad(handles));
        let mut dim_style = DimStyleEntry::standard(handles);
        dim_style.text_style = Some(style);
        tables.dim_styles.add_or_keep(dim_style);
        tables
    }
}

impl DxfRecord for Tables {
    fn write_tags(&self, writer: &mut TagsManager) {
        self.vports.write_tags(writer);
        self.line_types.write_tags(writer);
        self.layers.write_tags(writer);
        self.text_styles.write_tags(writer);
        self.views.write_tags(writer);
        self.ucss.write_tags(writer);
        self.app_ids.write_tags(writer);
        self.dim_styles.write_tags(writer);
        self.block_records.write_tags(writer);
    }
}
