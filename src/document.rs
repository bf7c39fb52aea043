//! CAD document structure

use crate::entities::{Block, Entity, Image};
use crate::error::{DxfError, Result};
use crate::header::Header;
use crate::io::dxf::{DxfWriter, TagValue};
use crate::objects::{ImageDefinition, ImageDefinitionReactor, Objects};
use crate::tables::*;
use crate::types::{Color, DxfVersion, Handle, HandleAllocator, Units, Vector2, Vector3};
use indexmap::IndexMap;
use std::io::Write;
use std::iter;
use tracing::debug;

/// Parameters for [`Document::add_image`]
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOptions {
    /// Path to the image file, written as is
    pub path: String,
    /// Entry name in the image dictionary
    pub name: String,
    /// Lower-left corner of the image
    pub insertion_point: Vector3,
    /// Image size in pixels
    pub size: Vector2,
    /// Drawing size of one pixel
    pub scale: f64,
    /// Rotation in degrees
    pub rotation: f64,
}

/// A DXF document under construction
///
/// The document owns the handle allocator every record in it draws from,
/// so handles never repeat within a document and two documents never
/// share state.
#[derive(Debug)]
pub struct Document {
    handles: HandleAllocator,
    /// Header variables
    pub header: Header,
    /// The standard symbol tables
    pub tables: Tables,
    model_space: Block,
    paper_space: Block,
    blocks: IndexMap<String, Block>,
    /// Non-graphical objects
    pub objects: Objects,
}

impl Document {
    /// Create a new empty document with the default version
    pub fn new() -> Self {
        Self::with_version(DxfVersion::default())
    }

    /// Create a document with a specific version
    pub fn with_version(version: DxfVersion) -> Self {
        let mut handles = HandleAllocator::new();
        let mut tables = Tables::new(&mut handles);
        let model_space = Self::space(&mut handles, &mut tables, Block::MODEL_SPACE);
        let paper_space = Self::space(&mut handles, &mut tables, Block::PAPER_SPACE);
        let objects = Objects::new(&mut handles);
        debug!(version = version.to_dxf_string(), handles = handles.issued(), "document created");
        Document {
            handles,
            header: Header::new(version),
            tables,
            model_space,
            paper_space,
            blocks: IndexMap::new(),
            objects,
        }
    }

    fn space(handles: &mut HandleAllocator, tables: &mut Tables, name: &str) -> Block {
        let record = tables
            .block_records
            .add_or_keep(BlockRecordEntry::new(handles, name))
            .handle();
        Block::new(handles, name, record)
    }

    /// Document version
    pub fn version(&self) -> DxfVersion {
        self.header.version
    }

    /// The allocator to build records with before adding them
    pub fn handles(&mut self) -> &mut HandleAllocator {
        &mut self.handles
    }

    /// Next unused handle, written as `$HANDSEED`
    pub fn handle_seed(&self) -> Handle {
        self.handles.peek()
    }

    /// Add an entity to model space
    ///
    /// Entities without a layer are put on the current layer.
    pub fn add_entity<E: Entity + 'static>(&mut self, mut entity: E) -> Handle {
        if entity.common().layer.is_none() {
            entity.set_layer(self.header.current_layer.clone());
        }
        self.model_space.add_entity(entity)
    }

    /// Model space, whose entities make up the ENTITIES section
    pub fn model_space(&self) -> &Block {
        &self.model_space
    }

    pub fn model_space_mut(&mut self) -> &mut Block {
        &mut self.model_space
    }

    pub fn paper_space(&self) -> &Block {
        &self.paper_space
    }

    /// Define a new block
    ///
    /// Creates its BLOCK_RECORD entry too; the name must not be in use.
    pub fn add_block(&mut self, name: impl Into<String>) -> Result<&mut Block> {
        let name = name.into();
        let record = BlockRecordEntry::new(&mut self.handles, name.clone());
        let record = self.tables.block_records.add(record)?.handle();
        let block = Block::new(&mut self.handles, name.clone(), record);
        debug!(block = %name, handle = %block.handle(), "block defined");
        Ok(self.blocks.entry(name.to_uppercase()).or_insert(block))
    }

    /// Get a block by name (case-insensitive), spaces included
    pub fn block(&self, name: &str) -> Option<&Block> {
        if name.eq_ignore_ascii_case(Block::MODEL_SPACE) {
            Some(&self.model_space)
        } else if name.eq_ignore_ascii_case(Block::PAPER_SPACE) {
            Some(&self.paper_space)
        } else {
            self.blocks.get(&name.to_uppercase())
        }
    }

    /// Get a block by name (case-insensitive), mutably
    pub fn block_mut(&mut self, name: &str) -> Option<&mut Block> {
        if name.eq_ignore_ascii_case(Block::MODEL_SPACE) {
            Some(&mut self.model_space)
        } else if name.eq_ignore_ascii_case(Block::PAPER_SPACE) {
            Some(&mut self.paper_space)
        } else {
            self.blocks.get_mut(&name.to_uppercase())
        }
    }

    /// Add an entity to a named block
    pub fn add_entity_to_block<E: Entity + 'static>(&mut self, block: &str, entity: E) -> Result<Handle> {
        self.block_mut(block)
            .map(|b| b.add_entity(entity))
            .ok_or_else(|| DxfError::BlockNotFound(block.to_string()))
    }

    /// All blocks in BLOCKS section order: the two spaces, then user blocks
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        iter::once(&self.model_space)
            .chain(iter::once(&self.paper_space))
            .chain(self.blocks.values())
    }

    /// Add a layer
    pub fn add_layer(
        &mut self,
        name: impl Into<String>,
        color: Color,
        line_type: impl Into<String>,
    ) -> Result<&mut LayerEntry> {
        let mut layer = LayerEntry::new(&mut self.handles, name);
        layer.color = color;
        layer.line_type = line_type.into();
        self.tables.layers.add(layer)
    }

    /// Add a line type
    pub fn add_line_type(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        elements: Vec<f64>,
    ) -> Result<&mut LineTypeEntry> {
        let line_type = LineTypeEntry::new(&mut self.handles, name, description, elements);
        self.tables.line_types.add(line_type)
    }

    /// Add a text style
    pub fn add_text_style(&mut self, name: impl Into<String>, font: impl Into<String>) -> Result<&mut TextStyleEntry> {
        let style = TextStyleEntry::new(&mut self.handles, name, font);
        self.tables.text_styles.add(style)
    }

    /// Register an application name for extended data
    pub fn add_app_id(&mut self, name: impl Into<String>) -> Result<&mut AppIdEntry> {
        let app_id = AppIdEntry::new(&mut self.handles, name);
        self.tables.app_ids.add(app_id)
    }

    /// Make an existing layer current
    pub fn set_current_layer(&mut self, name: &str) -> Result<()> {
        let layer = self
            .tables
            .layers
            .get(name)
            .ok_or_else(|| DxfError::LayerNotFound(name.to_string()))?;
        self.header.current_layer = layer.name.clone();
        debug!(layer = %self.header.current_layer, "current layer set");
        Ok(())
    }

    /// Current layer name
    pub fn current_layer(&self) -> &str {
        &self.header.current_layer
    }

    /// Set the drawing units
    pub fn set_units(&mut self, units: Units) {
        self.header.units = units;
    }

    /// Set the drawing units from a raw `$INSUNITS` code
    pub fn set_units_code(&mut self, code: i16) -> Result<()> {
        self.header.units = Units::try_from(code)?;
        Ok(())
    }

    /// Set a free-form header variable
    pub fn set_variable<V: Into<TagValue>>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (i32, V)>,
    ) -> Result<()> {
        self.header.set_variable(name, values)
    }

    /// Place a raster image in model space
    ///
    /// Creates the IMAGEDEF object (in the image dictionary, which is made on
    /// first use), the IMAGE entity, and the IMAGEDEF_REACTOR tying them
    /// together. Returns the entity handle.
    ///
    /// The name must not already be in the image dictionary; nothing is
    /// allocated when it is.
    pub fn add_image(&mut self, options: ImageOptions) -> Result<Handle> {
        if self.objects.image_definition(&options.name).is_some() {
            return Err(DxfError::DuplicateEntry {
                table: Objects::IMAGE_DICTIONARY,
                name: options.name,
            });
        }
        let dictionary = self.objects.image_dictionary(&mut self.handles);
        let mut definition =
            ImageDefinition::new(&mut self.handles, dictionary, options.path, options.size);
        let mut image = Image::new(
            &mut self.handles,
            options.insertion_point,
            options.size,
            options.scale,
            options.rotation,
            definition.handle(),
        );
        let reactor = ImageDefinitionReactor::new(&mut self.handles, image.handle());
        image.definition_reactor = reactor.handle();
        definition.add_reactor(reactor.handle());

        if let Some(dictionary) = self.objects.dictionary_mut(dictionary) {
            dictionary.add_entry(options.name, definition.handle());
        }
        self.objects.add(definition);
        self.objects.add(reactor);
        Ok(self.add_entity(image))
    }

    /// Render the document as DXF text
    pub fn to_dxf_string(&self) -> String {
        DxfWriter::new(self).write_to_string()
    }

    /// Write the document as DXF text to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        DxfWriter::new(self).write_to_writer(writer)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Line, Point};

    #[test]
    fn test_spaces_exist() {
        let document = Document::new();
        assert!(document.tables.block_records.contains(Block::MODEL_SPACE));
        assert!(document.tables.block_records.contains(Block::PAPER_SPACE));
        assert_eq!(document.blocks().count(), 2);
        assert_eq!(
            document.model_space().record_handle(),
            document.tables.block_records.get(Block::MODEL_SPACE).unwrap().handle()
        );
    }

    #[test]
    fn test_add_entity_uses_current_layer() {
        let mut document = Document::new();
        document.add_layer("Walls", Color::RED, "Continuous").unwrap();
        document.set_current_layer("walls").unwrap();
        let line = Line::new(document.handles(), Vector3::ZERO, Vector3::new(1.0, 1.0, 0.0));
        let handle = document.add_entity(line);
        let entity = document.model_space().entity(handle).unwrap();
        assert_eq!(entity.layer(), "Walls");
        assert_eq!(entity.owner(), Some(document.model_space().record_handle()));
    }

    #[test]
    fn test_explicit_layer_is_kept() {
        let mut document = Document::new();
        let mut point = Point::new(document.handles(), Vector3::ZERO);
        point.common.layer = Some("Points".to_string());
        let handle = document.add_entity(point);
        assert_eq!(document.model_space().entity(handle).unwrap().layer(), "Points");
    }

    #[test]
    fn test_missing_layer() {
        let mut document = Document::new();
        let err = document.set_current_layer("Nope").unwrap_err();
        assert!(matches!(err, DxfError::LayerNotFound(name) if name == "Nope"));
        assert_eq!(document.current_layer(), "0");
    }

    #[test]
    fn test_units() {
        let mut document = Document::new();
        document.set_units_code(4).unwrap();
        assert_eq!(document.header.units, Units::Millimeters);
        assert!(matches!(document.set_units_code(21), Err(DxfError::InvalidUnits(21))));
        assert_eq!(document.header.units, Units::Millimeters);
        document.set_units(Units::Inches);
        assert_eq!(document.header.units, Units::Inches);
    }

    #[test]
    fn test_duplicate_block() {
        let mut document = Document::new();
        document.add_block("Door").unwrap();
        assert!(matches!(
            document.add_block("DOOR"),
            Err(DxfError::DuplicateEntry { table: "BLOCK_RECORD", .. })
        ));
        assert!(document.add_block("*model_space").is_err());
    }

    #[test]
    fn test_add_entity_to_block() {
        let mut document = Document::new();
        let record = document.add_block("B1").unwrap().record_handle();
        let line = Line::new(document.handles(), Vector3::ZERO, Vector3::new(2.0, 0.0, 0.0));
        let handle = document.add_entity_to_block("b1", line).unwrap();
        assert_eq!(document.block("B1").unwrap().entity(handle).unwrap().owner(), Some(record));

        let orphan = Line::new(document.handles(), Vector3::ZERO, Vector3::ZERO);
        assert!(matches!(
            document.add_entity_to_block("Missing", orphan),
            Err(DxfError::BlockNotFound(_))
        ));
    }

    #[test]
    fn test_add_image() {
        let mut document = Document::new();
        let before = document.objects.len();
        let handle = document.add_image(ImageOptions {
            path: "photo.png".to_string(),
            name: "photo".to_string(),
            insertion_point: Vector3::ZERO,
            size: Vector2::new(100.0, 50.0),
            scale: 1.0,
            rotation: 0.0,
        })
        .unwrap();
        // image dictionary, definition and reactor
        assert_eq!(document.objects.len(), before + 3);
        assert_eq!(document.model_space().entity(handle).unwrap().entity_type(), "IMAGE");

        let root = document.objects.dictionary(document.objects.root()).unwrap();
        let images = root.get(Objects::IMAGE_DICTIONARY).unwrap();
        let definition = document.objects.dictionary(images).unwrap().get("photo").unwrap();
        assert_eq!(document.objects.get(definition).unwrap().object_type(), "IMAGEDEF");
    }

    #[test]
    fn test_duplicate_image_name() {
        let mut document = Document::new();
        let options = ImageOptions {
            path: "a.png".to_string(),
            name: "photo".to_string(),
            insertion_point: Vector3::ZERO,
            size: Vector2::new(10.0, 10.0),
            scale: 1.0,
            rotation: 0.0,
        };
        document.add_image(options.clone()).unwrap();
        let seed = document.handle_seed();
        let objects = document.objects.len();
        let entities = document.model_space().len();

        let err = document
            .add_image(ImageOptions {
                path: "b.png".to_string(),
                ..options
            })
            .unwrap_err();
        assert!(matches!(
            err,
            DxfError::DuplicateEntry { table: "ACAD_IMAGE_DICT", ref name } if name == "photo"
        ));
        assert_eq!(document.handle_seed(), seed);
        assert_eq!(document.objects.len(), objects);
        assert_eq!(document.model_space().len(), entities);
    }

    #[test]
    fn test_handle_seed_follows_allocations() {
        let mut document = Document::new();
        let seed = document.handle_seed();
        let issued = document.handles().next();
        assert_eq!(issued, seed);
        assert_eq!(document.handle_seed().value(), seed.value() + 1);
    }
}
