//! Non-graphical objects (OBJECTS section)
//!
//! Objects are non-graphical records such as dictionaries and image
//! definitions. Every document has a root dictionary (owned by handle 0)
//! that names the other top-level dictionaries.

mod dictionary;
mod image_definition;

pub use dictionary::Dictionary;
pub use image_definition::{ImageDefinition, ImageDefinitionReactor, ResolutionUnit};

use crate::io::dxf::{DxfRecord, TagsManager};
use crate::types::{Handle, HandleAllocator};
use crate::xdata::ApplicationDefined;
use indexmap::IndexMap;
use tracing::trace;

/// Data shared by all objects
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCommon {
    pub handle: Handle,
    /// Owner handle, null for the root dictionary
    pub owner: Handle,
    pub reactors: ApplicationDefined,
    pub xdictionary: ApplicationDefined,
}

impl ObjectCommon {
    pub fn new(handles: &mut HandleAllocator, owner: Handle) -> Self {
        ObjectCommon {
            handle: handles.next(),
            owner,
            reactors: ApplicationDefined::reactors(),
            xdictionary: ApplicationDefined::xdictionary(),
        }
    }

    /// Write the object base: record name, handle, reactors, extension
    /// dictionary and owner
    pub fn write_base(&self, writer: &mut TagsManager, object_type: &str) {
        writer.write_entity_type(object_type);
        writer.write_handle(self.handle);
        self.reactors.write_tags(writer);
        self.xdictionary.write_tags(writer);
        writer.write(330, self.owner);
    }
}

/// Object type enumeration for storage
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectType {
    Dictionary(Dictionary),
    ImageDefinition(ImageDefinition),
    ImageDefinitionReactor(ImageDefinitionReactor),
}

impl ObjectType {
    /// Get the object's handle
    pub fn handle(&self) -> Handle {
        self.as_record_common().handle
    }

    fn as_record_common(&self) -> &ObjectCommon {
        match self {
            ObjectType::Dictionary(d) => &d.common,
            ObjectType::ImageDefinition(d) => &d.common,
            ObjectType::ImageDefinitionReactor(r) => &r.common,
        }
    }

    /// Record name
    pub fn object_type(&self) -> &'static str {
        match self {
            ObjectType::Dictionary(_) => Dictionary::OBJECT_TYPE,
            ObjectType::ImageDefinition(_) => ImageDefinition::OBJECT_TYPE,
            ObjectType::ImageDefinitionReactor(_) => ImageDefinitionReactor::OBJECT_TYPE,
        }
    }
}

impl DxfRecord for ObjectType {
    fn write_tags(&self, writer: &mut TagsManager) {
        match self {
            ObjectType::Dictionary(d) => d.write_tags(writer),
            ObjectType::ImageDefinition(d) => d.write_tags(writer),
            ObjectType::ImageDefinitionReactor(r) => r.write_tags(writer),
        }
    }
}

impl From<Dictionary> for ObjectType {
    fn from(value: Dictionary) -> Self {
        ObjectType::Dictionary(value)
    }
}

impl From<ImageDefinition> for ObjectType {
    fn from(value: ImageDefinition) -> Self {
        ObjectType::ImageDefinition(value)
    }
}

impl From<ImageDefinitionReactor> for ObjectType {
    fn from(value: ImageDefinitionReactor) -> Self {
        ObjectType::ImageDefinitionReactor(value)
    }
}

/// The objects of a document, written in insertion order
#[derive(Debug, Clone)]
pub struct Objects {
    root: Handle,
    image_dictionary: Option<Handle>,
    objects: IndexMap<Handle, ObjectType>,
}

impl Objects {
    /// Root dictionary entry naming the group dictionary
    pub const GROUP_DICTIONARY: &'static str = "ACAD_GROUP";
    /// Root dictionary entry naming the image dictionary
    pub const IMAGE_DICTIONARY: &'static str = "ACAD_IMAGE_DICT";

    /// Create the root dictionary and the group dictionary
    pub fn new(handles: &mut HandleAllocator) -> Self {
        let mut root = Dictionary::new(handles, Handle::NULL);
        let groups = Dictionary::new(handles, root.handle());
        root.add_entry(Self::GROUP_DICTIONARY, groups.handle());

        let mut objects = Objects {
            root: root.handle(),
            image_dictionary: None,
            objects: IndexMap::new(),
        };
        objects.add(root);
        objects.add(groups);
        objects
    }

    /// Root dictionary handle
    pub fn root(&self) -> Handle {
        self.root
    }

    /// Add an object
    pub fn add(&mut self, object: impl Into<ObjectType>) -> Handle {
        let object = object.into();
        let handle = object.handle();
        trace!(object = object.object_type(), %handle, "object added");
        self.objects.insert(handle, object);
        handle
    }

    /// Get an object by handle
    pub fn get(&self, handle: Handle) -> Option<&ObjectType> {
        self.objects.get(&handle)
    }

    /// Get a dictionary by handle
    pub fn dictionary(&self, handle: Handle) -> Option<&Dictionary> {
        match self.objects.get(&handle) {
            Some(ObjectType::Dictionary(d)) => Some(d),
            _ => None,
        }
    }

    /// Get a dictionary by handle, mutably
    pub fn dictionary_mut(&mut self, handle: Handle) -> Option<&mut Dictionary> {
        match self.objects.get_mut(&handle) {
            Some(ObjectType::Dictionary(d)) => Some(d),
            _ => None,
        }
    }

    /// The image dictionary, created and registered in the root on first use
    pub fn image_dictionary(&mut self, handles: &mut HandleAllocator) -> Handle {
        if let Some(handle) = self.image_dictionary {
            return handle;
        }
        let dictionary = Dictionary::new(handles, self.root);
        let handle = self.add(dictionary);
        if let Some(root) = self.dictionary_mut(self.root) {
            root.add_entry(Self::IMAGE_DICTIONARY, handle);
        }
        self.image_dictionary = Some(handle);
        handle
    }

    /// Image definition registered under `name`, if any
    ///
    /// Never creates the image dictionary.
    pub fn image_definition(&self, name: &str) -> Option<Handle> {
        self.image_dictionary
            .and_then(|handle| self.dictionary(handle))
            .and_then(|dictionary| dictionary.get(name))
    }

    /// Iterate over objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl DxfRecord for Objects {
    fn write_tags(&self, writer: &mut TagsManager) {
        for object in self.objects.values() {
            object.write_tags(writer);
        }
    }
}
