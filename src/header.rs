//! Header variables (HEADER section)

use crate::error::{DxfError, Result};
use crate::io::dxf::{Tag, TagValue, TagsManager};
use crate::types::{DxfVersion, Handle, Units};
use indexmap::IndexMap;

/// A header variable: its `$NAME` and the tags that follow it
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderVariable {
    name: String,
    values: Vec<Tag>,
}

impl HeaderVariable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Tag] {
        &self.values
    }

    fn write_tags(&self, writer: &mut TagsManager) {
        if self.values.is_empty() {
            return;
        }
        writer.write(9, &self.name);
        for tag in &self.values {
            writer.write(tag.code(), tag.value().clone());
        }
    }
}

/// Document header
///
/// `$ACADVER`, `$HANDSEED`, `$INSUNITS` and `$CLAYER` are kept in typed
/// fields and always written first; everything else is free-form.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: DxfVersion,
    pub units: Units,
    /// Current layer name
    pub current_layer: String,
    variables: IndexMap<String, HeaderVariable>,
}

impl Header {
    /// Variables owned by the typed fields
    pub const MANAGED: [&'static str; 4] = ["$ACADVER", "$HANDSEED", "$INSUNITS", "$CLAYER"];

    pub fn new(version: DxfVersion) -> Self {
        Header {
            version,
            units: Units::Unitless,
            current_layer: "0".to_string(),
            variables: IndexMap::new(),
        }
    }

    /// Set a free-form variable, replacing an earlier value in place
    ///
    /// The name is stored as given and should start with `$`. A variable
    /// with no values is kept but not written.
    pub fn set_variable<V: Into<TagValue>>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (i32, V)>,
    ) -> Result<()> {
        if Self::MANAGED.iter().any(|m| m.eq_ignore_ascii_case(name)) {
            return Err(DxfError::ManagedVariable(name.to_string()));
        }
        let variable = HeaderVariable {
            name: name.to_string(),
            values: values.into_iter().map(|(code, value)| Tag::new(code, value)).collect(),
        };
        self.variables.insert(name.to_string(), variable);
        Ok(())
    }

    /// Get a free-form variable
    pub fn variable(&self, name: &str) -> Option<&HeaderVariable> {
        self.variables.get(name)
    }

    /// Iterate over the free-form variables
    pub fn variables(&self) -> impl Iterator<Item = &HeaderVariable> {
        self.variables.values()
    }

    /// Write every variable; `handle_seed` is the next unused handle
    pub fn write_tags(&self, writer: &mut TagsManager, handle_seed: Handle) {
        writer.write(9, "$ACADVER");
        writer.write(1, self.version.to_dxf_string());
        writer.write(9, "$HANDSEED");
        writer.write(5, handle_seed);
        writer.write(9, "$INSUNITS");
        writer.write(70, self.units.code());
        writer.write(9, "$CLAYER");
        writer.write(8, &self.current_layer);
        for variable in self.variables.values() {
            variable.write_tags(writer);
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DxfVersion::default())
    }
}
