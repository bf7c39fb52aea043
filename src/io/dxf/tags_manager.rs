//! Ordered tag accumulation and text rendering

use super::tag::{Tag, TagValue};
use crate::types::{Handle, Vector2, Vector3};

/// Accumulates the tags of one render pass
///
/// The manager is append-only: it never reorders, deduplicates or validates
/// what it is given. Each record type is responsible for appending its tags
/// in the order its DXF record publishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagsManager {
    tags: Vec<Tag>,
}

impl TagsManager {
    /// Create an empty manager
    pub fn new() -> Self {
        TagsManager { tags: Vec::new() }
    }

    /// Append a mandatory code/value pair
    pub fn write(&mut self, code: i32, value: impl Into<TagValue>) {
        self.tags.push(Tag::new(code, value));
    }

    /// Append a code/value pair only if the value is present
    ///
    /// Absent optional fields are omitted, never defaulted.
    pub fn write_optional<V: Into<TagValue>>(&mut self, code: i32, value: Option<V>) {
        if let Some(value) = value {
            self.write(code, value);
        }
    }

    /// Start a record (code 0)
    pub fn write_entity_type(&mut self, entity_type: &str) {
        self.write(0, entity_type);
    }

    /// Write the record handle (code 5)
    pub fn write_handle(&mut self, handle: Handle) {
        self.write(5, handle);
    }

    /// Write a subclass marker (code 100)
    pub fn write_subclass(&mut self, marker: &str) {
        self.write(100, marker);
    }

    /// Write a primary name (code 2)
    pub fn write_name(&mut self, name: &str) {
        self.write(2, name);
    }

    /// Write a name under a secondary code, e.g. 3 for a block's repeated name
    pub fn write_name_at(&mut self, code: i32, name: &str) {
        self.write(code, name);
    }

    /// Write a layer name (code 8)
    pub fn write_layer(&mut self, layer: &str) {
        self.write(8, layer);
    }

    /// Write a 2D point (codes x, x+10)
    pub fn write_point2d(&mut self, x_code: i32, point: Vector2) {
        self.write(x_code, point.x);
        self.write(x_code + 10, point.y);
    }

    /// Write a 3D point (codes x, x+10, x+20)
    pub fn write_point3d(&mut self, x_code: i32, point: Vector3) {
        self.write(x_code, point.x);
        self.write(x_code + 10, point.y);
        self.write(x_code + 20, point.z);
    }

    /// Write a 3D point only if present
    pub fn write_optional_point3d(&mut self, x_code: i32, point: Option<Vector3>) {
        if let Some(point) = point {
            self.write_point3d(x_code, point);
        }
    }

    /// Write section start
    pub fn write_section_start(&mut self, section_name: &str) {
        self.write(0, "SECTION");
        self.write(2, section_name);
    }

    /// Write section end
    pub fn write_section_end(&mut self) {
        self.write(0, "ENDSEC");
    }

    /// Write end of file
    pub fn write_eof(&mut self) {
        self.write(0, "EOF");
    }

    /// Tags accumulated so far
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags accumulated so far
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Consume the manager and return its tags
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }

    /// Render the tags as DXF text
    ///
    /// Every tag becomes two lines, code then value. Lines are joined with
    /// `\n` and there is no trailing newline.
    pub fn render(&self) -> String {
        self.tags
            .iter()
            .map(Tag::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_code_then_value() {
        let mut w = TagsManager::new();
        w.write_entity_type("LINE");
        w.write(62, 7i16);
        assert_eq!(w.render(), "0\nLINE\n62\n7");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(TagsManager::new().render(), "");
    }

    #[test]
    fn test_optional_none_is_omitted() {
        let mut w = TagsManager::new();
        w.write_optional(40, None::<f64>);
        w.write_optional(41, Some(0.0));
        assert_eq!(w.len(), 1);
        assert_eq!(w.render(), "41\n0");
    }

    #[test]
    fn test_point_offsets() {
        let mut w = TagsManager::new();
        w.write_point3d(11, Vector3::new(1.0, 2.0, 3.0));
        w.write_point2d(10, Vector2::new(4.5, 5.5));
        let codes: Vec<i32> = w.tags().iter().map(Tag::code).collect();
        assert_eq!(codes, vec![11, 21, 31, 10, 20]);
        assert_eq!(w.render(), "11\n1\n21\n2\n31\n3\n10\n4.5\n20\n5.5");
    }

    #[test]
    fn test_names_and_markers() {
        let mut w = TagsManager::new();
        w.write_name("B1");
        w.write_name_at(3, "B1");
        w.write_subclass("AcDbBlockBegin");
        w.write_layer("0");
        w.write_handle(Handle::new(0x1F));
        assert_eq!(w.render(), "2\nB1\n3\nB1\n100\nAcDbBlockBegin\n8\n0\n5\n1F");
    }

    #[test]
    fn test_append_order_is_kept() {
        let mut w = TagsManager::new();
        w.write(10, 1.0);
        w.write(10, 1.0);
        w.write(5, "A");
        let codes: Vec<i32> = w.tags().iter().map(Tag::code).collect();
        assert_eq!(codes, vec![10, 10, 5]);
    }

    #[test]
    fn test_section_markers() {
        let mut w = TagsManager::new();
        w.write_section_start("HEADER");
        w.write_section_end();
        w.write_eof();
        assert_eq!(w.render(), "0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nEOF");
    }
}
