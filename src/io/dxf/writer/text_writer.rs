//! ASCII DXF writer

use std::io::Write;
use crate::error::Result;
use crate::io::dxf::Tag;

/// Streams tags to any [`Write`] sink
///
/// The text is identical to [`TagsManager::render`](crate::io::dxf::TagsManager::render):
/// code and value on their own lines, lines separated by `\n`, no trailing
/// newline.
pub struct DxfTextWriter<W: Write> {
    writer: W,
    started: bool,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
        }
    }

    /// Write a single tag
    pub fn write_tag(&mut self, tag: &Tag) -> Result<()> {
        if self.started {
            self.writer.write_all(b"\n")?;
        }
        write!(self.writer, "{}", tag)?;
        self.started = true;
        Ok(())
    }

    /// Write every tag in order
    pub fn write_tags(&mut self, tags: &[Tag]) -> Result<()> {
        for tag in tags {
            self.write_tag(tag)?;
        }
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::TagsManager;
    use crate::types::{Handle, Vector3};

    #[test]
    fn test_write_string() {
        let mut buf = Vec::new();
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            writer.write_tag(&Tag::new(0, "LINE")).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "0\nLINE");
    }

    #[test]
    fn test_matches_render() {
        let mut tags = TagsManager::new();
        tags.write_entity_type("POINT");
        tags.write_handle(Handle::new(255));
        tags.write_point3d(10, Vector3::new(1.5, 2.0, -3.25));

        let mut writer = DxfTextWriter::new(Vec::new());
        writer.write_tags(tags.tags()).unwrap();
        writer.flush().unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, tags.render());
        assert!(output.contains("5\nFF\n"));
    }
}
