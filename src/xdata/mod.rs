//! Extended Data (XDATA) and application-defined groups
//!
//! Extended data is application-specific data attached to the end of a
//! record, using group codes 1000-1071. Application-defined groups are
//! the `102 {NAME` ... `102 }` brackets that carry reactor and extension
//! dictionary references near the start of a record.

use crate::io::dxf::{DxfRecord, Tag, TagValue, TagsManager};
use crate::types::{Handle, Vector3};

/// Extended data value types
#[derive(Debug, Clone, PartialEq)]
pub enum XDataValue {
    /// String value (group code 1000)
    String(String),
    /// Control string (group code 1002) - "{" or "}"
    ControlString(String),
    /// Layer name (group code 1003)
    LayerName(String),
    /// Binary data (group code 1004)
    BinaryData(Vec<u8>),
    /// Database handle (group code 1005)
    Handle(Handle),
    /// 3D point (group codes 1010, 1020, 1030)
    Point3D(Vector3),
    /// Real value (group code 1040)
    Real(f64),
    /// Distance (group code 1041)
    Distance(f64),
    /// Scale factor (group code 1042)
    ScaleFactor(f64),
    /// 16-bit integer (group code 1070)
    Integer16(i16),
    /// 32-bit integer (group code 1071)
    Integer32(i32),
}

impl XDataValue {
    fn write_tags(&self, writer: &mut TagsManager) {
        match self {
            XDataValue::String(s) => writer.write(1000, s),
            XDataValue::ControlString(s) => writer.write(1002, s),
            XDataValue::LayerName(s) => writer.write(1003, s),
            XDataValue::BinaryData(data) => {
                let hex: String = data.iter().map(|b| format!("{:02X}", b)).collect();
                writer.write(1004, hex);
            }
            XDataValue::Handle(h) => writer.write(1005, *h),
            XDataValue::Point3D(p) => writer.write_point3d(1010, *p),
            XDataValue::Real(r) => writer.write(1040, *r),
            XDataValue::Distance(d) => writer.write(1041, *d),
            XDataValue::ScaleFactor(s) => writer.write(1042, *s),
            XDataValue::Integer16(i) => writer.write(1070, *i),
            XDataValue::Integer32(i) => writer.write(1071, *i),
        }
    }
}

/// Extended data record for a single application
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedDataRecord {
    /// Application name (group code 1001), should be registered in APPID
    pub application_name: String,
    /// Extended data values
    pub values: Vec<XDataValue>,
}

impl ExtendedDataRecord {
    /// Create a new extended data record
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the extended data
    pub fn add_value(&mut self, value: XDataValue) {
        self.values.push(value);
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extended data attached to a record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedData {
    records: Vec<ExtendedDataRecord>,
}

impl ExtendedData {
    /// Create a new extended data collection
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record to the collection
    pub fn add_record(&mut self, record: ExtendedDataRecord) {
        self.records.push(record);
    }

    /// Get all records
    pub fn records(&self) -> &[ExtendedDataRecord] {
        &self.records
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DxfRecord for ExtendedData {
    fn write_tags(&self, writer: &mut TagsManager) {
        for record in self.records.iter().filter(|r| !r.is_empty()) {
            writer.write(1001, &record.application_name);
            for value in &record.values {
                value.write_tags(writer);
            }
        }
    }
}

/// An application-defined group, `102 {NAME` ... `102 }`
///
/// Empty groups are not written at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDefined {
    name: String,
    values: Vec<Tag>,
}

impl ApplicationDefined {
    /// Group carrying persistent reactors (soft owner references, code 330)
    pub const REACTORS: &'static str = "ACAD_REACTORS";
    /// Group carrying the extension dictionary (hard owner reference, code 360)
    pub const XDICTIONARY: &'static str = "ACAD_XDICTIONARY";

    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        ApplicationDefined {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Empty reactors group
    pub fn reactors() -> Self {
        Self::new(Self::REACTORS)
    }

    /// Empty extension dictionary group
    pub fn xdictionary() -> Self {
        Self::new(Self::XDICTIONARY)
    }

    /// Group name without braces
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a value to the group
    pub fn add(&mut self, code: i32, value: impl Into<TagValue>) {
        self.values.push(Tag::new(code, value));
    }

    /// Values inside the group
    pub fn values(&self) -> &[Tag] {
        &self.values
    }

    /// Check if the group has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DxfRecord for ApplicationDefined {
    fn write_tags(&self, writer: &mut TagsManager) {
        if self.values.is_empty() {
            return;
        }
        writer.write(102, format!("{{{}", self.name));
        for tag in &self.values {
            writer.write(tag.code(), tag.value().clone());
        }
        writer.write(102, "}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdata_record_creation() {
        let mut record = ExtendedDataRecord::new("MYAPP");
        assert_eq!(record.application_name, "MYAPP");
        assert!(record.is_empty());

        record.add_value(XDataValue::String("test".to_string()));
        assert_eq!(record.values.len(), 1);
    }

    #[test]
    fn test_xdata_tags() {
        let mut record = ExtendedDataRecord::new("APP1");
        record.add_value(XDataValue::Real(3.25));
        record.add_value(XDataValue::Integer16(2));
        record.add_value(XDataValue::BinaryData(vec![0x0A, 0xFF]));
        let mut xdata = ExtendedData::new();
        xdata.add_record(record);
        xdata.add_record(ExtendedDataRecord::new("EMPTY"));

        assert_eq!(
            xdata.to_dxf_string(),
            "1001\nAPP1\n1040\n3.25\n1070\n2\n1004\n0AFF"
        );
    }

    #[test]
    fn test_empty_group_is_not_written() {
        let group = ApplicationDefined::reactors();
        let mut writer = TagsManager::new();
        group.write_tags(&mut writer);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_group_brackets() {
        let mut group = ApplicationDefined::reactors();
        group.add(330, Handle::new(0x1F));
        assert_eq!(
            group.to_dxf_string(),
            "102\n{ACAD_REACTORS\n330\n1F\n102\n}"
        );
    }
}
