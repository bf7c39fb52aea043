//! Drawing units and DXF versions

use crate::error::DxfError;

/// Insertion units (`$INSUNITS`, BLOCK_RECORD group code 70)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i16)]
pub enum Units {
    #[default]
    Unitless = 0,
    Inches = 1,
    Feet = 2,
    Miles = 3,
    Millimeters = 4,
    Centimeters = 5,
    Meters = 6,
    Kilometers = 7,
    Microinches = 8,
    Mils = 9,
    Yards = 10,
    Angstroms = 11,
    Nanometers = 12,
    Microns = 13,
    Decimeters = 14,
    Decameters = 15,
    Hectometers = 16,
    Gigameters = 17,
    AstronomicalUnits = 18,
    LightYears = 19,
    Parsecs = 20,
}

impl Units {
    /// Raw group code value
    pub const fn code(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for Units {
    type Error = DxfError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Unitless,
            1 => Self::Inches,
            2 => Self::Feet,
            3 => Self::Miles,
            4 => Self::Millimeters,
            5 => Self::Centimeters,
            6 => Self::Meters,
            7 => Self::Kilometers,
            8 => Self::Microinches,
            9 => Self::Mils,
            10 => Self::Yards,
            11 => Self::Angstroms,
            12 => Self::Nanometers,
            13 => Self::Microns,
            14 => Self::Decimeters,
            15 => Self::Decameters,
            16 => Self::Hectometers,
            17 => Self::Gigameters,
            18 => Self::AstronomicalUnits,
            19 => Self::LightYears,
            20 => Self::Parsecs,
            other => return Err(DxfError::InvalidUnits(other)),
        })
    }
}

/// DXF file version written to `$ACADVER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DxfVersion {
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    #[default]
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    AC1032,
}

impl DxfVersion {
    /// Version string as written in the header
    pub const fn to_dxf_string(self) -> &'static str {
        match self {
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }
}
