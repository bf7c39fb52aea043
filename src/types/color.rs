//! Color representation for CAD records

use std::fmt;

/// Represents a color in AutoCAD
///
/// Colors can be represented in multiple ways:
/// - By index (1-255): AutoCAD Color Index (ACI), written with group code 62
/// - By RGB values: true color, written with group code 420
/// - By layer (256) or by block (0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ => Color::Index(7),
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Value for group code 62
    ///
    /// True colors are approximated to the nearest primary ACI entry, the
    /// exact value travels separately in group code 420.
    pub fn aci(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => {
                let brightness = ((*r as u16) + (*g as u16) + (*b as u16)) / 3;
                if brightness < 32 {
                    8
                } else if brightness > 224 {
                    7
                } else if *r > *g && *r > *b {
                    1
                } else if *g > *r && *g > *b {
                    3
                } else if *b > *r && *b > *g {
                    5
                } else {
                    7
                }
            }
        }
    }

    /// Value for group code 420, present only for true colors
    pub fn true_color(&self) -> Option<i64> {
        match self {
            Color::Rgb { r, g, b } => Some(((*r as i64) << 16) | ((*g as i64) << 8) | (*b as i64)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}
