//! RGB colors parsed from theme hex strings

use serde::{Serialize, Serializer};

use crate::error::{ConvertError, Result};

/// RGB color (0-255 per channel)
///
/// Serializes as a `[r, g, b]` array, which is what the generated Luau
/// command feeds into `Color3.fromRGB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" (alpha is discarded)
    ///
    /// The "#RGB" and "#RGBA" shorthands are expanded. The leading `#` is
    /// optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let malformed = || ConvertError::MalformedColor {
            value: s.to_string(),
        };

        let digits = s.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| malformed());
        let short = |c: &str| channel(&c.repeat(2));

        match digits.len() {
            6 | 8 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 | 4 => Ok(Self {
                r: short(&digits[0..1])?,
                g: short(&digits[1..2])?,
                b: short(&digits[2..3])?,
            }),
            _ => Err(malformed()),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}
