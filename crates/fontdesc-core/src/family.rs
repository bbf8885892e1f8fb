//! Font family byte and its classification

use crate::constants::{TMPF_DEVICE, TMPF_FIXED_PITCH, TMPF_TRUETYPE, TMPF_VECTOR};

/// How a font's glyphs are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontClass {
    /// Fixed bitmap glyphs
    Raster,
    /// Stroke-based vector glyphs
    Vector,
    /// Scalable outline glyphs (TrueType-class)
    TrueType,
    /// Fonts resident on an output device
    Device,
}

/// The pitch-and-family byte reported for a font
///
/// The raw bits are kept verbatim so equality and the default raster
/// sentinel see exactly what the engine reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontFamily(u8);

impl FontFamily {
    /// Family 0, part of the default raster font sentinel
    pub const UNSPECIFIED: FontFamily = FontFamily(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn class(self) -> FontClass {
        if self.0 & TMPF_TRUETYPE != 0 {
            FontClass::TrueType
        } else if self.0 & TMPF_DEVICE != 0 {
            FontClass::Device
        } else if self.0 & TMPF_VECTOR != 0 {
            FontClass::Vector
        } else {
            FontClass::Raster
        }
    }

    pub fn is_true_type(self) -> bool {
        self.class() == FontClass::TrueType
    }

    /// Whether the font is fixed pitch. Note the bit is set for *variable* pitch.
    pub fn is_fixed_pitch(self) -> bool {
        self.0 & TMPF_FIXED_PITCH == 0
    }

    pub fn is_unspecified(self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for FontFamily {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<FontFamily> for u8 {
    fn from(family: FontFamily) -> Self {
        family.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FF_MODERN, TMPF_VECTOR};

    #[test]
    fn test_truetype_bit_wins() {
        let family = FontFamily::from_bits(FF_MODERN | TMPF_TRUETYPE | TMPF_VECTOR | TMPF_FIXED_PITCH);
        assert_eq!(family.class(), FontClass::TrueType);
        assert!(family.is_true_type());
    }

    #[test]
    fn test_classification() {
        assert_eq!(FontFamily::from_bits(FF_MODERN).class(), FontClass::Raster);
        assert_eq!(FontFamily::from_bits(TMPF_VECTOR).class(), FontClass::Vector);
        assert_eq!(FontFamily::from_bits(TMPF_DEVICE | TMPF_VECTOR).class(), FontClass::Device);
        assert_eq!(FontFamily::UNSPECIFIED.class(), FontClass::Raster);
    }

    #[test]
    fn test_bits_round_trip_verbatim() {
        let family = FontFamily::from(0x36u8);
        assert_eq!(u8::from(family), 0x36);
        assert!(!family.is_unspecified());
    }

    #[test]
    fn test_pitch_bit_is_inverted() {
        assert!(FontFamily::from_bits(FF_MODERN | TMPF_TRUETYPE).is_fixed_pitch());
        assert!(!FontFamily::from_bits(FF_MODERN | TMPF_TRUETYPE | TMPF_FIXED_PITCH).is_fixed_pitch());
    }
}
