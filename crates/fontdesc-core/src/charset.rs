//! Legacy character set identifiers

use std::fmt;

/// A legacy charset identifier, as passed to lower-level text APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharSet(pub u8);

impl CharSet {
    pub const ANSI: CharSet = CharSet(0);
    pub const DEFAULT: CharSet = CharSet(1);
    pub const SYMBOL: CharSet = CharSet(2);
    pub const MAC: CharSet = CharSet(77);
    pub const SHIFTJIS: CharSet = CharSet(128);
    pub const HANGUL: CharSet = CharSet(129);
    pub const JOHAB: CharSet = CharSet(130);
    pub const GB2312: CharSet = CharSet(134);
    pub const CHINESEBIG5: CharSet = CharSet(136);
    pub const GREEK: CharSet = CharSet(161);
    pub const TURKISH: CharSet = CharSet(162);
    pub const VIETNAMESE: CharSet = CharSet(163);
    pub const HEBREW: CharSet = CharSet(177);
    pub const ARABIC: CharSet = CharSet(178);
    pub const BALTIC: CharSet = CharSet(186);
    pub const RUSSIAN: CharSet = CharSet(204);
    pub const THAI: CharSet = CharSet(222);
    pub const EASTEUROPE: CharSet = CharSet(238);
    pub const OEM: CharSet = CharSet(255);

    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            CharSet::ANSI => "ANSI",
            CharSet::DEFAULT => "DEFAULT",
            CharSet::SYMBOL => "SYMBOL",
            CharSet::MAC => "MAC",
            CharSet::SHIFTJIS => "SHIFTJIS",
            CharSet::HANGUL => "HANGUL",
            CharSet::JOHAB => "JOHAB",
            CharSet::GB2312 => "GB2312",
            CharSet::CHINESEBIG5 => "CHINESEBIG5",
            CharSet::GREEK => "GREEK",
            CharSet::TURKISH => "TURKISH",
            CharSet::VIETNAMESE => "VIETNAMESE",
            CharSet::HEBREW => "HEBREW",
            CharSet::ARABIC => "ARABIC",
            CharSet::BALTIC => "BALTIC",
            CharSet::RUSSIAN => "RUSSIAN",
            CharSet::THAI => "THAI",
            CharSet::EASTEUROPE => "EASTEUROPE",
            CharSet::OEM => "OEM",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}_CHARSET", name),
            None => write!(f, "charset {}", self.0),
        }
    }
}

impl From<CharSet> for u8 {
    fn from(charset: CharSet) -> Self {
        charset.0
    }
}
