// src/constants.rs

// Face name limits
/// Face name buffer size in UTF-16 code units, terminator included.
pub const LF_FACESIZE: usize = 32;
/// Longest face name that fits the buffer, in UTF-16 code units.
pub const MAX_FACE_NAME_UNITS: usize = LF_FACESIZE - 1;

/// Reserved face name meaning "whatever TrueType font is configured as the
/// default for this code page".
pub const DEFAULT_TT_FONT_FACENAME: &str = "__DefaultTTFont__";

// Pitch-and-family bits (low nibble)
pub const TMPF_FIXED_PITCH: u8 = 0x01;
pub const TMPF_VECTOR: u8 = 0x02;
pub const TMPF_TRUETYPE: u8 = 0x04;
pub const TMPF_DEVICE: u8 = 0x08;

// Font family designs (high nibble)
pub const FF_DONTCARE: u8 = 0x00;
pub const FF_ROMAN: u8 = 0x10;
pub const FF_SWISS: u8 = 0x20;
pub const FF_MODERN: u8 = 0x30;
pub const FF_SCRIPT: u8 = 0x40;
pub const FF_DECORATIVE: u8 = 0x50;

// Weights
pub const FW_DONTCARE: i32 = 0;
pub const FW_NORMAL: i32 = 400;
pub const FW_BOLD: i32 = 700;

// Code pages
/// Code page 0: entries keyed on it apply to every code page.
pub const CP_ANY: u32 = 0;
pub const CP_US: u32 = 437;
pub const CP_JAPANESE: u32 = 932;
pub const CP_CHINESE_SIMPLIFIED: u32 = 936;
pub const CP_KOREAN: u32 = 949;
pub const CP_CHINESE_TRADITIONAL: u32 = 950;
pub const CP_UTF8: u32 = 65001;
