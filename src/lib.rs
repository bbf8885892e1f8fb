//! fontdesc - font descriptors for terminal-style text renderers
//!
//! This crate pairs the engine-agnostic core with the platform collaborators
//! it consults:
//! - `CodePageCharsets` translating code pages to legacy charsets
//! - `DefaultFontList` holding the default TrueType face per code page
//! - `SystemDefaultFonts` backed by fontconfig (`font-discovery` feature)

pub mod code_pages;
pub mod default_fonts;
#[cfg(all(target_os = "linux", feature = "font-discovery"))]
pub mod discovery;

pub use code_pages::CodePageCharsets;
pub use default_fonts::DefaultFontList;
#[cfg(all(target_os = "linux", feature = "font-discovery"))]
pub use discovery::SystemDefaultFonts;

// Re-export the core API for convenience
pub use fontdesc_core::constants;
pub use fontdesc_core::{
    CharSet, CharsetTranslator, DefaultFontEntry, DefaultFontProvider, FaceName, FaceNamePolicy,
    FontClass, FontDescriptor, FontFamily, FontInfoConfig, FontInfoError, FontInfoResult,
    FontNormalizer, DEFAULT_TT_FONT_FACENAME,
};
