//! fontdesc core - font descriptors for terminal text rendering
//!
//! This crate describes the font a terminal requests from its rendering
//! engine and normalizes that request, independent of any specific engine
//! or platform font registry.

pub mod charset;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod face_name;
pub mod family;
pub mod traits;

// Re-export main types
pub use charset::CharSet;
pub use config::{DefaultFontEntry, FontInfoConfig};
pub use constants::DEFAULT_TT_FONT_FACENAME;
pub use descriptor::{FontDescriptor, FontNormalizer};
pub use error::{FontInfoError, FontInfoResult};
pub use face_name::{FaceName, FaceNamePolicy};
pub use family::{FontClass, FontFamily};

// Re-export traits
pub use traits::*;
