// src/discovery.rs
//! System default font discovery through fontconfig

use fontconfig::Fontconfig;
use fontdesc_core::{DefaultFontProvider, FaceName, FontInfoError, FontInfoResult};

/// Default font provider answering fontconfig's best monospace match
///
/// fontconfig has no notion of code pages, so every code page gets the same
/// answer. The match is made once, at construction.
#[derive(Debug, Clone)]
pub struct SystemDefaultFonts {
    face_name: FaceName,
}

impl SystemDefaultFonts {
    pub fn discover() -> FontInfoResult<Self> {
        Self::discover_family("monospace")
    }

    pub fn discover_family(family: &str) -> FontInfoResult<Self> {
        let fc = Fontconfig::new().ok_or_else(|| FontInfoError::ProviderUnavailable {
            reason: "fontconfig could not be initialised".to_string(),
        })?;

        let font = fc.find(family, None).ok_or_else(|| FontInfoError::ProviderUnavailable {
            reason: format!("fontconfig found no match for {:?}", family),
        })?;

        let face_name = FaceName::truncated(&font.name);
        tracing::debug!("fontconfig resolved {:?} to {:?}", family, face_name.as_str());
        Ok(Self { face_name })
    }

    pub fn face_name(&self) -> &FaceName {
        &self.face_name
    }
}

impl DefaultFontProvider for SystemDefaultFonts {
    fn retrieve_default_font_name_for_code_page(&self, _code_page: u32) -> FontInfoResult<String> {
        Ok(self.face_name.as_str().to_string())
    }
}
