// src/default_fonts.rs
//! Default TrueType face names per code page
//!
//! The in-process counterpart of the console's TrueType font list: each
//! entry maps a code page to the face name to use when a descriptor asks
//! for the default font. Code page 0 is the catch-all entry.

use fontdesc_core::constants::{
    CP_ANY, CP_CHINESE_SIMPLIFIED, CP_CHINESE_TRADITIONAL, CP_JAPANESE, CP_KOREAN,
};
use fontdesc_core::{
    DefaultFontProvider, FaceName, FontInfoConfig, FontInfoError, FontInfoResult,
};

/// Code page keyed default font list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultFontList {
    entries: Vec<(u32, FaceName)>,
}

impl DefaultFontList {
    /// An empty list; every lookup fails
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock console defaults
    pub fn standard() -> Self {
        let mut list = Self::new();
        for (code_page, face_name) in [
            (CP_ANY, "Consolas"),
            (CP_JAPANESE, "ＭＳ ゴシック"),
            (CP_CHINESE_SIMPLIFIED, "新宋体"),
            (CP_KOREAN, "굴림체"),
            (CP_CHINESE_TRADITIONAL, "細明體"),
        ] {
            list.entries.push((code_page, FaceName::truncated(face_name)));
        }
        list
    }

    /// Build the list from configuration, or the standard list if none is configured
    pub fn from_config(config: &FontInfoConfig) -> FontInfoResult<Self> {
        config.validate()?;

        if config.default_fonts.is_empty() {
            return Ok(Self::standard());
        }

        let mut list = Self::new();
        for entry in &config.default_fonts {
            list.insert(entry.code_page, &entry.face_name)?;
        }
        tracing::debug!("Loaded {} default font entries from config", list.len());
        Ok(list)
    }

    /// Add or replace the default face name for a code page
    pub fn insert(&mut self, code_page: u32, face_name: &str) -> FontInfoResult<()> {
        let face_name = FaceName::checked(face_name)?;
        match self.entries.iter_mut().find(|(cp, _)| *cp == code_page) {
            Some(entry) => {
                tracing::debug!(
                    "Replacing default font {:?} for code page {} with {:?}",
                    entry.1.as_str(),
                    code_page,
                    face_name.as_str()
                );
                entry.1 = face_name;
            }
            None => self.entries.push((code_page, face_name)),
        }
        Ok(())
    }

    pub fn remove(&mut self, code_page: u32) -> Option<FaceName> {
        let index = self.entries.iter().position(|(cp, _)| *cp == code_page)?;
        Some(self.entries.remove(index).1)
    }

    /// Face name registered for exactly this code page
    pub fn get(&self, code_page: u32) -> Option<&FaceName> {
        self.entries
            .iter()
            .find(|(cp, _)| *cp == code_page)
            .map(|(_, face_name)| face_name)
    }

    /// Face name for a code page, falling back to the catch-all entry
    pub fn lookup(&self, code_page: u32) -> Option<&FaceName> {
        self.get(code_page).or_else(|| self.get(CP_ANY))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefaultFontProvider for DefaultFontList {
    fn retrieve_default_font_name_for_code_page(&self, code_page: u32) -> FontInfoResult<String> {
        self.lookup(code_page)
            .map(|face_name| face_name.as_str().to_string())
            .ok_or(FontInfoError::DefaultFontNotFound { code_page })
    }
}
