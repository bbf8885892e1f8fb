// src/config.rs
use crate::constants::DEFAULT_TT_FONT_FACENAME;
use crate::error::{FontInfoError, FontInfoResult};
use crate::face_name::{FaceName, FaceNamePolicy};

/// One configured default face name for a code page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultFontEntry {
    pub code_page: u32,
    pub face_name: String,
}

#[derive(Clone, Debug)]
pub struct FontInfoConfig {
    /// How construction treats face names that do not fit
    pub face_name_policy: FaceNamePolicy,
    /// Resolve the default font placeholder during normalization
    pub substitute_placeholder: bool,
    /// Default face names per code page; empty means the standard list
    pub default_fonts: Vec<DefaultFontEntry>,
}

impl Default for FontInfoConfig {
    fn default() -> Self {
        Self {
            face_name_policy: FaceNamePolicy::Reject,
            substitute_placeholder: true,
            default_fonts: Vec::new(),
        }
    }
}

impl FontInfoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face_name_policy(mut self, policy: FaceNamePolicy) -> Self {
        self.face_name_policy = policy;
        self
    }

    pub fn with_placeholder_substitution(mut self, enabled: bool) -> Self {
        self.substitute_placeholder = enabled;
        self
    }

    pub fn with_default_font(mut self, code_page: u32, face_name: &str) -> Self {
        self.default_fonts.push(DefaultFontEntry {
            code_page,
            face_name: face_name.to_string(),
        });
        self
    }

    /// Check the configured default fonts can actually be used as face names
    pub fn validate(&self) -> FontInfoResult<()> {
        for entry in &self.default_fonts {
            let field = format!("default_fonts[{}]", entry.code_page);

            if entry.face_name.is_empty() || entry.face_name == DEFAULT_TT_FONT_FACENAME {
                return Err(FontInfoError::ConfigurationError {
                    field,
                    value: entry.face_name.clone(),
                });
            }

            if FaceName::checked(&entry.face_name).is_err() {
                return Err(FontInfoError::ConfigurationError {
                    field,
                    value: entry.face_name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FontInfoConfig::new();
        assert_eq!(config.face_name_policy, FaceNamePolicy::Reject);
        assert!(config.substitute_placeholder);
        assert!(config.default_fonts.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FontInfoConfig::new()
            .with_face_name_policy(FaceNamePolicy::Truncate)
            .with_placeholder_substitution(false)
            .with_default_font(437, "Consolas");
        assert_eq!(config.face_name_policy, FaceNamePolicy::Truncate);
        assert!(!config.substitute_placeholder);
        assert_eq!(config.default_fonts[0], DefaultFontEntry { code_page: 437, face_name: "Consolas".to_string() });
    }

    #[test]
    fn test_validate_rejects_unusable_entries() {
        let empty = FontInfoConfig::new().with_default_font(437, "");
        assert!(matches!(empty.validate(), Err(FontInfoError::ConfigurationError { .. })));

        let placeholder = FontInfoConfig::new().with_default_font(437, DEFAULT_TT_FONT_FACENAME);
        assert!(placeholder.validate().is_err());

        let long = FontInfoConfig::new().with_default_font(932, &"w".repeat(40));
        match long.validate() {
            Err(FontInfoError::ConfigurationError { field, .. }) => assert_eq!(field, "default_fonts[932]"),
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }
}
