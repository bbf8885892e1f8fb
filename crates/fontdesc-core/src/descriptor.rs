//! Font descriptor: the font a terminal asks the rendering engine for
//!
//! A `FontDescriptor` records face name, family, weight and code page for a
//! requested font. `FontNormalizer` builds descriptors and resolves the
//! default TrueType font placeholder against a `DefaultFontProvider`. The
//! engine reports back what it actually selected through
//! `FontDescriptor::set_from_engine`, which never normalizes.

use std::fmt;

use crate::charset::CharSet;
use crate::config::FontInfoConfig;
use crate::constants::DEFAULT_TT_FONT_FACENAME;
use crate::error::FontInfoResult;
use crate::face_name::{FaceName, FaceNamePolicy};
use crate::family::{FontClass, FontFamily};
use crate::traits::{CharsetTranslator, DefaultFontProvider};

/// Identity of a requested or resolved font
///
/// Two descriptors are equal when face name, weight, family, code page and
/// the engine default flag all match. There is no `Clone`: copies go through
/// `FontNormalizer::copy` so they are normalized again.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    face_name: FaceName,
    family: FontFamily,
    weight: i32,
    code_page: u32,
    default_raster_set_from_engine: bool,
}

impl FontDescriptor {
    /// Assemble a descriptor without resolving the default font placeholder
    ///
    /// Useful while loading settings before a provider exists; run
    /// `FontNormalizer::normalize` on the result once one does.
    pub fn from_parts(
        face_name: FaceName,
        family: FontFamily,
        weight: i32,
        set_default_raster: bool,
        code_page: u32,
    ) -> Self {
        Self {
            face_name,
            family,
            weight,
            code_page,
            default_raster_set_from_engine: set_default_raster,
        }
    }

    /// The "let the platform pick its bitmap font" request
    pub fn default_raster(code_page: u32) -> Self {
        Self::from_parts(FaceName::EMPTY, FontFamily::UNSPECIFIED, 0, false, code_page)
    }

    pub fn face_name(&self) -> &FaceName {
        &self.face_name
    }

    pub fn family(&self) -> FontFamily {
        self.family
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn code_page(&self) -> u32 {
        self.code_page
    }

    /// Whether face, weight and family came from the engine answering a
    /// default raster font request rather than from the user
    pub fn was_default_raster_set_from_engine(&self) -> bool {
        self.default_raster_set_from_engine
    }

    pub fn is_true_type_font(&self) -> bool {
        self.family.is_true_type()
    }

    /// Empty face name with zero weight and family. Size is not tracked here.
    pub fn is_default_raster_font_no_size(&self) -> bool {
        self.weight == 0 && self.family.is_unspecified() && self.face_name.is_empty()
    }

    /// Whether the face name is still the default TrueType font placeholder
    pub fn is_placeholder(&self) -> bool {
        self.face_name == DEFAULT_TT_FONT_FACENAME
    }

    /// Record the font the engine actually selected
    ///
    /// Only the rendering engine should call this. The values are taken as
    /// final: no placeholder substitution happens on this path.
    pub fn set_from_engine(
        &mut self,
        face_name: &str,
        family: FontFamily,
        weight: i32,
        set_default_raster: bool,
    ) {
        let (face_name, truncated) = FaceName::fit(face_name);
        if truncated {
            tracing::warn!("Engine face name truncated to {:?}", face_name.as_str());
        }

        self.face_name = face_name;
        self.family = family;
        self.weight = weight;
        self.default_raster_set_from_engine = set_default_raster;
    }

    /// Legacy charset to pass to lower-level text APIs
    ///
    /// Falls back on the font class when the code page has no mapping:
    /// raster-style fonts expect the OEM charset, TrueType fonts expect ANSI.
    pub fn char_set(&self, translator: Option<&dyn CharsetTranslator>) -> CharSet {
        if let Some(charset) = translator.and_then(|t| t.translate_code_page_to_charset(self.code_page)) {
            return charset;
        }

        let charset = match self.family.class() {
            FontClass::TrueType => CharSet::ANSI,
            FontClass::Raster | FontClass::Vector | FontClass::Device => CharSet::OEM,
        };
        tracing::trace!(
            "No charset for code page {}, using {} for {:?} font",
            self.code_page,
            charset,
            self.family.class()
        );
        charset
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default_raster_font_no_size() {
            return write!(f, "<default raster font> (cp {})", self.code_page);
        }
        write!(
            f,
            "{:?} (weight {}, family {:#04x}, cp {})",
            self.face_name.as_str(),
            self.weight,
            self.family.bits(),
            self.code_page
        )
    }
}

/// Builds descriptors and resolves the default font placeholder
///
/// The provider is borrowed, never owned: it must outlive the normalizer and
/// is only ever queried.
#[derive(Clone, Copy)]
pub struct FontNormalizer<'a> {
    face_name_policy: FaceNamePolicy,
    substitute_placeholder: bool,
    default_fonts: Option<&'a dyn DefaultFontProvider>,
}

impl Default for FontNormalizer<'_> {
    fn default() -> Self {
        Self::new(&FontInfoConfig::default())
    }
}

impl fmt::Debug for FontNormalizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontNormalizer")
            .field("face_name_policy", &self.face_name_policy)
            .field("substitute_placeholder", &self.substitute_placeholder)
            .field("has_default_fonts", &self.default_fonts.is_some())
            .finish()
    }
}

impl<'a> FontNormalizer<'a> {
    /// Create a normalizer with no default font provider
    pub fn new(config: &FontInfoConfig) -> Self {
        Self {
            face_name_policy: config.face_name_policy,
            substitute_placeholder: config.substitute_placeholder,
            default_fonts: None,
        }
    }

    pub fn with_default_fonts(mut self, provider: &'a dyn DefaultFontProvider) -> Self {
        self.default_fonts = Some(provider);
        self
    }

    pub fn without_default_fonts(mut self) -> Self {
        self.default_fonts = None;
        self
    }

    pub fn face_name_policy(&self) -> FaceNamePolicy {
        self.face_name_policy
    }

    pub fn has_default_fonts(&self) -> bool {
        self.default_fonts.is_some()
    }

    /// Build a descriptor and normalize it
    ///
    /// Fails only when `face_name` does not fit and the policy is `Reject`.
    pub fn create(
        &self,
        face_name: &str,
        family: impl Into<FontFamily>,
        weight: i32,
        set_default_raster: bool,
        code_page: u32,
    ) -> FontInfoResult<FontDescriptor> {
        let face_name = FaceName::new(face_name, self.face_name_policy)?;
        let mut font = FontDescriptor::from_parts(face_name, family.into(), weight, set_default_raster, code_page);
        self.normalize(&mut font);
        Ok(font)
    }

    /// Copy a descriptor by running construction again on its current values
    pub fn copy(&self, source: &FontDescriptor) -> FontInfoResult<FontDescriptor> {
        self.create(
            source.face_name().as_str(),
            source.family(),
            source.weight(),
            source.was_default_raster_set_from_engine(),
            source.code_page(),
        )
    }

    /// Replace the default font placeholder with the code page's default face
    ///
    /// Leaves the default raster sentinel alone; raster selection belongs to
    /// the engine. When no provider is set or the lookup fails the
    /// placeholder stays in place for the engine or caller to deal with.
    pub fn normalize(&self, font: &mut FontDescriptor) {
        if font.is_default_raster_font_no_size() {
            return;
        }

        if !self.substitute_placeholder || !font.is_placeholder() {
            return;
        }

        let Some(provider) = self.default_fonts else {
            tracing::debug!(
                "No default font provider, keeping placeholder for code page {}",
                font.code_page
            );
            return;
        };

        match provider.retrieve_default_font_name_for_code_page(font.code_page) {
            Ok(name) => {
                let (face_name, truncated) = FaceName::fit(&name);
                if truncated {
                    tracing::warn!(
                        "Default font {:?} for code page {} truncated to {:?}",
                        name,
                        font.code_page,
                        face_name.as_str()
                    );
                }
                tracing::debug!(
                    "Substituted default font {:?} for code page {}",
                    face_name.as_str(),
                    font.code_page
                );
                font.face_name = face_name;
            }
            Err(e) => {
                tracing::debug!(
                    "Default font lookup failed for code page {}: {}, keeping placeholder",
                    font.code_page,
                    e
                );
            }
        }
    }
}
