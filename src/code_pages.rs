// src/code_pages.rs
//! Built-in code page to charset translation
//!
//! Covers the ANSI and DBCS code pages that have a legacy charset. OEM code
//! pages such as 437 or 850 have none, so descriptors on them take the
//! class-based fallback.

use fontdesc_core::{CharSet, CharsetTranslator};

const CODE_PAGE_CHARSETS: [(u32, CharSet); 15] = [
    (874, CharSet::THAI),
    (932, CharSet::SHIFTJIS),
    (936, CharSet::GB2312),
    (949, CharSet::HANGUL),
    (950, CharSet::CHINESEBIG5),
    (1250, CharSet::EASTEUROPE),
    (1251, CharSet::RUSSIAN),
    (1252, CharSet::ANSI),
    (1253, CharSet::GREEK),
    (1254, CharSet::TURKISH),
    (1255, CharSet::HEBREW),
    (1256, CharSet::ARABIC),
    (1257, CharSet::BALTIC),
    (1258, CharSet::VIETNAMESE),
    (1361, CharSet::JOHAB),
];

/// Static code page table standing in for the platform translation service
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePageCharsets;

impl CodePageCharsets {
    pub fn new() -> Self {
        Self
    }

    /// Code pages this table can translate
    pub fn code_pages(&self) -> impl Iterator<Item = u32> {
        CODE_PAGE_CHARSETS.iter().map(|(code_page, _)| *code_page)
    }
}

impl CharsetTranslator for CodePageCharsets {
    fn translate_code_page_to_charset(&self, code_page: u32) -> Option<CharSet> {
        CODE_PAGE_CHARSETS
            .binary_search_by_key(&code_page, |(cp, _)| *cp)
            .ok()
            .map(|index| CODE_PAGE_CHARSETS[index].1)
    }
}
