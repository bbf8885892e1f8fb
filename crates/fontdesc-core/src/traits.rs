use crate::charset::CharSet;
use crate::error::FontInfoResult;

/// Source of the default TrueType-class face name for each code page
///
/// Consulted only while normalizing a descriptor whose face name is the
/// default font placeholder. Implementations answer with a concrete face name
/// or an error; the error never reaches the descriptor's caller.
pub trait DefaultFontProvider {
    fn retrieve_default_font_name_for_code_page(&self, code_page: u32) -> FontInfoResult<String>;
}

/// Platform translation from a code page to a legacy charset identifier
pub trait CharsetTranslator {
    /// Returns `None` when the code page has no charset mapping
    fn translate_code_page_to_charset(&self, code_page: u32) -> Option<CharSet>;
}

impl<T: DefaultFontProvider + ?Sized> DefaultFontProvider for &T {
    fn retrieve_default_font_name_for_code_page(&self, code_page: u32) -> FontInfoResult<String> {
        (**self).retrieve_default_font_name_for_code_page(code_page)
    }
}

impl<T: CharsetTranslator + ?Sized> CharsetTranslator for &T {
    fn translate_code_page_to_charset(&self, code_page: u32) -> Option<CharSet> {
        (**self).translate_code_page_to_charset(code_page)
    }
}
