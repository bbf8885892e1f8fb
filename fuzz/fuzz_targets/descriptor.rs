#![no_main]
use libfuzzer_sys::fuzz_target;

use fontdesc::{
    CharSet, CodePageCharsets, DefaultFontList, FaceNamePolicy, FontFamily, FontInfoConfig,
    FontNormalizer, DEFAULT_TT_FONT_FACENAME,
};

fuzz_target!(|data: &[u8]| {
    // Layout: family, 4 bytes weight, 4 bytes code page, flags, face name
    if data.len() < 10 {
        return;
    }

    let family = data[0];
    let weight = i32::from_le_bytes([data[1], data[2], data[3], data[4]]);
    let code_page = u32::from_le_bytes([data[5], data[6], data[7], data[8]]);
    let flags = data[9];
    let face = match flags & 0x02 {
        0 => String::from_utf8_lossy(&data[10..]).into_owned(),
        _ => DEFAULT_TT_FONT_FACENAME.to_string(),
    };

    let list = DefaultFontList::standard();
    let config = FontInfoConfig::new().with_face_name_policy(FaceNamePolicy::Truncate);
    let normalizer = FontNormalizer::new(&config).with_default_fonts(&list);

    let Ok(mut font) = normalizer.create(&face, family, weight, flags & 0x01 != 0, code_page) else {
        panic!("truncating construction must not fail");
    };

    // The standard list has a catch-all entry, so the placeholder always resolves
    assert!(!font.is_placeholder());
    assert_eq!(normalizer.copy(&font).unwrap(), font);

    let charset = font.char_set(Some(&CodePageCharsets));
    if CodePageCharsets.code_pages().all(|cp| cp != code_page) {
        let expected = if font.is_true_type_font() { CharSet::ANSI } else { CharSet::OEM };
        assert_eq!(charset, expected);
    }

    font.set_from_engine(&face, FontFamily::from_bits(family), weight, true);
    assert!(font.was_default_raster_set_from_engine());
});
