use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fontdesc_core::constants::{FF_MODERN, FW_NORMAL, TMPF_TRUETYPE};
use fontdesc_core::{
    CharSet, CharsetTranslator, DefaultFontProvider, FaceName, FontInfoError, FontInfoResult,
    FontNormalizer, DEFAULT_TT_FONT_FACENAME,
};

/// Minimal provider answering a couple of code pages
struct BenchFonts;

impl DefaultFontProvider for BenchFonts {
    fn retrieve_default_font_name_for_code_page(&self, code_page: u32) -> FontInfoResult<String> {
        match code_page {
            437 => Ok("Consolas".to_string()),
            932 => Ok("ＭＳ ゴシック".to_string()),
            _ => Err(FontInfoError::DefaultFontNotFound { code_page }),
        }
    }
}

struct BenchCharsets;

impl CharsetTranslator for BenchCharsets {
    fn translate_code_page_to_charset(&self, code_page: u32) -> Option<CharSet> {
        (code_page == 932).then_some(CharSet::SHIFTJIS)
    }
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    let fonts = BenchFonts;
    let normalizer = FontNormalizer::default().with_default_fonts(&fonts);

    let cases = vec![
        ("plain", "Lucida Console", 437),
        ("placeholder_hit", DEFAULT_TT_FONT_FACENAME, 437),
        ("placeholder_miss", DEFAULT_TT_FONT_FACENAME, 1252),
        ("raster_sentinel", "", 437),
    ];

    for (name, face, code_page) in cases {
        let family = if face.is_empty() { 0 } else { FF_MODERN | TMPF_TRUETYPE };
        let weight = if face.is_empty() { 0 } else { FW_NORMAL };
        group.bench_with_input(BenchmarkId::from_parameter(name), &face, |b, face| {
            b.iter(|| normalizer.create(black_box(face), family, weight, false, code_page));
        });
    }
    group.finish();
}

fn bench_face_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_name");

    for len in [8, 31, 128] {
        let name = "m".repeat(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &name, |b, name| {
            b.iter(|| FaceName::truncated(black_box(name)));
        });
    }
    group.finish();
}

fn bench_char_set(c: &mut Criterion) {
    let normalizer = FontNormalizer::default();
    let translated = normalizer.create("MS Gothic", FF_MODERN | TMPF_TRUETYPE, FW_NORMAL, false, 932).unwrap();
    let fallback = normalizer.create("Terminal", FF_MODERN, FW_NORMAL, false, 437).unwrap();

    c.bench_function("char_set_translated", |b| {
        b.iter(|| black_box(&translated).char_set(Some(&BenchCharsets)))
    });
    c.bench_function("char_set_fallback", |b| {
        b.iter(|| black_box(&fallback).char_set(Some(&BenchCharsets)))
    });
}

criterion_group!(benches, bench_create, bench_face_name, bench_char_set);
criterion_main!(benches);
