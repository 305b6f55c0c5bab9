//! Бенчмарк декодирования CLF: полный проход по CF1 и CF2 буферам.

use std::io::Cursor;

use clf_core::ClfFile;
use clf_types::{FormatTag, CF1_TAG, CF2_TAG};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_f32(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_chars(buf: &mut Vec<u8>, s: &str, len: usize) {
    let mut field = vec![0u8; len];
    field[..s.len()].copy_from_slice(s.as_bytes());
    buf.extend_from_slice(&field);
}

/// Синтетический файл с валидным заголовком (нулевые коды) и нулевым баллоном.
fn make_file_bytes(tag: u32) -> Vec<u8> {
    let mut b = Vec::new();

    push_u32(&mut b, tag);
    for _ in 0..4 {
        push_u32(&mut b, 0); // version, draft, bin_version, reader
    }
    push_chars(&mut b, "v2.0", 8);
    for _ in 0..6 {
        push_u32(&mut b, 0); // checksum, magic, header_extra
    }

    push_chars(&mut b, "", 256); // license
    push_u32(&mut b, 0);
    push_chars(&mut b, "Bench Box", 256);
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_u32(&mut b, 0); // given_flags
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_f32(&mut b, 0.0); // weight
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 16);
    push_chars(&mut b, "", 16);
    push_chars(&mut b, "", 16);
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_f32(&mut b, 0.0); // measure_distance
    push_u32(&mut b, 0); // lsp_type
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_chars(&mut b, "", 256);
    push_u32(&mut b, 0); // total_max_in_type
    push_f32(&mut b, 0.0);
    push_u32(&mut b, 0); // total_max_in_method
    push_chars(&mut b, "", 256);
    for _ in 0..30 {
        push_f32(&mut b, 0.0);
    }
    push_f32(&mut b, 0.0); // avg_impedance
    for _ in 0..30 {
        push_f32(&mut b, 0.0);
    }
    push_chars(&mut b, "", 256);
    for _ in 0..4 {
        push_u32(&mut b, 0); // radiation, symmetry, balloon_reference, cab_flags
    }
    for _ in 0..16 {
        push_f32(&mut b, 0.0); // rect min/max + trap
    }
    push_u32(&mut b, 0); // dxf_unit
    for _ in 0..3 {
        push_f32(&mut b, 0.0); // dxf_origin
    }
    push_u32(&mut b, 0); // dxf_axis
    push_u32(&mut b, 0); // dxf_up
    push_chars(&mut b, "", 48);

    let profile = FormatTag::from_tag(tag).unwrap().profile();
    push_u32(&mut b, 0); // min_band
    push_u32(&mut b, profile.n_bands as u32 - 1); // max_band
    let floats = profile.size / 4 - 2;
    for _ in 0..floats {
        push_f32(&mut b, 0.0);
    }

    b
}

fn bench_decode(c: &mut Criterion) {
    let cf1 = make_file_bytes(CF1_TAG);
    let cf2 = make_file_bytes(CF2_TAG);

    let mut group = c.benchmark_group("decode");

    group.throughput(Throughput::Bytes(cf1.len() as u64));
    group.bench_function("cf1_full_file", |b| {
        b.iter(|| ClfFile::decode(&mut Cursor::new(&cf1)).unwrap())
    });

    group.throughput(Throughput::Bytes(cf2.len() as u64));
    group.bench_function("cf2_full_file", |b| {
        b.iter(|| ClfFile::decode(&mut Cursor::new(&cf2)).unwrap())
    });

    group.finish();
}

fn bench_directivity_rows(c: &mut Criterion) {
    let cf2 = make_file_bytes(CF2_TAG);
    let file = ClfFile::decode(&mut Cursor::new(&cf2)).unwrap();

    c.bench_function("directivity_rows_cf2", |b| {
        b.iter(|| file.balloon.directivity_rows().count())
    });
}

criterion_group!(benches, bench_decode, bench_directivity_rows);
criterion_main!(benches);
