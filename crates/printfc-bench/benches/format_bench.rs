//! Format engine benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use printfc_core::{Argument, ArgumentList, vformat_to};

fn bench_literal_copy(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096];
    let mut group = c.benchmark_group("literal_copy");

    for &size in sizes {
        let format = vec![b'a'; size];
        let args = ArgumentList::new(&[]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(format.len());
                vformat_to(&mut out, &format, &args).unwrap();
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_mixed_directives(c: &mut Criterion) {
    let args_backing = [
        Argument::I32(-12345),
        Argument::Str("hello world"),
        Argument::F64(3.14159265),
        Argument::U64(0xDEAD_BEEF),
    ];
    let args = ArgumentList::new(&args_backing);
    let format: &[u8] = b"int=%d str=%-12s float=%.4f hex=%#x\n";

    c.bench_function("mixed_directives", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64);
            vformat_to(&mut out, format, &args).unwrap();
            black_box(out);
        });
    });
}

fn bench_positional_reuse(c: &mut Criterion) {
    let args_backing = [Argument::Str("x"), Argument::I32(7)];
    let args = ArgumentList::new(&args_backing);
    let format: &[u8] = b"%2$d %1$s %2$d %1$s %2$d";

    c.bench_function("positional_reuse", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(32);
            vformat_to(&mut out, format, &args).unwrap();
            black_box(out);
        });
    });
}

fn bench_zero_padded_integers(c: &mut Criterion) {
    let widths: &[usize] = &[8, 20, 64];
    let mut group = c.benchmark_group("zero_padded_int");

    for &width in widths {
        let format = format!("%0{width}d").into_bytes();
        let args_backing = [Argument::I64(-987_654_321)];
        let args = ArgumentList::new(&args_backing);

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(width + 1);
                vformat_to(&mut out, &format, &args).unwrap();
                black_box(out);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_literal_copy,
    bench_mixed_directives,
    bench_positional_reuse,
    bench_zero_padded_integers
);
criterion_main!(benches);
