//! Run with: cargo bench --bench structures

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iir_kernel::analysis::{quantize_signal, white_noise};
use iir_kernel::*;

const LEN: usize = 48_000;

fn butter<T: Sample>() -> Coefficients<T> {
    Coefficients::new(vec![0.0055, 0.0111, 0.0055], vec![1.0, -1.7786, 0.8008])
        .unwrap()
        .quantize()
}

fn ellip<T: Sample>() -> SosCoefficients<T> {
    SosCoefficients::from_rows(&[
        [0.0317, 0.0176, 0.0317, 1.0, -1.4548, 0.5623],
        [1.0, -0.9468, 1.0, 1.0, -1.4034, 0.8562],
    ])
    .quantize()
}

fn bench_format<T: Sample>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("structures_{}", T::FORMAT));
    group.throughput(Throughput::Elements(LEN as u64));

    let noise = white_noise(LEN, &mut fastrand::Rng::with_seed(0x5eed));
    let x: Vec<T> = quantize_signal(&noise);
    let mut y = vec![T::ZERO; LEN];
    let coefs = butter::<T>();
    let sos = ellip::<T>();

    for form in DirectForm::ALL {
        group.bench_with_input(BenchmarkId::new(form.label(), 2), &form, |b, form| {
            b.iter(|| {
                let mut diag = Diagnostics::new();
                form.process(black_box(&x), &mut y, &coefs, &mut diag);
                diag
            })
        });
    }

    for arithmetic in [CascadeArithmetic::Saturating, CascadeArithmetic::SourceFaithful] {
        let id = BenchmarkId::new(format!("CASCADE_{:?}", arithmetic), sos.filter_order());
        group.bench_with_input(id, &arithmetic, |b, arithmetic| {
            b.iter(|| {
                let mut diag = Diagnostics::new();
                cascade_with(black_box(&x), &mut y, &sos, *arithmetic, &mut diag);
                diag
            })
        });
    }

    group.finish();
}

fn bench_structures(c: &mut Criterion) {
    bench_format::<Q12>(c);
    bench_format::<Q24>(c);
    bench_format::<f32>(c);
}

criterion_group!(benches, bench_structures);
criterion_main!(benches);
