use std::hint::black_box;
use std::time::Instant;

use log::info;

use crate::analysis::report::{FilterLabel, TimingRow};
use crate::analysis::signals::{quantize_signal, white_noise};
use crate::analysis::AnalysisConfig;
use crate::coefficients::{Coefficients, SosCoefficients};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;
use crate::structures::{cascade_with, DirectForm, Structure};

/// Wall-clock time of one direct form call in format `T` over
/// `config.samples` samples of white noise. Signal generation and
/// quantization are not part of the measurement.
pub fn time_structure<T: Sample>(
    name: &str,
    form: DirectForm,
    coefs: &Coefficients<f64>,
    config: &AnalysisConfig,
) -> TimingRow {
    let quantized = coefs.quantize::<T>();
    let seconds = time_run::<T, _>(config, |x, y, diag| form.process(x, y, &quantized, diag));
    finish::<T>(name, form.into(), coefs.filter_order(), seconds)
}

pub fn time_cascade<T: Sample>(
    name: &str,
    sos: &SosCoefficients<f64>,
    config: &AnalysisConfig,
) -> TimingRow {
    let quantized = sos.quantize::<T>();
    let arithmetic = config.cascade_arithmetic;
    let seconds = time_run::<T, _>(config, |x, y, diag| {
        cascade_with(x, y, &quantized, arithmetic, diag)
    });
    finish::<T>(name, Structure::Cascade, sos.filter_order(), seconds)
}

fn time_run<T, F>(config: &AnalysisConfig, mut run: F) -> f64
where
    T: Sample,
    F: FnMut(&[T], &mut [T], &mut Diagnostics),
{
    let x: Vec<T> = quantize_signal(&white_noise(config.samples, &mut config.rng()));
    let mut y = vec![T::ZERO; x.len()];
    let mut diag = Diagnostics::new();

    let now = Instant::now();
    run(black_box(&x), &mut y, &mut diag);
    let seconds = now.elapsed().as_secs_f64();

    black_box(&y);
    seconds
}

fn finish<T: Sample>(name: &str, structure: Structure, order: usize, seconds: f64) -> TimingRow {
    let row = TimingRow {
        filter: FilterLabel::parse(name),
        format: T::FORMAT,
        structure,
        order,
        seconds,
    };
    info!("{}", row);
    row
}
