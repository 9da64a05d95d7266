use log::{debug, info, warn};

use crate::analysis::metrics::mean_absolute_error;
use crate::analysis::report::{FilterLabel, PrecisionRow, SignalKind};
use crate::analysis::signals::{impulse, quantize_signal, white_noise};
use crate::analysis::AnalysisConfig;
use crate::coefficients::{Coefficients, SosCoefficients};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;
use crate::structures::{cascade, cascade_with, DirectForm, Structure};

/// Precision of one direct form in format `T`.
///
/// The coefficients are quantized to `T` and the structure is run on a unit
/// impulse and on seeded white noise. Both outputs are compared against the
/// same structure in `f64`: the impulse over the whole buffer, the noise
/// over the first `rand_window` samples only.
pub fn precision_analysis<T: Sample>(
    name: &str,
    form: DirectForm,
    coefs: &Coefficients<f64>,
    config: &AnalysisConfig,
) -> [PrecisionRow; 2] {
    let quantized = coefs.quantize::<T>();
    let rows = measure::<T, _, _>(
        FilterLabel::parse(name),
        form.into(),
        coefs.filter_order(),
        config,
        |x, y, diag| form.process(x, y, &quantized, diag),
        |x, y| form.process(x, y, coefs, &mut Diagnostics::new()),
    );
    log_rows(name, &rows);
    rows
}

/// Precision of the cascade in format `T`, see [`precision_analysis`].
/// Uses the cascade arithmetic of `config`; the `f64` reference is the
/// same either way.
pub fn precision_analysis_sos<T: Sample>(
    name: &str,
    sos: &SosCoefficients<f64>,
    config: &AnalysisConfig,
) -> [PrecisionRow; 2] {
    let quantized = sos.quantize::<T>();
    let arithmetic = config.cascade_arithmetic;
    let rows = measure::<T, _, _>(
        FilterLabel::parse(name),
        Structure::Cascade,
        sos.filter_order(),
        config,
        |x, y, diag| cascade_with(x, y, &quantized, arithmetic, diag),
        |x, y| cascade(x, y, sos, &mut Diagnostics::new()),
    );
    log_rows(name, &rows);
    rows
}

fn measure<T, F, R>(
    filter: FilterLabel,
    structure: Structure,
    order: usize,
    config: &AnalysisConfig,
    mut run: F,
    mut run_reference: R,
) -> [PrecisionRow; 2]
where
    T: Sample,
    F: FnMut(&[T], &mut [T], &mut Diagnostics),
    R: FnMut(&[f64], &mut [f64]),
{
    let len = config.samples;
    debug!(
        "{} {} {} order {}: {} samples",
        filter.family,
        T::FORMAT,
        structure,
        order,
        len
    );

    let mut reference = vec![0.0; len];
    let mut output = vec![T::ZERO; len];

    // impulse response, whole buffer
    let mut impulse_diag = Diagnostics::new();
    run_reference(&impulse::<f64>(len), &mut reference);
    run(&impulse::<T>(len), &mut output, &mut impulse_diag);
    let impulse_mae = mean_absolute_error(&reference, &output, len);

    // white noise, leading window only
    let noise = white_noise(len, &mut config.rng());
    let mut noise_diag = Diagnostics::new();
    run_reference(&noise, &mut reference);
    run(&quantize_signal::<T>(&noise), &mut output, &mut noise_diag);
    let noise_mae = mean_absolute_error(&reference, &output, config.rand_window);

    let row = |signal, mae, diagnostics| PrecisionRow {
        filter: filter.clone(),
        format: T::FORMAT,
        structure,
        order,
        signal,
        mae,
        diagnostics,
    };
    [
        row(SignalKind::Impulse, impulse_mae, impulse_diag),
        row(SignalKind::Rand, noise_mae, noise_diag),
    ]
}

fn log_rows(name: &str, rows: &[PrecisionRow]) {
    for row in rows.iter() {
        if !row.diagnostics.is_clean() {
            warn!(
                "{} ({}): {} overflows, {} underflows on {}",
                name,
                row.format,
                row.diagnostics.overflow,
                row.diagnostics.underflow,
                row.signal
            );
        }
        info!("{}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Format, Q12, Q24};
    use crate::structures::CascadeArithmetic;

    const NAME: &str = "butter_df1_order2_cut1000";

    fn example() -> Coefficients<f64> {
        Coefficients::new(vec![0.0055, 0.0111, 0.0055], vec![1.0, -1.7786, 0.8008]).unwrap()
    }

    #[test]
    fn test_rows_are_labelled() {
        let rows = precision_analysis::<Q12>(NAME, DirectForm::Df2, &example(), &AnalysisConfig::default());
        assert_eq!(rows[0].signal, SignalKind::Impulse);
        assert_eq!(rows[1].signal, SignalKind::Rand);
        for row in rows.iter() {
            assert_eq!(row.filter, FilterLabel::new("butter", Some(1000)));
            assert_eq!(row.format, Format::Q12);
            assert_eq!(row.structure, Structure::Direct(DirectForm::Df2));
            assert_eq!(row.order, 2);
        }
    }

    #[test]
    fn test_narrow_df1_sticks_in_limit_cycle() {
        // the Q4.12 output gets stuck one step above zero, so the error over
        // the whole buffer sits near 0.01
        let rows = precision_analysis::<Q12>(NAME, DirectForm::Df1, &example(), &AnalysisConfig::default());
        assert!(rows[0].mae > 5e-3 && rows[0].mae < 2e-2, "mae {}", rows[0].mae);
        assert!(rows[0].diagnostics.is_clean());
    }

    #[test]
    fn test_wide_format_is_more_precise() {
        let config = AnalysisConfig::default();
        for form in DirectForm::ALL {
            let narrow = precision_analysis::<Q12>(NAME, form, &example(), &config);
            let wide = precision_analysis::<Q24>(NAME, form, &example(), &config);
            assert!(wide[0].mae < narrow[0].mae, "{}", form.label());
            assert!(wide[0].mae < 1e-5, "{}", form.label());
        }

        let narrow = precision_analysis::<Q12>(NAME, DirectForm::Df1, &example(), &config);
        let wide = precision_analysis::<Q24>(NAME, DirectForm::Df1, &example(), &config);
        assert!(wide[1].mae < narrow[1].mae);
    }

    #[test]
    fn test_double_precision_matches_reference() {
        let rows = precision_analysis::<f64>(NAME, DirectForm::Tdf2, &example(), &AnalysisConfig::default());
        assert_eq!(rows[0].mae, 0.0);
        assert_eq!(rows[1].mae, 0.0);
    }

    #[test]
    fn test_single_section_cascade_matches_df2() {
        let sos = SosCoefficients::from_rows(&[[0.0055, 0.0111, 0.0055, 1.0, -1.7786, 0.8008]]);
        let config = AnalysisConfig::default();

        let cascade_rows = precision_analysis_sos::<Q24>("butter_sos_cut1000", &sos, &config);
        let df2_rows = precision_analysis::<Q24>(NAME, DirectForm::Df2, &example(), &config);

        assert_eq!(cascade_rows[0].structure, Structure::Cascade);
        assert_eq!(cascade_rows[0].order, 2);
        // fixed-point outputs are identical, the f64 references differ in
        // summation order only
        assert_approx_eq::assert_approx_eq!(cascade_rows[0].mae, df2_rows[0].mae, 1e-12);
        assert_approx_eq::assert_approx_eq!(cascade_rows[1].mae, df2_rows[1].mae, 1e-12);
    }

    #[test]
    fn test_noise_window() {
        let config = AnalysisConfig::default().with_rand_window(0);
        let rows = precision_analysis::<Q12>(NAME, DirectForm::Df1, &example(), &config);
        assert_eq!(rows[1].mae, 0.0);

        // same seed, same noise, same row
        let config = AnalysisConfig::default()
            .with_samples(512)
            .with_cascade_arithmetic(CascadeArithmetic::SourceFaithful);
        let sos = SosCoefficients::from_rows(&[[0.0055, 0.0111, 0.0055, 1.0, -1.7786, 0.8008]]);
        let a = precision_analysis_sos::<Q24>("butter", &sos, &config);
        let b = precision_analysis_sos::<Q24>("butter", &sos, &config);
        assert_eq!(a, b);
    }
}
