use log::{info, warn};

use crate::analysis::report::{FilterLabel, OverflowRow};
use crate::analysis::signals::{quantize_signal, white_noise};
use crate::analysis::AnalysisConfig;
use crate::coefficients::{Coefficients, SosCoefficients};
use crate::diagnostics::Diagnostics;
use crate::number::Sample;
use crate::structures::{cascade_with, DirectForm, Structure};

/// Count the clamping events of one direct form in format `T` on seeded
/// white noise.
pub fn overflow_analysis<T: Sample>(
    name: &str,
    form: DirectForm,
    coefs: &Coefficients<f64>,
    config: &AnalysisConfig,
) -> OverflowRow {
    let quantized = coefs.quantize::<T>();
    let diagnostics = run_noise::<T, _>(config, |x, y, diag| form.process(x, y, &quantized, diag));
    finish::<T>(name, form.into(), coefs.filter_order(), diagnostics)
}

/// Same for the cascade, with the arithmetic selected in `config`.
pub fn overflow_analysis_sos<T: Sample>(
    name: &str,
    sos: &SosCoefficients<f64>,
    config: &AnalysisConfig,
) -> OverflowRow {
    let quantized = sos.quantize::<T>();
    let arithmetic = config.cascade_arithmetic;
    let diagnostics = run_noise::<T, _>(config, |x, y, diag| {
        cascade_with(x, y, &quantized, arithmetic, diag)
    });
    finish::<T>(name, Structure::Cascade, sos.filter_order(), diagnostics)
}

fn run_noise<T, F>(config: &AnalysisConfig, mut run: F) -> Diagnostics
where
    T: Sample,
    F: FnMut(&[T], &mut [T], &mut Diagnostics),
{
    let x: Vec<T> = quantize_signal(&white_noise(config.samples, &mut config.rng()));
    let mut y = vec![T::ZERO; x.len()];
    let mut diag = Diagnostics::new();
    run(&x, &mut y, &mut diag);
    diag
}

fn finish<T: Sample>(
    name: &str,
    structure: Structure,
    order: usize,
    diagnostics: Diagnostics,
) -> OverflowRow {
    let row = OverflowRow {
        filter: FilterLabel::parse(name),
        format: T::FORMAT,
        structure,
        order,
        diagnostics,
    };
    if diagnostics.is_clean() {
        info!("{}", row);
    } else {
        warn!("{}: {} saturations", name, diagnostics.saturations());
        info!("{}", row);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Format, Q12, Q24};

    fn example() -> Coefficients<f64> {
        Coefficients::new(vec![0.0055, 0.0111, 0.0055], vec![1.0, -1.7786, 0.8008]).unwrap()
    }

    #[test]
    fn test_float_never_saturates() {
        let config = AnalysisConfig::default();
        for form in DirectForm::ALL {
            let row = overflow_analysis::<f32>("butter", form, &example(), &config);
            assert!(row.diagnostics.is_clean());
            assert_eq!(row.format, Format::F32);
        }
    }

    #[test]
    fn test_internal_state_overflows_narrow_format() {
        // the DF2 state carries the feedback gain of about 45 on its own,
        // far beyond the range of Q4.12 but well inside Q8.24
        let config = AnalysisConfig::default();
        let narrow = overflow_analysis::<Q12>("butter_cut1000", DirectForm::Df2, &example(), &config);
        assert!(narrow.diagnostics.saturations() > 0);
        assert_eq!(narrow.structure, Structure::Direct(DirectForm::Df2));
        assert_eq!(narrow.order, 2);
        assert_eq!(narrow.filter.cutoff, Some(1000));

        let wide = overflow_analysis::<Q24>("butter_cut1000", DirectForm::Df2, &example(), &config);
        assert!(wide.diagnostics.is_clean());
    }

    #[test]
    fn test_sos_row() {
        let sos = SosCoefficients::from_rows(&[
            [0.0317, 0.0176, 0.0317, 1.0, -1.4548, 0.5623],
            [1.0, -0.9468, 1.0, 1.0, -1.4034, 0.8562],
        ]);
        let row = overflow_analysis_sos::<Q24>("ellip", &sos, &AnalysisConfig::default());
        assert_eq!(row.structure, Structure::Cascade);
        assert_eq!(row.order, 4);
        assert!(row.diagnostics.is_clean());
    }
}
