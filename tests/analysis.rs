use assert_approx_eq::assert_approx_eq;
use iir_kernel::analysis::report::PRECISION_HEADER;
use iir_kernel::analysis::{
    magnitude_db, precision_analysis, precision_analysis_sos, sos_frequency_response,
};
use iir_kernel::*;

fn butter() -> Coefficients<f64> {
    Coefficients::new(vec![0.0055, 0.0111, 0.0055], vec![1.0, -1.7786, 0.8008]).unwrap()
}

fn ellip() -> SosCoefficients<f64> {
    SosCoefficients::from_flat(&[
        0.0317, 0.0176, 0.0317, 1.0, -1.4548, 0.5623, //
        1.0, -0.9468, 1.0, 1.0, -1.4034, 0.8562,
    ])
    .unwrap()
}

#[test]
fn full_precision_table() {
    let config = AnalysisConfig::default();
    let mut lines = vec![PRECISION_HEADER.to_string()];

    for form in DirectForm::ALL {
        let narrow = precision_analysis::<Q12>("butter_df_order2_cut1000", form, &butter(), &config);
        let wide = precision_analysis::<Q24>("butter_df_order2_cut1000", form, &butter(), &config);
        assert!(wide[0].mae < narrow[0].mae, "{}", form.label());
        lines.extend(narrow.iter().chain(wide.iter()).map(|row| row.to_string()));
    }

    let narrow = precision_analysis_sos::<Q12>("ellip_sos_order4_cut2000", &ellip(), &config);
    let wide = precision_analysis_sos::<Q24>("ellip_sos_order4_cut2000", &ellip(), &config);
    assert!(wide[0].mae < narrow[0].mae);
    lines.extend(narrow.iter().chain(wide.iter()).map(|row| row.to_string()));

    // header plus two signals, two formats, four structures
    assert_eq!(lines.len(), 1 + 2 * 2 * 4);
    assert!(lines[1].starts_with("butter,q12,DF1,1000,2,impulse,"));
    assert!(lines.last().unwrap().starts_with("ellip,q24,CASCADE,2000,4,rand,"));
}

#[test]
fn narrow_results_published_to_tally() {
    diagnostics::reset_totals();

    let mut diag = Diagnostics::new();
    let x = vec![Q12::MAX; 16];
    let mut y = vec![Q12::ZERO; 16];
    let gain = Coefficients::new(vec![Q12::from_f64(2.0)], vec![Q12::ONE]).unwrap();
    df1(&x, &mut y, &gain, &mut diag);
    assert_eq!(diag.overflow, 16);

    diagnostics::publish(Format::Q12, &diag);
    diagnostics::publish(Format::Q12, &diag);
    assert_eq!(diagnostics::totals(Format::Q12).overflow, 32);
    assert!(diagnostics::totals(Format::Q24).is_clean());
}

#[test]
fn invalid_coefficients_are_rejected() {
    assert_eq!(
        Coefficients::<f64>::new(vec![1.0, 0.5], vec![1.0]),
        Err(FilterError::LengthMismatch { b: 2, a: 1 })
    );
    assert_eq!(
        SosCoefficients::<f64>::from_flat(&[1.0; 7]),
        Err(FilterError::RaggedSections { len: 7 })
    );
    assert!(Coefficients::<Q24>::identity(MAX_ORDER + 1).is_err());
}

#[test]
fn cascade_keeps_its_passband() {
    let dc = sos_frequency_response(&ellip(), 0.0);
    let x = vec![1.0; 4096];
    let mut y = vec![0.0; 4096];
    cascade(&x, &mut y, &ellip(), &mut Diagnostics::new());
    assert_approx_eq!(y[4095], dc.re, 1e-6);
    // 0.081 / 0.1075 * 1.0532 / 0.4528
    assert_approx_eq!(magnitude_db(dc), 4.87, 0.01);
}
