use super::*;
use crate::model::record::record_from;

const EPS: f64 = 1e-6;

#[test]
fn test_registry_is_complete_and_unique() {
    assert_eq!(DII_PARAMS.len(), 45);
    let mut columns: Vec<&str> = DII_PARAMS.iter().map(|p| p.column).collect();
    columns.sort_unstable();
    columns.dedup();
    assert_eq!(columns.len(), 45);
    assert!(DII_PARAMS.iter().all(|p| p.sd > 0.0));
}

#[test]
fn test_normal_cdf_reference_points() {
    // exact values to double precision
    let cases = [
        (0.0, 0.5),
        (1.0, 0.8413447460685429),
        (-1.0, 0.15865525393145707),
        (-1.96, 0.024997895148220428),
        (2.5, 0.9937903346742238),
        (-4.0, 3.167124183311998e-05),
    ];
    for (z, expected) in cases {
        let got = normal_cdf(z);
        assert!((got - expected).abs() < 1e-14, "z={z}: {got} vs {expected}");
    }
    assert!((centered_percentile(1.0) + centered_percentile(-1.0)).abs() < 1e-15);
}

#[test]
fn test_centered_percentile_matches_erf_reference() {
    // 2 * Phi(z) - 1 == erf(z / sqrt 2)
    let cases = [
        (SQRT_2 * 0.5, 0.5204998778130465),
        (SQRT_2, 0.8427007929497149),
        (SQRT_2 * 2.0, 0.9953222650189527),
        (-SQRT_2 * 0.1, -0.1124629160182849),
    ];
    for (z, expected) in cases {
        let got = centered_percentile(z);
        assert!((got - expected).abs() < 1e-14, "z={z}: {got} vs {expected}");
    }
}

#[test]
fn test_intake_at_global_mean_contributes_nothing() {
    let record = record_from([("FIBER_DII", 18.8), ("KCAL_DII", 2056.0)]);
    assert!(dii_score(&record).unwrap().abs() < EPS);
}

#[test]
fn test_single_component_contribution() {
    // Fiber one sd above the mean: centered percentile erf(1/sqrt 2).
    let record = record_from([("FIBER_DII", 18.8 + 4.9)]);
    let expected = 0.6826894921370859 * -0.663;
    assert!((dii_score(&record).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_contributions_sum_and_ignore_unknown_columns() {
    let record = record_from([
        ("FIBER_DII", 30.0),
        ("SATFAT_DII", 40.0),
        ("NOT_A_DII_COLUMN", 1000.0),
    ]);
    let fiber = DII_PARAMS.iter().find(|p| p.column == "FIBER_DII").unwrap();
    let satfat = DII_PARAMS.iter().find(|p| p.column == "SATFAT_DII").unwrap();
    let expected = fiber.contribution(30.0) + satfat.contribution(40.0);
    assert!((dii_score(&record).unwrap() - expected).abs() < EPS);
    assert!(fiber.contribution(30.0) < 0.0);
    assert!(satfat.contribution(40.0) > 0.0);
}
