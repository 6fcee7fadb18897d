use super::*;
use crate::fixtures::{acs2020_v1_rows, acs2020_v2_rows, ahei_row, approx, num};

fn totals(records: &[Record], field: &str) -> Vec<f64> {
    records.iter().map(|r| num(r, field)).collect()
}

#[test]
fn test_acs2020_v1_totals() {
    let scored = evaluate(&acs2020_v1_rows(), DietIndex::Acs2020V1).unwrap();
    assert_eq!(
        totals(&scored, "ACS2020_V1_ALL"),
        vec![2.5, 5.5, 9.0, 2.5, 5.5, 9.5]
    );
}

#[test]
fn test_total_equals_component_sum() {
    let mut ahei_rows = vec![ahei_row(2.0, 1.0, 1000.0), ahei_row(1.0, 0.0, 2400.0)];
    ahei_rows[1].insert("RESPONDENTID".to_string(), 2.0.into());
    let cases = [
        (DietIndex::Acs2020V1, acs2020_v1_rows()),
        (DietIndex::Acs2020V2, acs2020_v2_rows()),
        (DietIndex::Ahei, ahei_rows),
    ];
    for (index, rows) in cases {
        let def = index.definition();
        let scored = evaluate(&rows, index).unwrap();
        for record in &scored {
            let sum: f64 = def.components.iter().map(|c| num(record, c.output)).sum();
            assert!((num(record, def.total) - sum).abs() < 1e-6, "{index}");
        }
    }
}

#[test]
fn test_original_fields_preserved() {
    let mut rows = acs2020_v1_rows();
    rows[0].insert("NOTE".to_string(), Value::from("baseline"));
    let scored = evaluate(&rows, DietIndex::Acs2020V1).unwrap();
    assert_eq!(scored.len(), rows.len());
    for (input, output) in rows.iter().zip(&scored) {
        for (key, value) in input {
            assert_eq!(output.get(key), Some(value));
        }
        assert_eq!(output.len(), input.len() + 9);
    }
}

#[test]
fn test_missing_column_fails_before_scoring() {
    let mut rows = acs2020_v1_rows();
    rows[2].remove("HPFRG_RATIO_SERV_ACS2020");
    let snapshot = rows.clone();
    let err = evaluate(&rows, DietIndex::Acs2020V1).unwrap_err();
    assert_eq!(
        err,
        IndexError::MissingColumn("HPFRG_RATIO_SERV_ACS2020".to_string())
    );
    assert_eq!(rows, snapshot);
    assert!(rows.iter().all(|r| !r.contains_key("ACS2020_V1_ALL")));
}

#[test]
fn test_moving_respondent_between_groups_changes_scores() {
    let mut rows = acs2020_v1_rows();
    rows[2].insert("GENDER".to_string(), 2.0.into());
    let scored = evaluate(&rows, DietIndex::Acs2020V1).unwrap();
    let expected = [2.5, 9.5, 6.75, 2.5, 4.5, 8.75];
    for (got, want) in totals(&scored, "ACS2020_V1_ALL").iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{got} != {want}");
    }
}

#[test]
fn test_acs2020_v2_single_member_groups() {
    let scored = evaluate(&acs2020_v2_rows(), DietIndex::Acs2020V2).unwrap();
    assert_eq!(num(&scored[0], "ACS2020_HPFRG"), 1.5);
    assert_eq!(num(&scored[0], "ACS2020_VEG"), 0.0);
    assert_eq!(totals(&scored, "ACS2020_V2_ALL"), vec![5.5, 5.0]);
    assert!(!scored[0].contains_key("ACS2020_HPFRG_RATIO"));
}

#[test]
fn test_ahei_female_moderate_drinker() {
    let scored = evaluate(&[ahei_row(2.0, 1.0, 1000.0)], DietIndex::Ahei).unwrap();
    let record = &scored[0];
    assert_eq!(num(record, "AHEI_ALCOHOL"), 10.0);
    assert!((num(record, "AHEI_ALL") - 75.904762).abs() < 1e-5);
    assert!(approx(
        num(record, "AHEI_NOETOH"),
        num(record, "AHEI_ALL") - 10.0
    ));
}

#[test]
fn test_ahei_female_heavy_drinker_scores_zero_alcohol() {
    for intake in [2.5, 3.0, 6.0] {
        let scored = evaluate(&[ahei_row(2.0, intake, 1000.0)], DietIndex::Ahei).unwrap();
        assert_eq!(num(&scored[0], "AHEI_ALCOHOL"), 0.0);
        assert!(approx(
            num(&scored[0], "AHEI_NOETOH"),
            num(&scored[0], "AHEI_ALL")
        ));
    }
}

#[test]
fn test_ssb_boundary_in_full_evaluation() {
    let mut rows = acs2020_v1_rows();
    rows[0].insert("SSB_FRTJ_SERV_ACS2020".to_string(), 0.428.into());
    let scored = evaluate(&rows, DietIndex::Acs2020V1).unwrap();
    assert_eq!(num(&scored[0], "ACS2020_SSB_FRTJ"), 0.5);
}

#[test]
fn test_group_sizes_reported() {
    let eval = evaluate_detailed(&acs2020_v1_rows(), DietIndex::Acs2020V1.definition()).unwrap();
    assert_eq!(
        eval.group_sizes,
        vec![("1".to_string(), 3), ("2".to_string(), 3)]
    );
    assert_eq!(eval.index, DietIndex::Acs2020V1);
}

#[test]
fn test_evaluate_is_deterministic_across_threads() {
    let v1 = acs2020_v1_rows();
    let ahei = vec![ahei_row(2.0, 1.0, 1000.0)];
    let serial_v1 = evaluate(&v1, DietIndex::Acs2020V1).unwrap();
    let serial_ahei = evaluate(&ahei, DietIndex::Ahei).unwrap();

    let (par_v1, par_ahei) = std::thread::scope(|s| {
        let a = s.spawn(|| evaluate(&v1, DietIndex::Acs2020V1));
        let b = s.spawn(|| evaluate(&ahei, DietIndex::Ahei));
        (a.join().unwrap().unwrap(), b.join().unwrap().unwrap())
    });
    assert_eq!(par_v1, serial_v1);
    assert_eq!(par_ahei, serial_ahei);
}
