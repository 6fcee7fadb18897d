use crate::model::record::{Record, Value, record_from};

pub const EPS: f64 = 1e-9;

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

pub fn num(record: &Record, field: &str) -> f64 {
    record
        .get(field)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("{field} missing or non-numeric"))
}

/// Six respondents split 3/3 by GENDER with distinct intake distributions.
pub fn acs2020_v1_rows() -> Vec<Record> {
    let data: [(f64, f64, f64, f64, f64, f64, f64, f64); 6] = [
        (1.0, 2.0, 0.5, 1.0, 0.2, 1.0, 0.2, 0.2),
        (2.0, 3.0, 1.0, 2.0, 0.4, 0.8, 0.3, 0.5),
        (3.0, 4.0, 1.5, 3.0, 0.6, 0.5, 0.4, 1.2),
        (1.0, 2.0, 0.3, 1.0, 0.2, 1.2, 0.25, 0.1),
        (2.0, 3.0, 0.7, 2.0, 0.3, 0.7, 0.35, 0.6),
        (3.0, 5.0, 1.1, 3.0, 0.8, 0.4, 0.45, 0.9),
    ];
    data.iter()
        .enumerate()
        .map(|(i, &(v, vi, f, fi, w, r, h, s))| {
            let id = (i + 1) as f64;
            record_from([
                ("RESPONDENTID", id),
                ("GENDER", if i < 3 { 1.0 } else { 2.0 }),
                ("VEG_SERV_ACS2020", v),
                ("VEG_ITEMS_SERV_ACS2020", vi),
                ("FRT_SERV_ACS2020", f),
                ("FRT_ITEMS_SERV_ACS2020", fi),
                ("WGRAIN_SERV_ACS2020", w),
                ("REDPROC_MEAT_SERV_ACS2020", r),
                ("HPFRG_RATIO_SERV_ACS2020", h),
                ("SSB_FRTJ_SERV_ACS2020", s),
            ])
        })
        .collect()
}

pub fn acs2020_v2_rows() -> Vec<Record> {
    vec![
        record_from([
            ("RESPONDENTID", 1.0),
            ("GENDER", 1.0),
            ("TOTALKCAL_ACS2020", 2000.0),
            ("VEG_SERV_ACS2020", 1.0),
            ("VEG_ITEMS_SERV_ACS2020", 2.0),
            ("FRT_SERV_ACS2020", 1.0),
            ("FRT_ITEMS_SERV_ACS2020", 1.0),
            ("WGRAIN_SERV_ACS2020", 0.5),
            ("REDPROC_MEAT_SERV_ACS2020", 1.0),
            ("HPFRG_SERV_ACS2020", 2.0),
            ("SSB_FRTJ_SERV_ACS2020", 0.2),
        ]),
        record_from([
            ("RESPONDENTID", 2.0),
            ("GENDER", 2.0),
            ("TOTALKCAL_ACS2020", 1800.0),
            ("VEG_SERV_ACS2020", 2.0),
            ("VEG_ITEMS_SERV_ACS2020", 3.0),
            ("FRT_SERV_ACS2020", 1.5),
            ("FRT_ITEMS_SERV_ACS2020", 2.0),
            ("WGRAIN_SERV_ACS2020", 0.7),
            ("REDPROC_MEAT_SERV_ACS2020", 0.6),
            ("HPFRG_SERV_ACS2020", 1.5),
            ("SSB_FRTJ_SERV_ACS2020", 0.5),
        ]),
    ]
}

pub fn ahei_row(gender: f64, alcohol: f64, sodium: f64) -> Record {
    record_from([
        ("RESPONDENTID", 1.0),
        ("GENDER", gender),
        ("TOTALKCAL_AHEI", 2000.0),
        ("VEG_SERV_AHEI", 4.0),
        ("FRT_SERV_AHEI", 3.0),
        ("WGRAIN_SERV_AHEI", 80.0),
        ("NUTSLEG_SERV_AHEI", 0.8),
        ("N3FAT_SERV_AHEI", 200.0),
        ("PUFA_SERV_AHEI", 8.0),
        ("SSB_FRTJ_SERV_AHEI", 0.5),
        ("REDPROC_MEAT_SERV_AHEI", 1.0),
        ("TRANS_SERV_AHEI", 1.0),
        ("SODIUM_SERV_AHEI", sodium),
        ("ALCOHOL_SERV_AHEI", alcohol),
    ])
}
