use super::*;

#[test]
fn test_index_names_round_trip() {
    for idx in DietIndex::ALL {
        assert_eq!(idx.name().parse::<DietIndex>().unwrap(), idx);
        assert_eq!(idx.to_string(), idx.name());
        assert_eq!(idx.definition().index, idx);
    }
    assert_eq!(" AHEI ".parse::<DietIndex>().unwrap(), DietIndex::Ahei);
}

#[test]
fn test_unknown_index_rejected() {
    let err = "hei2015".parse::<DietIndex>().unwrap_err();
    assert!(matches!(err, IndexError::InvalidInput(_)));
}

#[test]
fn test_component_sources_are_required_columns() {
    for def in builtin_indices() {
        assert!(def.required.contains(&def.id_field), "{}", def.label);
        assert!(def.required.contains(&def.group_field), "{}", def.label);
        for comp in def.components {
            for field in comp.source.fields() {
                assert!(
                    def.required.contains(&field),
                    "{}: {} not required",
                    def.label,
                    field
                );
            }
        }
    }
}

#[test]
fn test_output_field_naming() {
    let v1 = DietIndex::Acs2020V1.definition();
    let fields = v1.output_fields();
    assert_eq!(fields.len(), 9);
    assert_eq!(*fields.last().unwrap(), "ACS2020_V1_ALL");
    assert!(fields.iter().all(|f| f.starts_with("ACS2020_")));

    let ahei = DietIndex::Ahei.definition();
    let fields = ahei.output_fields();
    assert_eq!(fields.len(), 13);
    assert_eq!(fields[11], "AHEI_ALL");
    assert_eq!(fields[12], "AHEI_NOETOH");
    let secondary = ahei.secondary.unwrap();
    assert!(ahei.component(secondary.excludes).is_some());
}

#[test]
fn test_output_fields_unique() {
    for def in builtin_indices() {
        let fields = def.output_fields();
        let mut sorted = fields.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), fields.len(), "{}", def.label);
    }
}

#[test]
fn test_v2_normalizes_hpfrg_by_kcal() {
    let v2 = DietIndex::Acs2020V2.definition();
    let hpfrg = v2.component("ACS2020_HPFRG").unwrap();
    assert_eq!(
        hpfrg.source,
        Source::PerKcal {
            field: "HPFRG_SERV_ACS2020",
            kcal: "TOTALKCAL_ACS2020",
            per: 1000.0
        }
    );
    assert!(hpfrg.strategy.is_grouped());
}

#[test]
fn test_ahei_has_no_grouped_components() {
    let ahei = DietIndex::Ahei.definition();
    assert!(ahei.components.iter().all(|c| !c.strategy.is_grouped()));
    assert_eq!(
        ahei.component("AHEI_SODIUM").unwrap().strategy,
        Strategy::Decile
    );
}
