use crate::indices::{ComponentDef, DietIndex, IndexDef, SecondaryTotal, Source, Strategy};
use crate::model::thresholds::{
    ACS2020_SSB_CUTPOINTS, ACS2020_SSB_INCLUSIVE, ACS2020_SSB_SCORES, AHEI_WGRAIN_CEILING_FEMALE,
    AHEI_WGRAIN_CEILING_MALE,
};

const ID_FIELD: &str = "RESPONDENTID";
const GROUP_FIELD: &str = "GENDER";

const QUARTER_STEPS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];
const WHOLE_STEPS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
const HALF_STEPS: [f64; 4] = [0.0, 0.5, 1.0, 1.5];

const fn ascending(scores: [f64; 4]) -> Strategy {
    Strategy::QuantileCut {
        ascending: true,
        scores,
    }
}

// Lowest-intake quartile gets the top score.
const fn descending(scores: [f64; 4]) -> Strategy {
    Strategy::QuantileCut {
        ascending: false,
        scores,
    }
}

const fn linear(floor: f64, ceiling: f64) -> Strategy {
    Strategy::Linear {
        floor,
        ceiling,
        min_score: 0.0,
        max_score: 10.0,
    }
}

const ACS2020_SSB: Strategy = Strategy::Threshold {
    cutpoints: ACS2020_SSB_CUTPOINTS,
    inclusive: ACS2020_SSB_INCLUSIVE,
    scores: ACS2020_SSB_SCORES,
};

const ACS2020_V1_REQUIRED: &[&str] = &[
    ID_FIELD,
    GROUP_FIELD,
    "VEG_SERV_ACS2020",
    "VEG_ITEMS_SERV_ACS2020",
    "FRT_SERV_ACS2020",
    "FRT_ITEMS_SERV_ACS2020",
    "WGRAIN_SERV_ACS2020",
    "REDPROC_MEAT_SERV_ACS2020",
    "HPFRG_RATIO_SERV_ACS2020",
    "SSB_FRTJ_SERV_ACS2020",
];

const ACS2020_VEG: ComponentDef = ComponentDef {
    id: "veg",
    output: "ACS2020_VEG",
    source: Source::Field("VEG_SERV_ACS2020"),
    strategy: ascending(QUARTER_STEPS),
};

const ACS2020_VEG_ITEMS: ComponentDef = ComponentDef {
    id: "veg_items",
    output: "ACS2020_VEG_ITEMS",
    source: Source::Field("VEG_ITEMS_SERV_ACS2020"),
    strategy: ascending(QUARTER_STEPS),
};

const ACS2020_FRT: ComponentDef = ComponentDef {
    id: "frt",
    output: "ACS2020_FRT",
    source: Source::Field("FRT_SERV_ACS2020"),
    strategy: ascending(QUARTER_STEPS),
};

const ACS2020_FRT_ITEMS: ComponentDef = ComponentDef {
    id: "frt_items",
    output: "ACS2020_FRT_ITEMS",
    source: Source::Field("FRT_ITEMS_SERV_ACS2020"),
    strategy: ascending(QUARTER_STEPS),
};

const ACS2020_WGRAIN: ComponentDef = ComponentDef {
    id: "wgrain",
    output: "ACS2020_WGRAIN",
    source: Source::Field("WGRAIN_SERV_ACS2020"),
    strategy: ascending(WHOLE_STEPS),
};

const ACS2020_SSB_FRTJ: ComponentDef = ComponentDef {
    id: "ssb_frtj",
    output: "ACS2020_SSB_FRTJ",
    source: Source::Field("SSB_FRTJ_SERV_ACS2020"),
    strategy: ACS2020_SSB,
};

const ACS2020_REDPROC_MEAT: ComponentDef = ComponentDef {
    id: "redproc_meat",
    output: "ACS2020_REDPROC_MEAT",
    source: Source::Field("REDPROC_MEAT_SERV_ACS2020"),
    strategy: descending(WHOLE_STEPS),
};

const ACS2020_V1_COMPONENTS: &[ComponentDef] = &[
    ACS2020_VEG,
    ACS2020_VEG_ITEMS,
    ACS2020_FRT,
    ACS2020_FRT_ITEMS,
    ACS2020_WGRAIN,
    ACS2020_SSB_FRTJ,
    ACS2020_REDPROC_MEAT,
    ComponentDef {
        id: "hpfrg_ratio",
        output: "ACS2020_HPFRG_RATIO",
        source: Source::Field("HPFRG_RATIO_SERV_ACS2020"),
        strategy: descending(HALF_STEPS),
    },
];

const ACS2020_V2_REQUIRED: &[&str] = &[
    ID_FIELD,
    GROUP_FIELD,
    "TOTALKCAL_ACS2020",
    "VEG_SERV_ACS2020",
    "VEG_ITEMS_SERV_ACS2020",
    "FRT_SERV_ACS2020",
    "FRT_ITEMS_SERV_ACS2020",
    "WGRAIN_SERV_ACS2020",
    "REDPROC_MEAT_SERV_ACS2020",
    "HPFRG_SERV_ACS2020",
    "SSB_FRTJ_SERV_ACS2020",
];

// HPFRG is scored per 1000 kcal before the quartile cut.
const ACS2020_V2_COMPONENTS: &[ComponentDef] = &[
    ACS2020_VEG,
    ACS2020_VEG_ITEMS,
    ACS2020_FRT,
    ACS2020_FRT_ITEMS,
    ACS2020_WGRAIN,
    ACS2020_SSB_FRTJ,
    ACS2020_REDPROC_MEAT,
    ComponentDef {
        id: "hpfrg",
        output: "ACS2020_HPFRG",
        source: Source::PerKcal {
            field: "HPFRG_SERV_ACS2020",
            kcal: "TOTALKCAL_ACS2020",
            per: 1000.0,
        },
        strategy: descending(HALF_STEPS),
    },
];

const AHEI_REQUIRED: &[&str] = &[
    ID_FIELD,
    GROUP_FIELD,
    "TOTALKCAL_AHEI",
    "VEG_SERV_AHEI",
    "FRT_SERV_AHEI",
    "WGRAIN_SERV_AHEI",
    "NUTSLEG_SERV_AHEI",
    "N3FAT_SERV_AHEI",
    "PUFA_SERV_AHEI",
    "SSB_FRTJ_SERV_AHEI",
    "REDPROC_MEAT_SERV_AHEI",
    "TRANS_SERV_AHEI",
    "SODIUM_SERV_AHEI",
    "ALCOHOL_SERV_AHEI",
];

const AHEI_COMPONENTS: &[ComponentDef] = &[
    ComponentDef {
        id: "veg",
        output: "AHEI_VEG",
        source: Source::Field("VEG_SERV_AHEI"),
        strategy: linear(0.0, 5.0),
    },
    ComponentDef {
        id: "frt",
        output: "AHEI_FRT",
        source: Source::Field("FRT_SERV_AHEI"),
        strategy: linear(0.0, 4.0),
    },
    ComponentDef {
        id: "wgrain",
        output: "AHEI_WGRAIN",
        source: Source::Field("WGRAIN_SERV_AHEI"),
        strategy: Strategy::SexLinear {
            floor: 0.0,
            female_ceiling: AHEI_WGRAIN_CEILING_FEMALE,
            male_ceiling: AHEI_WGRAIN_CEILING_MALE,
            min_score: 0.0,
            max_score: 10.0,
        },
    },
    ComponentDef {
        id: "nutsleg",
        output: "AHEI_NUTSLEG",
        source: Source::Field("NUTSLEG_SERV_AHEI"),
        strategy: linear(0.0, 1.0),
    },
    ComponentDef {
        id: "n3fat",
        output: "AHEI_N3FAT",
        source: Source::Field("N3FAT_SERV_AHEI"),
        strategy: linear(0.0, 250.0),
    },
    ComponentDef {
        id: "pufa",
        output: "AHEI_PUFA",
        source: Source::Field("PUFA_SERV_AHEI"),
        strategy: linear(2.0, 10.0),
    },
    ComponentDef {
        id: "ssb_frtj",
        output: "AHEI_SSB_FRTJ",
        source: Source::Field("SSB_FRTJ_SERV_AHEI"),
        strategy: linear(1.0, 0.0),
    },
    ComponentDef {
        id: "redproc_meat",
        output: "AHEI_REDPROC_MEAT",
        source: Source::Field("REDPROC_MEAT_SERV_AHEI"),
        strategy: linear(1.5, 0.0),
    },
    ComponentDef {
        id: "trans",
        output: "AHEI_TRANS",
        source: Source::Field("TRANS_SERV_AHEI"),
        strategy: linear(4.0, 0.5),
    },
    ComponentDef {
        id: "sodium",
        output: "AHEI_SODIUM",
        source: Source::PerKcal {
            field: "SODIUM_SERV_AHEI",
            kcal: "TOTALKCAL_AHEI",
            per: 2000.0,
        },
        strategy: Strategy::Decile,
    },
    ComponentDef {
        id: "alcohol",
        output: "AHEI_ALCOHOL",
        source: Source::Field("ALCOHOL_SERV_AHEI"),
        strategy: Strategy::Alcohol,
    },
];

const BUILTIN_INDICES: &[IndexDef] = &[
    IndexDef {
        index: DietIndex::Acs2020V1,
        label: "ACS2020 v1",
        id_field: ID_FIELD,
        group_field: GROUP_FIELD,
        required: ACS2020_V1_REQUIRED,
        components: ACS2020_V1_COMPONENTS,
        total: "ACS2020_V1_ALL",
        secondary: None,
    },
    IndexDef {
        index: DietIndex::Acs2020V2,
        label: "ACS2020 v2",
        id_field: ID_FIELD,
        group_field: GROUP_FIELD,
        required: ACS2020_V2_REQUIRED,
        components: ACS2020_V2_COMPONENTS,
        total: "ACS2020_V2_ALL",
        secondary: None,
    },
    IndexDef {
        index: DietIndex::Ahei,
        label: "AHEI",
        id_field: ID_FIELD,
        group_field: GROUP_FIELD,
        required: AHEI_REQUIRED,
        components: AHEI_COMPONENTS,
        total: "AHEI_ALL",
        secondary: Some(SecondaryTotal {
            output: "AHEI_NOETOH",
            excludes: "AHEI_ALCOHOL",
        }),
    },
];

pub fn builtin_indices() -> &'static [IndexDef] {
    BUILTIN_INDICES
}

pub fn index_def(index: DietIndex) -> &'static IndexDef {
    match index {
        DietIndex::Acs2020V1 => &BUILTIN_INDICES[0],
        DietIndex::Acs2020V2 => &BUILTIN_INDICES[1],
        DietIndex::Ahei => &BUILTIN_INDICES[2],
    }
}
