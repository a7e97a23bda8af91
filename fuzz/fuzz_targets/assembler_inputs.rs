#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use prediction::{
    assemble, flag_totals, FeatureSchema, Month, NumericField, RawInputRecord, Weekday,
};

static SCHEMA: Lazy<FeatureSchema> = Lazy::new(|| {
    let mut names: Vec<String> = NumericField::ALL
        .iter()
        .map(|field| field.feature_name().to_string())
        .collect();
    names.push("area".to_string());
    names.extend(Month::ALL.iter().map(|m| m.flag_name()));
    names.extend(Weekday::ALL.iter().map(|d| d.flag_name()));
    FeatureSchema::from_names(names)
});

fn bounded_text(data: &[u8], offset: usize, len: usize) -> String {
    let start = offset.min(data.len());
    let end = (start + len).min(data.len());
    String::from_utf8_lossy(&data[start..end]).to_string()
}

fuzz_target!(|data: &[u8]| {
    let mut record = RawInputRecord::new();
    for (i, field) in NumericField::ALL.iter().enumerate() {
        let value = data.get(i).copied().map(f64::from).unwrap_or_default();
        record.insert(field.feature_name(), value);
    }

    let month = bounded_text(data, 10, 8);
    let day = bounded_text(data, 18, 8);
    let selected = record.select_categories_str(&SCHEMA, &month, &day).is_ok();

    let row = assemble(&SCHEMA, &record);
    assert_eq!(row.len(), SCHEMA.len());
    if selected {
        assert_eq!(flag_totals(&SCHEMA, &row), (1.0, 1.0));
    } else {
        assert_eq!(flag_totals(&SCHEMA, &row), (0.0, 0.0));
    }
});
