#![no_main]

use libfuzzer_sys::fuzz_target;
use prediction::{assemble, flag_totals, parse_feature_order, RawInputRecord};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let Ok(schema) = parse_feature_order(&raw) else {
        return;
    };

    let row = assemble(&schema, &RawInputRecord::new());
    assert_eq!(row.len(), schema.len());
    assert!(row.iter().all(|v| *v == 0.0));
    let _ = flag_totals(&schema, &row);
});
