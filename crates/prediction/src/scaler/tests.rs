use super::*;

#[test]
fn standard_scaler_centers_and_divides() {
    let scaler = Scaler::Standard {
        mean: vec![10.0, 0.0],
        scale: vec![2.0, 4.0],
    };
    assert_eq!(scaler.transform(&[14.0, -8.0]).unwrap(), vec![2.0, -2.0]);
}

#[test]
fn min_max_scaler_multiplies_then_shifts() {
    let scaler = Scaler::MinMax {
        min: vec![-0.5, 0.0],
        scale: vec![0.1, 0.5],
    };
    assert_eq!(scaler.transform(&[5.0, 2.0]).unwrap(), vec![0.0, 1.0]);
}

#[test]
fn wrong_width_is_a_shape_mismatch() {
    let scaler = Scaler::Standard {
        mean: vec![0.0; 3],
        scale: vec![1.0; 3],
    };
    let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        ShapeMismatchError {
            stage: InferenceStage::Scaler,
            expected: 3,
            got: 2,
        }
    );
    assert_eq!(err.to_string(), "scaler expects 3 features, row has 2");
}

#[test]
fn validation_rejects_malformed_parameters() {
    let empty = Scaler::Standard {
        mean: vec![],
        scale: vec![],
    };
    assert_eq!(empty.validate(), Err(ValidationError::EmptyParameters("mean")));

    let ragged = Scaler::Standard {
        mean: vec![0.0, 1.0],
        scale: vec![1.0],
    };
    assert_eq!(
        ragged.validate(),
        Err(ValidationError::LengthMismatch {
            name: "scale",
            expected: 2,
            got: 1,
        })
    );

    let zero = Scaler::Standard {
        mean: vec![0.0],
        scale: vec![0.0],
    };
    assert_eq!(zero.validate(), Err(ValidationError::ZeroScale { index: 0 }));

    let nan = Scaler::MinMax {
        min: vec![f64::NAN],
        scale: vec![1.0],
    };
    let err = nan.validate().unwrap_err();
    assert!(matches!(
        err,
        ValidationError::NonFinite {
            name: "min",
            index: 0,
            ..
        }
    ));
    assert_eq!(err.to_string(), "non-finite min at index 0: NaN");
}

#[test]
fn min_max_allows_zero_scale() {
    let scaler = Scaler::MinMax {
        min: vec![0.0],
        scale: vec![0.0],
    };
    scaler.validate().unwrap();
}

#[test]
fn deserializes_tagged_document() {
    let scaler: Scaler =
        serde_json::from_str(r#"{"kind":"standard","mean":[1.0],"scale":[2.0]}"#).unwrap();
    assert_eq!(scaler.kind_name(), "standard");
    assert_eq!(scaler.n_features(), 1);

    let err = serde_json::from_str::<Scaler>(r#"{"kind":"robust","center":[1.0]}"#);
    assert!(err.is_err());
}
