/// Classifier artifact file name inside the artifact directory.
pub const MODEL_FILE: &str = "fire_model.json";

/// Fitted scaler artifact file name.
pub const SCALER_FILE: &str = "scaler.json";

/// Ordered feature-name list artifact file name.
pub const FEATURE_ORDER_FILE: &str = "feature_order.json";

/// Prefix of one-hot month flags (`month_jan` .. `month_dec`).
pub const MONTH_PREFIX: &str = "month_";

/// Prefix of one-hot day-of-week flags (`day_mon` .. `day_sun`).
pub const DAY_PREFIX: &str = "day_";

/// Number of classes every classifier must emit: no fire, fire.
pub const CLASS_COUNT: usize = 2;

/// Allowed drift of `P(no fire) + P(fire)` away from 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;
