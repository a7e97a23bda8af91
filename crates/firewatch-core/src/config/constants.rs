pub(super) const CONFIG_ENV: &str = "FIREWATCH_CONFIG";

pub(super) const CONFIG_CANDIDATES: [&str; 2] = ["./conf/firewatch.toml", "./firewatch.toml"];

pub(super) const DEFAULT_PROBABILITY_DECIMALS: usize = 2;
pub(super) const MAX_PROBABILITY_DECIMALS: usize = 6;
