//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn hamilton_threshold() -> f64 {
    0.7
}

pub fn max_expansions() -> usize {
    2_000_000
}
