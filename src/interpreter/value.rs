/// The tagged scalar value and its promotion rules.
pub mod core;
