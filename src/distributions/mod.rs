// src\distributions\mod.rs

pub mod distribution_spec;

// Continuous
pub mod Exponential;
pub mod Normal;
pub mod Uniform;
