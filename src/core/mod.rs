// src/core/mod.rs

pub mod cipher;
pub mod substrings;
pub mod types;
