// src/lib.rs

pub mod core;
pub mod config;
pub mod error;
pub mod c_api;

pub use crate::core::cipher::{shift_text, unshift_text, CaesarCipher};
pub use crate::core::substrings::{count_substrings, SubstringCounter};
pub use crate::core::types::{FrequencyMap, Shift, DEFAULT_DICTIONARY};
pub use crate::config::WordplayConfig;
pub use crate::error::{ConfigError, Result, WordplayError};
