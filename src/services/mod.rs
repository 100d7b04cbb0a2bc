pub mod censor;
pub mod config_service;
pub mod diagnostics;
pub mod error;
pub mod filter_handle;
pub mod normalizer;
pub mod patterns;
pub mod stems;
pub mod substitutions;
pub mod word_filter;
