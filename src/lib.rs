//! Banned-word moderation core: tolerant pattern matching, normalization and
//! stemming over a fixed word list, plus the censoring and audit records a
//! chat transport needs to act on a violation.

pub mod commands;
pub mod handlers;
pub mod models;
pub mod services;
