//! Serde helpers for Discord's loosely typed fields.

pub mod lenient_string;
pub mod string_or_u64;
