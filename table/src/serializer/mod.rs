//! Serializers for generated tables.
//!
//! Two output formats are supported:
//! - **Assembly** ([`asm`]) — data directives for an assembler, the primary output
//! - **JSON** ([`json`]) — the raw rail values, for scripts and plotting tools

pub mod asm;
pub mod json;
