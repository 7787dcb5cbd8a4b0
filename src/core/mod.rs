// clog - core/mod.rs
//
// Core layer: level model, call-site metadata, record rendering.
// Dependencies: standard library, chrono types, util (errors, constants).
// Must NOT depend on: app, platform, or perform any I/O.

pub mod callsite;
pub mod level;
pub mod record;
