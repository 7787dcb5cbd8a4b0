// clog - app/mod.rs
//
// Application layer: the stateful logger and its process-wide instance.
// Dependencies: core, platform, util.

pub mod global;
pub mod logger;
