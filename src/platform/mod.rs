// clog - platform/mod.rs
//
// Platform abstraction layer: process identity, clock, console streams,
// log file creation, environment configuration.
// Dependencies: standard library, chrono, libc (Linux), core value types.
// Must NOT depend on: app.

pub mod clock;
pub mod config;
pub mod console;
pub mod fs;
pub mod process;
