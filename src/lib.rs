// Library target for the criterion benchmarks and the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `themed_words::generator::*` etc.
#![allow(dead_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod logging;
pub mod ui;
