// Library target exists solely for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that the tests can import types via `shellquiz::quiz::*` / `shellquiz::sim::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod quiz;
pub mod sim;
pub mod transcript;

// Private: required transitively (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
