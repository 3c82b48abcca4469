// Test helper modules for HTTP tests
//
// The app is built in-process with the same route configuration the binary
// uses; no network and no external services are involved.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod test_data;

pub use assertions::*;
pub use test_data::*;
