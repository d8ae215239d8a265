#![allow(dead_code, unused_imports)]

pub mod mock_engine;

#[cfg(unix)]
mod fake_path;
#[cfg(unix)]
pub use fake_path::{run_murmur, FakePath};
