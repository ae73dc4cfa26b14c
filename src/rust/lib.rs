#![allow(clippy::module_inception)]

pub mod engine;

pub use engine::practice::{
    PracticeParameters, PracticeResult, RawPracticeInput, ValidationError, ValidationErrorKind,
    calculate,
};

// CLI-specific modules (requires terminal, file system, etc.)
#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod platform;

#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod tools;

// WebAssembly bindings (only compiled for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod web;
