//! Testing utilities and mock implementations
//!
//! This module provides doubles for running the pipeline without a real
//! LLM backend.

pub mod mocks;

pub use mocks::*;
