//! Deterministic, pure logic shared by the bootstrapper.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod activation;
pub mod emit;
pub mod env_file;
pub mod mutation;
pub mod pyvenv;
