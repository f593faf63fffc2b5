//! Test modules for the medical assistant
//!
//! This module contains all tests that exercise more than one module.
