//! boundbump - dependency floor and ceiling bumper
//!
//! Rewrites `"<name>[<extras>] >=<low>,<<high>[; <marker>]"` lines in a
//! manifest so that the floor is the latest release on PyPI and the ceiling
//! is the next major version. Everything else in the file is left as is.

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod registry;
