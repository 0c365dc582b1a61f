//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: filesystem access, the
//! privilege check, and embedded asset lookup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assets;
pub mod fs;
pub mod privilege;

pub use fs::LocalFs;
pub use privilege::EffectiveUser;
