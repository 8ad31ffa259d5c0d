//! OS-level introspection.
//!
//! Provides the [`EnvSnapshot`](env::EnvSnapshot) environment wrapper and
//! process/OS bitness queries in [`arch`].

pub mod arch;
pub mod env;
