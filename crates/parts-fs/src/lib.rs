//! Filesystem collaborators for parts
//!
//! Provides path resolution (tilde expansion, absolutization), sorted
//! enumeration of partial files, and safe whole-file I/O operations.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::{expand_tilde, resolve};
