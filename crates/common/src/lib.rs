//! Plumbing shared by the `sealmsg` and `openmsg` binaries.
//!
//! Everything around the sealing core lives here: size-limited file input,
//! key-file loading, payload output, the error-to-exit-code mapping and
//! logging setup. The core crate stays free of I/O.

pub mod error;
pub mod io;
pub mod telemetry;

pub use error::AppError;
pub use io::{load_key, max_size_or_default, read_limited, write_output, DEFAULT_MAX_SIZE};
