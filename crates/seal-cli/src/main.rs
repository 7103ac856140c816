//! `sealmsg`: seal a plaintext file under a one-time key.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Load key → read plaintext → seal → write the envelope to stdout.

mod config;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use common::AppError;
use tracing::{error, info};

use config::Config;

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            // Logging is not yet up; write to stderr directly.
            eprintln!("ERROR: sealmsg configuration invalid: {e:#}");
            return ExitCode::from(2);
        }
    };

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    if let Err(e) = common::telemetry::init(&cfg.log_level) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::FAILURE;
    }
    info!(version = env!("CARGO_PKG_VERSION"), "sealmsg starting");

    // -----------------------------------------------------------------------
    // 3. Seal
    // -----------------------------------------------------------------------
    match run(&cfg, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "seal failed");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run<W: Write>(cfg: &Config, out: W) -> Result<(), AppError> {
    let key = common::load_key(Path::new(&cfg.secret_key_location))?;
    let plaintext = common::read_limited(
        Path::new(&cfg.plain_txt_location),
        cfg.plain_txt_max_size(),
    )?;
    let sealed = key.seal(&plaintext)?;
    common::write_output(out, sealed.as_bytes())?;

    info!(plaintext_len = plaintext.len(), envelope_len = sealed.len(), "sealed");
    Ok(())
}
