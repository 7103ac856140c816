//! `openmsg`: open a sealed envelope file with a one-time key.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Read envelope → load key → open → write the plaintext to stdout.

mod config;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use common::AppError;
use sealmsg::CombinedData;
use tracing::{error, info};

use config::Config;

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: openmsg configuration invalid: {e:#}");
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
    info!(version = env!("CARGO_PKG_VERSION"), "openmsg starting");

    // -----------------------------------------------------------------------
    // 3. Open
    // -----------------------------------------------------------------------
    match run(&cfg, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "open failed");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run<W: Write>(cfg: &Config, out: W) -> Result<(), AppError> {
    let combined = CombinedData::from(common::read_limited(
        Path::new(&cfg.cipher_txt_location),
        cfg.cipher_txt_max_size(),
    )?);
    let key = common::load_key(Path::new(&cfg.secret_key_location))?;
    let plaintext = key.open(&combined)?;
    common::write_output(out, &plaintext)?;

    info!(envelope_len = combined.len(), plaintext_len = plaintext.len(), "opened");
    Ok(())
}
