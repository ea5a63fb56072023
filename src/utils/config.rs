use crate::{Error, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Settings of a single simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub iterations: u64,
}

impl Config {
    pub const DEFAULT_ITERATIONS: u64 = 5;

    pub const USAGE: &'static str =
        "usage: lookup_life <FILE> [ITERATIONS]  (ITERATIONS defaults to 5)";

    /// Parses the arguments that follow the program name.
    ///
    /// The file must exist. A missing or invalid iteration count falls back
    /// to `DEFAULT_ITERATIONS`; an invalid one is reported with a warning.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let path = PathBuf::from(args.next().ok_or(Error::MissingPath)?);
        debug!(path = %path.display(), "universe file");
        if !path.exists() {
            return Err(Error::FileNotFound(path));
        }

        let iterations = match args.next() {
            None => Self::DEFAULT_ITERATIONS,
            Some(raw) => {
                debug!(raw = %raw, "iterations");
                match raw.trim().parse::<u64>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        warn!(
                            "invalid iteration value {:?}, defaulting to {}",
                            raw,
                            Self::DEFAULT_ITERATIONS
                        );
                        Self::DEFAULT_ITERATIONS
                    }
                }
            }
        };
        for extra in args {
            debug!(arg = %extra, "ignoring extra argument");
        }
        Ok(Self { path, iterations })
    }
}
