//! Run configuration, from command-line flags layered over the environment

use crate::args::CommandLineArgs;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable for the per-request timeout in seconds
pub const TIMEOUT_ENV_VAR: &str = "URLDIFF_TIMEOUT_SECS";

/// Environment variable enabling header comparison
pub const CHECK_HEADERS_ENV_VAR: &str = "URLDIFF_CHECK_HEADERS";

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "URLDIFF_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug,hyper_util=info,reqwest=info";

/// How lines of the two input files are paired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Every line of the first file with every line of the second
    CrossProduct,
    /// Line i of the first file with line i of the second
    Zipped,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub pairing: Pairing,
    pub check_headers: bool,
    /// `None` waits on a request indefinitely
    pub timeout: Option<Duration>,
    pub log_filter: String,
}

impl AppConfig {
    /// Resolve configuration from arguments and process environment
    pub fn from_env(args: &CommandLineArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve configuration, reading variables through `lookup`
    ///
    /// Flags win over variables.
    pub fn resolve(
        args: &CommandLineArgs,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let timeout_secs = match args.timeout() {
            Some(secs) => Some(secs),
            None => lookup(TIMEOUT_ENV_VAR)
                .map(|value| {
                    value.trim().parse::<u64>().with_context(|| {
                        format!("{TIMEOUT_ENV_VAR} must be a number of seconds, got '{value}'")
                    })
                })
                .transpose()?,
        };

        let check_headers = args.check_headers()
            || lookup(CHECK_HEADERS_ENV_VAR)
                .map(|value| parse_flag(CHECK_HEADERS_ENV_VAR, &value))
                .transpose()?
                .unwrap_or(false);

        let log_filter = lookup(LOG_ENV_VAR).unwrap_or_else(|| {
            if args.verbose() {
                VERBOSE_LOG_FILTER.to_string()
            } else {
                DEFAULT_LOG_FILTER.to_string()
            }
        });

        Ok(Self {
            file_a: args.file_a().clone(),
            file_b: args.file_b().clone(),
            pairing: if args.zip() {
                Pairing::Zipped
            } else {
                Pairing::CrossProduct
            },
            check_headers,
            timeout: timeout_secs.map(Duration::from_secs),
            log_filter,
        })
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{var} must be true or false, got '{other}'"),
    }
}
