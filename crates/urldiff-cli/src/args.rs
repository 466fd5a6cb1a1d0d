use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "urldiff",
    version,
    about = "Compare the responses of HTTP endpoints listed in two files",
    long_about = None
)]
struct ClapArgs {
    /// File with one URL per line (left side)
    file_a: PathBuf,

    /// File with one URL per line (right side)
    file_b: PathBuf,

    /// Pair line i of FILE_A with line i of FILE_B instead of every line with every line
    #[arg(long)]
    zip: bool,

    /// Also require response headers to match
    #[arg(long)]
    check_headers: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log per-comparison diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    file_a: PathBuf,
    file_b: PathBuf,
    zip: bool,
    check_headers: bool,
    timeout: Option<u64>,
    verbose: bool,
}

impl CommandLineArgs {
    /// Parse the process arguments, exiting with status 1 on a usage error
    pub fn parse() -> Self {
        match Self::try_parse_from(std::env::args_os()) {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                let _ = e.print();
                process::exit(1);
            }
            // --help and --version
            Err(e) => e.exit(),
        }
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::try_parse_from(itr)?;
        Ok(Self {
            file_a: args.file_a,
            file_b: args.file_b,
            zip: args.zip,
            check_headers: args.check_headers,
            timeout: args.timeout,
            verbose: args.verbose,
        })
    }

    pub fn file_a(&self) -> &PathBuf {
        &self.file_a
    }

    pub fn file_b(&self) -> &PathBuf {
        &self.file_b
    }

    pub fn zip(&self) -> bool {
        self.zip
    }

    pub fn check_headers(&self) -> bool {
        self.check_headers
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
