use std::fmt;
use std::path::PathBuf;

use crate::uploader::Uploader;

pub const ENV_REPORTER_ID: &str = "CC_TEST_REPORTER_ID";
pub const ENV_COVERAGE_ENDPOINT: &str = "CC_TEST_REPORTER_COVERAGE_ENDPOINT";

pub const DEFAULT_INPUT: &str = "coverage/codeclimate.json";
pub const DEFAULT_ENDPOINT: &str = "https://codeclimate.com/test_reports";

/// Input value that selects the process's standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Values given explicitly on the command line. `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFlags {
    pub input: Option<String>,
    pub id: Option<String>,
    pub endpoint: Option<String>,
}

/// Where the coverage payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn parse(input: &str) -> Self {
        if input == STDIN_SENTINEL {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(input))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Build an [`Uploader`] from explicit flags, falling back to the environment
/// and then to built-in defaults.
///
/// Environment values are taken as-is, so a variable that is set but empty
/// yields an empty value rather than the default. The reporter id may resolve
/// to an empty string; that is rejected later by [`Uploader::upload`], before
/// any I/O happens.
pub fn resolve<F>(flags: UploadFlags, env: F) -> Uploader
where
    F: Fn(&str) -> Option<String>,
{
    let input = flags.input.unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let reporter_id = flags
        .id
        .or_else(|| env(ENV_REPORTER_ID))
        .unwrap_or_default();
    let endpoint_url = flags
        .endpoint
        .or_else(|| env(ENV_COVERAGE_ENDPOINT))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    log::debug!("Resolved upload input {} and endpoint {}", input, endpoint_url);

    Uploader::new(InputSource::parse(&input), reporter_id, endpoint_url)
}

/// Environment lookup backed by the current process.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
