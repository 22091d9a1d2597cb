//! Command-line surface: `verify-face <selfie> <id_doc> [blocked...]`.
//!
//! Every argument is positional and taken as given: a leading `-` is part of
//! the path, and `--help`/`--version` are not flags.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{VerifyError, VerifyResult};
use crate::outcome::VerificationRequest;

#[derive(Parser, Debug)]
#[command(
    name = "verify-face",
    about = "Mock biometric verification (always succeeds unless configured otherwise)",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Selfie path, identity document path, then blocked-face paths
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    pub fn parse_args() -> VerifyResult<Self> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> VerifyResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| {
            VerifyError::InvalidArguments(
                err.kind()
                    .as_str()
                    .unwrap_or("unrecognized input")
                    .to_string(),
            )
        })
    }

    pub fn into_request(self) -> VerifyResult<VerificationRequest> {
        let mut args = self.args.into_iter();
        let (Some(selfie), Some(id_doc)) = (args.next(), args.next()) else {
            return Err(VerifyError::MissingArguments);
        };
        let blocked: Vec<OsString> = args.collect();
        Ok(VerificationRequest::new(selfie, id_doc).with_blocked(parse_blocked(&blocked)))
    }
}

/// Expand the trailing arguments into blocked-face paths.
///
/// An argument that decodes as a JSON array of strings contributes its
/// entries; anything else, including non-UTF-8 bytes, is taken as a
/// literal path.
pub fn parse_blocked(raw: &[OsString]) -> Vec<PathBuf> {
    raw.iter()
        .flat_map(|arg| {
            match arg
                .to_str()
                .and_then(|text| serde_json::from_str::<Vec<String>>(text).ok())
            {
                Some(paths) => paths.into_iter().map(PathBuf::from).collect(),
                None => vec![PathBuf::from(arg)],
            }
        })
        .collect()
}
