//! Update command.

use crate::cli;
use crate::error::{BoxError, Error as ErrorCommon};
use crate::local;
use crate::upstream::{self, Upstream};
use crate::version;

use std::error as stderr;
use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info};

const PROMPT: &str = "An upgrade is available ! Do you wish to apply it ? (y/N) ";

/// How an update run has ended when it didn't fail.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The versions don't justify an upgrade with the selected policy.
    NotRecommended,
    /// The user didn't confirm the upgrade.
    Declined,
    /// The local file has been replaced by the online one.
    Applied,
}

/// Checks the local TinyTest file against `upstream` and upgrades it when
/// the policy of `opts` allows it.
///
/// Messages for the user are written to `out`; the confirmation, when the
/// upgrade isn't forced, is read from `input`.
pub async fn execute<U, R, W>(
    opts: &cli::Options,
    upstream: &U,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome, Error>
where
    U: Upstream + ?Sized,
    R: BufRead,
    W: Write,
{
    debug!(location = %upstream.location(), "fetching online version");
    let online_code = upstream.fetch().await.map_err(Error::Fetch)?;
    let online_version = version::find_marker(&online_code).map_err(|source| Error::Version {
        origin: Origin::Online,
        source,
    })?;

    let local_code = local::read(&opts.path).map_err(Error::Local)?;
    let local_version = version::find_marker(&local_code).map_err(|source| Error::Version {
        origin: Origin::Local,
        source,
    })?;

    writeln!(
        out,
        "Local version:\t{}\nOnline version:\t{}",
        local_version, online_version
    )
    .map_err(output_error)?;

    let upgrade = opts.policy.should_upgrade(&local_version, &online_version);
    info!(
        local = %local_version,
        online = %online_version,
        policy = %opts.policy,
        upgrade,
        "versions compared"
    );

    if !upgrade {
        writeln!(
            out,
            "According to your settings, an upgrade is not recommended."
        )
        .map_err(output_error)?;
        return Ok(Outcome::NotRecommended);
    }

    if !opts.force && !confirm(input, out)? {
        writeln!(out, "Aborting install.").map_err(output_error)?;
        return Ok(Outcome::Declined);
    }

    local::write(&opts.path, &online_code).map_err(Error::Local)?;
    info!(path = %opts.path.display(), version = %online_version, "upgrade applied");
    writeln!(out, "Upgrade applied !").map_err(output_error)?;

    Ok(Outcome::Applied)
}

/// Asks the user to confirm the upgrade. Only an answer starting with `y`,
/// case-insensitive, confirms it.
fn confirm<R, W>(input: &mut R, out: &mut W) -> Result<bool, Error>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", PROMPT).map_err(output_error)?;
    out.flush().map_err(output_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(|err| {
        Error::Common(ErrorCommon::internal(
            "error while reading the answer from the standard input",
            BoxError::from(err),
        ))
    })?;

    Ok(answer.to_lowercase().starts_with('y'))
}

fn output_error(err: std::io::Error) -> Error {
    Error::Common(ErrorCommon::internal(
        "error while writing to the standard output",
        BoxError::from(err),
    ))
}

/// Identifies the content which a version was extracted from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin {
    /// The content fetched from the upstream.
    Online,
    /// The content of the local file.
    Local,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Origin::Online => write!(f, "online"),
            Origin::Local => write!(f, "local"),
        }
    }
}

/// The error type returned by an update run.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Common error kinds which are shared across all the modules of this
    /// crate.
    Common(ErrorCommon),
    /// The online version couldn't be fetched.
    Fetch(upstream::Error),
    /// The local file couldn't be read or written.
    Local(local::Error),
    /// The version couldn't be extracted from the online or local content.
    Version {
        origin: Origin,
        source: version::Error,
    },
}

impl stderr::Error for Error {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        match self {
            Error::Common(c) => c.source(),
            Error::Fetch(e) => Some(e),
            Error::Local(e) => Some(e),
            Error::Version { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Common(c) => c.fmt(f),
            Error::Fetch(e) => write!(f, "Could not fetch TinyTest online version: {}", e),
            Error::Local(e) => e.fmt(f),
            Error::Version { origin, source } => {
                write!(f, "Could not find the {} version: {}", origin, source)
            }
        }
    }
}
