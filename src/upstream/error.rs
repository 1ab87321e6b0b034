//! Defines an error which any "upstream" implementation must return.
//! The error type extends the [common error type](crate::error) to provide
//! kinds of errors to their specific domain.

use crate::error::{BoxError, Error as ErrorCommon, ExternalService, NetworkSide};

use std::error as stderr;
use std::fmt;

use isahc::error::Error as IsahcError;

/// The error type to wrap the errors returned by the [upstream and its
/// descendants modules](crate::upstream).
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Common error kinds which are shared across all the modules of this
    /// crate.
    Common(ErrorCommon),
    /// Identifies error returned by the remote service.
    Upstream(ExternalService),
}

impl Error {
    /// Convenient constructor for creating the appropriated Error from the
    /// Error type of the isahc module.
    pub(super) fn from_isahc(err: IsahcError) -> Self {
        use isahc::error::ErrorKind;

        let side = if err.is_client() {
            NetworkSide::Client
        } else {
            NetworkSide::Server
        };

        match err.kind() {
            ErrorKind::BadServerCertificate
            | ErrorKind::InvalidContentEncoding
            | ErrorKind::ProtocolViolation => Error::Upstream(ExternalService::Internal {
                reason: err.to_string(),
            }),
            // NameResolution error is returned indicating that's a server
            // side error when the host name cannot be resolved, but it's the
            // client which cannot reach it.
            ErrorKind::NameResolution => {
                Error::Common(ErrorCommon::network(err.into(), NetworkSide::Client))
            }
            ErrorKind::ConnectionFailed
            | ErrorKind::Timeout
            | ErrorKind::Io
            | ErrorKind::BadClientCertificate
            | ErrorKind::InvalidCredentials
            | ErrorKind::TlsEngine
            | ErrorKind::TooManyRedirects => Error::Common(ErrorCommon::network(err.into(), side)),
            _ => Error::Common(ErrorCommon::internal(
                "HTTP client failed performing the request",
                BoxError::from(err),
            )),
        }
    }
}

impl stderr::Error for Error {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        match self {
            Error::Common(c) => c.source(),
            Error::Upstream(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Common(c) => c.fmt(f),
            Error::Upstream(es) => es.fmt(f),
        }
    }
}
