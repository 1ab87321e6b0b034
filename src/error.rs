//! Defines a common error type that exposes kinds of errors that any submodule
//! may return.
//! Every submodule which deals with a specific domain creates its own error
//! type, which wraps this one, for defining the kinds of errors of its domain.

use std::error as stderr;
use std::fmt;

/// Convenient type for making more concise wrapping the standard error trait
/// object into a Box.
pub type BoxError = Box<dyn stderr::Error + Send + Sync>;

/// The error type that expose general kinds of errors that are common to all
/// the modules of this crate.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Identify unexpected errors which happen because of the state of the
    /// system where the application is running, for example, insufficient
    /// resources, OS failures, etc.
    Internal(Internal),
    /// Identify errors due to invalid arguments passed to function or methods
    /// or assigned values to configurations.
    InvalidArguments(Args),
    /// Identify errors related with the network produced by the client or
    /// server side.
    Network(Network),
}

impl Error {
    /// Convenient constructor for creating an InvalidArguments Error.
    /// See [`Args`] documentation to know about the convention for the value of
    /// the `names` parameter.
    pub(crate) fn invalid_arguments(names: &str, msg: &str) -> Self {
        Self::InvalidArguments(Args::new(names, msg))
    }

    /// Convenient constructor for creating a Network Error.
    pub(crate) fn network(origin: BoxError, side: NetworkSide) -> Self {
        Self::Network(Network {
            side,
            inner: origin,
        })
    }

    /// Convenient constructor for creating an Internal Error.
    pub(crate) fn internal(ctx_msg: impl Into<String>, error: BoxError) -> Self {
        Self::Internal(Internal {
            ctx_msg: ctx_msg.into(),
            error,
        })
    }
}

impl stderr::Error for Error {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        match self {
            Error::InvalidArguments { .. } => None,
            Error::Internal(i) => i.source(),
            Error::Network(n) => n.source(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::InvalidArguments(a) => a.fmt(f),
            Error::Internal(i) => i.fmt(f),
            Error::Network(n) => n.fmt(f),
        }
    }
}

/// Represents invalid arguments error regarding the business domain.
#[derive(Debug)]
pub struct Args {
    /// `names` is one or several parameters names.
    ///
    /// * When a specific parameter is invalid its value is the exact parameter
    ///   name.
    /// * When several parameters are invalid, its value is the parameters names
    ///   wrapped in round brackets (e.g. `(p1,p3)`).
    /// * When all the function parameters are invalid, `<all>` is used.
    pub names: String,
    /// `msg` is a human friendly message that explains why the argument(s) are
    /// invalid.
    pub msg: String,
}

impl Args {
    pub(crate) fn new(names: &str, msg: &str) -> Self {
        Args {
            names: String::from(names),
            msg: String::from(msg),
        }
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} arguments have invalid values. {}",
            self.names, self.msg
        )
    }
}

#[derive(Debug)]
/// An unexpected error which happens due to the state of the system where the
/// application is running; for example, insufficient resources, OS failure,
/// hardware failure, etc.
pub struct Internal {
    /// A human friendly message to provide context of the error.
    pub ctx_msg: String,
    /// The received error which cannot be handled by the application and get
    /// wrapped by this instance.
    pub(crate) error: BoxError,
}

impl stderr::Error for Internal {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

impl fmt::Display for Internal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ({})", self.ctx_msg, self.error)
    }
}

/// An error caused by the network when performing a requested operation.
#[derive(Debug)]
pub struct Network {
    pub side: NetworkSide,
    pub(crate) inner: BoxError,
}

impl stderr::Error for Network {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "network error produced by the {} side: {}",
            self.side, self.inner,
        )
    }
}

/// Indicates the network side which originated the error.
#[derive(Debug, PartialEq)]
pub enum NetworkSide {
    /// Indicates that the error is in the client side.
    Client,
    /// Indicates that the error is in the server side.
    Server,
}

impl fmt::Display for NetworkSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            NetworkSide::Client => write!(f, "client"),
            NetworkSide::Server => write!(f, "server"),
        }
    }
}

#[derive(Debug, PartialEq)]
/// An error returned by an external service when performing a requested
/// operation.
pub enum ExternalService {
    /// Indicates that the service has returned an internal error.
    Internal { reason: String },
    /// Indicates that the service doesn't have the requested resource.
    NotFound { resource: String },
    /// Indicates that the service has replied with a status which this
    /// implementation doesn't expect.
    Unspecified { status: http::StatusCode },
}

impl fmt::Display for ExternalService {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ExternalService::Internal { reason } => {
                write!(f, "service had an internal error: {}", reason)
            }
            ExternalService::NotFound { resource } => {
                write!(f, "service doesn't have '{}'", resource)
            }
            ExternalService::Unspecified { status } => write!(
                f,
                r#"service has responded with an unexpected HTTP "{}" status code (expected 200)"#,
                status
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_internal_keeps_source() {
        let err = Error::internal(
            "error while reading",
            BoxError::from(io::Error::new(io::ErrorKind::Other, "disk on fire")),
        );

        assert_eq!(
            format!("{}", err),
            "error while reading (disk on fire)",
            "display"
        );
        assert_eq!(
            format!("{}", err.source().expect("source must not be None")),
            "disk on fire",
            "source"
        );
    }

    #[test]
    fn test_invalid_arguments_has_no_source() {
        let err = Error::invalid_arguments("base_url", "cannot be a base");
        assert!(err.source().is_none(), "source must be None");
        assert_eq!(
            format!("{}", err),
            "base_url arguments have invalid values. cannot be a base"
        );
    }

    #[test]
    fn test_network_display() {
        let err = Error::network(BoxError::from("connection refused"), NetworkSide::Client);
        assert_eq!(
            format!("{}", err),
            "network error produced by the client side: connection refused"
        );
    }

    #[test]
    fn test_external_service_display() {
        let es = ExternalService::Unspecified {
            status: http::StatusCode::FOUND,
        };
        assert_eq!(
            format!("{}", es),
            r#"service has responded with an unexpected HTTP "302 Found" status code (expected 200)"#
        );
    }
}
