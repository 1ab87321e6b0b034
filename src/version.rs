//! Semantic versions and the version marker embedded in TinyTest.

use std::error as stderr;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// A `major.minor.patch` version. Ordering is lexicographic over the three
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    fn from_captures(caps: &Captures) -> Result<Self, Error> {
        Ok(Self::new(
            component(caps, "major")?,
            component(caps, "minor")?,
            component(caps, "patch")?,
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)$").unwrap();
        }

        match RE.captures(s) {
            Some(caps) => Self::from_captures(&caps),
            None => Err(Error::Malformed {
                value: s.to_owned(),
            }),
        }
    }
}

/// Finds the first TinyTest version marker
/// (`#define TINYTEST_VERSION "<major>.<minor>.<patch>"`) in `text` and
/// returns the version that it declares.
pub fn find_marker(text: &str) -> Result<Version, Error> {
    lazy_static! {
        static ref RE: Regex = Regex::new(
            r#"#define TINYTEST_VERSION "(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)""#
        )
        .unwrap();
    }

    match RE.captures(text) {
        Some(caps) => Version::from_captures(&caps),
        None => Err(Error::MarkerNotFound),
    }
}

/// Parses the named capture group `name` as a version component.
fn component(caps: &Captures, name: &'static str) -> Result<u64, Error> {
    // The regular expressions always have the three named groups.
    let value = caps.name(name).map(|m| m.as_str()).unwrap_or_default();
    value.parse().map_err(|_| Error::OutOfRange {
        component: name,
        value: value.to_owned(),
    })
}

/// The error returned when a version cannot be obtained from a text.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The text doesn't contain any version marker.
    MarkerNotFound,
    /// The text isn't a `major.minor.patch` version.
    Malformed { value: String },
    /// A version component is too big to be represented.
    OutOfRange {
        component: &'static str,
        value: String,
    },
}

impl stderr::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::MarkerNotFound => write!(
                f,
                r#"version marker not found (expected a line like '#define TINYTEST_VERSION "1.2.3"')"#
            ),
            Error::Malformed { value } => write!(
                f,
                "'{}' isn't a version with the 'major.minor.patch' format",
                value
            ),
            Error::OutOfRange { component, value } => write!(
                f,
                "{} version component '{}' is out of range",
                component, value
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_marker() {
        let text = r#"#include <string.h>

#define TINYTEST_VERSION "1.12.3"
#define TINYTEST_COLORIZE_STDERR 1
"#;
        assert_eq!(find_marker(text), Ok(Version::new(1, 12, 3)));
    }

    #[test]
    fn test_find_marker_first_wins() {
        let text = "#define TINYTEST_VERSION \"2.0.0\"\n#define TINYTEST_VERSION \"3.1.4\"\n";
        assert_eq!(find_marker(text), Ok(Version::new(2, 0, 0)));
    }

    #[test]
    fn test_find_marker_missing() {
        assert_eq!(
            find_marker("#define TINYTEST_COLORIZE_STDERR 1\n"),
            Err(Error::MarkerNotFound)
        );
        assert_eq!(find_marker(""), Err(Error::MarkerNotFound));
    }

    #[test]
    fn test_find_marker_ignores_other_schemes() {
        assert_eq!(
            find_marker("#define TINYTEST_VERSION \"1.2\"\n"),
            Err(Error::MarkerNotFound),
            "two components"
        );
        assert_eq!(
            find_marker("#define TINYTEST_VERSION \"1.2.3-beta\"\n"),
            Err(Error::MarkerNotFound),
            "pre-release"
        );
        assert_eq!(
            find_marker("#define TINYTEST_VERSION 1.2.3\n"),
            Err(Error::MarkerNotFound),
            "unquoted"
        );
    }

    #[test]
    fn test_find_marker_out_of_range() {
        let text = "#define TINYTEST_VERSION \"1.99999999999999999999999.0\"";
        assert_eq!(
            find_marker(text),
            Err(Error::OutOfRange {
                component: "minor",
                value: String::from("99999999999999999999999"),
            })
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Version::new(1, 2, 7) > Version::new(1, 1, 30));
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 2, 3) < Version::new(1, 2, 4));
        assert_eq!(Version::new(1, 2, 7), Version::new(1, 2, 7));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Version::new(1, 1, 3).to_string(), "1.1.3");
        assert_eq!("10.0.21".parse::<Version>(), Ok(Version::new(10, 0, 21)));
        assert_eq!(
            "1.2".parse::<Version>(),
            Err(Error::Malformed {
                value: String::from("1.2")
            })
        );
    }
}
