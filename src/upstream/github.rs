//! Implementation for fetching TinyTest from its official GitHub repository.

use super::{Error, Upstream};
use crate::error::{BoxError, Error as ErrorCommon, ExternalService};

use async_trait::async_trait;
use isahc::config::{Configurable, RedirectPolicy};
use isahc::AsyncReadResponseExt;
use tracing::debug;
use url::Url;

/// Host which serves the raw content of the files of GitHub repositories.
const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Owner of the official TinyTest repository.
const OWNER: &str = "megat69";
/// Name of the official TinyTest repository.
const REPOSITORY: &str = "tinytest";
/// Branch which holds the published version.
const BRANCH: &str = "main";
/// Path of the header inside of the repository.
const FILE_PATH: [&str; 2] = ["src", "tinytest.hpp"];

/// The upstream which serves the TinyTest header from the `main` branch of
/// the official repository.
pub struct Source {
    /// The URL of the raw file.
    url: Url,
    /// The HTTP client that the instance use for making the requests.
    http_cli: isahc::HttpClient,
}

impl Source {
    /// Creates a source which points to the official repository.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(RAW_CONTENT_BASE_URL)
    }

    /// Creates a source which points to the official repository path under
    /// the specified base URL.
    /// This constructor is mainly useful for testing purposes.
    pub(crate) fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let url = file_url(base_url)?;
        let http_cli = isahc::HttpClientBuilder::new()
            .max_connections(1)
            .redirect_policy(RedirectPolicy::Follow)
            .build()
            .map_err(|err| {
                Error::Common(ErrorCommon::internal(
                    "HTTP client initialization error",
                    BoxError::from(err),
                ))
            })?;

        Ok(Self { url, http_cli })
    }

    /// Sends a request to the file URL and map errors and response HTTP status
    /// codes different than 200 to errors.
    async fn send_request(&self) -> Result<isahc::Response<isahc::AsyncBody>, Error> {
        debug!(url = %self.url, "requesting upstream file");

        let response = self
            .http_cli
            .get_async(self.url.as_str())
            .await
            .map_err(Error::from_isahc)?;

        let status = response.status();
        debug!(%status, "upstream replied");

        if status != http::StatusCode::OK {
            if status.is_server_error() {
                return Err(Error::Upstream(ExternalService::Internal {
                    reason: format!(
                        r#"GitHub has responded with an HTTP "{}" status code (expected 200)"#,
                        status,
                    ),
                }));
            }

            if status == http::StatusCode::NOT_FOUND {
                return Err(Error::Upstream(ExternalService::NotFound {
                    resource: self.url.to_string(),
                }));
            }

            return Err(Error::Upstream(ExternalService::Unspecified { status }));
        }

        Ok(response)
    }
}

#[async_trait]
impl Upstream for Source {
    async fn fetch(&self) -> Result<String, Error> {
        let mut response = self.send_request().await?;
        let bytes = response.bytes().await.map_err(|err| {
            Error::Common(ErrorCommon::internal(
                "error while reading the response body",
                BoxError::from(err),
            ))
        })?;

        // The content is written to disk as is, so it's never decoded lossily.
        let body = String::from_utf8(bytes).map_err(|err| {
            Error::Common(ErrorCommon::internal(
                "online TinyTest isn't valid UTF-8",
                BoxError::from(err),
            ))
        })?;

        debug!(bytes = body.len(), "upstream file received");
        Ok(body)
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}

/// Builds the URL of the raw TinyTest header under `base_url`.
fn file_url(base_url: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url).map_err(|err| {
        Error::Common(ErrorCommon::invalid_arguments(
            "base_url",
            &format!("it isn't a valid URL: {}", err),
        ))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            Error::Common(ErrorCommon::invalid_arguments(
                "base_url",
                "it must be a URL which can have a path",
            ))
        })?
        .pop_if_empty()
        .extend(&[OWNER, REPOSITORY, "refs", "heads", BRANCH])
        .extend(&FILE_PATH);

    Ok(url)
}
