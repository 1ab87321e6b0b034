//! Remote sources which publish the reference copy of TinyTest.

mod error;
pub mod github;

pub use error::Error;

use async_trait::async_trait;

/// Each implementation retrieves the reference content of the vendored file
/// from a specific remote location.
#[async_trait]
pub trait Upstream {
    /// Gets the full content of the remote file as text.
    async fn fetch(&self) -> Result<String, Error>;

    /// Describes where the content is fetched from, for messages and logs.
    fn location(&self) -> String;
}
