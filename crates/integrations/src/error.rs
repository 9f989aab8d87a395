use thiserror::Error;

/// Error returned by an integration port.
///
/// The taxonomy is provider-shaped rather than domain-shaped: `Rejected`
/// means the provider refused the request (bad input, declined charge),
/// `Failed` means the provider reported a failure of its own, `Internal`
/// covers everything on our side of the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrationError {
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("provider failure: {0}")]
    Failed(String),

    #[error("internal error: {0}")]
    Internal(String),
}
