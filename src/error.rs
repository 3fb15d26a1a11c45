use thiserror::Error;

/// Hard-fail errors: any of these aborts the run at the first
/// occurrence. Optional fields never produce one of these; their
/// extractors resolve a missing element to `None` instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or non-2xx response status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A page element the site template guarantees was missing.
    #[error("required element not found: {0}")]
    NotFound(&'static str),

    /// Element text that should be machine-readable was not.
    #[error("failed to parse {what} from {value:?}")]
    Parse { what: &'static str, value: String },
}
