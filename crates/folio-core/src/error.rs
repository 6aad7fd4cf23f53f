use thiserror::Error;

/// Reasons the remote calendar could not be turned into a dataset.
///
/// None of these reach the viewer; the widget logs them and falls back to
/// synthetic data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("relay envelope is not valid JSON: {0}")]
    Envelope(#[from] serde_json::Error),
    #[error("relay envelope has no `contents` field")]
    MissingContents,
    #[error("no calendar element in the profile page")]
    NoCalendar,
    #[error("calendar element contained no dated cells")]
    NoDatedCells,
}
