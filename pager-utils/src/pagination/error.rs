//! Error taxonomy for pagination sessions.

use thiserror::Error;

/// Failures surfaced by [`Paginator`](super::Paginator) and [`Session`](super::Session).
///
/// The two precondition variants are raised before anything is posted.
/// Everything the sink or the permission query reports is passed through
/// untouched as [`PaginatorError::Transport`].
#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("cannot paginate an empty page set")]
    EmptyPageSet,

    #[error("missing the permissions required to paginate in this channel")]
    InsufficientPermissions,

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
