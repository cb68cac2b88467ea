//! Stable facade for reaction-driven pagination.

/// Default timeout for reaction-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod command;
mod error;
mod navigator;
mod page;
pub mod permission;
pub mod respond;
pub mod sink;
pub mod source;
#[cfg(test)]
mod testing;

pub use command::NavCommand;
pub use error::PaginatorError;
pub use navigator::{
    PaginationSettings, Paginator, Session, SessionEnd, SessionState, paginate,
};
pub use page::{
    Page, PageSet, clamp_page, page_window, paginated_bulleted_description,
    parse_one_based_page, total_pages,
};
pub use permission::{GuildPermissionCheck, PermissionCheck};
pub use respond::ChannelSink;
pub use sink::{MessageHandle, MessageSink};
pub use source::{CommandSource, ReactionEvent, ReactionHub, ReactionSubscription};
