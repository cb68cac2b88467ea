use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use twilight_http::Client;
use twilight_model::id::{Id, marker::UserMarker};

use pager_utils::pagination::{PaginationSettings, ReactionHub};

/// Environment-driven bot configuration.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Gateway reaction fan-out that pagination sessions subscribe to.
    pub reactions: ReactionHub,
    /// The bot's own user, whose reactions sessions ignore.
    pub bot_user_id: Id<UserMarker>,
    pub pagination: PaginationSettings,
    /// Cancelled on shutdown; sessions listen on child tokens.
    pub shutdown: CancellationToken,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        bot_user_id: Id<UserMarker>,
        pagination: PaginationSettings,
    ) -> Self {
        Self {
            http,
            reactions: ReactionHub::default(),
            bot_user_id,
            pagination,
            shutdown: CancellationToken::new(),
        }
    }
}
