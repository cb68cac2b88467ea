//! The one capability query made before a session posts anything.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    guild::Permissions,
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, UserMarker},
    },
};

use crate::permissions::{grants, resolve_member_channel_permissions};

/// Whether the bot may run a reaction-driven session here.
#[async_trait]
pub trait PermissionCheck: Send + Sync {
    async fn can_paginate(&self) -> anyhow::Result<bool>;
}

/// A precomputed answer.
#[async_trait]
impl PermissionCheck for bool {
    async fn can_paginate(&self) -> anyhow::Result<bool> {
        Ok(*self)
    }
}

/// Requires the bot member to hold `MANAGE_MESSAGES` in the channel the
/// session is posted to, which is needed to remove other users' reactions.
/// Channel overwrites count. Outside a guild this always denies.
pub struct GuildPermissionCheck {
    http: Arc<Client>,
    guild_id: Option<Id<GuildMarker>>,
    channel_id: Id<ChannelMarker>,
    bot_user_id: Id<UserMarker>,
}

impl GuildPermissionCheck {
    pub fn new(
        http: Arc<Client>,
        guild_id: Option<Id<GuildMarker>>,
        channel_id: Id<ChannelMarker>,
        bot_user_id: Id<UserMarker>,
    ) -> Self {
        Self {
            http,
            guild_id,
            channel_id,
            bot_user_id,
        }
    }
}

#[async_trait]
impl PermissionCheck for GuildPermissionCheck {
    async fn can_paginate(&self) -> anyhow::Result<bool> {
        let Some(guild_id) = self.guild_id else {
            return Ok(false);
        };

        let perms = resolve_member_channel_permissions(
            &self.http,
            guild_id,
            self.channel_id,
            self.bot_user_id,
        )
        .await?;
        Ok(grants(perms, Permissions::MANAGE_MESSAGES))
    }
}
