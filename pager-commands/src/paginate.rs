//! Glue opening reaction-driven sessions from message commands.

use std::sync::Arc;

use tracing::debug;
use twilight_model::gateway::payload::incoming::MessageCreate;

use pager_core::Context;
use pager_utils::pagination::{
    ChannelSink, GuildPermissionCheck, PageSet, Paginator, PaginatorError, paginate,
};

/// Reply shown when the bot cannot manage reactions in the channel.
pub const MISSING_PERMISSIONS_MESSAGE: &str =
    "I need the Manage Messages permission in this channel to show pages.";
/// Reply shown when there is nothing to page through.
pub const NOTHING_TO_SHOW_MESSAGE: &str = "There is nothing to show.";

/// User-facing text for a precondition failure, `None` for transport errors.
pub fn precondition_message(error: &PaginatorError) -> Option<&'static str> {
    match error {
        PaginatorError::EmptyPageSet => Some(NOTHING_TO_SHOW_MESSAGE),
        PaginatorError::InsufficientPermissions => Some(MISSING_PERMISSIONS_MESSAGE),
        PaginatorError::Transport(_) => None,
    }
}

/// Post `pages` in the invoking channel and let reactions flip through them.
///
/// The session keeps running in the background after this returns.
pub async fn send_paginated_message(
    ctx: &Context,
    msg: &MessageCreate,
    pages: PageSet,
) -> anyhow::Result<()> {
    // Subscribe before posting so no reaction on the new message is missed.
    let events = ctx.reactions.subscribe();
    let sink = ChannelSink::new(Arc::clone(&ctx.http), msg.channel_id);
    let permissions = GuildPermissionCheck::new(
        Arc::clone(&ctx.http),
        msg.guild_id,
        msg.channel_id,
        ctx.bot_user_id,
    );

    let paginator = Paginator::new(pages)
        .with_settings(ctx.pagination)
        .ignore_user(ctx.bot_user_id);

    match paginate(
        paginator,
        sink,
        events,
        &permissions,
        ctx.shutdown.child_token(),
    )
    .await
    {
        Ok(_task) => Ok(()),
        Err(PaginatorError::Transport(source)) => Err(source),
        Err(precondition) => {
            debug!(
                channel_id = msg.channel_id.get(),
                %precondition,
                "pagination refused"
            );
            let out = precondition_message(&precondition).unwrap_or(NOTHING_TO_SHOW_MESSAGE);
            ctx.http.create_message(msg.channel_id).content(out).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_preconditions_have_replies() {
        assert_eq!(
            precondition_message(&PaginatorError::EmptyPageSet),
            Some(NOTHING_TO_SHOW_MESSAGE)
        );
        assert_eq!(
            precondition_message(&PaginatorError::InsufficientPermissions),
            Some(MISSING_PERMISSIONS_MESSAGE)
        );
        assert_eq!(
            precondition_message(&PaginatorError::Transport(anyhow::anyhow!("boom"))),
            None
        );
    }
}
