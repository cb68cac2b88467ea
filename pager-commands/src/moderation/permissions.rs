use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::paginate::send_paginated_message;
use pager_core::Context;
use pager_utils::pagination::PageSet;
use pager_utils::permissions::{permission_names, resolve_message_author_permissions};

pub const META: CommandMeta = CommandMeta {
    name: "permissions",
    desc: "Display your server permissions.",
    category: "moderation",
    usage: "!permissions",
};

const PERMISSIONS_PER_PAGE: usize = 10;

/// Display invoking member permissions as reaction-paged embeds.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let Some(perms) = resolve_message_author_permissions(http, &msg).await? else {
        http.create_message(msg.channel_id)
            .content("This command only works in servers.")
            .await?;
        return Ok(());
    };

    if perms.is_empty() {
        http.create_message(msg.channel_id)
            .content("No permissions found for your member record.")
            .await?;
        return Ok(());
    }

    let names = permission_names(perms);
    let pages = PageSet::from_items("Your Permissions", &names, PERMISSIONS_PER_PAGE)?;

    send_paginated_message(&ctx, &msg, pages).await
}
