use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::paginate::send_paginated_message;
use crate::{COMMANDS, CommandMeta};
use pager_core::Context;
use pager_utils::pagination::PageSet;

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for one command, or page through all of them.",
    category: "utility",
    usage: "!usage [command]",
};

const USAGES_PER_PAGE: usize = 2;

/// Show usage syntax.
///
/// Inputs:
/// - optional command name: `!usage [command]`, with or without the prefix.
///
/// Without a name every command's usage is shown as reaction-paged embeds.
/// An unknown name gets a short not-found reply.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(raw_name) = arg1 else {
        let pages = PageSet::from_items("Command Usage", &usage_lines(), USAGES_PER_PAGE)?;
        return send_paginated_message(&ctx, &msg, pages).await;
    };

    let out = match find_command(raw_name) {
        Some(command) => format!("Usage: `{}`", command.usage),
        None => format!("Unknown command: `{}`", normalize(raw_name)),
    };
    ctx.http.create_message(msg.channel_id).content(&out).await?;

    Ok(())
}

fn normalize(raw_name: &str) -> String {
    raw_name.trim().trim_start_matches('!').to_ascii_lowercase()
}

fn find_command(raw_name: &str) -> Option<&'static CommandMeta> {
    let lookup = normalize(raw_name);
    COMMANDS.iter().find(|command| command.name == lookup)
}

fn usage_lines() -> Vec<String> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by_key(|command| command.name);
    commands
        .into_iter()
        .map(|command| format!("`{}`: {}", command.usage, command.desc))
        .collect()
}
