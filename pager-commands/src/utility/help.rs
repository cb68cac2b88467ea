use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::paginate::send_paginated_message;
use crate::{COMMANDS, CommandMeta};
use pager_core::Context;
use pager_utils::pagination::PageSet;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 3;

/// Render the command catalog as reaction-paged embeds, optionally filtered by category.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let category = arg1.map(str::to_ascii_lowercase);
    let categories = categories();

    if let Some(wanted_category) = category.as_deref()
        && !categories.iter().any(|known| *known == wanted_category)
    {
        let out = format!(
            "Unknown category `{}`. Available categories: {}.",
            wanted_category,
            categories.join(", ")
        );
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    }

    let items = help_items(category.as_deref());
    let title = help_title(category.as_deref());
    let pages = PageSet::from_items(&title, &items, HELP_COMMANDS_PER_PAGE)?;

    send_paginated_message(&ctx, &msg, pages).await
}

fn categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

fn help_title(category: Option<&str>) -> String {
    match category {
        Some(cat) => format!("Available Commands: {cat}"),
        None => "Available Commands".to_owned(),
    }
}

fn help_items(category: Option<&str>) -> Vec<String> {
    sorted_commands(category)
        .into_iter()
        .map(|cmd| format!("`{}` ({}): {}", cmd.usage, cmd.category, cmd.desc))
        .collect()
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_by_category_then_name() {
        let names: Vec<&str> = sorted_commands(None).iter().map(|cmd| cmd.name).collect();
        assert_eq!(names, vec!["permissions", "help", "pagetest", "usage"]);
    }

    #[test]
    fn category_filter_limits_items() {
        let items = help_items(Some("moderation"));
        assert_eq!(items.len(), 1);
        assert!(items[0].starts_with("`!permissions`"));
        assert!(help_items(Some("missing")).is_empty());
    }

    #[test]
    fn full_catalog_spans_multiple_pages() -> anyhow::Result<()> {
        let pages =
            PageSet::from_items(&help_title(None), &help_items(None), HELP_COMMANDS_PER_PAGE)?;
        assert_eq!(pages.len(), 2);
        Ok(())
    }
}
