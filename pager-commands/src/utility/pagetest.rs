use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::paginate::send_paginated_message;
use pager_core::Context;
use pager_utils::embed::build_embed;
use pager_utils::pagination::{Page, PageSet, parse_one_based_page};

pub const META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Test reaction pagination behavior.",
    category: "utility",
    usage: "!pagetest [pages]",
};

const DEFAULT_PAGE_COUNT: usize = 5;
const MAX_PAGE_COUNT: usize = 25;

/// Pagination test command.
///
/// Inputs:
/// - optional page count: `!pagetest [pages]`, 1 to 25, default 5.
///
/// Error behavior:
/// - returns usage text on invalid or too large counts.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(count) = parse_page_count(arg1) else {
        let usage = format!(
            "Usage: `{}` (between 1 and {} pages)",
            META.usage, MAX_PAGE_COUNT
        );
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let pages = build_test_pages(count)?;
    send_paginated_message(&ctx, &msg, pages).await
}

fn parse_page_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        None => Some(DEFAULT_PAGE_COUNT),
        Some(_) => parse_one_based_page(raw).filter(|count| *count <= MAX_PAGE_COUNT),
    }
}

fn build_test_pages(count: usize) -> anyhow::Result<PageSet> {
    let pages = (1..=count)
        .map(|index| -> anyhow::Result<Page> {
            let embed = build_embed(
                "Pagination Test",
                format!("Sample pagination page #{index}"),
            )?;
            Ok(Page::new(Some(format!("Page {index} of {count}")), Some(embed)))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(PageSet::new(pages)?)
}
