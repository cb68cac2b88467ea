use twilight_model::channel::message::embed::{Embed, EmbedFooter};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Footer text marking a page's position, e.g. `Page 2 / 7`.
pub fn page_footer_text(page: usize, total_pages: usize) -> String {
    format!("Page {} / {}", page.max(1), total_pages.max(1))
}

/// Build a footer carrying only page-position text.
pub fn page_footer(page: usize, total_pages: usize) -> EmbedFooter {
    EmbedFooterBuilder::new(page_footer_text(page, total_pages)).build()
}

/// Build a standard embed with consistent styling and no footer.
pub fn build_embed(title: &str, description: impl Into<String>) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .validate()?
        .build();

    Ok(embed)
}

/// Build a standard paginated embed with consistent styling.
///
/// Single-page sets get no footer at all.
pub fn build_paginated_embed(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> anyhow::Result<Embed> {
    let builder = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description);

    let embed = if total_pages > 1 {
        builder
            .footer(page_footer(page, total_pages))
            .validate()?
            .build()
    } else {
        builder.validate()?.build()
    };

    Ok(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_text_clamps_zero_values() {
        assert_eq!(page_footer_text(0, 0), "Page 1 / 1");
        assert_eq!(page_footer_text(3, 9), "Page 3 / 9");
    }

    #[test]
    fn paginated_embed_omits_footer_for_single_page() -> anyhow::Result<()> {
        let embed = build_paginated_embed("Title", "body", 1, 1)?;
        assert!(embed.footer.is_none());
        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));

        let embed = build_paginated_embed("Title", "body", 2, 4)?;
        assert_eq!(
            embed.footer.map(|footer| footer.text),
            Some("Page 2 / 4".to_owned())
        );
        Ok(())
    }
}
