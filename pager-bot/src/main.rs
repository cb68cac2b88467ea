use std::{sync::Arc, time::Duration};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use pager_commands::handle_message;
use pager_core::{Config, Context};

/// Time given to sessions to clear their reactions after shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Reads .env, then the process environment
    let config = Config::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.discord_token.clone()));
    let bot_user = http.current_user().await?.model().await?;
    let ctx = Context::new(Arc::clone(&http), bot_user.id, config.pagination);

    // Reactions drive pagination sessions
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::MESSAGE_CONTENT;

    let mut shard = Shard::new(ShardId::new(0, 1), config.discord_token, intents);
    let wanted_events = EventTypeFlags::READY
        | EventTypeFlags::MESSAGE_CREATE
        | EventTypeFlags::REACTION_ADD;

    info!(bot = %bot_user.name, "connecting to the gateway");

    loop {
        let item = tokio::select! {
            item = shard.next_event(wanted_events) => item,
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
        };

        let Some(item) = item else {
            break;
        };

        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("bot is ready");
            }
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message command failed");
                    }
                });
            }
            Event::ReactionAdd(reaction) => {
                ctx.reactions.publish_reaction(&reaction);
            }
            _ => {} // Ignore unused events
        }
    }

    // Active sessions clear their reactions before the process exits
    ctx.shutdown.cancel();
    tokio::time::sleep(SHUTDOWN_GRACE).await;

    Ok(())
}
