use twilight_http::Client;
use twilight_model::{
    channel::{ChannelType, permission_overwrite::PermissionOverwrite},
    gateway::payload::incoming::MessageCreate,
    guild::Permissions,
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker},
    },
};
use twilight_util::permission_calculator::PermissionCalculator;

/// Convert a permission bitset into a sorted display list.
///
/// If `ADMINISTRATOR` is present, only `ADMINISTRATOR` is returned because
/// it implicitly grants all permissions.
pub fn permission_names(perms: Permissions) -> Vec<String> {
    if perms.contains(Permissions::ADMINISTRATOR) {
        return vec!["ADMINISTRATOR".to_owned()];
    }

    let mut names: Vec<String> = perms
        .iter_names()
        .map(|(name, _flag)| name.to_owned())
        .collect();
    names.sort_unstable();
    names
}

/// Whether `perms` grants `required`, treating `ADMINISTRATOR` as granting everything.
pub fn grants(perms: Permissions, required: Permissions) -> bool {
    perms.contains(Permissions::ADMINISTRATOR) || perms.contains(required)
}

/// Resolve a guild member's effective guild-level permissions from their roles.
pub async fn resolve_member_permissions(
    http: &Client,
    guild_id: Id<GuildMarker>,
    user_id: Id<UserMarker>,
) -> anyhow::Result<Permissions> {
    let member = http.guild_member(guild_id, user_id).await?.model().await?;
    let roles = http.roles(guild_id).await?.model().await?;

    let mut resolved = Permissions::empty();

    for role in roles {
        if role.id == guild_id.cast() || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

/// Permissions a member ends up with in one channel once the channel's
/// overwrites are applied on top of their roles.
///
/// `guild_roles` lists every role of the guild with its permissions; the
/// `@everyone` role shares the guild's id.
pub fn channel_permissions(
    guild_id: Id<GuildMarker>,
    user_id: Id<UserMarker>,
    guild_roles: &[(Id<RoleMarker>, Permissions)],
    member_roles: &[Id<RoleMarker>],
    kind: ChannelType,
    overwrites: &[PermissionOverwrite],
) -> Permissions {
    let everyone_id: Id<RoleMarker> = guild_id.cast();
    let everyone = guild_roles
        .iter()
        .find(|(id, _)| *id == everyone_id)
        .map_or(Permissions::empty(), |(_, perms)| *perms);

    let held: Vec<(Id<RoleMarker>, Permissions)> = guild_roles
        .iter()
        .copied()
        .filter(|(id, _)| *id != everyone_id && member_roles.contains(id))
        .collect();

    PermissionCalculator::new(guild_id, user_id, everyone, &held).in_channel(kind, overwrites)
}

/// Resolve a guild member's effective permissions in a channel.
///
/// Threads carry no overwrites of their own, so their parent's are used.
pub async fn resolve_member_channel_permissions(
    http: &Client,
    guild_id: Id<GuildMarker>,
    channel_id: Id<ChannelMarker>,
    user_id: Id<UserMarker>,
) -> anyhow::Result<Permissions> {
    let member = http.guild_member(guild_id, user_id).await?.model().await?;
    let roles = http.roles(guild_id).await?.model().await?;
    let channel = http.channel(channel_id).await?.model().await?;

    let kind = channel.kind;
    let overwrites = match channel.parent_id {
        Some(parent_id) if kind.is_thread() => {
            let parent = http.channel(parent_id).await?.model().await?;
            parent.permission_overwrites
        }
        _ => channel.permission_overwrites,
    }
    .unwrap_or_default();

    let guild_roles: Vec<(Id<RoleMarker>, Permissions)> = roles
        .iter()
        .map(|role| (role.id, role.permissions))
        .collect();

    Ok(channel_permissions(
        guild_id,
        user_id,
        &guild_roles,
        &member.roles,
        kind,
        &overwrites,
    ))
}

/// Resolve the invoking author's effective guild permissions for a message command.
///
/// Returns `Ok(None)` when the message is not from a guild context.
pub async fn resolve_message_author_permissions(
    http: &Client,
    msg: &MessageCreate,
) -> anyhow::Result<Option<Permissions>> {
    if let Some(perms) = msg.member.as_ref().and_then(|m| m.permissions) {
        return Ok(Some(perms));
    }

    let Some(guild_id) = msg.guild_id else {
        return Ok(None);
    };

    resolve_member_permissions(http, guild_id, msg.author.id)
        .await
        .map(Some)
}
