/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Reaction-driven pagination sessions and their collaborators.
pub mod pagination;
/// Permission helper utilities.
pub mod permissions;
