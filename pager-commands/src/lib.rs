pub mod moderation;
pub mod paginate;
pub mod utility;

use twilight_model::gateway::payload::incoming::MessageCreate;

use pager_core::Context;
use pager_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::usage::META,
    utility::pagetest::META,
    moderation::permissions::META,
    // Add new commands here
];

/// A prefixed command split into its lowercased name, first argument and remainder.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: String,
    pub arg1: Option<&'a str>,
    pub arg_tail: Option<&'a str>,
}

/// Split a raw message into a command invocation, if it carries the prefix.
pub fn parse_command(content: &str) -> Option<ParsedCommand<'_>> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let name = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args.next().filter(|arg| !arg.is_empty());
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty());

            (first, tail)
        }
        None => (None, None),
    };

    Some(ParsedCommand {
        name,
        arg1,
        arg_tail,
    })
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some(parsed) = parse_command(&content) else {
        return Ok(());
    };
    let arg1 = parsed.arg1;

    match parsed.name.as_str() {
        "help" => utility::help::run(ctx.clone(), msg, arg1).await?,
        "usage" => utility::usage::run(ctx.clone(), msg, arg1).await?,
        "pagetest" => utility::pagetest::run(ctx.clone(), msg, arg1).await?,
        "permissions" => moderation::permissions::run(ctx.clone(), msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_arguments() {
        assert_eq!(
            parse_command("  !Help   utility  extra words "),
            Some(ParsedCommand {
                name: "help".to_owned(),
                arg1: Some("utility"),
                arg_tail: Some("extra words"),
            })
        );
        assert_eq!(
            parse_command("!usage"),
            Some(ParsedCommand {
                name: "usage".to_owned(),
                arg1: None,
                arg_tail: None,
            })
        );
    }

    #[test]
    fn ignores_unprefixed_messages() {
        assert_eq!(parse_command("hello !usage"), None);
    }

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|command| command.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
