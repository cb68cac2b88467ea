//! The four navigation commands and the reaction emoji bound to each.

/// Variation selector Discord may append to a unicode reaction name.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// A symbolic navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    First,
    Prev,
    Next,
    Last,
}

impl NavCommand {
    /// Every command, in the order its reaction is added to a message.
    pub const ALL: [NavCommand; 4] = [
        NavCommand::First,
        NavCommand::Prev,
        NavCommand::Next,
        NavCommand::Last,
    ];

    /// Unicode reaction bound to this command.
    pub const fn emoji(self) -> &'static str {
        match self {
            NavCommand::First => "\u{23EE}",
            NavCommand::Prev => "\u{25C0}",
            NavCommand::Next => "\u{25B6}",
            NavCommand::Last => "\u{23ED}",
        }
    }

    /// Map a reaction name back to its command, ignoring a trailing variation selector.
    pub fn from_emoji(name: &str) -> Option<Self> {
        let name = name.trim_end_matches(VARIATION_SELECTOR);
        Self::ALL
            .into_iter()
            .find(|command| command.emoji() == name)
    }

    /// Target page for this command from `cursor` in a set of `total_pages`.
    ///
    /// `First`/`Last` always land on a valid page. `Prev`/`Next` return `None`
    /// when they would step outside `[1, total_pages]`.
    pub fn target(self, cursor: usize, total_pages: usize) -> Option<usize> {
        let target = match self {
            NavCommand::First => 1,
            NavCommand::Last => total_pages,
            NavCommand::Prev => cursor.checked_sub(1)?,
            NavCommand::Next => cursor.checked_add(1)?,
        };

        (1..=total_pages).contains(&target).then_some(target)
    }
}
