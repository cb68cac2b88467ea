//! Reaction-driven page navigation sessions.
//!
//! A session posts page 1, offers the four navigation reactions and then
//! alternates between waiting for a recognized reaction and re-rendering, until
//! the wait times out, the event source closes, or the session is cancelled.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use super::{
    DEFAULT_TIMEOUT_SECS,
    command::NavCommand,
    error::PaginatorError,
    page::{Page, PageSet},
    permission::PermissionCheck,
    sink::{MessageHandle, MessageSink},
    source::{CommandSource, ReactionEvent},
};

/// Tunables applied to every session a bot opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationSettings {
    /// How long a session waits for the next reaction before ending.
    pub wait_time: Duration,
    /// Whether embed pages get a `Page i / N` footer.
    pub page_number_footers: bool,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            wait_time: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_number_footers: true,
        }
    }
}

/// Why a session reached its terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Only one page; no interaction was ever offered.
    SinglePage,
    /// No recognized reaction arrived within the wait time.
    TimedOut,
    /// The event source closed.
    SourceClosed,
    /// The cancellation token fired while waiting.
    Cancelled,
    /// [`Session::close`] was called.
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active { cursor: usize },
    Terminal(SessionEnd),
}

/// Builder for a pagination session.
#[derive(Clone, Debug)]
pub struct Paginator {
    pages: PageSet,
    wait_time: Duration,
    ignored_user: Option<Id<UserMarker>>,
}

impl Paginator {
    pub fn new(pages: PageSet) -> Self {
        Self {
            pages,
            wait_time: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ignored_user: None,
        }
    }

    /// Build from a raw page list, failing on an empty list.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, PaginatorError> {
        PageSet::new(pages).map(Self::new)
    }

    /// Apply bot-wide settings.
    pub fn with_settings(mut self, settings: PaginationSettings) -> Self {
        self.wait_time = settings.wait_time;
        if settings.page_number_footers {
            self.pages = self.pages.with_page_number_footers();
        }
        self
    }

    pub fn wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Ignore reactions from this user, normally the bot itself.
    pub fn ignore_user(mut self, user_id: Id<UserMarker>) -> Self {
        self.ignored_user = Some(user_id);
        self
    }

    /// Check permissions, post page 1 and offer navigation when there is more than one page.
    pub async fn start<S, P>(self, sink: S, permissions: &P) -> Result<Session<S>, PaginatorError>
    where
        S: MessageSink,
        P: PermissionCheck + ?Sized,
    {
        if !permissions.can_paginate().await? {
            return Err(PaginatorError::InsufficientPermissions);
        }

        let handle = sink.send(self.pages.first()).await?;

        let state = if self.pages.len() == 1 {
            SessionState::Terminal(SessionEnd::SinglePage)
        } else {
            for command in NavCommand::ALL {
                sink.add_affordance(handle, command).await?;
            }
            SessionState::Active { cursor: 1 }
        };

        debug!(
            message_id = handle.message_id.get(),
            pages = self.pages.len(),
            "pagination session started"
        );

        Ok(Session {
            sink,
            pages: self.pages,
            handle,
            wait_time: self.wait_time,
            ignored_user: self.ignored_user,
            state,
        })
    }
}

/// A live pagination session over one posted message.
pub struct Session<S> {
    sink: S,
    pages: PageSet,
    handle: MessageHandle,
    wait_time: Duration,
    ignored_user: Option<Id<UserMarker>>,
    state: SessionState,
}

impl<S: MessageSink> Session<S> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current page while active.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            SessionState::Active { cursor } => Some(cursor),
            SessionState::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SessionState::Terminal(_))
    }

    pub fn handle(&self) -> MessageHandle {
        self.handle
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Move the cursor for `command` and re-render.
    ///
    /// Returns `false` without rendering when the session is terminal or the
    /// target falls outside the page set.
    pub async fn apply(&mut self, command: NavCommand) -> Result<bool, PaginatorError> {
        let SessionState::Active { cursor } = self.state else {
            return Ok(false);
        };

        let Some(target) = command.target(cursor, self.pages.len()) else {
            return Ok(false);
        };
        let Some(page) = self.pages.get(target) else {
            return Ok(false);
        };

        self.sink.edit(self.handle, page).await?;
        self.state = SessionState::Active { cursor: target };

        debug!(
            message_id = self.handle.message_id.get(),
            ?command,
            page = target,
            "pagination page changed"
        );

        Ok(true)
    }

    /// Wait up to `timeout` for a recognized reaction on this session's message.
    ///
    /// Unrecognized emoji, other messages and the ignored user are skipped
    /// without restarting the timeout. The reacting user's reaction is removed
    /// before the command is returned. On timeout or source closure the session
    /// ends and `Ok(None)` is returned.
    pub async fn wait_for_command<C>(
        &mut self,
        events: &mut C,
        timeout: Duration,
    ) -> Result<Option<NavCommand>, PaginatorError>
    where
        C: CommandSource + ?Sized,
    {
        if self.is_terminal() {
            return Ok(None);
        }

        let wake = next_wake(events, self.handle.message_id, self.ignored_user, timeout).await;
        self.settle(wake).await
    }

    /// Drive the session until it ends.
    ///
    /// Only the wait races `cancel`; once a wait resolves, the removal, render
    /// or cleanup it triggers runs to completion.
    pub async fn run<C>(
        &mut self,
        events: &mut C,
        cancel: &CancellationToken,
    ) -> Result<SessionEnd, PaginatorError>
    where
        C: CommandSource + ?Sized,
    {
        loop {
            if let SessionState::Terminal(end) = self.state {
                return Ok(end);
            }

            let message_id = self.handle.message_id;
            let ignored_user = self.ignored_user;
            let wait_time = self.wait_time;

            let wake = tokio::select! {
                biased;
                () = cancel.cancelled() => None,
                wake = next_wake(&mut *events, message_id, ignored_user, wait_time) => Some(wake),
            };

            match wake {
                Some(wake) => {
                    if let Some(command) = self.settle(wake).await? {
                        self.apply(command).await?;
                    }
                }
                None => self.finish(SessionEnd::Cancelled).await?,
            }
        }
    }

    async fn settle(&mut self, wake: Wake) -> Result<Option<NavCommand>, PaginatorError> {
        match wake {
            Wake::Command { command, actor_id } => {
                self.sink
                    .remove_affordance_vote(self.handle, command, actor_id)
                    .await?;
                Ok(Some(command))
            }
            Wake::SourceClosed => {
                self.finish(SessionEnd::SourceClosed).await?;
                Ok(None)
            }
            Wake::TimedOut => {
                self.finish(SessionEnd::TimedOut).await?;
                Ok(None)
            }
        }
    }

    /// End the session now, clearing the reactions if it was still active.
    pub async fn close(&mut self) -> Result<(), PaginatorError> {
        self.finish(SessionEnd::Closed).await
    }

    async fn finish(&mut self, end: SessionEnd) -> Result<(), PaginatorError> {
        if self.is_terminal() {
            return Ok(());
        }

        // Terminal before clearing so a failed clear is never repeated.
        self.state = SessionState::Terminal(end);
        self.sink.clear_affordances(self.handle).await?;

        debug!(
            message_id = self.handle.message_id.get(),
            ?end,
            "pagination session ended"
        );

        Ok(())
    }
}

impl<S: MessageSink + 'static> Session<S> {
    /// Run the session on its own task.
    pub fn spawn<C>(
        mut self,
        mut events: C,
        cancel: CancellationToken,
    ) -> JoinHandle<Result<SessionEnd, PaginatorError>>
    where
        C: CommandSource + 'static,
    {
        tokio::spawn(async move {
            let result = self.run(&mut events, &cancel).await;
            if let Err(source) = &result {
                error!(
                    ?source,
                    message_id = self.handle.message_id.get(),
                    "pagination session failed"
                );
            }
            result
        })
    }
}

/// Validate, post the first page and hand the remaining session to a background task.
///
/// Precondition failures and errors posting page 1 are returned here; later
/// failures surface through the returned task handle.
pub async fn paginate<S, C, P>(
    paginator: Paginator,
    sink: S,
    events: C,
    permissions: &P,
    cancel: CancellationToken,
) -> Result<JoinHandle<Result<SessionEnd, PaginatorError>>, PaginatorError>
where
    S: MessageSink + 'static,
    C: CommandSource + 'static,
    P: PermissionCheck + ?Sized,
{
    let session = paginator.start(sink, permissions).await?;
    Ok(session.spawn(events, cancel))
}

/// What ended one wait on the command source.
enum Wake {
    Command {
        command: NavCommand,
        actor_id: Id<UserMarker>,
    },
    SourceClosed,
    TimedOut,
}

async fn next_wake<C>(
    events: &mut C,
    message_id: Id<MessageMarker>,
    ignored_user: Option<Id<UserMarker>>,
    timeout: Duration,
) -> Wake
where
    C: CommandSource + ?Sized,
{
    let received = tokio::time::timeout(timeout, async {
        while let Some(event) = events.next_event().await {
            if let Some(command) = recognize(&event, message_id, ignored_user) {
                return Some((command, event.actor_id));
            }
        }
        None
    })
    .await;

    match received {
        Ok(Some((command, actor_id))) => Wake::Command { command, actor_id },
        Ok(None) => Wake::SourceClosed,
        Err(_elapsed) => Wake::TimedOut,
    }
}

fn recognize(
    event: &ReactionEvent,
    message_id: Id<MessageMarker>,
    ignored_user: Option<Id<UserMarker>>,
) -> Option<NavCommand> {
    if event.message_id != message_id || ignored_user == Some(event.actor_id) {
        return None;
    }

    NavCommand::from_emoji(&event.emoji)
}
