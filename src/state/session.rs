/// Session state machine
///
/// The displayed image, its source URL and the busy flag are one explicit
/// state value plus a single reducer. The reducer is the only place
/// transitions happen, and the shell invokes it at exactly three points:
/// trigger pressed, fetch succeeded, fetch failed.

use image::DynamicImage;

/// Whether a fetch is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

/// The screenshot currently on display.
#[derive(Clone)]
pub struct Shot {
    /// Candidate page URL the screenshot came from.
    pub source_url: String,
    /// Decoded bitmap, kept for rendering and PNG export.
    pub image: DynamicImage,
}

impl std::fmt::Debug for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shot")
            .field("source_url", &self.source_url)
            .finish_non_exhaustive()
    }
}

/// Complete session state. Replaced wholesale by the reducer; nothing else
/// writes it.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub shot: Option<Shot>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            phase: Phase::Idle,
            shot: None,
        }
    }
}

/// Events the reducer understands, one per transition point.
#[derive(Debug, Clone)]
pub enum Event {
    TriggerPressed,
    FetchSucceeded(Shot),
    FetchFailed,
}

/// What the shell must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Start a background fetch.
    StartFetch,
    /// Nothing; the event was absorbed or rejected.
    None,
}

/// Apply one event to the session.
///
/// Trigger presses while a fetch is in flight are rejected: the state comes
/// back unchanged and no new fetch starts. Completion events outside
/// `Fetching` are stale and ignored. A failed fetch clears the shot, so the
/// shell falls back to its placeholder.
pub fn reduce(session: Session, event: Event) -> (Session, Outcome) {
    match (session.phase, event) {
        (Phase::Idle, Event::TriggerPressed) => (
            Session {
                phase: Phase::Fetching,
                ..session
            },
            Outcome::StartFetch,
        ),
        (Phase::Fetching, Event::FetchSucceeded(shot)) => (
            Session {
                phase: Phase::Idle,
                shot: Some(shot),
            },
            Outcome::None,
        ),
        (Phase::Fetching, Event::FetchFailed) => (
            Session {
                phase: Phase::Idle,
                shot: None,
            },
            Outcome::None,
        ),
        // Rejected trigger or stale completion.
        (_, _) => (session, Outcome::None),
    }
}
