//! Cached session state and the user display panel.
//!
//! All cached state sits behind a single injected [`SessionStore`], and the
//! panel shown in the page header is a pure function of the route and the
//! cached user.
//!
//! The game, score, and level slots hold opaque serialized payloads owned by
//! the game logic; this crate only ever clears them.

use crate::page::Route;
use serde::{Deserialize, Serialize};

/// A player known to the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub nickname: String,
}

impl User {
    /// Create a user from a nickname.
    #[must_use]
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

/// The single injected interface over cached session state.
pub trait SessionStore {
    /// The cached user, if any.
    fn user(&self) -> Option<User>;
    /// Cache a user.
    fn set_user(&mut self, user: User);
    /// Forget the cached user.
    fn clear_user(&mut self);

    /// Cache the in-progress game payload.
    fn set_cached_game(&mut self, payload: String);
    /// Drop the in-progress game payload.
    fn clear_cached_game(&mut self);

    /// Cache the scores payload.
    fn set_scores(&mut self, payload: String);
    /// Drop the scores payload.
    fn clear_scores(&mut self);

    /// Cache the selected level payload.
    fn set_level(&mut self, payload: String);
    /// Drop the selected level payload.
    fn clear_level(&mut self);

    /// Whether the player has dismissed the gameplay tips.
    fn tips_acknowledged(&self) -> bool;
    /// Record whether the gameplay tips were dismissed.
    fn set_tips_acknowledged(&mut self, acknowledged: bool);
}

/// In-memory session store, used in tests and by embedders that persist
/// elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    user: Option<User>,
    cached_game: Option<String>,
    scores: Option<String>,
    level: Option<String>,
    tips_acknowledged: bool,
}

impl MemorySession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached game payload, if any.
    #[must_use]
    pub fn cached_game(&self) -> Option<&str> {
        self.cached_game.as_deref()
    }

    /// The cached scores payload, if any.
    #[must_use]
    pub fn scores(&self) -> Option<&str> {
        self.scores.as_deref()
    }

    /// The cached level payload, if any.
    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

impl SessionStore for MemorySession {
    fn user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    fn clear_user(&mut self) {
        self.user = None;
    }

    fn set_cached_game(&mut self, payload: String) {
        self.cached_game = Some(payload);
    }

    fn clear_cached_game(&mut self) {
        self.cached_game = None;
    }

    fn set_scores(&mut self, payload: String) {
        self.scores = Some(payload);
    }

    fn clear_scores(&mut self) {
        self.scores = None;
    }

    fn set_level(&mut self, payload: String) {
        self.level = Some(payload);
    }

    fn clear_level(&mut self) {
        self.level = None;
    }

    fn tips_acknowledged(&self) -> bool {
        self.tips_acknowledged
    }

    fn set_tips_acknowledged(&mut self, acknowledged: bool) {
        self.tips_acknowledged = acknowledged;
    }
}

/// What the header's user panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserPanel {
    /// Nickname plus a quit control.
    SignedIn { nickname: String },
    /// A link offering score recovery.
    RecoveryPrompt,
    /// Nothing; the panel only renders on the landing page.
    Hidden,
}

/// Resolve the user panel for a route.
#[must_use]
pub fn user_panel(route: Route, user: Option<&User>) -> UserPanel {
    if route != Route::Home {
        return UserPanel::Hidden;
    }
    user.map_or(UserPanel::RecoveryPrompt, |user| UserPanel::SignedIn {
        nickname: user.nickname.clone(),
    })
}

/// Reconcile the cached user with the leaderboard.
///
/// `exists` is the result of the embedder's nickname lookup (networking is
/// the embedder's concern). A cached nickname that no longer exists is
/// cleared so the recovery prompt shows instead of a dead account.
pub fn resolve_user(store: &mut dyn SessionStore, exists: bool) -> Option<User> {
    let user = store.user()?;
    if exists {
        Some(user)
    } else {
        store.clear_user();
        None
    }
}

/// The quit flow: drop every cached trace of the player.
///
/// After this the player must recover or submit a new nickname to appear on
/// the leaderboard again, and the gameplay tips show on the next game.
pub fn sign_out(store: &mut dyn SessionStore) {
    store.clear_cached_game();
    store.clear_scores();
    store.clear_level();
    store.clear_user();
    store.set_tips_acknowledged(false);
}
