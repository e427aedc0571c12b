//! Page routes, document titles, and metadata.
//!
//! The embedder owns navigation; this module only models route identity and
//! what each route puts in the document head. [`TitleTracker`] keeps the
//! title current as the game emits events (the target word on the level
//! page, the final score on the result page).

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::event::{EventBus, GameEvent, Subscription};
use crate::style::Style;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Identity of a page in the game shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Free-play mode against the AI.
    AiMode,
    /// Release notes.
    WhatsNew,
    /// Topic selection.
    Levels,
    /// How to play.
    Rule,
    /// Support the developer.
    Support,
    /// An in-progress game.
    Level,
    /// Score summary of a finished game.
    Result,
    /// Nickname submission.
    SignUp,
    /// The daily challenge.
    DailyChallenge,
    /// Score recovery for a returning player.
    Recovery,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::AiMode,
        Self::WhatsNew,
        Self::Levels,
        Self::Rule,
        Self::Support,
        Self::Level,
        Self::Result,
        Self::SignUp,
        Self::DailyChallenge,
        Self::Recovery,
    ];

    /// The URL path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::AiMode => "/ai",
            Self::WhatsNew => "/whatsnew",
            Self::Levels => "/levels",
            Self::Rule => "/rule",
            Self::Support => "/support",
            Self::Level => "/level",
            Self::Result => "/result",
            Self::SignUp => "/signup",
            Self::DailyChallenge => "/daily-challenge",
            Self::Recovery => "/recovery",
        }
    }

    /// Resolve a path to a route, if it names one.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Strict variant of [`Route::from_path`] for embedders that treat an
    /// unknown path as a bug rather than falling back to the default title.
    pub fn parse(path: &str) -> Result<Self> {
        Self::from_path(path).ok_or_else(|| Error::UnknownRoute(path.to_string()))
    }

    /// Whether the document title on this route follows game events.
    #[must_use]
    pub const fn has_dynamic_title(self) -> bool {
        matches!(self, Self::Level | Self::Result)
    }
}

/// Static configuration for page titles and document metadata.
#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Site name used as the title prefix.
    pub site_name: String,
    /// Tagline appended to the default title.
    pub tagline: String,
    /// Document description, shared by the og: and twitter: tags.
    pub description: String,
    /// Page author.
    pub author: String,
    /// Canonical URL.
    pub base_url: String,
    /// Poster image for link previews.
    pub poster_url: String,
    /// Twitter handle for the twitter:creator/site tags.
    pub twitter_handle: String,
    /// Locale for og:locale.
    pub locale: String,
    /// Search keywords.
    pub keywords: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            site_name: "Charade.AI".to_string(),
            tagline: "Play Charades with AI".to_string(),
            description: "Play Charade.AI, the daily challenge game that tests your \
                          knowledge and vocabulary in various topics! Compete with \
                          friends on the leaderboard and sharpen your English along \
                          the way."
                .to_string(),
            author: "Charade.AI".to_string(),
            base_url: "https://charade-ai.vercel.app/".to_string(),
            poster_url: "https://charade-ai.vercel.app/poster.png".to_string(),
            twitter_handle: "@charadeai".to_string(),
            locale: "en_US".to_string(),
            keywords: [
                "charade",
                "word game",
                "ai",
                "daily challenge",
                "guessing game",
                "topics",
                "leaderboard",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// The static document title for a route.
#[must_use]
pub fn page_title(route: Route, config: &PageConfig) -> String {
    let site = &config.site_name;
    match route {
        Route::Home | Route::Level => format!("{site}: {}", config.tagline),
        Route::AiMode => format!("{site}: AI Mode"),
        Route::WhatsNew => format!("{site}: What's New"),
        Route::Levels => format!("{site}: Choose Topics"),
        Route::Rule => format!("{site}: Game Rules"),
        Route::Support => format!("{site}: Support the Developer"),
        Route::Result => format!("{site}: Share your scores!"),
        Route::SignUp => format!("{site}: Submit Your Nickname"),
        Route::DailyChallenge => format!("{site}: Daily Challenge"),
        Route::Recovery => format!("{site}: Recover Your Scores"),
    }
}

/// Keeps the document title current for the active route.
///
/// Navigation resets the title to the route's static form; game events
/// override it on the routes with dynamic titles.
#[derive(Debug)]
pub struct TitleTracker {
    config: PageConfig,
    route: Route,
    title: String,
}

impl TitleTracker {
    /// Create a tracker starting on a route.
    #[must_use]
    pub fn new(route: Route, config: PageConfig) -> Self {
        let title = page_title(route, &config);
        Self {
            config,
            route,
            title,
        }
    }

    /// The current document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The active route.
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Navigate: reset the title to the new route's static form.
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
        self.title = page_title(route, &self.config);
    }

    /// React to a game event. Only the level page follows the target and
    /// only the result page follows the score; events on other routes leave
    /// the title alone.
    pub fn on_event(&mut self, event: &GameEvent) {
        let site = &self.config.site_name;
        match (self.route, event) {
            (Route::Level, GameEvent::TargetChanged { target }) => {
                self.title = format!("{site}: Target -> {target}");
            }
            (Route::Result, GameEvent::ScoreComputed { score }) => {
                self.title = format!("{site}: Score: {score}!");
            }
            _ => {}
        }
    }

    /// Subscribe a shared tracker to a bus. Dropping the returned
    /// [`Subscription`] handle does not detach it; pass it back to
    /// [`EventBus::unsubscribe`] to stop following events.
    pub fn attach(tracker: &Arc<Mutex<Self>>, bus: &EventBus) -> Subscription {
        let tracker = Arc::clone(tracker);
        bus.subscribe(move |event| {
            if let Ok(mut guard) = tracker.lock() {
                guard.on_event(event);
            }
        })
    }
}

/// Where a metadata entry lands in the document head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKey {
    /// The charset declaration.
    Charset,
    /// A `name=`/`content=` meta tag.
    Name(&'static str),
    /// A `property=`/`content=` meta tag (Open Graph).
    Property(&'static str),
}

/// One document metadata entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn named(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name),
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property),
            content: content.into(),
        }
    }
}

/// Build the document metadata set for a resolved title.
///
/// The embedder writes these into the document head on every title change;
/// the list is complete, so stale tags from the previous route can simply be
/// replaced wholesale.
#[must_use]
pub fn meta_tags(config: &PageConfig, title: &str) -> Vec<MetaTag> {
    vec![
        MetaTag {
            key: MetaKey::Charset,
            content: "UTF-8".to_string(),
        },
        MetaTag::named("viewport", "width=device-width, initial-scale=1"),
        MetaTag::named("description", &config.description),
        MetaTag::named("keywords", config.keywords.join(",")),
        MetaTag::named("author", &config.author),
        MetaTag::named("application-name", &config.site_name),
        MetaTag::property("og:title", title),
        MetaTag::property("og:description", &config.description),
        MetaTag::property("og:image", &config.poster_url),
        MetaTag::property("og:image:alt", title),
        MetaTag::property("og:url", &config.base_url),
        MetaTag::property("og:site_name", &config.site_name),
        MetaTag::property("og:locale", &config.locale),
        MetaTag::property("og:type", "website"),
        MetaTag::named("twitter:card", "summary_large_image"),
        MetaTag::named("twitter:title", title),
        MetaTag::named("twitter:description", &config.description),
        MetaTag::named("twitter:image", &config.poster_url),
        MetaTag::named("twitter:image:alt", title),
        MetaTag::named("twitter:creator", &config.twitter_handle),
        MetaTag::named("twitter:site", &config.twitter_handle),
    ]
}

/// Corner of the decorated element a badge is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeAnchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl BadgeAnchor {
    /// Whether the badge sits on the top edge.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Whether the badge sits on the left edge.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

/// A small label pinned to the corner of a menu item (e.g. "NEW").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub anchor: BadgeAnchor,
}

impl Badge {
    /// Create a badge with the default anchor.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: BadgeAnchor::default(),
        }
    }

    /// Builder-style anchor setter.
    #[must_use]
    pub fn with_anchor(mut self, anchor: BadgeAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The badge's visual treatment.
    #[must_use]
    pub fn style() -> Style {
        Style::fg(Rgba::BLACK)
            .with_bg(Rgba::from_rgb_u8(250, 204, 21))
            .with_bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/nope"), None);
        assert!(Route::parse("/nope").is_err());
    }

    #[test]
    fn test_static_titles() {
        let config = PageConfig::default();
        assert_eq!(
            page_title(Route::Home, &config),
            "Charade.AI: Play Charades with AI"
        );
        assert_eq!(
            page_title(Route::DailyChallenge, &config),
            "Charade.AI: Daily Challenge"
        );
    }

    #[test]
    fn test_tracker_follows_navigation() {
        let mut tracker = TitleTracker::new(Route::Home, PageConfig::default());
        assert_eq!(tracker.title(), "Charade.AI: Play Charades with AI");

        tracker.set_route(Route::Rule);
        assert_eq!(tracker.title(), "Charade.AI: Game Rules");
    }

    #[test]
    fn test_tracker_dynamic_title_on_level() {
        let mut tracker = TitleTracker::new(Route::Level, PageConfig::default());
        tracker.on_event(&GameEvent::TargetChanged {
            target: "piano".to_string(),
        });
        assert_eq!(tracker.title(), "Charade.AI: Target -> piano");
    }

    #[test]
    fn test_tracker_dynamic_title_on_result() {
        let mut tracker = TitleTracker::new(Route::Result, PageConfig::default());
        tracker.on_event(&GameEvent::ScoreComputed { score: 42 });
        assert_eq!(tracker.title(), "Charade.AI: Score: 42!");
    }

    #[test]
    fn test_events_ignored_off_route() {
        let mut tracker = TitleTracker::new(Route::Home, PageConfig::default());
        let before = tracker.title().to_string();

        tracker.on_event(&GameEvent::TargetChanged {
            target: "piano".to_string(),
        });
        tracker.on_event(&GameEvent::ScoreComputed { score: 42 });
        assert_eq!(tracker.title(), before);
    }

    #[test]
    fn test_navigation_resets_dynamic_title() {
        let mut tracker = TitleTracker::new(Route::Level, PageConfig::default());
        tracker.on_event(&GameEvent::TargetChanged {
            target: "piano".to_string(),
        });

        tracker.set_route(Route::Result);
        assert_eq!(tracker.title(), "Charade.AI: Share your scores!");
    }

    #[test]
    fn test_tracker_attaches_to_bus() {
        let bus = EventBus::new();
        let tracker = Arc::new(Mutex::new(TitleTracker::new(
            Route::Level,
            PageConfig::default(),
        )));

        let sub = TitleTracker::attach(&tracker, &bus);
        bus.emit(&GameEvent::TargetChanged {
            target: "violin".to_string(),
        });
        assert_eq!(
            tracker.lock().unwrap().title(),
            "Charade.AI: Target -> violin"
        );

        assert!(bus.unsubscribe(sub));
    }

    #[test]
    fn test_meta_tags_follow_title() {
        let config = PageConfig::default();
        let title = page_title(Route::Result, &config);
        let tags = meta_tags(&config, &title);

        let og_title = tags
            .iter()
            .find(|t| t.key == MetaKey::Property("og:title"))
            .unwrap();
        assert_eq!(og_title.content, title);

        assert!(tags.iter().any(|t| t.key == MetaKey::Charset));
        assert!(
            tags.iter()
                .any(|t| t.key == MetaKey::Name("twitter:card")
                    && t.content == "summary_large_image")
        );
    }

    #[test]
    fn test_badge_anchor() {
        let badge = Badge::new("NEW");
        assert!(badge.anchor.is_top());
        assert!(badge.anchor.is_left());

        let badge = badge.with_anchor(BadgeAnchor::BottomRight);
        assert!(!badge.anchor.is_top());
        assert!(!badge.anchor.is_left());
    }
}
