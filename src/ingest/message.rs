//! Chat message and parsed event types.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calendar::Event;

// ============================================================================
// Raw Message
// ============================================================================

/// A chat message as fetched from a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    /// Message body.
    #[serde(default)]
    pub text: String,
    /// Opaque per-channel message key (Slack's `ts`).
    #[serde(alias = "ts")]
    pub timestamp_id: String,
    /// Author user id.
    #[serde(default, alias = "user", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// Author display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,
    /// Channel name, with or without a leading `#`.
    pub channel_name: String,
    /// Channel id.
    pub channel_id: String,
}

impl RawMessage {
    /// Create a message without author information.
    pub fn new(
        text: impl Into<String>,
        channel_id: impl Into<String>,
        channel_name: impl Into<String>,
        timestamp_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            timestamp_id: timestamp_id.into(),
            author_id: None,
            author_display_name: None,
            channel_name: channel_name.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Set the author id.
    pub fn with_author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Set the author display name.
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_display_name = Some(name.into());
        self
    }

    /// Channel name without a leading `#`.
    pub fn bare_channel_name(&self) -> &str {
        self.channel_name.trim_start_matches('#')
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Event category inferred from message keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Career,
    Food,
    Fun,
    Academic,
    Networking,
    Social,
    Sports,
    Arts,
    Tech,
    Wellness,
    /// Sentinel used when no keyword matches.
    Uncategorized,
}

impl Category {
    /// Categories that have keyword bags, in reporting order.
    pub const KEYWORDED: [Category; 10] = [
        Category::Career,
        Category::Food,
        Category::Fun,
        Category::Academic,
        Category::Networking,
        Category::Social,
        Category::Sports,
        Category::Arts,
        Category::Tech,
        Category::Wellness,
    ];

    /// Get a human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Career => "Career",
            Category::Food => "Food",
            Category::Fun => "Fun",
            Category::Academic => "Academic",
            Category::Networking => "Networking",
            Category::Social => "Social",
            Category::Sports => "Sports",
            Category::Arts => "Arts",
            Category::Tech => "Tech",
            Category::Wellness => "Wellness",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Parsed Event
// ============================================================================

/// An event record extracted from one chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEvent {
    /// `slack-<channelId>-<timestampId>`; stable across re-parses.
    pub id: String,
    /// First non-empty line, truncated.
    pub title: String,
    /// Full original message text.
    pub description: String,
    pub start_time: NaiveDateTime,
    /// Always after `start_time`.
    pub end_time: NaiveDateTime,
    /// Empty when nothing location-like was found.
    pub location: String,
    /// Never empty.
    pub categories: Vec<Category>,
    pub organizer_name: String,
    pub tags: Vec<String>,
}

impl ParsedEvent {
    /// Deterministic id for a message.
    pub fn id_for(channel_id: &str, timestamp_id: &str) -> String {
        format!("slack-{}-{}", channel_id, timestamp_id)
    }

    /// Length of the event.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Whether the event was assigned the sentinel category.
    pub fn is_uncategorized(&self) -> bool {
        self.categories == [Category::Uncategorized]
    }

    /// View as a layout input.
    pub fn to_event(&self) -> Event {
        Event::new(self.id.clone(), self.start_time, self.end_time)
    }
}
