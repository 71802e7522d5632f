//! Keyword chat assistant.
//!
//! Replies are picked by the first matching rule, checked against the
//! lowercased message in this order:
//! 1. "data science" or "data scientist"
//! 2. "ai" or "artificial intelligence"
//! 3. "best professor" or "good professor"
//! 4. "hello" or "hi"
//!
//! Matching is plain substring search, so "hi" also fires inside longer
//! words. Anything else gets the fallback reply.

use crate::types::ChatMessage;
use chrono::Utc;
use tracing::debug;

pub const GREETING: &str = "Hello! I'm your IU Course Compass AI assistant. How can I help you find courses or answer questions about IU Bloomington classes?";

pub const FALLBACK_REPLY: &str = "I'm not sure how to help with that specific question. Could you try rephrasing it or ask about courses, professors, or requirements?";

pub const HELLO_REPLY: &str =
    "Hello! How can I help you find courses or answer questions about IU Bloomington classes today?";

pub const DATA_SCIENCE_REPLY: &str = "For a Data Science career, I'd recommend these courses:
1. STAT-S520: Statistical Analysis with Dr. Chen
2. DSCI-D590: Data Mining with Dr. Patel
3. CSCI-B555: Machine Learning with Dr. Johnson
4. MATH-M365: Linear Algebra with Dr. Davis
Would you like details on any of these courses?";

pub const AI_REPLY: &str = "For AI specialization, these courses are excellent options:
1. CSCI-B551: Introduction to AI with Dr. Johnson
2. CSCI-B555: Machine Learning with Dr. Johnson
3. INFO-I427: Search Informatics (recommended elective)
4. CSCI-B657: Computer Vision (advanced option)
Would you like me to check availability for any of these?";

pub const BEST_PROFESSORS_REPLY: &str = "Based on OCQ ratings, these professors are highly rated:
1. Dr. Sarah Williams (4.9/5) - Informatics
2. Dr. Emily Johnson (4.7/5) - Computer Science
3. Dr. Jessica Patel (4.5/5) - Data Science
Would you like to see courses taught by any of these professors?";

/// Topic a message was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    DataScience,
    ArtificialIntelligence,
    BestProfessors,
    Greeting,
    Unknown,
}

impl Topic {
    pub fn classify(message: &str) -> Self {
        let text = message.to_lowercase();
        let any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

        if any(&["data science", "data scientist"]) {
            Topic::DataScience
        } else if any(&["ai", "artificial intelligence"]) {
            Topic::ArtificialIntelligence
        } else if any(&["best professor", "good professor"]) {
            Topic::BestProfessors
        } else if any(&["hello", "hi"]) {
            Topic::Greeting
        } else {
            Topic::Unknown
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Topic::DataScience => DATA_SCIENCE_REPLY,
            Topic::ArtificialIntelligence => AI_REPLY,
            Topic::BestProfessors => BEST_PROFESSORS_REPLY,
            Topic::Greeting => HELLO_REPLY,
            Topic::Unknown => FALLBACK_REPLY,
        }
    }
}

/// Stateless responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assistant;

impl Assistant {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &str) -> String {
        let topic = Topic::classify(message);
        debug!("Classified chat message as {:?}", topic);
        topic.reply().to_string()
    }
}

/// A running conversation, opened with the assistant's greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    assistant: Assistant,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(assistant: Assistant) -> Self {
        let mut session = Self {
            assistant,
            messages: Vec::new(),
        };
        session.push(GREETING.to_string(), false);
        session
    }

    /// Record the user's message and the reply. Blank input is ignored and
    /// returns `None`.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(input.to_string(), true);
        let reply = self.assistant.respond(input);
        Some(self.push(reply, false))
    }

    /// Add an already-produced reply, e.g. one fetched from the chat API.
    pub fn record_exchange(&mut self, input: &str, reply: String) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(input.to_string(), true);
        Some(self.push(reply, false))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, text: String, from_user: bool) -> &ChatMessage {
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage {
            id,
            text,
            from_user,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Assistant::new())
    }
}
