//! # Advisor Crate
//!
//! Offline guidance for students: career-path course recommendations and
//! a keyword chat assistant. Both run locally with no API behind them; the
//! request and message types are the same ones the API client sends.
//!
//! ## Example Usage
//!
//! ```ignore
//! use advisor::{CareerAdvisor, ChatSession, RecommendationRequest};
//!
//! let advisor = CareerAdvisor::from_index(&index);
//! let request = RecommendationRequest::new("Data Scientist").with_subjects("statistics");
//! for course in advisor.recommend(index.courses(), &request) {
//!     println!("{}", course.code);
//! }
//!
//! let mut chat = ChatSession::default();
//! if let Some(reply) = chat.send("any good AI classes?") {
//!     println!("{}", reply.text);
//! }
//! ```

pub mod types;
pub mod career;
pub mod assistant;

pub use assistant::{Assistant, ChatSession, Topic, GREETING};
pub use career::{CareerAdvisor, Recommendation};
pub use types::{AdvisorError, ChatMessage, EnrollmentType, RecommendationRequest};
