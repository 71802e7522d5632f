//! # Compass Service
//!
//! This module ties the catalog, search, planner and advisor crates together
//! behind one type the CLI drives:
//! 1. Load the catalog from the configured source
//! 2. Open the cart and enrolled lists from the storage directory
//! 3. Answer searches, cart and enrollment operations, validation,
//!    recommendations and chat
//! 4. Forward API-backed requests (remote chat, recommendations, roadmap)
//!    to the backend client

use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info, warn};

use advisor::{Assistant, CareerAdvisor, ChatSession, Recommendation, RecommendationRequest};
use api_client::CompassClient;
use catalog::{CatalogIndex, Course};
use planner::{
    validate_schedule, AddOutcome, Cart, EnrollOutcome, Enrollment, JsonFileStore,
    ValidationIssue,
};
use search::Criteria;

use crate::config::{CatalogSource, CompassConfig};

/// Main service coordinating all components
pub struct CompassService {
    config: CompassConfig,
    index: CatalogIndex,
    cart: Cart,
    enrollment: Enrollment,
    advisor: CareerAdvisor,
    assistant: Assistant,
    api: CompassClient,
}

impl CompassService {
    /// Load the catalog and open the file-backed cart and enrolled lists.
    pub async fn open(config: CompassConfig) -> Result<Self> {
        config.validate()?;
        let api = CompassClient::new(&config.api.base_url, config.api.timeout())
            .context("Creating API client")?;

        let start_time = Instant::now();
        let index = load_catalog(&config, &api).await?;
        info!("Catalog loaded in {:.2?}", start_time.elapsed());

        let cart = Cart::open(JsonFileStore::new(config.storage.cart_path()))
            .context("Opening cart")?;
        let enrollment = Enrollment::open(JsonFileStore::new(config.storage.enrolled_path()))
            .context("Opening enrolled courses")?;

        Ok(Self::assemble(config, index, cart, enrollment, api))
    }

    /// Assemble the service from already-built parts.
    pub fn from_parts(
        config: CompassConfig,
        index: CatalogIndex,
        cart: Cart,
        enrollment: Enrollment,
    ) -> Result<Self> {
        let api = CompassClient::new(&config.api.base_url, config.api.timeout())
            .context("Creating API client")?;
        Ok(Self::assemble(config, index, cart, enrollment, api))
    }

    fn assemble(
        config: CompassConfig,
        index: CatalogIndex,
        cart: Cart,
        enrollment: Enrollment,
        api: CompassClient,
    ) -> Self {
        let advisor = CareerAdvisor::from_index(&index);
        Self {
            config,
            index,
            cart,
            enrollment,
            advisor,
            assistant: Assistant::new(),
            api,
        }
    }

    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn enrollment(&self) -> &Enrollment {
        &self.enrollment
    }

    pub fn advisor(&self) -> &CareerAdvisor {
        &self.advisor
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Courses matching `criteria`, in catalog order.
    pub fn search(&self, criteria: &Criteria) -> Vec<&Course> {
        let start_time = Instant::now();
        let results = search::filter_refs(self.index.courses(), criteria);
        info!(
            "Search matched {} of {} courses in {:.2?}",
            results.len(),
            self.index.len(),
            start_time.elapsed()
        );
        results
    }

    /// Look a course up by id or code.
    pub fn course(&self, id_or_code: &str) -> Result<&Course> {
        self.index
            .find(id_or_code)
            .ok_or_else(|| anyhow!("No course with id or code {id_or_code}"))
    }

    // =========================================================================
    // Cart and enrollment
    // =========================================================================

    pub fn add_to_cart(&mut self, id_or_code: &str) -> Result<(Course, AddOutcome)> {
        let course = self.course(id_or_code)?.clone();
        let outcome = self.cart.add(course.clone()).context("Saving cart")?;
        Ok((course, outcome))
    }

    /// Remove by id or code. Returns the removed course, if it was there.
    pub fn remove_from_cart(&mut self, id_or_code: &str) -> Result<Option<Course>> {
        let id = resolve_id(self.cart.items(), &self.index, id_or_code);
        self.cart.remove(&id).context("Saving cart")
    }

    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear().context("Clearing cart")
    }

    /// Enroll everything in the cart.
    pub fn enroll(&mut self) -> Result<EnrollOutcome> {
        if self.cart.is_empty() {
            warn!("Enroll requested with an empty cart");
        }
        self.enrollment
            .enroll_from(&mut self.cart)
            .context("Enrolling cart courses")
    }

    pub fn unenroll(&mut self, id_or_code: &str) -> Result<Option<Course>> {
        let id = resolve_id(self.enrollment.courses(), &self.index, id_or_code);
        self.enrollment.unenroll(&id).context("Saving enrolled courses")
    }

    /// Validate the enrolled courses for one term label ("all" for every
    /// enrolled course).
    pub fn validate_term(&self, term: &str) -> std::result::Result<(), ValidationIssue> {
        let selected = self.enrollment.by_term(term);
        info!("Validating {} enrolled courses for {}", selected.len(), term);
        validate_schedule(
            &selected,
            self.enrollment.courses(),
            self.config.planner.min_credits,
        )
    }

    // =========================================================================
    // Advice
    // =========================================================================

    /// Rule-based recommendations from the loaded catalog.
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<Recommendation> {
        self.advisor
            .recommend_with_matches(self.index.courses(), request)
    }

    /// Recommendations from `POST /recommendations`.
    pub async fn recommend_remote(&self, request: &RecommendationRequest) -> Result<Vec<Course>> {
        self.api
            .recommendations(request)
            .await
            .context("Fetching recommendations from the API")
    }

    /// Local keyword assistant reply.
    pub fn chat(&self, message: &str) -> String {
        self.assistant.respond(message)
    }

    /// A new conversation with the local assistant, opened by its greeting.
    pub fn chat_session(&self) -> ChatSession {
        ChatSession::new(self.assistant)
    }

    /// Add one exchange to `session`. With `remote` set the reply comes from
    /// [`chat_remote`](Self::chat_remote). Blank input is ignored and
    /// returns false.
    pub async fn converse(&self, session: &mut ChatSession, message: &str, remote: bool) -> bool {
        if message.trim().is_empty() {
            return false;
        }
        if remote {
            let reply = self.chat_remote(message).await;
            session.record_exchange(message, reply).is_some()
        } else {
            session.send(message).is_some()
        }
    }

    /// Reply from `POST /chat`, falling back to the local assistant when the
    /// API can't be reached or answers with an error.
    pub async fn chat_remote(&self, message: &str) -> String {
        match self.api.chat(message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat API unavailable, answering locally: {}", e);
                self.chat(message)
            }
        }
    }

    /// Fetch a roadmap image for `career_goal` and write it to `out`.
    ///
    /// The roadmap covers the enrolled courses; with nothing enrolled it
    /// covers the career path's recommended courses instead. Returns the
    /// number of bytes written.
    pub async fn roadmap(&self, career_goal: &str, out: &Path) -> Result<usize> {
        let codes = self.roadmap_codes(career_goal)?;
        debug!("Roadmap for {} over {:?}", career_goal, codes);

        let image = self
            .api
            .roadmap(career_goal, &codes)
            .await
            .context("Fetching roadmap from the API")?;
        tokio::fs::write(out, &image)
            .await
            .with_context(|| format!("Writing roadmap to {}", out.display()))?;

        info!("Wrote {} byte roadmap to {}", image.len(), out.display());
        Ok(image.len())
    }

    fn roadmap_codes(&self, career_goal: &str) -> Result<Vec<String>> {
        if !self.enrollment.is_empty() {
            return Ok(self.enrollment.courses().iter().map(|c| c.code.clone()).collect());
        }
        match self.advisor.find_path(career_goal) {
            Some(path) => Ok(path.recommended_courses.clone()),
            None => bail!("Nothing enrolled and no career path named {career_goal}"),
        }
    }
}

async fn load_catalog(config: &CompassConfig, api: &CompassClient) -> Result<CatalogIndex> {
    match config.catalog.source {
        CatalogSource::Bundled => {
            info!("Loading bundled catalog");
            CatalogIndex::bundled().context("Loading bundled catalog")
        }
        CatalogSource::File => {
            let path = config
                .catalog
                .path
                .as_deref()
                .ok_or_else(|| anyhow!("catalog.path is not set"))?;
            CatalogIndex::load_from_file(path)
                .with_context(|| format!("Loading catalog from {}", path.display()))
        }
        CatalogSource::Api => {
            info!("Fetching catalog from {}", api.base_url());
            let courses = api.fetch_courses().await.context("Fetching courses")?;
            CatalogIndex::from_courses(courses).context("Indexing fetched courses")
        }
    }
}

/// Map a code to the id of a listed course; anything else is taken as an id.
fn resolve_id(listed: &[Course], index: &CatalogIndex, id_or_code: &str) -> String {
    listed
        .iter()
        .find(|c| c.id == id_or_code || c.code.eq_ignore_ascii_case(id_or_code))
        .map(|c| c.id.clone())
        .or_else(|| index.find(id_or_code).map(|c| c.id.clone()))
        .unwrap_or_else(|| id_or_code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Weekday;
    use planner::MemoryStore;

    fn service() -> CompassService {
        let index = CatalogIndex::bundled().unwrap();
        let cart = Cart::open(MemoryStore::new()).unwrap();
        let enrollment = Enrollment::open(MemoryStore::new()).unwrap();
        CompassService::from_parts(CompassConfig::default(), index, cart, enrollment).unwrap()
    }

    #[test]
    fn test_search_through_service() {
        let service = service();
        let results = service.search(&Criteria::new().with_department("CSCI"));
        let codes: Vec<&str> = results.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CSCI-B551", "CSCI-B555"]);
        assert_eq!(service.search(&Criteria::new()).len(), 6);
    }

    #[test]
    fn test_cart_by_code_then_enroll() {
        let mut service = service();
        let (course, outcome) = service.add_to_cart("stat-s520").unwrap();
        assert_eq!(course.id, "c3");
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(service.add_to_cart("c3").unwrap().1, AddOutcome::AlreadyPresent);
        service.add_to_cart("c5").unwrap();

        assert!(service.remove_from_cart("MATH-M365").unwrap().is_some());
        assert!(service.add_to_cart("nope").is_err());

        let outcome = service.enroll().unwrap();
        assert_eq!(outcome.added, 1);
        assert!(service.cart().is_empty());
        assert!(service.unenroll("STAT-S520").unwrap().is_some());
        assert!(service.enrollment().is_empty());
    }

    #[test]
    fn test_validate_term_uses_configured_minimum() {
        let mut service = service();
        for code in ["CSCI-B551", "STAT-S520"] {
            service.add_to_cart(code).unwrap();
        }
        service.enroll().unwrap();

        // 3 + 4 credits, both Spring 2024 in the bundled data
        let term = service.enrollment().terms()[0].clone();
        assert!(matches!(
            service.validate_term(&term),
            Err(ValidationIssue::InsufficientCredits { total: 7, required: 12 })
        ));
    }

    #[test]
    fn test_local_advice() {
        let service = service();
        let request = RecommendationRequest::new("AI Engineer").with_days([Weekday::Tuesday]);
        assert!(service.recommend(&request).is_empty());
        assert!(service.chat("hello").starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_local_conversation() {
        let service = service();
        let mut session = service.chat_session();
        assert!(!service.converse(&mut session, "   ", false).await);
        assert_eq!(session.messages().len(), 1);

        assert!(service.converse(&mut session, "hello", false).await);
        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].from_user);
        assert_eq!(messages[2].text, service.chat("hello"));
        assert_eq!(messages[2].id, 3);
    }

    #[test]
    fn test_friday_search() {
        let service = service();
        let results = service.search(&Criteria::new().with_days([Weekday::Friday]));
        let codes: Vec<&str> = results.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["STAT-S520", "MATH-M365"]);
    }

    #[test]
    fn test_roadmap_codes_fall_back_to_career_path() {
        let service = service();
        let codes = service.roadmap_codes("UX Designer").unwrap();
        assert_eq!(codes[0], "INFO-I541");
        assert!(service.roadmap_codes("Astronaut").is_err());
    }
}
