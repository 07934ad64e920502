//! Search-screen coordinator.

use std::sync::Arc;

use flick_core::Movie;
use tracing::warn;

use crate::api::ServerApi;
use crate::notice::NoticeSlot;

/// Search-screen coordinator.
///
/// Queries of three or more characters hit the backend — one call per
/// keystroke event, no debounce — and replace the result set wholesale.
/// Shorter queries clear the results without a network call, so the first
/// couple of keystrokes stay silent. With no query at all, the screen
/// falls back to the full catalog fetched at mount.
pub struct SearchScreen {
    api: Arc<dyn ServerApi>,
    /// Full catalog shown while the query is empty.
    pub catalog: Vec<Movie>,
    /// Current query text.
    pub query: String,
    /// Current results; replaced wholesale per search.
    pub results: Vec<Movie>,
    pub notice: NoticeSlot,
}

/// Queries at or below this length never reach the backend.
const MIN_QUERY_LEN: usize = 2;

impl SearchScreen {
    pub fn new(api: Arc<dyn ServerApi>) -> Self {
        Self {
            api,
            catalog: Vec::new(),
            query: String::new(),
            results: Vec::new(),
            notice: NoticeSlot::default(),
        }
    }

    /// Fetch the full catalog for the empty-query state.
    pub async fn load(&mut self) {
        match self.api.list_movies().await {
            Ok(movies) => self.catalog = movies,
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                self.notice.post("Error fetching movies list");
            }
        }
    }

    /// Handle a keystroke event: the query text as it now reads.
    pub async fn set_query(&mut self, text: &str) {
        self.query = text.to_string();

        if text.chars().count() <= MIN_QUERY_LEN {
            self.results.clear();
            return;
        }

        match self.api.search_movies(text).await {
            Ok(results) => self.results = results,
            Err(e) => {
                warn!(query = %text, error = %e, "Search failed");
                self.notice.post("Error searching movies");
            }
        }
    }

    /// What the screen should render right now: results when there are
    /// any, nothing for a fruitless query, the catalog otherwise.
    pub fn visible_movies(&self) -> &[Movie] {
        if !self.results.is_empty() {
            &self.results
        } else if !self.query.is_empty() {
            &[]
        } else {
            &self.catalog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockServerApi;
    use flick_server_client::ServerClientError;

    #[tokio::test]
    async fn short_queries_never_reach_the_backend() {
        let mut api = MockServerApi::new();
        api.expect_search_movies().times(0);

        let mut search = SearchScreen::new(Arc::new(api));
        search.set_query("a").await;
        search.set_query("ab").await;

        assert!(search.results.is_empty());
    }

    #[tokio::test]
    async fn three_characters_trigger_exactly_one_search() {
        let mut api = MockServerApi::new();
        api.expect_search_movies()
            .withf(|query: &str| query == "abc")
            .times(1)
            .returning(|_| Ok(vec![Movie::new("m1", "Abc Story")]));

        let mut search = SearchScreen::new(Arc::new(api));
        search.set_query("abc").await;

        assert_eq!(search.results.len(), 1);
    }

    #[tokio::test]
    async fn results_are_replaced_wholesale() {
        let mut api = MockServerApi::new();
        api.expect_search_movies()
            .withf(|query: &str| query == "abc")
            .returning(|_| Ok(vec![Movie::new("m1", "Abc"), Movie::new("m2", "Abc 2")]));
        api.expect_search_movies()
            .withf(|query: &str| query == "abcd")
            .returning(|_| Ok(vec![Movie::new("m3", "Abcd")]));

        let mut search = SearchScreen::new(Arc::new(api));
        search.set_query("abc").await;
        search.set_query("abcd").await;

        let ids: Vec<&str> = search.results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m3"]);
    }

    #[tokio::test]
    async fn shrinking_the_query_below_the_gate_clears_results() {
        let mut api = MockServerApi::new();
        api.expect_search_movies()
            .times(1)
            .returning(|_| Ok(vec![Movie::new("m1", "Abc")]));

        let mut search = SearchScreen::new(Arc::new(api));
        search.set_query("abc").await;
        assert!(!search.results.is_empty());

        search.set_query("ab").await;
        assert!(search.results.is_empty());
    }

    #[tokio::test]
    async fn multibyte_queries_are_gated_by_characters_not_bytes() {
        let mut api = MockServerApi::new();
        api.expect_search_movies().times(0);

        let mut search = SearchScreen::new(Arc::new(api));
        // Two characters, six bytes.
        search.set_query("映画").await;
        assert!(search.results.is_empty());
    }

    #[tokio::test]
    async fn empty_query_shows_the_catalog() {
        let mut api = MockServerApi::new();
        api.expect_list_movies()
            .returning(|| Ok(vec![Movie::new("m1", "Heat"), Movie::new("m2", "Ronin")]));

        let mut search = SearchScreen::new(Arc::new(api));
        search.load().await;

        assert_eq!(search.visible_movies().len(), 2);
    }

    #[tokio::test]
    async fn fruitless_query_shows_nothing() {
        let mut api = MockServerApi::new();
        api.expect_list_movies()
            .returning(|| Ok(vec![Movie::new("m1", "Heat")]));
        api.expect_search_movies().returning(|_| Ok(vec![]));

        let mut search = SearchScreen::new(Arc::new(api));
        search.load().await;
        search.set_query("zzz").await;

        assert!(search.visible_movies().is_empty());
    }

    #[tokio::test]
    async fn search_failure_posts_a_notice() {
        let mut api = MockServerApi::new();
        api.expect_search_movies().returning(|_| {
            Err(ServerClientError::ServerUnreachable(
                "connection refused".to_string(),
            ))
        });

        let mut search = SearchScreen::new(Arc::new(api));
        search.set_query("abc").await;

        assert_eq!(search.notice.take().as_deref(), Some("Error searching movies"));
    }
}
