//! Port trait over the backend accessors.
//!
//! Coordinators depend on this trait instead of the concrete client so
//! their sequencing and reconciliation rules can be tested against a mock
//! without a network. `FlickServerClient` is the production implementation.

use async_trait::async_trait;
use flick_core::{Movie, User, WatchedEntry};
use flick_server_client::{
    AuthOutcome, FlickServerClient, NewAccount, ProfileUpdate, Result, SessionCheck,
};

/// The accessor surface the screens consume.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerApi: Send + Sync {
    // Catalog
    async fn list_movies(&self) -> Result<Vec<Movie>>;
    async fn movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>>;
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>>;
    async fn similar_movies(&self, movie_id: &str) -> Result<Vec<Movie>>;

    // My list
    async fn add_to_my_list(&self, movie_id: &str) -> Result<User>;
    async fn remove_from_my_list(&self, movie_id: &str) -> Result<User>;
    async fn my_list_movies(&self) -> Result<Vec<Movie>>;
    async fn my_list_ids(&self) -> Result<Vec<String>>;
    async fn is_in_my_list(&self, movie_id: &str) -> Result<bool>;

    // Watched list
    async fn mark_watched(&self, movie_id: &str, watched_time: f64) -> Result<()>;
    async fn unmark_watched(&self, movie_id: &str) -> Result<()>;
    async fn watchtime(&self, movie_id: &str) -> Result<f64>;
    async fn watched_movies(&self) -> Result<Vec<WatchedEntry>>;
    async fn is_watched(&self, movie_id: &str) -> Result<bool>;

    // Auth & profile
    async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome>;
    async fn register(&self, account: &NewAccount) -> Result<AuthOutcome>;
    async fn check_session(&self) -> Result<SessionCheck>;
    async fn logout(&self) -> Result<()>;
    async fn update_profile(&self, profile: &ProfileUpdate) -> Result<AuthOutcome>;
}

#[async_trait]
impl ServerApi for FlickServerClient {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.catalog().list_movies(None).await
    }

    async fn movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>> {
        self.catalog().list_movies(Some(genre_id)).await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        self.catalog().search_movies(query).await
    }

    async fn similar_movies(&self, movie_id: &str) -> Result<Vec<Movie>> {
        self.catalog().similar_movies(movie_id).await
    }

    async fn add_to_my_list(&self, movie_id: &str) -> Result<User> {
        self.my_list().add(movie_id).await
    }

    async fn remove_from_my_list(&self, movie_id: &str) -> Result<User> {
        self.my_list().remove(movie_id).await
    }

    async fn my_list_movies(&self) -> Result<Vec<Movie>> {
        self.my_list().movies().await
    }

    async fn my_list_ids(&self) -> Result<Vec<String>> {
        self.my_list().ids().await
    }

    async fn is_in_my_list(&self, movie_id: &str) -> Result<bool> {
        self.my_list().contains(movie_id).await
    }

    async fn mark_watched(&self, movie_id: &str, watched_time: f64) -> Result<()> {
        self.watched().mark(movie_id, watched_time).await
    }

    async fn unmark_watched(&self, movie_id: &str) -> Result<()> {
        self.watched().unmark(movie_id).await
    }

    async fn watchtime(&self, movie_id: &str) -> Result<f64> {
        self.watched().watchtime(movie_id).await
    }

    async fn watched_movies(&self) -> Result<Vec<WatchedEntry>> {
        self.watched().movies().await
    }

    async fn is_watched(&self, movie_id: &str) -> Result<bool> {
        self.watched().contains(movie_id).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthOutcome> {
        self.auth().login(username, password).await
    }

    async fn register(&self, account: &NewAccount) -> Result<AuthOutcome> {
        self.auth().register(account).await
    }

    async fn check_session(&self) -> Result<SessionCheck> {
        self.auth().check_session().await
    }

    async fn logout(&self) -> Result<()> {
        self.auth().logout().await
    }

    async fn update_profile(&self, profile: &ProfileUpdate) -> Result<AuthOutcome> {
        self.profile().update(profile).await
    }
}
