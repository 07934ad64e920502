//! Home-screen coordinator: hero banner, genre sections, my-list ids.

use std::sync::Arc;

use flick_core::{latest_movies, Genre, Movie};
use flick_server_client::{Result, ServerClientError};
use tracing::warn;

use crate::api::ServerApi;
use crate::notice::NoticeSlot;
use crate::Activate;

/// One home-screen section: a genre plus the movies it matched.
#[derive(Debug, Clone)]
pub struct GenreSection {
    pub genre: Genre,
    pub movies: Vec<Movie>,
}

/// Home-screen coordinator.
///
/// `load()` populates the hero banner (four most recent releases plus the
/// viewer's my-list id set) and the genre sections; `on_activate()` keeps
/// the id set fresh when the user navigates back. The banner's list toggle
/// takes the cheap path: state is reconciled from the mutation response's
/// echoed `user.mylist`, with no follow-up membership check — the banner
/// exposes no watched toggle, so nothing else races it.
pub struct HomeScreen {
    api: Arc<dyn ServerApi>,
    genres: Vec<Genre>,
    /// The four most recently released movies, newest first.
    pub banner: Vec<Movie>,
    /// Ids of the movies in the viewer's my list.
    pub mylist: Vec<String>,
    /// Genre sections with at least one movie, in configured order.
    pub sections: Vec<GenreSection>,
    pub notice: NoticeSlot,
}

impl HomeScreen {
    /// Create the coordinator with the genre sections to display.
    pub fn new(api: Arc<dyn ServerApi>, genres: Vec<Genre>) -> Self {
        Self {
            api,
            genres,
            banner: Vec::new(),
            mylist: Vec::new(),
            sections: Vec::new(),
            notice: NoticeSlot::default(),
        }
    }

    /// Initial load: banner and sections, fetched concurrently. Either
    /// part failing posts a notice and leaves the other intact.
    pub async fn load(&mut self) {
        let (banner, sections) = tokio::join!(
            Self::fetch_banner(&*self.api),
            Self::fetch_sections(&*self.api, &self.genres),
        );
        self.apply_banner(banner);
        self.apply_sections(sections);
    }

    /// Pull-to-refresh re-runs the same two fetches.
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Toggle a movie's my-list membership from the banner.
    ///
    /// The displayed id set is replaced by the mutation response's echoed
    /// `user.mylist` — the server dedupes and rejects, so the echo is
    /// authoritative and repeated adds cannot duplicate locally.
    pub async fn toggle_my_list(&mut self, movie: &Movie) {
        let was_in_list = self.mylist.iter().any(|id| id == &movie.id);
        let result = if was_in_list {
            self.api.remove_from_my_list(&movie.id).await
        } else {
            self.api.add_to_my_list(&movie.id).await
        };

        match result {
            Ok(user) => {
                self.mylist = user.mylist;
                self.notice.post(if was_in_list {
                    "Removed from My List"
                } else {
                    "Added to My List"
                });
            }
            Err(e) => {
                warn!(movie_id = %movie.id, error = %e, "My-list toggle failed");
                self.notice.post("Error adding/removing from list");
            }
        }
    }

    async fn fetch_banner(api: &dyn ServerApi) -> Result<(Vec<Movie>, Vec<String>)> {
        let movies = api.list_movies().await?;
        let mylist = api.my_list_ids().await?;
        Ok((latest_movies(&movies, 4), mylist))
    }

    /// Fetch every configured genre in parallel and drop empty sections.
    /// A single genre failing fails the whole batch; partial rendering is
    /// deliberately not attempted.
    async fn fetch_sections(
        api: &dyn ServerApi,
        genres: &[Genre],
    ) -> Result<Vec<GenreSection>> {
        let fetches = genres.iter().map(|genre| async move {
            let movies = api.movies_by_genre(&genre.id).await?;
            Ok::<_, ServerClientError>(GenreSection {
                genre: genre.clone(),
                movies,
            })
        });
        let sections = futures_util::future::try_join_all(fetches).await?;
        Ok(sections
            .into_iter()
            .filter(|section| !section.movies.is_empty())
            .collect())
    }

    fn apply_banner(&mut self, banner: Result<(Vec<Movie>, Vec<String>)>) {
        match banner {
            Ok((banner, mylist)) => {
                self.banner = banner;
                self.mylist = mylist;
            }
            Err(e) => {
                warn!(error = %e, "Banner fetch failed");
                self.notice.post("Error fetching movies list");
            }
        }
    }

    fn apply_sections(&mut self, sections: Result<Vec<GenreSection>>) {
        match sections {
            Ok(sections) => self.sections = sections,
            Err(e) => {
                warn!(error = %e, "Genre section fetch failed");
                self.notice.post("Error fetching genre sections");
            }
        }
    }
}

#[async_trait::async_trait]
impl Activate for HomeScreen {
    /// Refresh the my-list id set when the screen regains focus, so a
    /// toggle made on the details screen shows up here immediately.
    async fn on_activate(&mut self) {
        match self.api.my_list_ids().await {
            Ok(mylist) => self.mylist = mylist,
            Err(e) => {
                warn!(error = %e, "My-list refresh failed");
                self.notice.post("Error updating mylist");
            }
        }
    }
}
