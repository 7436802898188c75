/// Application logic
///
/// `App` owns the current page and the favorites store. `update` turns a
/// message into a list of effects (requests to run, notices to show);
/// `main.rs` runs those effects as iced tasks and dialogs. Requests are
/// executed by `Fetcher` against any `CocktailSource`.

use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::image::Handle;
use tracing::{debug, error, warn};

use crate::api::{CocktailSource, Thumbnail};
use crate::state::data::Cocktail;
use crate::state::favorites::{self, FavoritesStore, REMOVED_NOTICE};
use crate::views::{self, Action, View, FETCH_ERROR, LOADING};

pub const EMPTY_QUERY_NOTICE: &str = "Please fill in the field.";
pub const FAVORITES_FAILED_NOTICE: &str = "Could not update favorites.";

/// Top navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Home,
    Search,
    Favorites,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Home, Target::Search, Target::Favorites];

    pub fn label(self) -> &'static str {
        match self {
            Target::Home => "Home",
            Target::Search => "Search",
            Target::Favorites => "Favorites",
        }
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A top navigation link was clicked
    Navigate(Target),
    /// A button inside the page was pressed
    Act(Action),
    /// The search field changed
    QueryChanged(String),
    /// The search button was pressed (or Enter in the field)
    SubmitSearch,
    RandomLoaded(Result<Cocktail, String>),
    SearchLoaded(Result<Vec<Cocktail>, String>),
    DetailsLoaded(Result<Cocktail, String>),
    ThumbnailLoaded(String, Result<Thumbnail, String>),
}

/// A network call to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Random,
    Search(String),
    Lookup(String),
    Thumbnail(String),
}

/// Something `update` wants done outside the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(Request),
    /// Show a blocking notice
    Notice(String),
}

/// Which page is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Nothing to show yet
    Loading,
    Home(Cocktail),
    Search {
        query: String,
        /// None until a search resolves
        results: Option<Result<Vec<Cocktail>, String>>,
    },
    Details(Cocktail),
    Favorites(Vec<Cocktail>),
    /// A fetch failed; the page is replaced by a short message
    Failed,
}

/// Main application state
pub struct App {
    page: Page,
    favorites: Box<dyn FavoritesStore>,
    /// Thumbnails for the current page, by URL
    thumbnails: HashMap<String, Handle>,
}

impl App {
    /// Create the app; the caller should run the returned effects
    pub fn new(favorites: Box<dyn FavoritesStore>) -> (Self, Vec<Effect>) {
        let app = App {
            page: Page::Loading,
            favorites,
            thumbnails: HashMap::new(),
        };
        (app, vec![Effect::Fetch(Request::Random)])
    }

    #[cfg(test)]
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn thumbnail(&self, url: &str) -> Option<&Handle> {
        self.thumbnails.get(url)
    }

    /// Describe the current page
    pub fn view(&self) -> View {
        match &self.page {
            Page::Loading => View::Message(LOADING),
            Page::Home(cocktail) => views::home(cocktail),
            Page::Search { query, results } => views::search(query, results.as_ref()),
            Page::Details(cocktail) => views::details(cocktail),
            Page::Favorites(list) => views::favorites(list),
            Page::Failed => View::Message(FETCH_ERROR),
        }
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Navigate(Target::Home) | Message::Act(Action::NewCocktail | Action::BackHome) => {
                // Previous content stays up until the new cocktail arrives
                vec![Effect::Fetch(Request::Random)]
            }
            Message::Navigate(Target::Search) => {
                self.show(Page::Search {
                    query: String::new(),
                    results: None,
                })
            }
            Message::Navigate(Target::Favorites) => self.show_favorites(),
            Message::Act(Action::ShowDetails(id)) => vec![Effect::Fetch(Request::Lookup(id))],
            Message::Act(Action::AddFavorite(cocktail)) => {
                let notice = match favorites::add_favorite(self.favorites.as_mut(), &cocktail) {
                    Ok(outcome) => outcome.notice(&cocktail.name),
                    Err(e) => {
                        error!("❌ Could not add {} to favorites: {}", cocktail.id, e);
                        FAVORITES_FAILED_NOTICE.to_string()
                    }
                };
                vec![Effect::Notice(notice)]
            }
            Message::Act(Action::RemoveFavorite(id)) => {
                let notice = match favorites::remove_favorite(self.favorites.as_mut(), &id) {
                    Ok(()) => REMOVED_NOTICE.to_string(),
                    Err(e) => {
                        error!("❌ Could not remove {} from favorites: {}", id, e);
                        FAVORITES_FAILED_NOTICE.to_string()
                    }
                };

                let mut effects = vec![Effect::Notice(notice)];
                effects.extend(self.show_favorites());
                effects
            }
            Message::QueryChanged(value) => {
                if let Page::Search { query, .. } = &mut self.page {
                    *query = value;
                }
                Vec::new()
            }
            Message::SubmitSearch => {
                let Page::Search { query, .. } = &self.page else {
                    return Vec::new();
                };

                let query = query.trim();
                if query.is_empty() {
                    return vec![Effect::Notice(EMPTY_QUERY_NOTICE.to_string())];
                }

                vec![Effect::Fetch(Request::Search(query.to_string()))]
            }
            Message::RandomLoaded(result) => match result {
                Ok(cocktail) => self.show(Page::Home(cocktail)),
                Err(_) => self.show(Page::Failed),
            },
            Message::SearchLoaded(result) => {
                // Results only land on a search page that is still showing
                let Page::Search { query, .. } = &self.page else {
                    debug!("Dropping search results, search page is gone");
                    return Vec::new();
                };
                let query = query.clone();
                self.show(Page::Search {
                    query,
                    results: Some(result),
                })
            }
            Message::DetailsLoaded(result) => match result {
                Ok(cocktail) => self.show(Page::Details(cocktail)),
                Err(_) => self.show(Page::Failed),
            },
            Message::ThumbnailLoaded(url, result) => {
                if !self.view().thumbnails().contains(&url.as_str()) {
                    debug!("Dropping thumbnail {}, page no longer shows it", url);
                    return Vec::new();
                }

                match result {
                    Ok(thumb) => {
                        let handle = Handle::from_rgba(thumb.width, thumb.height, thumb.pixels);
                        self.thumbnails.insert(url, handle);
                    }
                    Err(e) => warn!("⚠️  Thumbnail {} unavailable: {}", url, e),
                }
                Vec::new()
            }
        }
    }

    fn show_favorites(&mut self) -> Vec<Effect> {
        match self.favorites.load() {
            Ok(list) => self.show(Page::Favorites(list)),
            Err(e) => {
                error!("❌ Could not read favorites: {}", e);
                self.show(Page::Favorites(Vec::new()))
            }
        }
    }

    /// Replace the page and request the thumbnails it needs
    fn show(&mut self, page: Page) -> Vec<Effect> {
        self.page = page;

        let view = self.view();
        let wanted = view.thumbnails();
        self.thumbnails.retain(|url, _| wanted.contains(&url.as_str()));

        wanted
            .into_iter()
            .filter(|url| !self.thumbnails.contains_key(*url))
            .map(|url| Effect::Fetch(Request::Thumbnail(url.to_string())))
            .collect()
    }
}

/// Runs requests against a cocktail source
#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn CocktailSource>,
    thumbnail_size: u32,
}

impl Fetcher {
    pub fn new(source: Arc<dyn CocktailSource>, thumbnail_size: u32) -> Self {
        Self {
            source,
            thumbnail_size,
        }
    }

    /// Perform one request and wrap the outcome in the message that reports it
    pub async fn run(self, request: Request) -> Message {
        match request {
            Request::Random => Message::RandomLoaded(
                self.source.random().await.map_err(|e| report("random cocktail", e)),
            ),
            Request::Search(query) => Message::SearchLoaded(
                self.source
                    .search(&query)
                    .await
                    .map_err(|e| report("search", e)),
            ),
            Request::Lookup(id) => Message::DetailsLoaded(
                self.source.lookup(&id).await.map_err(|e| report("lookup", e)),
            ),
            Request::Thumbnail(url) => {
                let result = self
                    .source
                    .thumbnail(&url, self.thumbnail_size)
                    .await
                    .map_err(|e| e.to_string());
                Message::ThumbnailLoaded(url, result)
            }
        }
    }
}

fn report(what: &str, e: crate::api::FetchError) -> String {
    error!("❌ Error fetching {}: {}", what, e);
    e.to_string()
}
