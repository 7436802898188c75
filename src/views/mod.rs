/// View descriptions
///
/// Each page is rendered in two steps. This module turns application
/// state into plain data (text plus the action every button triggers),
/// and `ui` turns that data into iced widgets. Keeping the first step
/// free of iced lets the rendered text be checked in tests.

use crate::state::data::Cocktail;

/// Sentinel shown when the favorites list is empty
pub const NO_FAVORITES: &str = "No favorites added.";
/// Shown in place of content when a fetch fails
pub const FETCH_ERROR: &str = "Error fetching.";
/// Shown while the very first cocktail is on its way
pub const LOADING: &str = "Loading...";
/// Shown when a search matched nothing
pub const NO_RESULTS: &str = "No cocktails found.";
pub const SEARCH_PLACEHOLDER: &str = "Search cocktails...";

/// What a button does when pressed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NewCocktail,
    ShowDetails(String),
    AddFavorite(Cocktail),
    RemoveFavorite(String),
    BackHome,
}

/// A labelled button bound to an action
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

impl Button {
    fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

/// A cocktail summary: name, picture and buttons
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub thumbnail: String,
    pub buttons: Vec<Button>,
}

/// Full details of one cocktail
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub title: String,
    pub thumbnail: String,
    /// Label/value rows (category, tags, glass, instructions)
    pub facts: Vec<(&'static str, String)>,
    /// One "<measure> <ingredient>" line per ingredient
    pub ingredients: Vec<String>,
    pub buttons: Vec<Button>,
}

/// What the search results area shows
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Nothing submitted yet
    Idle,
    Cards(Vec<Card>),
    Message(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub query: String,
    pub results: SearchResults,
}

/// One fully described page
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home(Card),
    Search(SearchView),
    Details(DetailsView),
    /// The favorites cards, or a single sentinel line
    Favorites(Result<Vec<Card>, &'static str>),
    /// Plain text in place of content
    Message(&'static str),
}

pub fn home(cocktail: &Cocktail) -> View {
    View::Home(Card {
        title: cocktail.name.clone(),
        thumbnail: cocktail.thumbnail.clone(),
        buttons: vec![
            Button::new("New Cocktail", Action::NewCocktail),
            Button::new("See Details", Action::ShowDetails(cocktail.id.clone())),
            Button::new("Add to Favorites", Action::AddFavorite(cocktail.clone())),
        ],
    })
}

/// Search page; `results` is None until a search has resolved
pub fn search(query: &str, results: Option<&Result<Vec<Cocktail>, String>>) -> View {
    let results = match results {
        None => SearchResults::Idle,
        Some(Err(_)) => SearchResults::Message(FETCH_ERROR),
        Some(Ok(cocktails)) if cocktails.is_empty() => SearchResults::Message(NO_RESULTS),
        Some(Ok(cocktails)) => SearchResults::Cards(
            cocktails
                .iter()
                .map(|cocktail| Card {
                    title: cocktail.name.clone(),
                    thumbnail: cocktail.thumbnail.clone(),
                    buttons: vec![
                        Button::new("See Details", Action::ShowDetails(cocktail.id.clone())),
                        Button::new("Add to Favorites", Action::AddFavorite(cocktail.clone())),
                    ],
                })
                .collect(),
        ),
    };

    View::Search(SearchView {
        query: query.to_string(),
        results,
    })
}

pub fn details(cocktail: &Cocktail) -> View {
    View::Details(DetailsView {
        title: cocktail.name.clone(),
        thumbnail: cocktail.thumbnail.clone(),
        facts: vec![
            ("Category", cocktail.category.clone()),
            ("Tags", cocktail.tags_label()),
            ("Glass", cocktail.glass.clone()),
            ("Instructions", cocktail.instructions.clone()),
        ],
        ingredients: cocktail.ingredients.iter().map(|i| i.line()).collect(),
        buttons: vec![
            Button::new("Back to Home", Action::BackHome),
            Button::new("Add to Favorites", Action::AddFavorite(cocktail.clone())),
        ],
    })
}

pub fn favorites(favorites: &[Cocktail]) -> View {
    if favorites.is_empty() {
        return View::Favorites(Err(NO_FAVORITES));
    }

    View::Favorites(Ok(favorites
        .iter()
        .map(|cocktail| Card {
            title: cocktail.name.clone(),
            thumbnail: cocktail.thumbnail.clone(),
            buttons: vec![
                Button::new("See Details", Action::ShowDetails(cocktail.id.clone())),
                Button::new("Remove", Action::RemoveFavorite(cocktail.id.clone())),
            ],
        })
        .collect()))
}

impl View {
    /// Every distinct thumbnail URL the page shows, in display order
    pub fn thumbnails(&self) -> Vec<&str> {
        let urls: Vec<&str> = match self {
            View::Home(card) => vec![card.thumbnail.as_str()],
            View::Details(details) => vec![details.thumbnail.as_str()],
            View::Search(SearchView {
                results: SearchResults::Cards(cards),
                ..
            })
            | View::Favorites(Ok(cards)) => {
                cards.iter().map(|card| card.thumbnail.as_str()).collect()
            }
            _ => Vec::new(),
        };

        let mut distinct: Vec<&str> = Vec::with_capacity(urls.len());
        for url in urls {
            if !url.is_empty() && !distinct.contains(&url) {
                distinct.push(url);
            }
        }
        distinct
    }
}
