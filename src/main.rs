use iced::{Element, Task, Theme};
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod app;
mod config;
mod state;
mod ui;
mod views;

use api::CocktailDbClient;
use app::{App, Effect, Fetcher, Message};
use config::Config;
use state::favorites::StorageFavorites;
use state::storage::Storage;

/// Window shell around the application logic
struct CocktailLookup {
    app: App,
    /// Runs the network requests the app asks for
    fetcher: Fetcher,
}

impl CocktailLookup {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();

        // If this fails, we panic because the app cannot keep favorites without storage
        let storage = Storage::open(&config.storage_path())
            .expect("Failed to open favorites storage. Check permissions and disk space.");

        info!("🍹 Cocktail Lookup using {}", config.api_base);

        let client = CocktailDbClient::new(config.api_base.clone());
        let fetcher = Fetcher::new(Arc::new(client), config.thumbnail_size);
        let (app, effects) = App::new(Box::new(StorageFavorites::new(storage)));

        let shell = CocktailLookup { app, fetcher };
        let task = shell.run(effects);
        (shell, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.app.update(message);
        self.run(effects)
    }

    /// Turn effects into tasks; notices block like any modal dialog
    fn run(&self, effects: Vec<Effect>) -> Task<Message> {
        Task::batch(effects.into_iter().map(|effect| match effect {
            Effect::Fetch(request) => {
                Task::perform(self.fetcher.clone().run(request), |message| message)
            }
            Effect::Notice(notice) => {
                show_notice(&notice);
                Task::none()
            }
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::page(&self.app)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn show_notice(notice: &str) {
    MessageDialog::new()
        .set_title("Cocktail Lookup")
        .set_description(notice)
        .set_level(MessageLevel::Info)
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cocktail_lookup=info")),
        )
        .init();

    iced::application(
        "Cocktail Lookup",
        CocktailLookup::update,
        CocktailLookup::view,
    )
    .theme(CocktailLookup::theme)
    .centered()
    .run_with(CocktailLookup::new)
}
