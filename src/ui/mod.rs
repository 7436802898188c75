/// Widget rendering for view descriptions
pub mod card;

use iced::widget::{button, column, container, scrollable, text, text_input, Row, Space};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::app::{App, Message, Target};
use crate::views::{Card, SearchResults, View, SEARCH_PLACEHOLDER};

/// Top navigation bar
fn nav<'a>() -> Element<'a, Message> {
    let links: Row<'a, Message> = Row::with_children(Target::ALL.into_iter().map(|target| {
        button(text(target.label()).size(16))
            .on_press(Message::Navigate(target))
            .padding(10)
            .style(button::text)
            .into()
    }))
    .spacing(12)
    .align_y(Alignment::Center);

    let bar: Row<'a, Message> = Row::new()
        .push(text("Cocktail Lookup").size(28))
        .push(links)
        .spacing(32)
        .align_y(Alignment::Center);

    container(bar).padding(16).width(Length::Fill).into()
}

/// Gap between cards, both across and between lines
const GRID_GAP: f32 = 16.0;

/// Lay out cards in a wrapping grid
fn grid<'a>(app: &App, cards: Vec<Card>) -> Element<'a, Message> {
    let elements: Vec<Element<'a, Message>> = cards
        .into_iter()
        .map(|c| {
            let thumbnail = app.thumbnail(&c.thumbnail).cloned();
            card::card(c, thumbnail)
        })
        .collect();

    Wrap::with_elements(elements)
        .spacing(Pixels(GRID_GAP))
        .line_spacing(Pixels(GRID_GAP))
        .into()
}

fn message<'a>(line: &'static str) -> Element<'a, Message> {
    text(line).size(18).into()
}

/// The content region for the current page
fn content<'a>(app: &App) -> Element<'a, Message> {
    match app.view() {
        View::Home(c) => {
            let thumbnail = app.thumbnail(&c.thumbnail).cloned();
            card::card(c, thumbnail)
        }
        View::Details(details) => {
            let thumbnail = app.thumbnail(&details.thumbnail).cloned();
            card::details(details, thumbnail)
        }
        View::Favorites(Ok(cards)) => grid(app, cards),
        View::Favorites(Err(line)) | View::Message(line) => message(line),
        View::Search(search) => {
            let form: Row<'a, Message> = Row::new()
                .push(
                    text_input(SEARCH_PLACEHOLDER, &search.query)
                        .on_input(Message::QueryChanged)
                        .on_submit(Message::SubmitSearch)
                        .padding(10)
                        .width(Length::Fixed(360.0)),
                )
                .push(button("Search").on_press(Message::SubmitSearch).padding(10))
                .spacing(8);

            let results: Element<'a, Message> = match search.results {
                SearchResults::Idle => Space::new(Length::Shrink, Length::Shrink).into(),
                SearchResults::Cards(cards) => grid(app, cards),
                SearchResults::Message(line) => message(line),
            };

            column![form, results].spacing(24).into()
        }
    }
}

/// Build the whole window
pub fn page<'a>(app: &App) -> Element<'a, Message> {
    let body = container(content(app))
        .padding(24)
        .center_x(Length::Fill);

    column![nav(), scrollable(body).height(Length::Fill)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
