/// Cocktail cards and the details panel
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::views::{Button, Card, DetailsView};

/// Width of a card in the grid
const CARD_WIDTH: f32 = 280.0;
/// Displayed size of a card thumbnail
const CARD_IMAGE: f32 = 220.0;
/// Displayed size of the details image
const DETAILS_IMAGE: f32 = 320.0;

/// Render a row of bound buttons
pub fn buttons<'a>(buttons: Vec<Button>) -> Element<'a, Message> {
    let row: Row<'a, Message> = Row::with_children(buttons.into_iter().map(|b| {
        button(text(b.label).size(14))
            .on_press(Message::Act(b.action))
            .padding(8)
            .into()
    }))
    .spacing(8);

    row.into()
}

fn picture<'a>(thumbnail: Option<Handle>, size: f32) -> Option<Element<'a, Message>> {
    thumbnail.map(|handle| {
        Image::new(handle)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    })
}

/// A card: title, optional picture, buttons
pub fn card<'a>(card: Card, thumbnail: Option<Handle>) -> Element<'a, Message> {
    let content: Column<'a, Message> = Column::new()
        .push(text(card.title).size(22))
        .push_maybe(picture(thumbnail, CARD_IMAGE))
        .push(buttons(card.buttons))
        .spacing(12)
        .align_x(Alignment::Center);

    container(content)
        .padding(16)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

/// The full details panel
pub fn details<'a>(details: DetailsView, thumbnail: Option<Handle>) -> Element<'a, Message> {
    let facts: Column<'a, Message> = Column::with_children(
        details
            .facts
            .into_iter()
            .map(|(label, value)| text(format!("{}: {}", label, value)).size(16).into()),
    )
    .spacing(6);

    let ingredients: Column<'a, Message> = Column::with_children(
        details
            .ingredients
            .into_iter()
            .map(|line| text(format!("• {}", line)).size(16).into()),
    )
    .spacing(4);

    let content: Column<'a, Message> = Column::new()
        .push(text(details.title).size(32))
        .push_maybe(picture(thumbnail, DETAILS_IMAGE))
        .push(facts)
        .push(text("Ingredients").size(20))
        .push(ingredients)
        .push(buttons(details.buttons))
        .spacing(14)
        .max_width(720.0);

    container(content)
        .padding(24)
        .style(container::rounded_box)
        .into()
}
