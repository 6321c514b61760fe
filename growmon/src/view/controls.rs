//! Poller controls and status readout above the plot.

use std::time::Duration;

use iced::widget::{Column, button, column, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use growmon_common::SensorField;

use crate::message::Message;
use crate::poller::Poller;
use crate::view::formatting::{format_age, format_value};

/// Render the header: title, address input, start/stop, and status line.
pub fn controls_view<'a>(
    poller: &'a Poller,
    last_error: Option<&'a str>,
    last_update: Option<Duration>,
) -> Element<'a, Message> {
    let title = text("GrowMon").size(24);

    let running_indicator = if poller.is_running() {
        text("Polling").size(14).style(|_theme: &Theme| text::Style {
            color: Some(iced::Color::from_rgb(0.2, 0.8, 0.2)),
        })
    } else {
        text("Stopped").size(14).style(|_theme: &Theme| text::Style {
            color: Some(iced::Color::from_rgb(0.6, 0.6, 0.6)),
        })
    };

    let header = row![title, running_indicator]
        .spacing(15)
        .align_y(Alignment::Center);

    // Every edit feeds the poller directly; the next cycle reads it fresh.
    let address_label = text("Device address:").size(14);
    let address_input = text_input("http://10.0.1.3", poller.address())
        .on_input(Message::AddressChanged)
        .padding(8)
        .width(Length::Fixed(300.0));

    // Both buttons stay enabled; misuse is logged, not prevented.
    let start_button = button(text("Start").size(14))
        .on_press(Message::StartPoller)
        .style(iced::widget::button::primary);
    let stop_button = button(text("Stop").size(14))
        .on_press(Message::StopPoller)
        .style(iced::widget::button::secondary);

    let address_row = row![address_label, address_input, start_button, stop_button]
        .spacing(10)
        .align_y(Alignment::Center);

    let mut status = Column::new().spacing(4);
    status = status.push(render_last_reading(poller, last_update));

    if let Some(error) = last_error {
        let error_text =
            text(format!("Error: {}", error))
                .size(12)
                .style(|_theme: &Theme| text::Style {
                    color: Some(iced::Color::from_rgb(1.0, 0.3, 0.3)),
                });
        status = status.push(error_text);
    }

    column![header, address_row, status]
        .spacing(10)
        .padding(10)
        .into()
}

/// Render the most recent reading's values, or a waiting message.
fn render_last_reading<'a>(
    poller: &'a Poller,
    last_update: Option<Duration>,
) -> Element<'a, Message> {
    let Some(reading) = poller.last_response() else {
        return text("Waiting for data...")
            .size(12)
            .style(|_theme: &Theme| text::Style {
                color: Some(iced::Color::from_rgb(0.5, 0.5, 0.5)),
            })
            .into();
    };

    let values = SensorField::ALL
        .iter()
        .filter_map(|field| {
            reading
                .get(*field)
                .map(|value| format!("{} {}", field.label(), format_value(value)))
        })
        .collect::<Vec<_>>()
        .join("  ·  ");

    let mut line = row![text(values).size(12)].spacing(10);

    if let Some(age) = last_update {
        let age_text = text(format_age(age))
            .size(12)
            .style(|_theme: &Theme| text::Style {
                color: Some(iced::Color::from_rgb(0.5, 0.5, 0.5)),
            });
        line = line.push(age_text);
    }

    line.into()
}
