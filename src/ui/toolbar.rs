use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::state::session::Phase;
use crate::Message;

/// Top bar: the fetch trigger plus the current source URL.
///
/// The trigger is disabled while a fetch is in flight. The URL is rendered as
/// a flat button; pressing it copies the URL to the clipboard.
pub fn view(phase: Phase, source_url: Option<&str>) -> Element<'_, Message> {
    let label = match phase {
        Phase::Idle => "Grab a random screenshot",
        Phase::Fetching => "Fetching...",
    };

    let trigger = button(text(label))
        .padding(10)
        .on_press_maybe((phase == Phase::Idle).then_some(Message::FetchPressed));

    let mut bar = row![trigger].spacing(20).align_y(Alignment::Center);

    if let Some(url) = source_url {
        bar = bar.push(
            button(text(url).size(14))
                .style(button::text)
                .on_press(Message::CopyUrl),
        );
    }

    bar.into()
}
