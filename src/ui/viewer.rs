use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, stack, text};
use iced::{ContentFit, Element, Length};

use crate::Message;

/// Neutral bitmap shown before the first fetch and after a failed one.
/// Generated at startup rather than shipped as an asset; the widget scales
/// it to the pane.
pub fn placeholder_handle() -> Handle {
    const WIDTH: u32 = 16;
    const HEIGHT: u32 = 12;

    let pixels: Vec<u8> = (0..WIDTH * HEIGHT)
        .flat_map(|_| [34u8, 37, 43, 255])
        .collect();

    Handle::from_rgba(WIDTH, HEIGHT, pixels)
}

/// The screenshot pane: the current shot (or the placeholder) scaled to fit,
/// with a floating save action when there is something to save.
pub fn view(handle: &Handle, can_save: bool) -> Element<'_, Message> {
    let picture = container(
        image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(10);

    if !can_save {
        return picture.into();
    }

    let save = container(
        button(text("Save as PNG").size(14))
            .padding(8)
            .on_press(Message::SavePressed),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(20);

    stack![picture, save].into()
}
