use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::selection::{CaptionMode, Selection};
use crate::Message;

/// Sidebar width in logical pixels
const SIDEBAR_WIDTH: f32 = 260.0;

/// Build the sidebar: source dropdown, tag multi-select, caption-mode
/// dropdown, and page controls.
pub fn sidebar<'a>(
    sources: &'a [String],
    all_tags: &'a [String],
    selection: &'a Selection,
    pages: usize,
    page_input: &'a str,
) -> Element<'a, Message> {
    let source_picker = pick_list(
        sources,
        selection.source.as_ref(),
        Message::SourceSelected,
    )
    .placeholder("no sources found")
    .width(Length::Fill);

    let mut tag_list = Column::new().spacing(4);
    for tag in all_tags {
        let checked = selection.required_tags.contains(tag);
        tag_list = tag_list.push(
            checkbox(tag.as_str(), checked).on_toggle(move |_| Message::TagToggled(tag.clone())),
        );
    }

    let caption_picker = pick_list(
        &CaptionMode::ALL[..],
        Some(selection.caption_mode),
        Message::CaptionModeSelected,
    )
    .width(Length::Fill);

    let page_controls = row![
        button(text("<").size(14)).on_press(Message::PreviousPage),
        iced::widget::text_input("1", page_input)
            .on_input(Message::PageInputChanged)
            .on_submit(Message::PageSubmitted)
            .width(50),
        text(format!("of {pages}")).size(14),
        button(text(">").size(14)).on_press(Message::NextPage),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content = column![
        text("Search").size(24),
        text("Caption Source").size(14),
        source_picker,
        text("Select Tags").size(14),
        scrollable(tag_list).height(Length::Fill),
        text("Caption Options").size(14),
        caption_picker,
        text("Page").size(14),
        page_controls,
        button("Choose Collection...").on_press(Message::ChooseCollection),
    ]
    .spacing(12)
    .padding(16)
    .width(SIDEBAR_WIDTH);

    container(content).height(Length::Fill).into()
}
