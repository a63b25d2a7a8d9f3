use std::collections::HashMap;

use iced::widget::{container, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::record::TagIndex;
use crate::state::selection::CaptionMode;
use crate::{Message, ThumbnailState};

/// Images per grid row
pub const GRID_COLUMNS: usize = 4;

/// Display width of one thumbnail cell
const CELL_WIDTH: f32 = 190.0;

/// Build the thumbnail grid for one page of filtered ids, 4 per row.
pub fn grid<'a>(
    page_ids: &'a [String],
    index: &'a TagIndex,
    thumbnails: &'a HashMap<String, ThumbnailState>,
    caption_mode: CaptionMode,
) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(24);

    for chunk in page_ids.chunks(GRID_COLUMNS) {
        let mut grid_row = Row::new().spacing(24);
        for id in chunk {
            grid_row = grid_row.push(cell(id, index, thumbnails, caption_mode));
        }
        rows = rows.push(grid_row);
    }

    container(rows).width(Length::Fill).padding(16).into()
}

/// One grid cell: the thumbnail (or its load state) with an optional
/// caption underneath.
fn cell<'a>(
    id: &'a str,
    index: &'a TagIndex,
    thumbnails: &'a HashMap<String, ThumbnailState>,
    caption_mode: CaptionMode,
) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match thumbnails.get(id) {
        Some(ThumbnailState::Ready(handle)) => iced::widget::image(handle.clone())
            .width(CELL_WIDTH)
            .into(),
        Some(ThumbnailState::Failed(reason)) => text(reason.as_str()).size(12).into(),
        _ => text("Loading...").size(12).into(),
    };

    let mut cell = Column::new()
        .push(thumbnail)
        .width(CELL_WIDTH)
        .spacing(6)
        .align_x(Alignment::Center);

    match caption_mode.caption(index, id) {
        Ok(Some(caption)) => cell = cell.push(text(caption).size(12)),
        Ok(None) => {}
        // Only reachable if the source data is inconsistent
        Err(e) => cell = cell.push(text(e.to_string()).size(12)),
    }

    cell.into()
}
