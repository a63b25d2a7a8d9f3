use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;

mod config;
mod error;
mod media;
mod query;
mod state;
mod ui;

use config::{AppConfig, RetrievalMode, RETRIEVAL_MODE};
use media::thumbnail::Thumbnail;
use query::{clamp_page, filter, page_count, paginate, PAGE_SIZE};
use state::index;
use state::record::{all_tags, TagIndex, TagRecord};
use state::selection::{CaptionMode, Selection};

/// Result of loading one tag source file
#[derive(Debug, Clone)]
pub struct IndexLoad {
    source: String,
    result: Result<TagIndex, String>,
}

/// Result of loading one grid thumbnail
#[derive(Debug, Clone)]
pub struct ThumbnailLoad {
    id: String,
    result: Result<Thumbnail, String>,
}

/// Display state of one grid cell
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Load task is in flight
    Loading,
    /// Decoded and ready to draw
    Ready(Handle),
    /// Load or decode failed; the reason is shown in the cell
    Failed(String),
}

/// Main application state
struct Browser {
    /// Persisted configuration (collection root)
    config: AppConfig,
    /// Stems of the available tag source files, sorted
    sources: Vec<String>,
    /// The currently loaded tag index, if any
    tag_index: Option<TagIndex>,
    /// Sorted union of all tags in the loaded index
    tags: Vec<String>,
    /// The user's sidebar selection
    selection: Selection,
    /// Ids matching the required tags, in index order
    filtered: Vec<String>,
    /// Thumbnail cache for the loaded index
    thumbnails: HashMap<String, ThumbnailState>,
    /// Raw contents of the page text input
    page_input: String,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a tag source in the dropdown
    SourceSelected(String),
    /// Background index load completed
    IndexLoaded(IndexLoad),
    /// User toggled a tag in the multi-select
    TagToggled(String),
    /// User picked a caption mode
    CaptionModeSelected(CaptionMode),
    /// User clicked the previous-page button
    PreviousPage,
    /// User clicked the next-page button
    NextPage,
    /// User edited the page number field
    PageInputChanged(String),
    /// User submitted the page number field
    PageSubmitted,
    /// Background thumbnail load completed
    ThumbnailLoaded(ThumbnailLoad),
    /// User clicked the "Choose Collection" button
    ChooseCollection,
}

impl Browser {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();

        let mut browser = Browser {
            config,
            sources: Vec::new(),
            tag_index: None,
            tags: Vec::new(),
            selection: Selection::default(),
            filtered: Vec::new(),
            thumbnails: HashMap::new(),
            page_input: String::from("1"),
            status: String::new(),
        };

        let task = browser.rescan_sources();
        (browser, task)
    }

    /// Re-list the tag directory and load the default source, if any.
    fn rescan_sources(&mut self) -> Task<Message> {
        // Whatever was loaded belongs to the previous collection
        self.tag_index = None;
        self.tags.clear();
        self.filtered.clear();
        self.thumbnails.clear();
        self.selection.source = None;
        self.selection.required_tags.clear();
        self.selection.page = 1;
        self.page_input = String::from("1");

        let tag_dir = self.config.tag_dir();

        match index::discover_sources(&tag_dir) {
            Ok(sources) => {
                self.sources = sources;

                match self.sources.first().cloned() {
                    Some(first) => self.select_source(first),
                    None => {
                        self.status =
                            format!("No tag sources found in {}", tag_dir.display());
                        Task::none()
                    }
                }
            }
            Err(e) => {
                log::warn!("cannot list {}: {}", tag_dir.display(), e);
                self.sources.clear();
                self.status = format!("Cannot read {}: {}", tag_dir.display(), e);
                Task::none()
            }
        }
    }

    /// Switch to a source and kick off its index load.
    fn select_source(&mut self, source: String) -> Task<Message> {
        self.selection.reset_for_source(source.clone());
        self.tag_index = None;
        self.tags.clear();
        self.filtered.clear();
        self.thumbnails.clear();
        self.page_input = String::from("1");
        self.status = format!("Loading {source}...");

        let path = index::source_path(&self.config.tag_dir(), &source);
        Task::perform(load_index_task(source, path), Message::IndexLoaded)
    }

    /// Recompute the filtered id list after any selection change, clamp
    /// the page, and start loads for the newly visible thumbnails.
    fn refresh(&mut self) -> Task<Message> {
        let Some(tag_index) = &self.tag_index else {
            self.filtered.clear();
            return Task::none();
        };

        self.filtered = filter(tag_index, &self.selection.required_tags);
        self.selection.page = clamp_page(self.selection.page, self.filtered.len(), PAGE_SIZE);
        self.page_input = self.selection.page.to_string();

        if self.selection.required_tags.is_empty() {
            self.status = String::from("Please select one or more tags to display images.");
        } else if self.filtered.is_empty() {
            self.status = String::from("No images found with the selected tags.");
        } else {
            self.status = format!(
                "There are {} images out of {} with the selected tag(s)",
                self.filtered.len(),
                tag_index.len()
            );
        }

        self.load_visible_thumbnails()
    }

    /// Start load tasks for every image on the current page that is not
    /// already cached or in flight.
    fn load_visible_thumbnails(&mut self) -> Task<Message> {
        let Some(tag_index) = &self.tag_index else {
            return Task::none();
        };

        let image_dir = self.config.image_dir();
        let page_ids = paginate(&self.filtered, self.selection.page, PAGE_SIZE);

        let mut tasks = Vec::new();
        for id in page_ids {
            if self.thumbnails.contains_key(id) {
                continue;
            }
            let Some(record) = tag_index.get(id) else {
                continue;
            };

            self.thumbnails
                .insert(id.clone(), ThumbnailState::Loading);
            tasks.push(Task::perform(
                load_thumbnail_task(
                    RETRIEVAL_MODE,
                    image_dir.clone(),
                    id.clone(),
                    record.clone(),
                ),
                Message::ThumbnailLoaded,
            ));
        }

        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SourceSelected(source) => {
                if self.selection.source.as_deref() == Some(source.as_str()) {
                    return Task::none();
                }
                self.select_source(source)
            }

            Message::IndexLoaded(load) => {
                // A stale load can arrive after the user switched again
                if self.selection.source.as_deref() != Some(load.source.as_str()) {
                    return Task::none();
                }

                match load.result {
                    Ok(tag_index) => {
                        self.tags = all_tags(&tag_index);
                        self.tag_index = Some(tag_index);
                        self.refresh()
                    }
                    Err(e) => {
                        log::error!("failed to load {}: {}", load.source, e);
                        self.tag_index = None;
                        self.tags.clear();
                        self.filtered.clear();
                        self.status = format!("Failed to load {}: {}", load.source, e);
                        Task::none()
                    }
                }
            }

            Message::TagToggled(tag) => {
                self.selection.toggle_tag(&tag);
                self.selection.page = 1;
                self.refresh()
            }

            Message::CaptionModeSelected(mode) => {
                self.selection.caption_mode = mode;
                Task::none()
            }

            Message::PreviousPage => {
                self.selection.page = clamp_page(
                    self.selection.page.saturating_sub(1),
                    self.filtered.len(),
                    PAGE_SIZE,
                );
                self.page_input = self.selection.page.to_string();
                self.load_visible_thumbnails()
            }

            Message::NextPage => {
                self.selection.page = clamp_page(
                    self.selection.page + 1,
                    self.filtered.len(),
                    PAGE_SIZE,
                );
                self.page_input = self.selection.page.to_string();
                self.load_visible_thumbnails()
            }

            Message::PageInputChanged(value) => {
                self.page_input = value;
                Task::none()
            }

            Message::PageSubmitted => {
                let requested = self.page_input.trim().parse::<usize>().unwrap_or(1);
                self.selection.page =
                    clamp_page(requested, self.filtered.len(), PAGE_SIZE);
                self.page_input = self.selection.page.to_string();
                self.load_visible_thumbnails()
            }

            Message::ThumbnailLoaded(load) => {
                // Drop results that belong to a source we already left
                if !self.thumbnails.contains_key(&load.id) {
                    return Task::none();
                }

                let state = match load.result {
                    Ok(thumbnail) => ThumbnailState::Ready(Handle::from_rgba(
                        thumbnail.width,
                        thumbnail.height,
                        thumbnail.pixels,
                    )),
                    Err(e) => {
                        log::warn!("thumbnail {} failed: {}", load.id, e);
                        ThumbnailState::Failed(String::from("failed to load"))
                    }
                };
                self.thumbnails.insert(load.id, state);
                Task::none()
            }

            Message::ChooseCollection => {
                let folder = FileDialog::new()
                    .set_title("Select Collection Folder")
                    .pick_folder();

                let Some(root) = folder else {
                    return Task::none();
                };

                self.config.collection_root = root;
                if let Err(e) = self.config.save() {
                    log::warn!("could not save config: {e}");
                }

                self.rescan_sources()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let pages = page_count(self.filtered.len(), PAGE_SIZE);
        let sidebar = ui::sidebar::sidebar(
            &self.sources,
            &self.tags,
            &self.selection,
            pages,
            &self.page_input,
        );

        let page_ids = paginate(&self.filtered, self.selection.page, PAGE_SIZE);

        let main_area: Element<'_, Message> = match &self.tag_index {
            Some(tag_index) if !page_ids.is_empty() => {
                let grid = ui::grid::grid(
                    page_ids,
                    tag_index,
                    &self.thumbnails,
                    self.selection.caption_mode,
                );
                column![
                    text(&self.status).size(14),
                    scrollable(grid).height(Length::Fill),
                ]
                .spacing(12)
                .into()
            }
            _ => container(text(&self.status).size(16))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let content = column![
            text("Inscription Indexing").size(32),
            row![sidebar, main_area].spacing(8).height(Length::Fill),
        ]
        .spacing(16)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Inscription Indexing", Browser::update, Browser::view)
        .theme(Browser::theme)
        .centered()
        .run_with(Browser::new)
}

/// Async load of one tag source file.
async fn load_index_task(source: String, path: PathBuf) -> IndexLoad {
    let result = index::load_index(path).await.map_err(|e| e.to_string());
    IndexLoad { source, result }
}

/// Async fetch-and-decode of one grid thumbnail.
async fn load_thumbnail_task(
    mode: RetrievalMode,
    image_dir: PathBuf,
    id: String,
    record: TagRecord,
) -> ThumbnailLoad {
    let result = media::loader::load_thumbnail(mode, image_dir, id.clone(), record)
        .await
        .map_err(|e| e.to_string());
    ThumbnailLoad { id, result }
}
