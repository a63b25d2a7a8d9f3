/// Transient UI selection state
///
/// Everything here lives for one browsing session and is never persisted:
/// the chosen source file, the required-tags set, the caption display
/// mode, and the current page number.
use std::collections::BTreeSet;

use crate::error::BrowserError;
use crate::state::index;
use crate::state::record::TagIndex;

/// The display policy controlling what text is shown under each thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionMode {
    /// The image's tags, joined with spaces
    #[default]
    Tags,
    /// The raw free-text caption
    Captions,
    /// The image identifier itself
    InscriptionId,
    /// No caption
    None,
}

impl CaptionMode {
    /// All modes, in the order they appear in the dropdown.
    pub const ALL: [CaptionMode; 4] = [
        CaptionMode::Tags,
        CaptionMode::Captions,
        CaptionMode::InscriptionId,
        CaptionMode::None,
    ];

    /// Caption text for one image under this mode, if any.
    ///
    /// Looks the image up in the index; an unknown identifier propagates
    /// the lookup failure.
    pub fn caption(
        &self,
        index: &TagIndex,
        id: &str,
    ) -> Result<Option<String>, BrowserError> {
        match self {
            CaptionMode::Tags => {
                let tags: Vec<&str> = index::tags_of(index, id)?
                    .iter()
                    .map(String::as_str)
                    .collect();
                Ok(Some(tags.join(" ")))
            }
            CaptionMode::Captions => Ok(Some(index::caption_of(index, id)?.to_string())),
            CaptionMode::InscriptionId => Ok(Some(id.to_string())),
            CaptionMode::None => Ok(Option::None),
        }
    }
}

impl std::fmt::Display for CaptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CaptionMode::Tags => "Tags",
            CaptionMode::Captions => "Captions",
            CaptionMode::InscriptionId => "InscriptionId",
            CaptionMode::None => "None",
        };
        write!(f, "{name}")
    }
}

/// The user's current selection in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Stem of the chosen tag source file
    pub source: Option<String>,
    /// Tags an image must carry to be shown
    pub required_tags: BTreeSet<String>,
    /// What text is shown under each thumbnail
    pub caption_mode: CaptionMode,
    /// Current page, 1-indexed
    pub page: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            source: None,
            required_tags: BTreeSet::new(),
            caption_mode: CaptionMode::default(),
            page: 1,
        }
    }
}

impl Selection {
    /// Add the tag to the required set, or remove it if already present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.required_tags.remove(tag) {
            self.required_tags.insert(tag.to_string());
        }
    }

    /// Switch to a new source. The tag set and page belong to the old
    /// index and are invalidated; the caption mode is kept.
    pub fn reset_for_source(&mut self, source: String) {
        self.source = Some(source);
        self.required_tags.clear();
        self.page = 1;
    }
}
