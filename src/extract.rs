use clap::ValueEnum;
use derive_more::Display;
use getset::Getters;
use log::{info, warn};

use crate::document::{CandidateElement, EntryDocument, Region};

/// Which platform's system fonts to keep.
///
/// The displayed form is the label the listing page uses for the platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Display)]
pub enum Category {
    #[value(name = "ios")]
    #[display("iOS system font")]
    Ios,
    #[value(name = "macos")]
    #[display("macOS system font")]
    Macos,
}

#[derive(Clone, PartialEq, Eq, Debug, Getters)]
#[getset(get = "pub")]
pub struct Entry {
    display_name: String,
    /// Text of the platform-info region, e.g. "iOS system font, macOS system font".
    platform_info: String,
}

impl Entry {
    pub fn is_for(&self, category: Category) -> bool {
        self.platform_info.contains(&category.to_string())
    }

    pub fn into_display_name(self) -> String {
        self.display_name
    }
}

/// Collects the entries of `document` that belong to `category`, in document order.
pub fn extract_entries<D: EntryDocument>(document: &D, category: Category) -> Vec<Entry> {
    let label = category.to_string();
    let candidates = document.candidates();
    let entries = candidates
        .iter()
        .map(|candidate| (candidate, candidate.region_text(Region::PlatformInfo)))
        .filter(|(_, platform_info)| platform_info.contains(&label))
        .map(|(candidate, platform_info)| {
            let display_name = candidate.region_text(Region::DisplayName);
            if display_name.is_empty() {
                warn!("Found an entry without a display name (platform: {platform_info:?})");
            }
            Entry {
                display_name,
                platform_info,
            }
        })
        .collect::<Vec<_>>();
    info!(
        "{} of {} candidates are {label}s",
        entries.len(),
        candidates.len()
    );
    entries
}
