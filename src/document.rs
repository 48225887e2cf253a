use itertools::Itertools;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

/// The sub-elements of an entry candidate that the extraction reads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Region {
    PlatformInfo,
    DisplayName,
}

impl Region {
    fn selector(self) -> &'static Selector {
        match self {
            Region::PlatformInfo => selector!(".font-platform"),
            Region::DisplayName => selector!(".filter-font-name"),
        }
    }
}

pub trait CandidateElement {
    /// Whitespace-normalized text of the first matching region, or an empty string if the
    /// candidate has none.
    fn region_text(&self, region: Region) -> String;
}

pub trait EntryDocument {
    type Candidate<'a>: CandidateElement
    where
        Self: 'a;

    /// Entry candidates in document order.
    fn candidates(&self) -> Vec<Self::Candidate<'_>>;
}

/// A parsed copy of the system fonts listing page.
pub struct FontPage {
    html: Html,
}

impl FontPage {
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();
        if trimmed.is_empty() {
            return Err(Error::Parse("the body is empty".to_owned()));
        }
        if !trimmed.starts_with('<') {
            let head = trimmed.chars().take(32).collect::<String>();
            return Err(Error::Parse(format!("the body does not start with markup: {head:?}")));
        }
        let html = Html::parse_document(text);
        for error in &html.errors {
            debug!("Recovered from malformed markup: {error}");
        }
        Ok(Self { html })
    }
}

impl EntryDocument for FontPage {
    type Candidate<'a> = ElementRef<'a>
    where
        Self: 'a;

    fn candidates(&self) -> Vec<ElementRef<'_>> {
        self.html.select(selector!(".font-item")).collect()
    }
}

impl CandidateElement for ElementRef<'_> {
    fn region_text(&self, region: Region) -> String {
        self.select(region.selector())
            .next()
            .map(|element| {
                element
                    .text()
                    .collect::<String>()
                    .split_whitespace()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}
