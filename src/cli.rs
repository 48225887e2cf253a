use std::{
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use log::info;
use once_cell::sync::Lazy;
use url::Url;

use crate::{
    codegen::{generate, TIMESTAMP_FORMAT},
    document::FontPage,
    extract::{extract_entries, Category, Entry},
    reporter::Reporter,
    source::HtmlSource,
    Error, Result,
};

pub static SYSTEM_FONTS_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://developer.apple.com/fonts/system-fonts/").unwrap());

#[derive(Debug, Parser)]
#[command(version, about = "A utility for extracting stuff from the web.")]
pub struct Opts {
    #[command(subcommand)]
    pub sub: Sub,
}

#[derive(Debug, Subcommand)]
pub enum Sub {
    #[command(
        name = "applesystemfonts",
        about = "Extract system fonts from https://developer.apple.com/fonts/system-fonts/."
    )]
    AppleSystemFonts(AppleSystemFonts),
}

#[derive(Debug, Args)]
pub struct Options {
    /// Print status updates while running.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AppleSystemFonts {
    #[command(flatten)]
    pub options: Options,
    /// Write the generated code to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Give up fetching the page after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
    /// Enter either ios or macos
    #[arg(value_enum)]
    pub ostype: Category,
}

impl Opts {
    pub fn verbose(&self) -> bool {
        match &self.sub {
            Sub::AppleSystemFonts(sub) => sub.options.verbose,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match &self.sub {
            Sub::AppleSystemFonts(sub) => sub.timeout.map(Duration::from_secs),
        }
    }

    /// [`Opts::run`] with the failing subcommand named in the error.
    pub async fn execute<S: HtmlSource>(
        &self,
        source: &S,
        reporter: &dyn Reporter,
    ) -> anyhow::Result<()> {
        self.run(source, reporter).await.with_context(|| match &self.sub {
            Sub::AppleSystemFonts(sub) => format!(
                "Failed to extract {}s from {}",
                sub.ostype, *SYSTEM_FONTS_URL
            ),
        })
    }

    pub async fn run<S: HtmlSource>(&self, source: &S, reporter: &dyn Reporter) -> Result<()> {
        let result = match &self.sub {
            Sub::AppleSystemFonts(sub) => sub.run(source, reporter).await,
        };
        match &result {
            Ok(()) => reporter.finish(&format!("Done: {}", Utc::now().format(TIMESTAMP_FORMAT))),
            Err(e) => reporter.fail(&e.to_string()),
        }
        result
    }
}

impl AppleSystemFonts {
    pub async fn run<S: HtmlSource>(&self, source: &S, reporter: &dyn Reporter) -> Result<()> {
        let output = self.render(source, reporter, Utc::now()).await?;
        self.emit(&output, &mut io::stdout().lock())
    }

    /// Fetches the listing page and generates the code for it.
    pub async fn render<S: HtmlSource>(
        &self,
        source: &S,
        reporter: &dyn Reporter,
        generated_at: DateTime<Utc>,
    ) -> Result<String> {
        let url = &*SYSTEM_FONTS_URL;
        reporter.stage(&format!("Visiting {url}"));
        let text = source.fetch(url).await?;

        reporter.stage("Parse...");
        let page = FontPage::parse(&text)?;

        reporter.stage("Processing...");
        let names = extract_entries(&page, self.ostype)
            .into_iter()
            .map(Entry::into_display_name)
            .collect_vec();
        Ok(generate(&names, self.ostype, url, generated_at))
    }

    /// Writes `output` to the file given by `--output`, or to `stdout` if there is none.
    pub fn emit(&self, output: &str, stdout: &mut impl Write) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs_err::write(path, output).map_err(|source| Error::Write {
                    target: path.display().to_string(),
                    source,
                })?;
                info!("Wrote {} bytes to {path:?}", output.len());
            }
            None => stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Write {
                    target: "stdout".to_owned(),
                    source,
                })?,
        }
        Ok(())
    }
}
