use std::fmt::{Display, Write};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    config::{self, Styleable},
    traits::DisplayTerminal,
};

/// One catalog entry, flattened from the upstream volume record.
///
/// Everything except `id` is optional upstream and defaults to empty rather
/// than failing deserialization. `id` is the key used for `show`/`buy`/`open`
/// and for the in-memory lookup behind them.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id:             String,
    pub title:          String,
    pub subtitle:       Option<String>,
    pub description:    Option<String>,
    pub authors:        Vec<String>,
    pub publisher:      Option<String>,
    pub published_date: Option<String>,
    pub thumbnail_url:  Option<String>,
    pub canonical_link: Option<String>,
}

impl Book {
    /// Exact-match test against one author name, the predicate behind the
    /// author filter.
    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl DisplayTerminal for Book {
    fn fmt(&self, f: &mut String, config: &config::Config) -> Result<()> {
        write!(
            f,
            "{}",
            self.title.style(&config.output_title.style_content)
        )?;
        if !self.authors.is_empty() {
            write!(f, " {}", config.output_author.format_vec(&self.authors))?;
        }
        if config.display_ids {
            write!(f, " ({})", self.id.style(&config.output_hint.style_content))?;
        }
        Ok(())
    }
}
