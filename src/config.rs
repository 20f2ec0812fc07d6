use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{default_colors::*, googlebooks::DEFAULT_BASE_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

/// How one rendered field looks: the text around it plus the styles for each
/// piece of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub separator:         String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator:   StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    pub fn format_str(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        let content = content.to_string().style(&self.style_content);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec(&self, content: &[impl ToString + std::fmt::Display]) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let description = self.description.style(&self.style_description);
        let separator = self.separator.style(&self.style_separator);
        let mut s = format!("{prefix}{description} ");
        let mut i = content.iter().peekable();
        while let Some(x) = i.next() {
            s.push_str(&x.to_string().style(&self.style_content));
            if i.peek().is_some() {
                s.push_str(&separator);
            }
        }
        s.push_str(&suffix);
        s
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "".into(),
            suffix:            "".into(),
            description:       "".into(),
            separator:         ", ".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_separator:   StyleConfig::default(),
            style_content:     StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url:        String,
    pub purchase_search_url: String,
    pub contact_phone:       String,
    pub contact_email:       String,
    pub history_location:    PathBuf,
    pub grid_columns:        usize,
    pub display_ids:         bool,
    pub output_title:        OutputConfig,
    pub output_author:       OutputConfig,
    pub output_publisher:    OutputConfig,
    pub output_description:  OutputConfig,
    pub output_link:         OutputConfig,
    pub output_error:        OutputConfig,
    pub output_hint:         OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BOOKSHELF_"))
            .extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url:        DEFAULT_BASE_URL.into(),
            purchase_search_url: "https://www.amazon.com/s".into(),
            contact_phone:       "208-308-3838".into(),
            contact_email:       "katykahla@gmail.com".into(),
            history_location:    PathBuf::from("~/.local/share/bookshelf/history.txt"),
            grid_columns:        2,
            display_ids:         true,
            output_title:        OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_TITLE,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_author:       OutputConfig {
                description: "Authors:".into(),
                style_content: StyleConfig {
                    color: COLOR_AUTHOR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_publisher:    OutputConfig {
                description: "Published by".into(),
                style_content: StyleConfig {
                    color: COLOR_PUBLISHER,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_description:  OutputConfig::default(),
            output_link:         OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_LINK,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error:        OutputConfig {
                description: "Error:".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_hint:         OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}
