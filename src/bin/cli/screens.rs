use std::fmt::Write;

use anyhow::Result;

use bookshelf::{
    config::{Config, StyleConfig, Styleable},
    traits::DisplayTerminal,
    types::{book::Book, view_state::ViewState},
};

/// Column width of one card in the result grid, including the gap.
const CARD_WIDTH: usize = 42;

/// The presentation-local author filter: a view over the current result set,
/// recomputed on every render, never part of the controller's state.
pub fn apply_filter<'a>(books: &'a [Book], filter: Option<&str>) -> Vec<&'a Book> {
    match filter {
        Some(author) => books.iter().filter(|book| book.has_author(author)).collect(),
        None => books.iter().collect(),
    }
}

/// The main screen: a loading notice, the card grid, or the retry prompt,
/// depending on which state the controller is in.
pub fn list(state: &ViewState, filter: Option<&str>, config: &Config) -> Result<String> {
    let mut s = String::new();
    match state {
        ViewState::Loading => {
            writeln!(
                s,
                "{}",
                "Loading...".style(&config.output_hint.style_content)
            )?;
        }
        ViewState::Error => {
            writeln!(
                s,
                "{}",
                config.output_error.format_str("could not fetch books")
            )?;
            writeln!(
                s,
                "{}",
                "Run `retry` to try again.".style(&config.output_hint.style_content)
            )?;
        }
        ViewState::Success(books) => {
            let shown = apply_filter(books, filter);
            if let Some(author) = filter {
                writeln!(
                    s,
                    "{}",
                    config
                        .output_author
                        .format_str(format!("{author} (filtered, `clear` to reset)"))
                )?;
            }
            if shown.is_empty() {
                writeln!(
                    s,
                    "{}",
                    "No books to show.".style(&config.output_hint.style_content)
                )?;
            } else if config.grid_columns <= 1 {
                for book in &shown {
                    writeln!(s, "{}", book.fmt_to_string(config)?)?;
                }
            } else {
                write!(s, "{}", grid(&shown, config)?)?;
            }
            writeln!(
                s,
                "{}",
                format!("{} book(s)", shown.len()).style(&config.output_hint.style_content)
            )?;
        }
    }
    Ok(s)
}

fn grid(shown: &[&Book], config: &Config) -> Result<String> {
    let mut s = String::new();
    let mut index = 1;
    for row in shown.chunks(config.grid_columns) {
        let mut lines = vec![String::new(); 3];
        for book in row {
            for (line, cell) in lines.iter_mut().zip(card_lines(book, index, config)) {
                line.push_str(&cell);
            }
            index += 1;
        }
        for line in lines {
            writeln!(s, "{}", line.trim_end())?;
        }
        writeln!(s)?;
    }
    Ok(s)
}

/// One card of the result grid: numbered title, authors, publication line.
fn card_lines(book: &Book, index: usize, config: &Config) -> [String; 3] {
    let mut title = if book.title.is_empty() {
        "(untitled)".to_string()
    } else {
        book.title.clone()
    };
    if config.display_ids {
        title = format!("{title} ({})", book.id);
    }
    let mut published = book.publisher.clone().unwrap_or_default();
    if let Some(date) = &book.published_date {
        if published.is_empty() {
            published = date.clone();
        } else {
            published = format!("{published}, {date}");
        }
    }
    [
        cell(format!("{index}. {title}"), &config.output_title.style_content),
        cell(book.authors.join(", "), &config.output_author.style_content),
        cell(published, &config.output_publisher.style_content),
    ]
}

fn cell(label: String, style: &StyleConfig) -> String {
    let label: String = label.chars().take(CARD_WIDTH - 2).collect();
    let padding = CARD_WIDTH - label.chars().count();
    // Pad outside the styling so the escape codes do not skew the columns.
    format!("{}{}", label.style(style), " ".repeat(padding))
}

pub fn detail(book: &Book, config: &Config) -> Result<String> {
    let mut s = String::new();
    writeln!(
        s,
        "{}",
        config.output_title.format_str(if book.title.is_empty() {
            "(untitled)"
        } else {
            book.title.as_str()
        })
    )?;
    if let Some(subtitle) = &book.subtitle {
        writeln!(s, "{}", subtitle.style(&config.output_hint.style_content))?;
    }
    if !book.authors.is_empty() {
        writeln!(s, "{}", config.output_author.format_vec(&book.authors))?;
    }
    // The original card only mentions publication when both halves are known.
    if let (Some(publisher), Some(date)) = (&book.publisher, &book.published_date) {
        writeln!(
            s,
            "{} on {}",
            config.output_publisher.format_str(publisher),
            date.style(&config.output_publisher.style_content)
        )?;
    }
    if let Some(description) = &book.description {
        writeln!(s, "\n{}", config.output_description.format_str(description))?;
    }
    if let Some(thumbnail) = &book.thumbnail_url {
        writeln!(s, "\n{}", config.output_link.format_str(format!("Cover: {thumbnail}")))?;
    }
    if let Some(link) = &book.canonical_link {
        writeln!(s, "{}", config.output_link.format_str(format!("Catalog: {link}")))?;
    }
    writeln!(
        s,
        "{}",
        format!("`buy {}` opens a shop search for this title.", book.id)
            .style(&config.output_hint.style_content)
    )?;
    Ok(s)
}

/// The content of the author filter dialog: every author of every book in
/// the current results, duplicates and all.
pub fn authors(authors: &[String], config: &Config) -> Result<String> {
    let mut s = String::new();
    if authors.is_empty() {
        writeln!(
            s,
            "{}",
            "No authors in the current results.".style(&config.output_hint.style_content)
        )?;
        return Ok(s);
    }
    for author in authors {
        writeln!(s, "{}", author.style(&config.output_author.style_content))?;
    }
    writeln!(
        s,
        "{}",
        "`filter <author>` narrows the list down.".style(&config.output_hint.style_content)
    )?;
    Ok(s)
}

pub fn about(config: &Config) -> Result<String> {
    let mut s = String::new();
    writeln!(
        s,
        "{}",
        config
            .output_title
            .format_str(concat!("Bookshelf ", env!("CARGO_PKG_VERSION")))
    )?;
    writeln!(s, "This app helps you manage your book collection.\n")?;
    writeln!(s, "{}", config.output_link.format_str(format!("Phone: {}", config.contact_phone)))?;
    writeln!(s, "{}", config.output_link.format_str(format!("Email: {}", config.contact_email)))?;
    writeln!(
        s,
        "{}",
        "`contact phone` and `contact email` open your handlers."
            .style(&config.output_hint.style_content)
    )?;
    Ok(s)
}
