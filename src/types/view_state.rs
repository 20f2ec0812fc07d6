use crate::types::book::Book;

/// What the presentation layer renders from.
///
/// Exactly one variant is active at a time and every transition replaces the
/// whole value; nothing is patched in place.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Success(Vec<Book>),
    Error,
}

impl ViewState {
    /// The current result set, or `None` outside of `Success`.
    pub fn books(&self) -> Option<&[Book]> {
        match self {
            ViewState::Success(books) => Some(books),
            _ => None,
        }
    }
}
