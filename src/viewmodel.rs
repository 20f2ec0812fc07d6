use tracing::warn;

use crate::{
    repository::BookshelfRepository,
    types::{book::Book, view_state::ViewState},
};

/// Sent upstream in place of an empty query so the API answers with its
/// default shelf instead of rejecting the request.
pub const MATCH_ALL_QUERY: &str = " ";

/// The view-state controller behind the interactive screens.
///
/// Owns the single [`ViewState`] cell. Only this type writes it; the
/// presentation layer re-reads it after every completed operation. A search
/// superseded by a newer one is not cancelled — whichever completes last
/// wins the cell.
pub struct BookshelfViewModel<R> {
    repository: R,
    state:      ViewState,
}

impl<R: BookshelfRepository> BookshelfViewModel<R> {
    /// A fresh controller in the `Loading` state. Performs no I/O.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: ViewState::Loading,
        }
    }

    /// Run a catalog search and replace the view state with the outcome.
    ///
    /// An empty `term` becomes [`MATCH_ALL_QUERY`]. Every failure collapses
    /// into [`ViewState::Error`]: the cause is logged here and dropped, and
    /// nothing retries on its own.
    pub async fn search(&mut self, term: &str) {
        let term = if term.is_empty() { MATCH_ALL_QUERY } else { term };
        self.state = ViewState::Loading;
        self.state = match self.repository.search_books(term).await {
            Ok(books) => ViewState::Success(books),
            Err(err) => {
                warn!("search for {term:?} failed: {err}");
                ViewState::Error
            }
        };
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Every author of every book in the current `Success` state, in
    /// upstream order with duplicates kept. Empty while loading or after a
    /// failure.
    pub fn authors(&self) -> Vec<String> {
        match &self.state {
            ViewState::Success(books) => books
                .iter()
                .flat_map(|book| book.authors.iter().cloned())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The book carrying `id` in the current `Success` state, if any. Never
    /// touches the network.
    pub fn lookup(&self, id: &str) -> Option<&Book> {
        match &self.state {
            ViewState::Success(books) => books.iter().find(|book| book.id == id),
            _ => None,
        }
    }
}
