use crate::{errors::FetchError, googlebooks::GoogleBooksClient, types::book::Book};

/// Seam between the view-state controller and the transport.
///
/// The controller is generic over this, so tests can drive it with a canned
/// implementation instead of the live API.
#[allow(async_fn_in_trait)]
pub trait BookshelfRepository {
    /// Every volume matching `term`, in upstream response order.
    async fn search_books(&self, term: &str) -> Result<Vec<Book>, FetchError>;

    /// One volume by its upstream id.
    async fn get_book(&self, id: &str) -> Result<Book, FetchError>;
}

/// Pass-through to the live volumes API. Adds no retry, caching or
/// transformation.
pub struct GoogleBooksRepository {
    client: GoogleBooksClient,
}

impl GoogleBooksRepository {
    pub fn new(client: GoogleBooksClient) -> Self {
        Self { client }
    }
}

impl BookshelfRepository for GoogleBooksRepository {
    async fn search_books(&self, term: &str) -> Result<Vec<Book>, FetchError> {
        self.client.search(term).await
    }

    async fn get_book(&self, id: &str) -> Result<Book, FetchError> {
        self.client.fetch_by_id(id).await
    }
}
