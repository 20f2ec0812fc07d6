use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use pretty_assertions::assert_eq;

use bookshelf::{
    errors::FetchError,
    repository::BookshelfRepository,
    types::{book::Book, view_state::ViewState},
    viewmodel::{BookshelfViewModel, MATCH_ALL_QUERY},
};

/// Test double for the repository seam: plays back a script of outcomes
/// (the last one repeats) and records the terms it was asked for.
struct CannedRepository {
    script: RefCell<VecDeque<Result<Vec<Book>, ()>>>,
    seen_terms: Rc<RefCell<Vec<String>>>,
}

impl CannedRepository {
    fn scripted(outcomes: Vec<Result<Vec<Book>, ()>>) -> (Self, Rc<RefCell<Vec<String>>>) {
        let seen_terms = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                script: RefCell::new(outcomes.into()),
                seen_terms: seen_terms.clone(),
            },
            seen_terms,
        )
    }

    fn succeeding(books: Vec<Book>) -> (Self, Rc<RefCell<Vec<String>>>) {
        Self::scripted(vec![Ok(books)])
    }

    fn failing() -> Self {
        Self::scripted(vec![Err(())]).0
    }

    fn next_outcome(&self) -> Result<Vec<Book>, ()> {
        let mut script = self.script.borrow_mut();
        if script.len() > 1 {
            script.pop_front().expect("script is non-empty")
        } else {
            script.front().expect("script is non-empty").clone()
        }
    }
}

impl BookshelfRepository for CannedRepository {
    async fn search_books(&self, term: &str) -> Result<Vec<Book>, FetchError> {
        self.seen_terms.borrow_mut().push(term.to_string());
        self.next_outcome()
            .map_err(|()| FetchError::new("wire snapped"))
    }

    async fn get_book(&self, id: &str) -> Result<Book, FetchError> {
        self.next_outcome()
            .map_err(|()| FetchError::new("wire snapped"))?
            .into_iter()
            .find(|book| book.id == id)
            .ok_or_else(|| FetchError::new("no such volume"))
    }
}

fn book(id: &str, authors: &[&str]) -> Book {
    Book {
        id: id.into(),
        title: format!("Book {id}"),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        ..Book::default()
    }
}

#[tokio::test]
async fn starts_loading_without_io() {
    let (repository, seen_terms) = CannedRepository::succeeding(vec![]);
    let viewmodel = BookshelfViewModel::new(repository);
    assert_eq!(viewmodel.state(), &ViewState::Loading);
    assert_eq!(viewmodel.authors(), Vec::<String>::new());
    assert_eq!(*seen_terms.borrow(), Vec::<String>::new());
}

#[tokio::test]
async fn successful_search_keeps_upstream_order() {
    let books = vec![
        book("1", &["Author A"]),
        book("2", &["Author B"]),
        book("3", &["Author A"]),
    ];
    let (repository, _) = CannedRepository::succeeding(books.clone());
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("jazz").await;

    assert_eq!(viewmodel.state(), &ViewState::Success(books));
}

#[tokio::test]
async fn empty_term_becomes_match_all_query() {
    let books = vec![book("1", &["Author A"]), book("2", &["Author B"])];
    let (repository, seen_terms) = CannedRepository::succeeding(books.clone());
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("").await;

    assert_eq!(*seen_terms.borrow(), vec![MATCH_ALL_QUERY.to_string()]);
    assert_eq!(viewmodel.state(), &ViewState::Success(books));
    assert_eq!(
        viewmodel.authors(),
        vec!["Author A".to_string(), "Author B".to_string()]
    );
}

#[tokio::test]
async fn non_empty_term_goes_through_untouched() {
    let (repository, seen_terms) = CannedRepository::succeeding(vec![]);
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("moby dick").await;

    assert_eq!(*seen_terms.borrow(), vec!["moby dick".to_string()]);
}

#[tokio::test]
async fn authors_concatenated_with_duplicates_kept() {
    let (repository, _) = CannedRepository::succeeding(vec![
        book("1", &["Author A", "Author B"]),
        book("2", &["Author A"]),
    ]);
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("anything").await;

    assert_eq!(
        viewmodel.authors(),
        vec![
            "Author A".to_string(),
            "Author B".to_string(),
            "Author A".to_string(),
        ]
    );
}

#[tokio::test]
async fn any_failure_collapses_into_error_state() {
    let mut viewmodel = BookshelfViewModel::new(CannedRepository::failing());

    viewmodel.search(" ").await;

    assert_eq!(viewmodel.state(), &ViewState::Error);
    assert_eq!(viewmodel.authors(), Vec::<String>::new());
    assert_eq!(viewmodel.lookup("1"), None);
}

#[tokio::test]
async fn lookup_hits_only_the_current_success_state() {
    let books = vec![book("1", &["Author A"]), book("2", &["Author B"])];
    let (repository, _) = CannedRepository::succeeding(books.clone());
    let mut viewmodel = BookshelfViewModel::new(repository);

    assert_eq!(viewmodel.lookup("1"), None, "nothing to hit while loading");

    viewmodel.search("").await;

    assert_eq!(viewmodel.lookup("2"), Some(&books[1]));
    assert_eq!(viewmodel.lookup("missing"), None);
}

#[tokio::test]
async fn empty_result_is_success_not_error() {
    let (repository, _) = CannedRepository::succeeding(vec![]);
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("no such book").await;

    assert_eq!(viewmodel.state(), &ViewState::Success(vec![]));
    assert_eq!(viewmodel.authors(), Vec::<String>::new());
}

#[tokio::test]
async fn controller_reenters_after_a_failure() {
    let books = vec![book("1", &["Author A"])];
    let (repository, _) = CannedRepository::scripted(vec![Err(()), Ok(books.clone())]);
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("first").await;
    assert_eq!(viewmodel.state(), &ViewState::Error);

    viewmodel.search("second").await;
    assert_eq!(viewmodel.state(), &ViewState::Success(books));
}

#[tokio::test]
async fn new_search_replaces_the_previous_success_wholesale() {
    let first = vec![book("1", &["Author A"])];
    let second = vec![book("2", &["Author B"]), book("3", &["Author C"])];
    let (repository, _) =
        CannedRepository::scripted(vec![Ok(first), Ok(second.clone())]);
    let mut viewmodel = BookshelfViewModel::new(repository);

    viewmodel.search("one").await;
    viewmodel.search("two").await;

    assert_eq!(viewmodel.state(), &ViewState::Success(second));
    assert_eq!(viewmodel.lookup("1"), None, "old results are gone");
}

#[tokio::test]
async fn repository_get_book_passes_through() {
    let books = vec![book("1", &["Author A"])];
    let (repository, _) = CannedRepository::succeeding(books.clone());

    assert_eq!(repository.get_book("1").await.unwrap(), books[0]);
    assert!(repository.get_book("404").await.is_err());
}
