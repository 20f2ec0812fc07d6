use pretty_assertions::assert_eq;

use bookshelf::{
    googlebooks_schema::volume::{Volume, Volumes},
    types::book::Book,
};

#[test]
fn full_volume_maps_onto_book() {
    let body = r#"{
        "id": "zyTCAlFPjgYC",
        "volumeInfo": {
            "title": "The Google Story",
            "subtitle": "Inside the Hottest Business",
            "description": "The definitive account.",
            "authors": ["David A. Vise", "Mark Malseed"],
            "publisher": "Random House Digital",
            "publishedDate": "2005-11-15",
            "imageLinks": {
                "thumbnail": "http://books.google.com/books/content?id=zyTCAlFPjgYC"
            },
            "canonicalVolumeLink": "https://books.google.com/books/about/The_Google_Story.html"
        }
    }"#;
    let volume: Volume = serde_json::from_str(body).unwrap();
    let book = Book::from(volume);
    assert_eq!(
        book,
        Book {
            id: "zyTCAlFPjgYC".into(),
            title: "The Google Story".into(),
            subtitle: Some("Inside the Hottest Business".into()),
            description: Some("The definitive account.".into()),
            authors: vec!["David A. Vise".into(), "Mark Malseed".into()],
            publisher: Some("Random House Digital".into()),
            published_date: Some("2005-11-15".into()),
            thumbnail_url: Some(
                "https://books.google.com/books/content?id=zyTCAlFPjgYC".into()
            ),
            canonical_link: Some(
                "https://books.google.com/books/about/The_Google_Story.html".into()
            ),
        }
    );
}

#[test]
fn unknown_fields_are_ignored_at_every_level() {
    let body = r#"{
        "kind": "books#volumes",
        "totalItems": 1,
        "items": [{
            "id": "1",
            "etag": "abc",
            "selfLink": "https://example.invalid",
            "volumeInfo": {
                "title": "One",
                "pageCount": 320,
                "categories": ["Fiction"],
                "imageLinks": {
                    "smallThumbnail": "http://example.invalid/s",
                    "thumbnail": "http://example.invalid/t"
                }
            },
            "saleInfo": {"country": "US"}
        }]
    }"#;
    let volumes: Volumes = serde_json::from_str(body).unwrap();
    assert_eq!(volumes.items.len(), 1);
    let book = Book::from(volumes.items[0].clone());
    assert_eq!(book.title, "One");
    assert_eq!(book.thumbnail_url, Some("https://example.invalid/t".into()));
}

#[test]
fn missing_optionals_default_instead_of_failing() {
    let volume: Volume = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
    let book = Book::from(volume);
    assert_eq!(
        book,
        Book {
            id: "bare".into(),
            ..Book::default()
        }
    );
    assert_eq!(book.authors, Vec::<String>::new());
}

#[test]
fn empty_search_body_means_no_items() {
    // The API drops `items` entirely when nothing matches.
    let volumes: Volumes = serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#)
        .unwrap();
    assert_eq!(volumes, Volumes { items: vec![] });
}

#[test]
fn https_thumbnails_are_left_alone() {
    let body = r#"{
        "id": "1",
        "volumeInfo": {
            "title": "One",
            "imageLinks": {"thumbnail": "https://already.secure/t"}
        }
    }"#;
    let volume: Volume = serde_json::from_str(body).unwrap();
    let book = Book::from(volume);
    assert_eq!(book.thumbnail_url, Some("https://already.secure/t".into()));
}

#[test]
fn volume_without_info_still_yields_a_book() {
    let volume: Volume = serde_json::from_str(r#"{"id": "1", "volumeInfo": null}"#).unwrap();
    let book = Book::from(volume);
    assert_eq!(book.id, "1");
    assert_eq!(book.title, "");
}
