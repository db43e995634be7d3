use crate::fb2::util::TestFb2::{Example, ExampleZip, Minimal};
use fb2reader::fb2::metadata::{IdentifierKind, Person};
use wasm_bindgen_test::wasm_bindgen_test;

#[test]
fn test_title_and_language() {
    let fb2 = Example.open();
    let metadata = fb2.metadata();

    assert_eq!("The Example Book", metadata.title());
    assert_eq!(Some("en"), metadata.language().as_deref());
    assert_eq!(Some("ru"), metadata.source_language().as_deref());
    assert_eq!(Some("2024-05-01"), metadata.date().as_deref());
}

#[test]
fn test_persons() {
    let fb2 = Example.open();
    let metadata = fb2.metadata();

    let authors = metadata.authors();
    let names: Vec<_> = authors.iter().map(Person::full_name).collect();
    // The third `author` has only an email and is skipped
    assert_eq!(vec!["Jane Q. Doe", "jroe"], names);
    assert!(names.iter().all(|name| !name.is_empty()));

    let jane = &authors[0];
    assert_eq!(Some("Jane"), jane.first_name());
    assert_eq!(Some("Q."), jane.middle_name());
    assert_eq!(Some("Doe"), jane.last_name());
    assert_eq!(None, jane.nickname());
    assert_eq!("Jane Q. Doe", jane.to_string());

    // `document-info/author` is not a book author
    assert!(!names.contains(&"converter"));

    let translators = metadata.translators();
    assert_eq!(1, translators.len());
    assert_eq!("Ivan Petrov", translators[0].full_name());
}

#[test]
fn test_series_and_tags() {
    let fb2 = ExampleZip.open();
    let metadata = fb2.metadata();

    let series = metadata.series().unwrap();
    assert_eq!("Examples", series.name());
    assert_eq!(Some(2), series.index());
    assert_eq!("Examples #2", series.to_string());

    assert_eq!(vec!["sf", "sf_fantasy", "sf"], metadata.tags());
    assert_eq!(vec!["example", "testing", "fb2"], metadata.keywords());
}

#[test]
fn test_identifiers() {
    let fb2 = Example.open();
    let metadata = fb2.metadata();

    let isbn = metadata.isbn().unwrap();
    assert_eq!("978-0-00-000000-2", isbn.value());
    assert_eq!(IdentifierKind::Isbn, isbn.kind());

    let identifier = metadata.identifier().unwrap();
    assert_eq!("example-fb2-0001", identifier.value());
    assert_eq!(IdentifierKind::Document, identifier.kind());
}

#[test]
fn test_description_and_publish_info() {
    let fb2 = Example.open();
    let metadata = fb2.metadata();

    assert_eq!(
        Some("A short book used for testing.\nIt has two paragraphs."),
        metadata.description().as_deref(),
    );

    let publish_info = metadata.publish_info().unwrap();
    assert_eq!(Some("The Example Book (Print)"), publish_info.book_name.as_deref());
    assert_eq!(Some("Example Press"), publish_info.publisher.as_deref());
    assert_eq!(Some("Springfield"), publish_info.city.as_deref());
    assert_eq!(Some("2024"), publish_info.year.as_deref());
    assert_eq!(Some("978-0-00-000000-2"), publish_info.isbn.as_deref());
}

#[test]
fn test_minimal_metadata() {
    let fb2 = Minimal.open();
    let metadata = fb2.metadata();

    assert_eq!("Minimal", metadata.title());
    assert!(metadata.authors().is_empty());
    assert!(metadata.translators().is_empty());
    assert!(metadata.tags().is_empty());
    assert!(metadata.series().is_none());
    assert!(metadata.description().is_none());
    assert!(metadata.publish_info().is_none());
    assert!(metadata.cover_reference().is_none());
}

#[test]
#[wasm_bindgen_test]
fn test_series_non_numeric_index() {
    let fb2 = fb2reader::Fb2::from_bytes(
        br#"<FictionBook><description><title-info>
              <book-title>T</book-title>
              <sequence name="Saga" number="3a"/>
            </title-info></description></FictionBook>"#,
        fb2reader::Fb2Settings::default(),
    )
    .unwrap();
    let series = fb2.metadata().series().unwrap();

    assert_eq!("Saga", series.name());
    assert_eq!(None, series.index());
}

#[test]
#[wasm_bindgen_test]
fn test_person_full_name() {
    let fb2 = fb2reader::Fb2::from_bytes(
        b"<FictionBook><description><title-info>\
            <book-title>T</book-title>\
            <author><first-name>Jane</first-name><last-name>Doe</last-name></author>\
          </title-info></description></FictionBook>",
        fb2reader::Fb2Settings::default(),
    )
    .unwrap();
    let authors = fb2.metadata().authors();

    assert_eq!(1, authors.len());
    assert_eq!("Jane Doe", authors[0].full_name());
}
