use crate::fb2::util::TestFb2::{Example, ExampleZip};
use fb2reader::errors::{BinaryError, EbookError};
use fb2reader::fb2::binary::BinaryAttachment;
use fb2reader::{Fb2, Fb2Settings};
use wasm_bindgen_test::wasm_bindgen_test;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn with_cover(href: &str, binaries: &str) -> Fb2 {
    Fb2::from_bytes(
        format!(
            "<FictionBook xmlns:l=\"http://www.w3.org/1999/xlink\">\
               <description><title-info>\
                 <book-title>T</book-title>\
                 <coverpage><image l:href=\"{href}\"/></coverpage>\
               </title-info></description>\
               {binaries}\
             </FictionBook>"
        ),
        Fb2Settings::default(),
    )
    .unwrap()
}

#[test]
fn test_cover_image() {
    let fb2 = ExampleZip.open();
    let cover = fb2.cover_image().unwrap().unwrap();

    assert_eq!("cover.png", cover.name());
    assert_eq!("image/png", cover.content_type());
    assert_eq!(Some("png"), cover.extension());
    assert_eq!(70, cover.data().len());
    assert!(cover.data().starts_with(PNG_SIGNATURE));
    assert!(cover.is_cover());
}

#[test]
fn test_binaries() {
    let fb2 = Example.open();
    let ids: Vec<_> = fb2.binaries().filter_map(|binary| binary.id()).collect();

    assert_eq!(vec!["cover.png", "illustration.jpg"], ids);

    let illustration = fb2.binary("illustration.jpg").unwrap();
    assert_eq!(Some("image/jpeg"), illustration.content_type());
    assert_eq!(b"\xFF\xD8\xFF\xE0\x00\x10".as_slice(), illustration.decode().unwrap());

    let attachments = fb2.attachments().unwrap();
    let covers: Vec<_> = attachments
        .iter()
        .filter(|attachment| attachment.is_cover())
        .map(BinaryAttachment::name)
        .collect();
    assert_eq!(vec!["cover.png"], covers);
}

#[test]
#[wasm_bindgen_test]
fn test_cover_round_trip() {
    let fb2 = with_cover(
        "#cover.jpg",
        r#"<binary id="cover.jpg" content-type="image/jpeg">
             AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=
           </binary>"#,
    );
    let expected: Vec<u8> = (0..32).collect();

    assert_eq!(expected, fb2.cover_image().unwrap().unwrap().into_data());
}

#[test]
#[wasm_bindgen_test]
fn test_cover_missing_binary() {
    let fb2 = with_cover("#missing.jpg", r#"<binary id="cover.jpg">AAEC</binary>"#);
    let error = fb2.cover_image().unwrap_err();

    assert!(matches!(
        error,
        EbookError::Binary(BinaryError::NoBinaryFound(ref id)) if id == "missing.jpg"
    ));
    assert!(!error.is_invalid());
}

#[test]
#[wasm_bindgen_test]
fn test_cover_invalid_base64() {
    let fb2 = with_cover("#cover.jpg", r#"<binary id="cover.jpg">%%%%</binary>"#);

    assert!(matches!(
        fb2.cover_image(),
        Err(EbookError::Binary(BinaryError::InvalidBase64 { .. }))
    ));
    // Only an explicit request surfaces the error
    assert_eq!(1, fb2.binaries().count());
}

#[test]
#[wasm_bindgen_test]
fn test_cover_percent_encoded_reference() {
    let fb2 = with_cover(
        "#my%20cover.png",
        r#"<binary id="my cover.png" content-type="image/png">AAEC</binary>"#,
    );

    assert_eq!(Some("my cover.png"), fb2.metadata().cover_reference().as_deref());
    assert_eq!(b"\x00\x01\x02".as_slice(), fb2.cover_image().unwrap().unwrap().data());
}

#[test]
#[wasm_bindgen_test]
fn test_duplicate_ids_first_wins() {
    let fb2 = with_cover(
        "#c",
        r#"<binary id="c">AAEC</binary><binary id="c">AwQF</binary>"#,
    );

    assert_eq!(b"\x00\x01\x02".as_slice(), fb2.cover_image().unwrap().unwrap().data());
}
