use adliye::application::ports::{FileLoader, FileLoaderError};
use adliye::domain::{ContentType, Document};
use adliye::infrastructure::text_processing::PdfAdapter;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object, Stream};

/// Builds a minimal single-font PDF with one page per entry; `None` produces
/// a page with an empty content stream.
fn pdf_bytes(page_texts: &[Option<&str>]) -> Vec<u8> {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in page_texts {
        let operations = match page_text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn pdf_document(data: &[u8]) -> Document {
    Document::new("karar.pdf".to_string(), ContentType::Pdf, data.len() as u64)
}

#[tokio::test]
async fn given_single_text_page_when_extracting_then_page_text_returned() {
    let data = pdf_bytes(&[Some("Esas No: 2023/145")]);
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &pdf_document(&data)).await;

    assert_eq!(result.unwrap(), "Esas No: 2023/145");
}

#[tokio::test]
async fn given_multiple_pages_when_extracting_then_pages_joined_in_order() {
    let data = pdf_bytes(&[Some("Birinci sayfa"), Some("Ikinci sayfa")]);
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &pdf_document(&data)).await;

    assert_eq!(result.unwrap(), "Birinci sayfa\nIkinci sayfa");
}

#[tokio::test]
async fn given_blank_middle_page_when_extracting_then_blank_page_omitted() {
    let data = pdf_bytes(&[Some("Birinci sayfa"), None, Some("Ucuncu sayfa")]);
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &pdf_document(&data)).await;

    assert_eq!(result.unwrap(), "Birinci sayfa\nUcuncu sayfa");
}

#[tokio::test]
async fn given_only_blank_pages_when_extracting_then_no_text_found() {
    let data = pdf_bytes(&[None, None]);
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &pdf_document(&data)).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_corrupt_pdf_bytes_when_extracting_then_extraction_failed() {
    let data = b"%PDF-9.9 garbage".to_vec();
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &pdf_document(&data)).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_same_bytes_when_extracting_twice_then_results_identical() {
    let data = pdf_bytes(&[Some("Ayni girdi"), Some("ayni cikti")]);
    let adapter = PdfAdapter::new();

    let first = adapter
        .extract_text(&data, &pdf_document(&data))
        .await
        .unwrap();
    let second = adapter
        .extract_text(&data, &pdf_document(&data))
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_udf_document_when_extracting_then_unsupported_content_type() {
    let data = pdf_bytes(&[Some("metin")]);
    let document = Document::new("karar.udf".to_string(), ContentType::Udf, data.len() as u64);
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
