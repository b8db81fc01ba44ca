use std::io::{Cursor, Write};
use std::sync::Arc;

use adliye::application::ports::FileLoader;
use adliye::application::services::DocumentService;
use adliye::domain::{ContentType, DocumentText};
use adliye::infrastructure::text_processing::{
    CompositeFileLoader, MockFileLoader, PdfAdapter, UdfAdapter,
};

fn udf_archive(content_xml: &str) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("content.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

fn document_service() -> DocumentService<CompositeFileLoader> {
    let loader = CompositeFileLoader::new(vec![
        (
            ContentType::Udf,
            Arc::new(UdfAdapter::new()) as Arc<dyn FileLoader>,
        ),
        (
            ContentType::Pdf,
            Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
        ),
    ]);
    DocumentService::new(Arc::new(loader))
}

#[tokio::test]
async fn given_udf_upload_when_loading_then_text_extracted() {
    let data = udf_archive("<content><p>Esas No: 2023/145</p></content>");
    let service = document_service();

    let result = service.load(&data, "dosya.udf").await;

    assert_eq!(
        result,
        DocumentText::Extracted {
            content: "Esas No: 2023/145".to_string()
        }
    );
}

#[tokio::test]
async fn given_uppercase_extension_when_loading_then_dispatch_is_case_insensitive() {
    let data = udf_archive("<content><p>Karar metni</p></content>");
    let service = document_service();

    let result = service.load(&data, "DOSYA.UDF").await;

    assert!(result.is_extracted());
}

#[tokio::test]
async fn given_unrecognized_extension_when_loading_then_failed() {
    let service = document_service();

    let result = service.load(b"irrelevant", "notlar.docx").await;

    match result {
        DocumentText::Failed { diagnostic } => {
            assert!(diagnostic.contains("unrecognized file extension"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn given_corrupt_pdf_when_loading_then_failed_with_parser_diagnostic() {
    let service = document_service();

    let result = service.load(b"%PDF nonsense", "karar.pdf").await;

    match result {
        DocumentText::Failed { diagnostic } => {
            assert!(diagnostic.contains("failed to parse PDF"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn given_whitespace_only_extraction_when_loading_then_empty_not_extracted() {
    // The mock loader passes bytes through, so a whitespace payload exercises
    // the service-level guard on the Extracted invariant.
    let service = DocumentService::new(Arc::new(MockFileLoader));

    let result = service.load(b"   \n\t  ", "bos.pdf").await;

    match result {
        DocumentText::Empty { diagnostic } => {
            assert!(diagnostic.contains("no extractable text"));
        }
        other => panic!("expected Empty, got {:?}", other),
    }
}

#[tokio::test]
async fn given_same_upload_when_loading_twice_then_results_identical() {
    let data = udf_archive("<content><p>Tekrarlanan icerik</p></content>");
    let service = document_service();

    let first = service.load(&data, "dosya.udf").await;
    let second = service.load(&data, "dosya.udf").await;

    assert_eq!(first, second);
}
