use lopdf::{Document, Object};
use target_engine::*;

fn media_box(doc: &Document) -> Vec<f32> {
    let pages = doc.get_pages();
    let page_id = *pages.get(&1).unwrap();
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    page.get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|value| match value {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("unexpected MediaBox entry {other:?}"),
        })
        .collect()
}

fn page_text(doc: &Document) -> String {
    let pages = doc.get_pages();
    let page_id = *pages.get(&1).unwrap();
    String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
}

#[test]
fn test_single_page_with_media_box() {
    let bytes = generate_pdf_bytes(&TargetRequest::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(media_box(&doc), vec![0.0, 0.0, 612.0, 792.0]);
}

#[test]
fn test_landscape_swaps_media_box() {
    let request = TargetRequest {
        orientation: Orientation::Landscape,
        ..TargetRequest::default()
    };
    let doc = Document::load_mem(&generate_pdf_bytes(&request).unwrap()).unwrap();
    assert_eq!(media_box(&doc), vec![0.0, 0.0, 792.0, 612.0]);
}

#[test]
fn test_content_carries_annotations() {
    let request = TargetRequest {
        family: Family::Ring1883,
        class: 3,
        ..TargetRequest::default()
    };
    let doc = Document::load_mem(&generate_pdf_bytes(&request).unwrap()).unwrap();
    let content = page_text(&doc);
    assert!(content.contains("/F1 10 Tf"));
    assert!(content.contains("is equivalent to original at 200 Yards"));
    assert!(content.contains("Printed size:"));
}

#[test]
fn test_warning_page_is_still_a_document() {
    let mut request = TargetRequest {
        family: Family::Dot,
        class: 1,
        ..TargetRequest::default()
    };
    request.dot.diameter = 500.0;
    let doc = Document::load_mem(&generate_pdf_bytes(&request).unwrap()).unwrap();
    assert!(page_text(&doc).contains("does not fit on this page"));
}

#[tokio::test]
async fn test_generate_and_save() {
    use tempfile::NamedTempFile;

    let bytes = generate(&TargetRequest::default()).await.unwrap();
    let temp = NamedTempFile::new().unwrap();
    save_pdf(&bytes, temp.path()).await.unwrap();

    let written = tokio::fs::read(temp.path()).await.unwrap();
    assert_eq!(written, bytes);
    assert!(Document::load_mem(&written).is_ok());
}

#[tokio::test]
async fn test_generate_rejects_invalid_request() {
    let request = TargetRequest {
        class: 0,
        ..TargetRequest::default()
    };
    assert!(matches!(
        generate(&request).await,
        Err(TargetError::CatalogMiss { .. })
    ));
}

#[tokio::test]
async fn test_generate_many_keeps_order() {
    let requests = vec![
        TargetRequest::default(),
        TargetRequest {
            class: 9,
            ..TargetRequest::default()
        },
        TargetRequest {
            family: Family::Service,
            class: 2,
            paper: PaperSize::A4,
            ..TargetRequest::default()
        },
    ];
    let results = generate_many(&requests).await;
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());

    let doc = Document::load_mem(results[2].as_ref().unwrap()).unwrap();
    assert!((media_box(&doc)[2] - 595.2756).abs() < 0.01);
}
