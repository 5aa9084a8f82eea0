//! Single-page lopdf document assembly

use crate::compose::ComposedPage;
use crate::constants::{TEXT_BASE_FONT, TEXT_FONT_NAME};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::ops::page_content;

/// Build a one-page document from a composed page
pub fn build_document(page: &ComposedPage) -> Document {
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let font_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(TEXT_BASE_FONT.as_bytes().to_vec())),
    ]));

    let mut fonts = Dictionary::new();
    fonts.set(TEXT_FONT_NAME, Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let content = page_content(&page.items, &page.drawable);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_tree_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page.media.width as f32),
            Object::Real(page.media.height as f32),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    let page_id = output.add_object(page_dict);

    finalize_document(&mut output, pages_tree_id, vec![Object::Reference(page_id)]);
    output
}

/// Serialise a document to PDF bytes
pub fn to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
