use crate::compose::{compose, ComposedPage};
use crate::options::TargetRequest;
use crate::render::{build_document, to_bytes};
use crate::types::*;
use std::path::Path;

/// Compose and render a request to PDF bytes
pub fn generate_pdf_bytes(request: &TargetRequest) -> Result<Vec<u8>> {
    let page = compose(request)?;
    render_page(&page)
}

/// Render an already composed page to PDF bytes
pub fn render_page(page: &ComposedPage) -> Result<Vec<u8>> {
    let mut doc = build_document(page);
    let bytes = to_bytes(&mut doc)?;
    log::info!(
        "generated {} on {} {:?}: {} items, {} bytes",
        page.target.name,
        page.paper,
        page.orientation,
        page.items.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Generate a target document off the async runtime's worker threads
pub async fn generate(request: &TargetRequest) -> Result<Vec<u8>> {
    request.validate()?;

    let request = request.clone();
    tokio::task::spawn_blocking(move || generate_pdf_bytes(&request)).await?
}

/// Generate independent documents concurrently, results in input order
pub async fn generate_many(requests: &[TargetRequest]) -> Vec<Result<Vec<u8>>> {
    let handles: Vec<_> = requests
        .iter()
        .cloned()
        .map(|request| tokio::task::spawn_blocking(move || generate_pdf_bytes(&request)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(e) => Err(TargetError::TaskJoin(e)),
        });
    }
    results
}

/// Write generated bytes to a file
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
