//! PDF optimizer adapter.
//!
//! Shrinks PDFs by blanking descriptive metadata only; page content is
//! never recompressed, so the reduction is modest but the output is always
//! a faithful document.

use std::path::Path;

use async_trait::async_trait;
use lopdf::{Document, Object, ObjectId, StringFormat};

use crate::compressor::{CompressError, Compressor};

const METADATA_FIELDS: [&str; 6] = [
    "Title",
    "Author",
    "Subject",
    "Keywords",
    "Producer",
    "Creator",
];

#[derive(Debug, Clone, Default)]
pub struct PdfOptimizer;

/// Set every descriptive field of the Info dictionary to an empty string.
/// A document without an Info dictionary is left untouched.
fn blank_document_metadata(doc: &mut Document) {
    let info_ref: Option<ObjectId> = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };

    if let Some(id) = info_ref {
        if let Ok(Object::Dictionary(info)) = doc.get_object_mut(id) {
            for field in METADATA_FIELDS {
                info.set(field, Object::String(Vec::new(), StringFormat::Literal));
            }
        }
    } else if let Ok(Object::Dictionary(info)) = doc.trailer.get_mut(b"Info") {
        // Info stored inline in the trailer rather than as a reference.
        for field in METADATA_FIELDS {
            info.set(field, Object::String(Vec::new(), StringFormat::Literal));
        }
    }
}

#[async_trait]
impl Compressor for PdfOptimizer {
    async fn compress(&self, input: &Path, output: &Path) -> Result<(), CompressError> {
        let input = input.to_path_buf();
        let output = output.to_path_buf();

        // lopdf parses and serializes synchronously; keep it off the
        // async workers.
        tokio::task::spawn_blocking(move || {
            let mut doc = Document::load(&input)
                .map_err(|e| CompressError::InvalidDocument(e.to_string()))?;

            blank_document_metadata(&mut doc);

            doc.save(&output)
                .map_err(|e| CompressError::Internal(format!("Failed to write PDF: {}", e)))?;
            Ok(())
        })
        .await
        .map_err(|e| CompressError::Internal(format!("PDF task failed: {}", e)))?
    }
}
