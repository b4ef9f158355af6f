//! File fixtures for upload tests.

#![allow(dead_code)]

use lopdf::{dictionary, Document, Object};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// A small but structurally valid PDF with descriptive metadata set, so
/// tests can verify the optimizer blanked it.
pub fn sample_pdf_bytes() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Algebra Week 2"),
        "Author" => Object::string_literal("Prof. Rao"),
        "Producer" => Object::string_literal("lectern-test"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to serialize test PDF");
    bytes
}

/// Bytes presented as a .docx upload. Office files are copied, never
/// parsed, so a ZIP signature plus filler is enough.
pub fn docx_bytes() -> Vec<u8> {
    let mut data = b"PK\x03\x04".to_vec();
    data.extend_from_slice(&[0u8; 60]);
    data
}

/// Bytes presented as an .mp4 upload. The test config points at a missing
/// ffmpeg binary, so these are copied verbatim by the fallback path.
pub fn mp4_bytes() -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypmp42");
    data.extend_from_slice(&[0u8; 64]);
    data
}
