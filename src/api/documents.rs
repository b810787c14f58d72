//! Document upload endpoint.
//!
//! Text extraction is not implemented; a successful upload returns a
//! placeholder asking the user to paste the text instead.

use bytes::Bytes;
use futures::{future, stream};
use multer::{Constraints, Multipart, SizeLimit};
use serde_json::Value;
use std::convert::Infallible;
use tracing::info;

use super::parsing;
use crate::core::models::ExtractedDocument;
use crate::errors::{FieldError, SummarizerError};

pub const UPLOAD_FIELD: &str = "pdf";
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
const PDF_MIME: &str = "application/pdf";

fn rejected(code: &str, message: &str) -> SummarizerError {
    SummarizerError::Validation(vec![FieldError::new(UPLOAD_FIELD, code, message)])
}

fn multipart_error(err: &multer::Error) -> SummarizerError {
    match err {
        multer::Error::FieldSizeExceeded { .. } | multer::Error::StreamSizeExceeded { .. } => {
            rejected("too_big", "File exceeds the 10 MB limit")
        }
        other => SummarizerError::Validation(vec![FieldError::new(
            "",
            "invalid_multipart",
            format!("Malformed multipart body: {other}"),
        )]),
    }
}

/// # Errors
///
/// Returns a validation error for non-multipart bodies, a missing file field,
/// oversized files and non-PDF uploads.
pub async fn extract_document(event: &Value) -> Result<ExtractedDocument, SummarizerError> {
    let boundary = parsing::header(event, "Content-Type")
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| rejected("invalid_content_type", "Expected multipart/form-data upload"))?;

    let body = Bytes::from(parsing::body_bytes(event)?);
    let constraints =
        Constraints::new().size_limit(SizeLimit::new().per_field(MAX_UPLOAD_BYTES));
    let mut multipart = Multipart::with_constraints(
        stream::once(future::ready(Ok::<_, Infallible>(body))),
        boundary,
        constraints,
    );

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .unwrap_or("document.pdf")
            .to_string();
        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_ascii_lowercase())
            .or_else(|| {
                field
                    .file_name()
                    .and_then(|name| mime_guess::from_path(name).first())
                    .map(|m| m.essence_str().to_string())
            })
            .unwrap_or_default();

        if mime != PDF_MIME {
            return Err(rejected("invalid_type", "Only PDF files are allowed"));
        }

        let data = field.bytes().await.map_err(|e| multipart_error(&e))?;
        info!(filename = %filename, bytes = data.len(), "Document uploaded");

        return Ok(ExtractedDocument {
            text: placeholder_text(&filename, data.len(), &mime),
        });
    }

    Err(rejected("required", "No PDF file uploaded"))
}

#[allow(clippy::cast_precision_loss)]
fn placeholder_text(filename: &str, size: usize, mime: &str) -> String {
    format!(
        "PDF file \"{filename}\" uploaded successfully.\n\n\
         Please copy and paste the text content from your PDF into the text area below for now.\n\
         We're working on full PDF text extraction and it will be available soon!\n\n\
         File size: {:.1} KB\n\
         File type: {mime}",
        size as f64 / 1024.0
    )
}
