//! Attachment responses for rendered artifacts.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use cardledger_core::export::ExportArtifact;
use tracing::info;

/// Artifact bytes served as a download.
#[derive(Debug)]
pub struct Attachment(pub ExportArtifact);

impl IntoResponse for Attachment {
    fn into_response(self) -> Response {
        let disposition = self.0.content_disposition();
        info!(filename = %self.0.filename, size = self.0.bytes.len(), "Serving export");

        (
            [
                (header::CONTENT_TYPE, self.0.mime_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.0.bytes,
        )
            .into_response()
    }
}
