//! PDF Document API
//!
//! Upload, listing, presigned URLs and OCR results. All calls are
//! bearer-authenticated; documents are scoped to the signed-in user.

use gloo_net::http::Request;

use crate::api::{error_message, get_api_base};
use crate::state::Session;

/// A bounding box locating recognized text on a page.
///
/// Coordinates are fractional (0-1) relative to the intrinsic page
/// dimensions; the viewer scales them to canvas pixels.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BoundingBox {
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Server-computed OCR output for a document.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OcrData {
    #[serde(default)]
    pub bounding_boxes: Vec<BoundingBox>,
    #[serde(default)]
    pub structured_data: Option<serde_json::Value>,
}

/// PDF document metadata as returned by the API.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PdfDocument {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub ocr_data: Option<OcrData>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PdfDocument {
    /// Whether server-side OCR has completed for this document.
    pub fn ocr_ready(&self) -> bool {
        self.ocr_data.is_some()
    }
}

/// Upload a PDF file (multipart). Returns the created document;
/// OCR runs in the background and appears later via polling.
pub async fn upload_pdf(session: &Session, file: &web_sys::File) -> Result<PdfDocument, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let form = web_sys::FormData::new().map_err(|_| "Request build error".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Request build error".to_string())?;

    let response = Request::post(&format!("{}/api/v1/pdfs/upload", api_base))
        .header(&header, &value)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to upload PDF").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all documents for the current user
pub async fn fetch_pdfs(session: &Session) -> Result<Vec<PdfDocument>, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::get(&format!("{}/api/v1/pdfs/", api_base))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to load documents").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single document's metadata
pub async fn fetch_pdf(session: &Session, id: i64) -> Result<PdfDocument, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::get(&format!("{}/api/v1/pdfs/{}", api_base, id))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Document not found").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a short-lived presigned URL for the document's file.
pub async fn fetch_pdf_url(session: &Session, id: i64) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct UrlResponse {
        url: String,
    }

    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::get(&format!("{}/api/v1/pdfs/{}/url", api_base, id))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to resolve document URL").await);
    }

    let result: UrlResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.url)
}

/// Fetch OCR results for a document.
///
/// Returns `Ok(None)` while OCR is still processing (the API responds 404
/// until results exist) so callers can keep polling.
pub async fn fetch_ocr(session: &Session, id: i64) -> Result<Option<OcrData>, String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::get(&format!("{}/api/v1/pdfs/{}/ocr", api_base, id))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }

    if !response.ok() {
        return Err(error_message(response, "Failed to load OCR results").await);
    }

    let ocr: OcrData = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Some(ocr))
}

/// Delete a document
pub async fn delete_pdf(session: &Session, id: i64) -> Result<(), String> {
    let api_base = get_api_base();
    let Some((header, value)) = session.auth_header() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::delete(&format!("{}/api/v1/pdfs/{}", api_base, id))
        .header(&header, &value)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to delete document").await);
    }

    Ok(())
}
