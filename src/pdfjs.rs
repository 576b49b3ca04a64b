//! pdf.js Bindings
//!
//! Typed bindings to the `pdfjsLib` global loaded from `index.html`.
//! Page parsing and rasterization are delegated entirely to pdf.js; this
//! module only exposes the handful of calls the viewer needs.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Loading task returned by `pdfjsLib.getDocument`
    pub type LoadingTask;

    #[wasm_bindgen(js_namespace = pdfjsLib, js_name = getDocument)]
    fn get_document(url: &str) -> LoadingTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &LoadingTask) -> js_sys::Promise;

    /// Proxy for a loaded PDF document
    #[derive(Clone)]
    pub type PdfDocumentProxy;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    pub fn num_pages(this: &PdfDocumentProxy) -> u32;

    #[wasm_bindgen(method, js_name = getPage)]
    fn get_page_js(this: &PdfDocumentProxy, page_number: u32) -> js_sys::Promise;

    /// Proxy for a single page
    pub type PdfPageProxy;

    #[wasm_bindgen(method, js_name = getViewport)]
    fn get_viewport(this: &PdfPageProxy, params: &JsValue) -> PageViewport;

    #[wasm_bindgen(method)]
    fn render(this: &PdfPageProxy, params: &JsValue) -> RenderTask;

    /// Viewport with resolved pixel dimensions at a given scale
    pub type PageViewport;

    #[wasm_bindgen(method, getter)]
    pub fn width(this: &PageViewport) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &PageViewport) -> f64;

    /// In-progress render task
    pub type RenderTask;

    #[wasm_bindgen(method, getter, js_name = promise)]
    fn render_promise(this: &RenderTask) -> js_sys::Promise;
}

/// Load a PDF document by URL.
pub async fn load_document(url: &str) -> Result<PdfDocumentProxy, String> {
    let task = get_document(url);
    let doc = JsFuture::from(task.promise())
        .await
        .map_err(|_| "Failed to load PDF document".to_string())?;
    Ok(doc.unchecked_into())
}

/// Fetch a single page proxy (1-based page numbers).
pub async fn get_page(doc: &PdfDocumentProxy, page_number: u32) -> Result<PdfPageProxy, String> {
    let page = JsFuture::from(doc.get_page_js(page_number))
        .await
        .map_err(|_| format!("Failed to load page {}", page_number))?;
    Ok(page.unchecked_into())
}

/// Intrinsic page dimensions (scale = 1.0) in PDF user-space pixels.
pub fn page_dimensions(page: &PdfPageProxy) -> (f64, f64) {
    let viewport = viewport_at(page, 1.0);
    (viewport.width(), viewport.height())
}

/// Render a page into a canvas at the given scale.
///
/// The canvas's backing-store size is set to the scaled viewport dimensions
/// before drawing so the raster is never stretched.
pub async fn render_page(
    page: &PdfPageProxy,
    canvas: &web_sys::HtmlCanvasElement,
    scale: f64,
) -> Result<(), String> {
    let viewport = viewport_at(page, scale);
    canvas.set_width(viewport.width() as u32);
    canvas.set_height(viewport.height() as u32);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or_else(|| "Canvas 2d context unavailable".to_string())?;

    let params = js_sys::Object::new();
    js_sys::Reflect::set(&params, &"canvasContext".into(), &ctx)
        .map_err(|_| "Render setup failed".to_string())?;
    js_sys::Reflect::set(&params, &"viewport".into(), &viewport)
        .map_err(|_| "Render setup failed".to_string())?;

    let task = page.render(&params.into());
    JsFuture::from(task.render_promise())
        .await
        .map_err(|_| "Failed to render page".to_string())?;

    Ok(())
}

fn viewport_at(page: &PdfPageProxy, scale: f64) -> PageViewport {
    let params = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&params, &"scale".into(), &JsValue::from_f64(scale));
    page.get_viewport(&params.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The viewer keeps the loaded document in a signal, which needs the
    // handle to be cloneable.
    #[test]
    fn test_document_proxy_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<PdfDocumentProxy>();
    }
}
