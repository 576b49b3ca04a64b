//! PDF Overlay Viewer Component
//!
//! Renders a PDF page via pdf.js and draws OCR bounding boxes on a canvas
//! layered above it. Box coordinates arrive as fractions (0-1) of the
//! intrinsic page dimensions; drawing multiplies them by the page size and
//! the current display scale to get canvas pixels.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::pdf::{BoundingBox, OcrData};
use crate::pdfjs;

/// Horizontal padding reserved inside the viewer container, in CSS pixels.
const CONTAINER_PADDING: f64 = 40.0;

/// Display scale for a page inside a container: fit to width, but never
/// render larger than native size.
pub fn display_scale(container_width: f64, page_width: f64) -> f64 {
    if page_width <= 0.0 {
        return 1.0;
    }
    ((container_width - CONTAINER_PADDING) / page_width).min(1.0)
}

/// Clamp a requested page number to the valid range [1, page_count].
pub fn clamp_page(requested: i64, page_count: u32) -> u32 {
    let max = page_count.max(1) as i64;
    requested.clamp(1, max) as u32
}

/// Bounding boxes belonging to the given page, server order preserved.
pub fn boxes_for_page(boxes: &[BoundingBox], page: u32) -> Vec<BoundingBox> {
    boxes.iter().filter(|b| b.page == page).cloned().collect()
}

/// Fractional box -> canvas pixel rect at the given page size and scale.
pub fn box_pixel_rect(
    b: &BoundingBox,
    page_width: f64,
    page_height: f64,
    scale: f64,
) -> (f64, f64, f64, f64) {
    (
        b.x * page_width * scale,
        b.y * page_height * scale,
        b.width * page_width * scale,
        b.height * page_height * scale,
    )
}

/// PDF page viewer with OCR overlay and clamped page navigation.
#[component]
pub fn PdfOverlayViewer(url: String, ocr: Signal<Option<OcrData>>) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let page_canvas_ref = create_node_ref::<html::Canvas>();
    let overlay_canvas_ref = create_node_ref::<html::Canvas>();

    let doc = create_rw_signal(None::<pdfjs::PdfDocumentProxy>);
    let page_count = create_rw_signal(0u32);
    let current_page = create_rw_signal(1u32);
    // Intrinsic (scale = 1) dimensions of the first rendered page
    let page_dims = create_rw_signal(None::<(f64, f64)>);
    let show_overlay = create_rw_signal(true);
    let load_error = create_rw_signal(None::<String>);

    // Load the document once; page count and intrinsic dimensions come from
    // the first page.
    create_effect(move |_| {
        let url = url.clone();
        spawn_local(async move {
            match pdfjs::load_document(&url).await {
                Ok(document) => {
                    page_count.set(document.num_pages());
                    match pdfjs::get_page(&document, 1).await {
                        Ok(first) => page_dims.set(Some(pdfjs::page_dimensions(&first))),
                        Err(e) => logging::warn!("first page dimensions unavailable: {}", e),
                    }
                    doc.set(Some(document));
                }
                Err(e) => load_error.set(Some(e)),
            }
        });
    });

    // Re-render whenever the page, dimensions, OCR data or overlay toggle
    // change. The scale is re-derived from the container width each time.
    create_effect(move |_| {
        let Some(document) = doc.get() else {
            return;
        };
        let Some((page_w, page_h)) = page_dims.get() else {
            return;
        };
        let page_number = current_page.get();
        let overlay_on = show_overlay.get();
        let boxes = ocr
            .get()
            .map(|o| boxes_for_page(&o.bounding_boxes, page_number))
            .unwrap_or_default();

        let container_width = container_ref
            .get()
            .map(|div| div.client_width() as f64)
            .unwrap_or(page_w + CONTAINER_PADDING);
        let scale = display_scale(container_width, page_w);

        let page_canvas = page_canvas_ref.get();
        let overlay_canvas = overlay_canvas_ref.get();

        spawn_local(async move {
            let (Some(page_canvas), Some(overlay_canvas)) = (page_canvas, overlay_canvas) else {
                return;
            };
            let page = match pdfjs::get_page(&document, page_number).await {
                Ok(page) => page,
                Err(e) => {
                    logging::error!("page load failed: {}", e);
                    return;
                }
            };
            if let Err(e) = pdfjs::render_page(&page, &page_canvas, scale).await {
                logging::error!("page render failed: {}", e);
                return;
            }

            // Keep the overlay layer in lockstep with the page raster
            overlay_canvas.set_width(page_canvas.width());
            overlay_canvas.set_height(page_canvas.height());
            draw_overlay(&overlay_canvas, &boxes, page_w, page_h, scale, overlay_on);
        });
    });

    let go_previous = move |_| {
        let target = current_page.get() as i64 - 1;
        current_page.set(clamp_page(target, page_count.get()));
    };
    let go_next = move |_| {
        let target = current_page.get() as i64 + 1;
        current_page.set(clamp_page(target, page_count.get()));
    };

    view! {
        <div class="space-y-4">
            // Toolbar
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <button
                        on:click=go_previous
                        disabled=move || current_page.get() <= 1
                        class="px-3 py-1.5 bg-gray-100 hover:bg-gray-200 disabled:opacity-50
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Previous"
                    </button>
                    <span class="text-sm text-gray-600">
                        {move || {
                            let total = page_count.get();
                            if total == 0 {
                                "Loading...".to_string()
                            } else {
                                format!("Page {} of {}", current_page.get(), total)
                            }
                        }}
                    </span>
                    <button
                        on:click=go_next
                        disabled=move || {
                            let total = page_count.get();
                            total == 0 || current_page.get() >= total
                        }
                        class="px-3 py-1.5 bg-gray-100 hover:bg-gray-200 disabled:opacity-50
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Next"
                    </button>
                </div>

                <label class="flex items-center space-x-2 text-sm text-gray-600 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || show_overlay.get()
                        on:change=move |_| show_overlay.update(|v| *v = !*v)
                    />
                    <span>"Show OCR overlay"</span>
                </label>
            </div>

            // Page + overlay canvases
            <div node_ref=container_ref class="relative bg-gray-100 rounded-xl p-5 overflow-auto">
                {move || {
                    load_error.get().map(|e| {
                        view! {
                            <p class="text-red-600 text-sm">{e}</p>
                        }
                    })
                }}
                <div class="relative inline-block shadow">
                    <canvas node_ref=page_canvas_ref />
                    <canvas node_ref=overlay_canvas_ref class="absolute inset-0 pointer-events-none" />
                </div>
            </div>
        </div>
    }
}

/// Draw the bounding boxes for the current page onto the overlay canvas.
///
/// A disabled overlay still clears the canvas so stale boxes never linger
/// over a freshly rendered page.
fn draw_overlay(
    canvas: &HtmlCanvasElement,
    boxes: &[BoundingBox],
    page_width: f64,
    page_height: f64,
    scale: f64,
    visible: bool,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if !visible {
        return;
    }

    for b in boxes {
        let (x, y, w, h) = box_pixel_rect(b, page_width, page_height, scale);

        ctx.set_fill_style(&"rgba(79, 70, 229, 0.12)".into());
        ctx.fill_rect(x, y, w, h);

        ctx.set_stroke_style(&"#4f46e5".into());
        ctx.set_line_width(1.5);
        ctx.stroke_rect(x, y, w, h);

        // Recognized text above the box, sized to the scale
        ctx.set_fill_style(&"#312e81".into());
        ctx.set_font("11px sans-serif");
        let label = if b.confidence > 0.0 {
            format!("{} ({:.0}%)", b.text, b.confidence)
        } else {
            b.text.clone()
        };
        let _ = ctx.fill_text(&label, x, (y - 3.0).max(10.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(page: u32, x: f64, y: f64, w: f64, h: f64) -> BoundingBox {
        BoundingBox {
            page,
            x,
            y,
            width: w,
            height: h,
            text: "invoice".to_string(),
            confidence: 99.0,
        }
    }

    #[test]
    fn test_display_scale_fits_container() {
        // container 640, page 1200: (640-40)/1200 = 0.5
        assert_eq!(display_scale(640.0, 1200.0), 0.5);
    }

    #[test]
    fn test_display_scale_never_exceeds_native() {
        // container much wider than the page still caps at 1.0
        assert_eq!(display_scale(2000.0, 600.0), 1.0);
    }

    #[test]
    fn test_display_scale_degenerate_page_width() {
        assert_eq!(display_scale(640.0, 0.0), 1.0);
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(-3, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(6, 5), 5);
        // Unknown page count still yields a valid page
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn test_boxes_filtered_to_current_page() {
        let boxes = vec![bbox(1, 0.1, 0.1, 0.2, 0.05), bbox(2, 0.3, 0.3, 0.1, 0.1)];
        let page1 = boxes_for_page(&boxes, 1);
        assert_eq!(page1.len(), 1);
        assert_eq!(page1[0].page, 1);
        assert!(boxes_for_page(&boxes, 3).is_empty());
    }

    #[test]
    fn test_box_pixel_mapping() {
        let b = bbox(1, 0.25, 0.5, 0.1, 0.2);
        // page 800x1000 at scale 0.5
        let (x, y, w, h) = box_pixel_rect(&b, 800.0, 1000.0, 0.5);
        assert_eq!(x, 100.0);
        assert_eq!(y, 250.0);
        assert_eq!(w, 40.0);
        assert_eq!(h, 100.0);
    }
}
