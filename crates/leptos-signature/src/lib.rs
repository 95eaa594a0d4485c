//! Leptos Signature Pad
//!
//! Freehand drawing on a `<canvas>` using pointer events.
//! Strokes are tracked in an [`Ink`] model so emptiness and the trimmed
//! export area never depend on reading pixels back.

mod ink;

pub use ink::{Bounds, Ink, Point};

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent};

/// Pen width in canvas pixels
const DEFAULT_LINE_WIDTH: f64 = 2.5;

const INK_COLOR: &str = "#000";

/// Handle to one signature pad. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct SignaturePad {
    ink: RwSignal<Ink>,
    drawing: RwSignal<bool>,
    canvas: NodeRef<html::Canvas>,
    line_width: f64,
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePad {
    pub fn new() -> Self {
        Self {
            ink: RwSignal::new(Ink::default()),
            drawing: RwSignal::new(false),
            canvas: NodeRef::new(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// True when nothing has been drawn since the last clear
    pub fn is_empty(&self) -> bool {
        self.ink.with_untracked(Ink::is_empty)
    }

    /// Forget all strokes and wipe the canvas
    pub fn clear(&self) {
        self.ink.set(Ink::default());
        self.drawing.set(false);
        if let Some(canvas) = self.canvas.get_untracked() {
            if let Some(ctx) = context_2d(&canvas) {
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
        }
    }

    /// PNG data URL of the drawn area only, cropped to the ink bounds.
    /// `Ok(None)` when the pad is empty or not mounted.
    pub fn to_trimmed_data_url(&self) -> Result<Option<String>, JsValue> {
        let Some(canvas) = self.canvas.get_untracked() else {
            return Ok(None);
        };
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);
        let Some(bounds) = self.ink.with_untracked(|ink| ink.bounds(self.line_width, width, height)) else {
            return Ok(None);
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let trimmed: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        trimmed.set_width(bounds.width);
        trimmed.set_height(bounds.height);

        let ctx = context_2d(&trimmed).ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
        let (w, h) = (bounds.width as f64, bounds.height as f64);
        ctx.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &canvas,
            bounds.x as f64,
            bounds.y as f64,
            w,
            h,
            0.0,
            0.0,
            w,
            h,
        )?;
        trimmed.to_data_url_with_type("image/png").map(Some)
    }

    fn on_pointer_down(&self, ev: &PointerEvent) {
        if ev.button() != 0 {
            return;
        }
        let Some(canvas) = self.canvas.get_untracked() else {
            return;
        };
        let _ = canvas.set_pointer_capture(ev.pointer_id());

        let point = canvas_point(&canvas, ev);
        self.ink.update(|ink| ink.begin_stroke(point));
        self.drawing.set(true);

        if let Some(ctx) = self.pen(&canvas) {
            ctx.begin_path();
            let _ = ctx.arc(point.x, point.y, self.line_width / 2.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }

    fn on_pointer_move(&self, ev: &PointerEvent) {
        if !self.drawing.get_untracked() {
            return;
        }
        let Some(canvas) = self.canvas.get_untracked() else {
            return;
        };
        let point = canvas_point(&canvas, ev);
        let mut previous = None;
        self.ink.update(|ink| previous = ink.extend_stroke(point));

        if let (Some(from), Some(ctx)) = (previous, self.pen(&canvas)) {
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(point.x, point.y);
            ctx.stroke();
        }
    }

    fn end_stroke(&self) {
        self.drawing.set(false);
    }

    /// Bind the ink to the canvas mounted under the current owner. A fresh
    /// canvas starts blank, so strokes from an earlier canvas are dropped on
    /// mount and again when this one is unmounted.
    fn attach(&self) {
        self.reset_ink();
        let pad = *self;
        on_cleanup(move || pad.reset_ink());
    }

    fn reset_ink(&self) {
        self.ink.update_untracked(Ink::clear);
        self.drawing.update_untracked(|d| *d = false);
    }

    /// 2d context configured with the pen style
    fn pen(&self, canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
        let ctx = context_2d(canvas)?;
        ctx.set_line_width(self.line_width);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_stroke_style_str(INK_COLOR);
        ctx.set_fill_style_str(INK_COLOR);
        Some(ctx)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Map client coordinates to canvas pixels (the element may be CSS-scaled)
fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };
    Point::new(
        (ev.client_x() as f64 - rect.left()) * scale_x,
        (ev.client_y() as f64 - rect.top()) * scale_y,
    )
}

/// Drawing surface bound to a [`SignaturePad`]
#[component]
pub fn SignatureCanvas(
    pad: SignaturePad,
    #[prop(default = 300)] width: u32,
    #[prop(default = 100)] height: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    pad.attach();

    view! {
        <canvas
            node_ref=pad.canvas
            width=width
            height=height
            class=class
            style="touch-action: none;"
            on:pointerdown=move |ev: PointerEvent| pad.on_pointer_down(&ev)
            on:pointermove=move |ev: PointerEvent| pad.on_pointer_move(&ev)
            on:pointerup=move |_| pad.end_stroke()
            on:pointercancel=move |_| pad.end_stroke()
            on:pointerleave=move |_| pad.end_stroke()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_stroke(pad: &SignaturePad) {
        pad.ink.update(|ink| {
            ink.begin_stroke(Point::new(10.0, 10.0));
            ink.extend_stroke(Point::new(40.0, 30.0));
        });
    }

    #[test]
    fn test_ink_dropped_when_canvas_unmounts() {
        let owner = Owner::new();
        owner.with(|| {
            let pad = SignaturePad::new();

            let first_mount = Owner::new();
            first_mount.with(|| pad.attach());
            draw_stroke(&pad);
            assert!(!pad.is_empty());

            first_mount.cleanup();
            assert!(pad.is_empty());
        });
    }

    #[test]
    fn test_remounted_canvas_starts_empty() {
        let owner = Owner::new();
        owner.with(|| {
            let pad = SignaturePad::new();
            draw_stroke(&pad);

            // Strokes left over from a canvas that was never cleaned up
            let second_mount = Owner::new();
            second_mount.with(|| pad.attach());
            assert!(pad.is_empty());
            assert!(!pad.drawing.get_untracked());
        });
    }
}
