use std::cell::RefCell;
use std::time::Duration;

use leptos::{html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;

const FONT_SIZE: f64 = 14.0;
const FRAME_MS: u64 = 50;
const GLYPHS: [&str; 2] = ["0", "1"];

/// Decorative falling-binary backdrop. One canvas sized to the viewport,
/// one column per FONT_SIZE pixels, redrawn on a fixed interval that is
/// cancelled when the page unmounts.
#[component]
pub fn MatrixRain() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let frame = StoredValue::new_local(None::<IntervalHandle>);

    Effect::new(move |_| {
        if frame.with_value(|f| f.is_some()) {
            return;
        }
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let window = window();
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::warn!("matrix rain: 2d canvas context unavailable");
            return;
        };

        let columns = (width / FONT_SIZE).floor() as usize;
        let drops: RefCell<Vec<f64>> = RefCell::new(
            (0..columns)
                .map(|_| js_sys::Math::random() * -100.0)
                .collect(),
        );
        let draw = move || {
            let mut drops = drops.borrow_mut();
            ctx.set_fill_style_str("rgba(10, 10, 10, 0.05)");
            ctx.fill_rect(0.0, 0.0, width, height);
            ctx.set_fill_style_str("#00ff4120");
            ctx.set_font(&format!("{FONT_SIZE}px JetBrains Mono"));
            for (i, drop) in drops.iter_mut().enumerate() {
                let glyph = GLYPHS[(js_sys::Math::random() * GLYPHS.len() as f64) as usize
                    % GLYPHS.len()];
                let _ = ctx.fill_text(glyph, i as f64 * FONT_SIZE, *drop * FONT_SIZE);
                if *drop * FONT_SIZE > height && js_sys::Math::random() > 0.975 {
                    *drop = 0.0;
                }
                *drop += 1.0;
            }
        };
        match set_interval_with_handle(draw, Duration::from_millis(FRAME_MS)) {
            Ok(handle) => frame.set_value(Some(handle)),
            Err(err) => log::warn!("matrix rain: failed to schedule frames: {err:?}"),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = frame.try_update_value(|f| f.take()).flatten() {
            handle.clear();
        }
    });

    view! { <canvas node_ref=canvas_ref class="matrix-bg" aria-hidden="true"></canvas> }
}
