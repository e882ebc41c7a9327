mod boot;
mod prompt;

use std::time::Duration;

use leptos::{
    ev::{self, PointerEvent},
    html,
    prelude::*,
};
use leptos_use::use_element_size;

use crate::shell::content::{HOST, USER};
use crate::shell::timing::TIMELINE;
use crate::shell::window::{
    grid_size, DragController, ResizeController, ResizeEdge, WindowGeometry,
};

use boot::BootSequence;
use prompt::InteractivePrompt;

/// The terminal chrome: draggable header, eight resize handles, a maximize
/// toggle, the scripted boot sequence and, once that has played out, the
/// interactive prompt.
#[component]
pub fn TerminalWindow() -> impl IntoView {
    let window_ref = NodeRef::<html::Div>::new();
    let body_ref = NodeRef::<html::Div>::new();
    let (geometry, set_geometry) = signal(WindowGeometry::default());
    let (maximized, set_maximized) = signal(false);
    let (interactive, set_interactive) = signal(false);
    let drag = StoredValue::new(DragController::default());
    let resize = StoredValue::new(ResizeController::default());
    let listeners = StoredValue::new_local(None::<(WindowListenerHandle, WindowListenerHandle)>);
    let boot_timer = StoredValue::new_local(None::<TimeoutHandle>);

    // hand over to the interactive prompt once the boot script finishes
    Effect::new(move |_| {
        if boot_timer.with_value(|t| t.is_some()) {
            return;
        }
        let handle = set_timeout_with_handle(
            move || set_interactive.set(true),
            Duration::from_millis(TIMELINE.interactive),
        )
        .ok();
        boot_timer.set_value(handle);
    });

    let release_listeners = move || {
        if let Some((moved, released)) = listeners.try_update_value(|l| l.take()).flatten() {
            moved.remove();
            released.remove();
        }
    };

    let end_gesture = move || {
        drag.update_value(|d| d.end());
        resize.update_value(|r| r.end());
        release_listeners();
    };

    // document-level listeners live only for the duration of a gesture
    let capture_pointer = move || {
        release_listeners();
        let moved = window_event_listener(ev::pointermove, move |ev: PointerEvent| {
            let pointer = (ev.client_x() as f64, ev.client_y() as f64);
            set_geometry.update(|g| {
                drag.update_value(|d| d.update(pointer, g));
                resize.update_value(|r| r.update(pointer, g));
            });
        });
        let released = window_event_listener(ev::pointerup, move |_| end_gesture());
        listeners.set_value(Some((moved, released)));
    };

    let start_drag = move |ev: PointerEvent| {
        if maximized.get_untracked() {
            return;
        }
        let pointer = (ev.client_x() as f64, ev.client_y() as f64);
        geometry.with_untracked(|g| drag.update_value(|d| d.begin(pointer, g)));
        capture_pointer();
    };

    let start_resize = move |edge: ResizeEdge, ev: PointerEvent| {
        if maximized.get_untracked() {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let Some(el) = window_ref.get_untracked() else {
            return;
        };
        let pointer = (ev.client_x() as f64, ev.client_y() as f64);
        let rendered = (el.offset_width() as f64, el.offset_height() as f64);
        resize.update_value(|r| r.begin(edge, pointer, rendered));
        capture_pointer();
    };

    let toggle_maximize = move |_| {
        end_gesture();
        set_geometry.update(|g| g.reset());
        set_maximized.update(|m| *m = !*m);
    };

    on_cleanup(move || {
        release_listeners();
        if let Some(handle) = boot_timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    });

    let body_size = use_element_size(body_ref);
    let title = move || {
        let (cols, rows) = grid_size(body_size.width.get(), body_size.height.get());
        format!("{USER}@{HOST}: ~ [{cols}x{rows}]")
    };

    let window_style = move || {
        if maximized.get() {
            return String::new();
        }
        let g = geometry.get();
        let mut style = format!("transform: translate({}px, {}px);", g.offset.0, g.offset.1);
        if let Some((w, h)) = g.size {
            style.push_str(&format!(" width: {w}px; height: {h}px;"));
        }
        style
    };

    view! {
        <div
            node_ref=window_ref
            class=move || {
                if maximized.get() { "terminal-window maximized" } else { "terminal-window" }
            }
            style=window_style
        >
            <div class="terminal-header" on:pointerdown=start_drag>
                <div class="traffic-lights">
                    <span class="light red"></span>
                    <span class="light yellow"></span>
                    <span class="light green" on:click=toggle_maximize></span>
                </div>
                <div class="terminal-title">{title}</div>
                <button class="maximize-toggle" aria-label="Toggle maximize" on:click=toggle_maximize>
                    "⤢"
                </button>
            </div>
            <div node_ref=body_ref class="terminal-body">
                <BootSequence />
                {move || interactive.get().then(|| view! { <InteractivePrompt /> })}
            </div>
            {ResizeEdge::ALL
                .iter()
                .map(|edge| {
                    let edge = *edge;
                    view! {
                        <div
                            class=format!("resize-handle {}", handle_class(edge))
                            on:pointerdown=move |ev| start_resize(edge, ev)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn handle_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "handle-n",
        ResizeEdge::South => "handle-s",
        ResizeEdge::East => "handle-e",
        ResizeEdge::West => "handle-w",
        ResizeEdge::NorthEast => "handle-ne",
        ResizeEdge::NorthWest => "handle-nw",
        ResizeEdge::SouthEast => "handle-se",
        ResizeEdge::SouthWest => "handle-sw",
    }
}
