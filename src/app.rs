mod integrations;
mod matrix;
mod terminal;

use std::sync::Arc;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::shell::content;
use crate::shell::konami::KonamiDetector;
use integrations::{AdSlot, ConsentPanel, KlaroPanel};
use matrix::MatrixRain;
use terminal::TerminalWindow;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/terminal-portfolio.css" />
                <script src="/klaroConfig.js"></script>
                <script defer src="https://cdn.kiprotect.com/klaro/v0.7/klaro.js"></script>
                <script
                    async
                    src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-7439745986350224"
                    crossorigin="anonymous"
                ></script>
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // The consent panel is an injected capability so nothing below reaches
    // into the third-party global directly.
    provide_context::<Arc<dyn ConsentPanel>>(Arc::new(KlaroPanel));

    view! {
        // sets the document title
        <Title formatter=|title| format!("Lior - {title}") />

        <Router>
            <main class="flex flex-col flex-grow justify-center items-center mx-auto w-full min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The one canonical page: matrix rain behind a draggable terminal window,
/// with a Konami-code easter egg listening on the whole document.
#[component]
fn HomePage() -> impl IntoView {
    let (egg_visible, set_egg_visible) = signal(false);
    let detector = StoredValue::new(KonamiDetector::default());
    let keydown = StoredValue::new_local(None::<WindowListenerHandle>);

    Effect::new(move |_| {
        if keydown.with_value(|h| h.is_some()) {
            return;
        }
        let handle = window_event_listener(ev::keydown, move |ev| {
            let hit = detector
                .try_update_value(|d| d.record(&ev.key()))
                .unwrap_or(false);
            if hit {
                set_egg_visible.update(|v| *v = !*v);
            }
        });
        keydown.set_value(Some(handle));
    });
    on_cleanup(move || {
        if let Some(handle) = keydown.try_update_value(|h| h.take()).flatten() {
            handle.remove();
        }
    });

    view! {
        <Title text="About Me" />
        <MatrixRain />
        <TerminalWindow />
        <AdSlot />
        {move || egg_visible.get().then(|| view! { <EasterEgg /> })}
    }
}

#[component]
fn EasterEgg() -> impl IntoView {
    view! {
        <div class="easter-egg-overlay">
            <pre class="ascii-art rainbow terminal-glow">{content::NAME_ASCII}</pre>
            <p class="easter-egg-caption">"cheat mode enabled: +30 lives"</p>
        </div>
    }
}
