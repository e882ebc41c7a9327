//! The scripted boot sequence. Every block is scheduled once against mount
//! time using the offsets in [`crate::shell::timing`], so the whole sequence
//! is declarative: no block ever reschedules another.

use std::sync::Arc;
use std::time::Duration;

use chrono::prelude::*;
use leptos::prelude::*;

use crate::app::integrations::ConsentPanel;
use crate::shell::content::{
    ABOUT_LINES, HOST, NAME_ASCII, NEOFETCH_FIELDS, PROJECTS, SKILLS, SOCIAL_LINKS, USER,
};
use crate::shell::timing::{
    CMD_CAT, CMD_CONNECT, CMD_NEOFETCH, CMD_PROJECTS, CMD_SKILLS, TIMELINE, TYPING_SPEED_MS,
};

/// Flips to true `at` milliseconds after mount. The timer is armed once and
/// cleared on unmount.
fn reveal_at(at: u64) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let timer = StoredValue::new_local(None::<TimeoutHandle>);
    Effect::new(move |_| {
        if timer.with_value(|t| t.is_some()) {
            return;
        }
        let handle =
            set_timeout_with_handle(move || set_visible.set(true), Duration::from_millis(at)).ok();
        timer.set_value(handle);
    });
    on_cleanup(move || {
        if let Some(handle) = timer.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    });
    visible
}

/// Hidden until its scheduled offset, then shown in document order.
#[component]
fn Reveal(at: u64, children: Children) -> impl IntoView {
    let visible = reveal_at(at);
    view! {
        <div class="reveal" class:hidden=move || !visible.get()>
            {children()}
        </div>
    }
}

/// The zsh prompt prefix shared by scripted and interactive lines.
#[component]
pub fn Ps1() -> impl IntoView {
    view! {
        <span class="ps1">
            <span class="ps1-user">{USER}"@"{HOST}</span>
            <span class="ps1-path">":~$ "</span>
        </span>
    }
}

/// A prompt line whose command text is typed out character by character,
/// starting `typing_delay` ms after the line becomes visible. The cursor
/// stays on the line (solid while typing, blinking after) until
/// `cursor_until` elapses, which is when the next scripted line takes over.
#[component]
fn CommandLine(
    cmd: &'static str,
    start: u64,
    typing_delay: u64,
    cursor_until: u64,
) -> impl IntoView {
    let visible = reveal_at(start);
    let cursor_gone = reveal_at(cursor_until);
    let (typed, set_typed) = signal(0usize);
    let starter = StoredValue::new_local(None::<TimeoutHandle>);
    let ticker = StoredValue::new_local(None::<IntervalHandle>);

    Effect::new(move |_| {
        if !visible.get() || starter.with_value(|t| t.is_some()) {
            return;
        }
        let begin = move || {
            let handle = set_interval_with_handle(
                move || {
                    set_typed.update(|n| *n = (*n + 1).min(cmd.len()));
                    if typed.get_untracked() >= cmd.len() {
                        if let Some(h) = ticker.try_update_value(|t| t.take()).flatten() {
                            h.clear();
                        }
                    }
                },
                Duration::from_millis(TYPING_SPEED_MS),
            )
            .ok();
            ticker.set_value(handle);
        };
        let handle = set_timeout_with_handle(begin, Duration::from_millis(typing_delay)).ok();
        starter.set_value(handle);
    });
    on_cleanup(move || {
        if let Some(handle) = starter.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
        if let Some(handle) = ticker.try_update_value(|t| t.take()).flatten() {
            handle.clear();
        }
    });

    let fully_typed = move || typed.get() >= cmd.len();
    view! {
        <div class="terminal-line" class:hidden=move || !visible.get()>
            <Ps1 />
            <span class="command">{move || cmd[..typed.get()].to_string()}</span>
            {move || {
                (!cursor_gone.get())
                    .then(|| view! { <span class="cursor" class:blink=fully_typed></span> })
            }}
        </div>
    }
}

/// neofetch's label/value block, with an optional uptime row for the
/// interactive variant.
#[component]
pub fn NeofetchMeta(#[prop(optional)] uptime: Option<String>) -> impl IntoView {
    view! {
        <div class="neofetch-meta">
            <div class="neofetch-field">
                <span class="neofetch-label">{USER}"@"{HOST}</span>
            </div>
            {NEOFETCH_FIELDS
                .iter()
                .map(|(label, value)| {
                    view! {
                        <div class="neofetch-field">
                            <span class="neofetch-label">{*label}": "</span>
                            <span class="neofetch-value">{*value}</span>
                        </div>
                    }
                })
                .collect_view()}
            {uptime
                .map(|uptime| {
                    view! {
                        <div class="neofetch-field">
                            <span class="neofetch-label">"Uptime: "</span>
                            <span class="neofetch-value">{uptime}</span>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
pub fn AboutBlock() -> impl IntoView {
    view! {
        <div class="about-block">
            {ABOUT_LINES
                .iter()
                .map(|line| view! { <p class="terminal-line">{*line}</p> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkillsGrid() -> impl IntoView {
    view! {
        <div class="skills-grid">
            {SKILLS
                .iter()
                .map(|skill| view! { <span class="skill-chip">{*skill}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    view! {
        <div class="project-list">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <div class="project-entry">
                            <a
                                class="project-name"
                                href=project.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {project.name}
                            </a>
                            <span class="project-description">{project.description}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Social links plus the cookie-preferences entry, which opens the consent
/// dialog through the injected [`ConsentPanel`].
#[component]
pub fn ConnectLinks() -> impl IntoView {
    let consent = expect_context::<Arc<dyn ConsentPanel>>();
    let open_preferences = move |_| {
        if let Err(err) = consent.reveal() {
            log::warn!("{err}");
        }
    };
    view! {
        <div class="connect-links">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            class="social-link"
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="social-icon">"["{link.icon}"]"</span>
                            {link.name}
                        </a>
                    }
                })
                .collect_view()}
            <button class="social-link consent-link" on:click=open_preferences>
                <span class="social-icon">"[ck]"</span>
                "Cookie preferences"
            </button>
        </div>
    }
}

/// The full scripted intro, assembled from the timing table.
#[component]
pub fn BootSequence() -> impl IntoView {
    let t = TIMELINE;
    let last_login = format!(
        "Last login: {} on ttys000",
        Local::now().format("%a %b %d %H:%M:%S")
    );

    view! {
        <div class="boot-sequence">
            <Reveal at=t.last_login>
                <div class="terminal-line muted">{last_login}</div>
            </Reveal>
            <CommandLine
                cmd=CMD_NEOFETCH
                start=t.neofetch_cmd
                typing_delay=t.neofetch_typing_delay
                cursor_until=t.cat_cmd
            />
            <Reveal at=t.neofetch_ascii>
                <pre class="ascii-art terminal-glow">{NAME_ASCII}</pre>
            </Reveal>
            <Reveal at=t.neofetch_meta>
                <NeofetchMeta />
            </Reveal>
            <CommandLine
                cmd=CMD_CAT
                start=t.cat_cmd
                typing_delay=t.cat_typing_delay
                cursor_until=t.skills_cmd
            />
            <Reveal at=t.cat_output>
                <AboutBlock />
            </Reveal>
            <CommandLine
                cmd=CMD_SKILLS
                start=t.skills_cmd
                typing_delay=t.skills_typing_delay
                cursor_until=t.projects_cmd
            />
            <Reveal at=t.skills_output>
                <SkillsGrid />
            </Reveal>
            <CommandLine
                cmd=CMD_PROJECTS
                start=t.projects_cmd
                typing_delay=t.projects_typing_delay
                cursor_until=t.connect_cmd
            />
            <Reveal at=t.projects_output>
                <ProjectList />
            </Reveal>
            <CommandLine
                cmd=CMD_CONNECT
                start=t.connect_cmd
                typing_delay=t.connect_typing_delay
                cursor_until=t.cursor_hide
            />
            <Reveal at=t.connect_output>
                <ConnectLinks />
            </Reveal>
            <Reveal at=t.hint>
                <div class="terminal-line hint">"Type 'help' to see available commands"</div>
            </Reveal>
        </div>
    }
}
