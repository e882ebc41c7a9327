//! The interactive prompt shown once the boot script ends: a focused input
//! line, the append-only log above it, and arrow-key recall.

use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::shell::content::{NAME_ASCII, USER};
use crate::shell::interpreter::{is_known_command, CommandRes};
use crate::shell::session::{HistoryEntry, Session};

use super::boot::{AboutBlock, ConnectLinks, NeofetchMeta, ProjectList, Ps1, SkillsGrid};

const HELP_ENTRIES: [(&str, &str); 15] = [
    ("help", "Show this help message"),
    ("about", "Display information about me"),
    ("skills", "List my technical skills"),
    ("projects", "Show my projects"),
    ("contact", "Display contact information"),
    ("neofetch", "Display system information"),
    ("whoami", "Print current user"),
    ("pwd", "Print working directory"),
    ("ls", "List directory contents"),
    ("cat", "Print file contents"),
    ("echo", "Print text to the terminal"),
    ("date", "Show the current date and time"),
    ("uname", "Print system information"),
    ("history", "Show command history"),
    ("clear", "Clear the terminal"),
];

const DIR_ROWS: [(&str, &str, bool); 4] = [
    ("drwxr-xr-x", "skills/", true),
    ("drwxr-xr-x", "projects/", true),
    ("drwxr-xr-x", "connect/", true),
    ("-rw-r--r--", "about.txt", false),
];

#[component]
pub fn InteractivePrompt() -> impl IntoView {
    let session = RwSignal::new(Session::default());
    let (input, set_input) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    let keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            let line = input.get_untracked();
            session.update(|s| s.submit(&line));
            set_input.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            let recalled = session
                .try_update(|s| s.recall_prev().map(str::to_string))
                .flatten();
            if let Some(recalled) = recalled {
                set_input.set(recalled);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            let recalled = session
                .try_update(|s| s.recall_next().map(str::to_string))
                .flatten();
            if let Some(recalled) = recalled {
                set_input.set(recalled);
            }
        }
        _ => {}
    };

    view! {
        <div class="interactive-session">
            {move || {
                session
                    .with(|s| {
                        s.entries()
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                // `history` lists only the commands recorded
                                // up to the entry that asked for it
                                let listing: Vec<String> = match entry.output {
                                    Some(CommandRes::History) => {
                                        s.commands_through(index).map(str::to_string).collect()
                                    }
                                    _ => Vec::new(),
                                };
                                render_entry(entry.clone(), listing)
                            })
                            .collect_view()
                    })
            }}
            <div class="terminal-line prompt-line">
                <Ps1 />
                <input
                    node_ref=input_ref
                    class="prompt-input"
                    type="text"
                    spellcheck="false"
                    autocomplete="off"
                    autocapitalize="off"
                    prop:value=input
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=keydown
                />
            </div>
        </div>
    }
}

fn render_entry(entry: HistoryEntry, listing: Vec<String>) -> impl IntoView {
    view! {
        <div class="log-entry">
            <div class="terminal-line">
                <Ps1 />
                {highlight_command(&entry.command)}
            </div>
            {entry.output.map(|output| render_output(output, listing))}
        </div>
    }
}

/// Echoes a submitted line with its first token colored by whether the
/// interpreter recognizes it.
fn highlight_command(command: &str) -> impl IntoView {
    let trimmed = command.trim_start();
    let leading = command[..command.len() - trimmed.len()].to_string();
    let (token, rest) = match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    };
    let class = if is_known_command(token) {
        "command-known"
    } else {
        "command-unknown"
    };
    view! {
        <span class="command">
            {leading}
            <span class=class>{token.to_string()}</span>
            {rest.to_string()}
        </span>
    }
}

fn render_output(output: CommandRes, listing: Vec<String>) -> AnyView {
    match output {
        CommandRes::Clear | CommandRes::Nothing => ().into_any(),
        CommandRes::Text(text) => view! { <div class="terminal-line">{text}</div> }.into_any(),
        CommandRes::Err(text) => {
            view! { <div class="terminal-line error">{text}</div> }.into_any()
        }
        CommandRes::Help => render_help().into_any(),
        CommandRes::History => view! {
            <div class="history-listing">
                {listing
                    .into_iter()
                    .enumerate()
                    .map(|(i, cmd)| {
                        view! {
                            <div class="terminal-line">
                                <span class="history-index">{format!("{:>5}  ", i + 1)}</span>
                                {cmd}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        CommandRes::Neofetch { uptime } => view! {
            <div class="neofetch-output">
                <pre class="ascii-art terminal-glow">{NAME_ASCII}</pre>
                <NeofetchMeta uptime=Some(uptime) />
            </div>
        }
        .into_any(),
        CommandRes::DirListing => render_dir_listing().into_any(),
        CommandRes::Skills => view! { <SkillsGrid /> }.into_any(),
        CommandRes::Projects => view! { <ProjectList /> }.into_any(),
        CommandRes::Contact => view! { <ConnectLinks /> }.into_any(),
        CommandRes::About => view! { <AboutBlock /> }.into_any(),
    }
}

fn render_help() -> impl IntoView {
    view! {
        <div class="help-listing">
            <div class="terminal-line">"Available commands:"</div>
            {HELP_ENTRIES
                .iter()
                .map(|(cmd, description)| {
                    view! {
                        <div class="terminal-line">
                            <span class="help-command">{format!("  {cmd:<10}")}</span>
                            {*description}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_dir_listing() -> impl IntoView {
    view! {
        <div class="dir-listing">
            <div class="terminal-line muted">"total 4"</div>
            {DIR_ROWS
                .iter()
                .map(|(mode, name, is_dir)| {
                    view! {
                        <div class="terminal-line">
                            <span class="dir-mode">{*mode}</span>
                            {format!(" {USER} {USER}  ")}
                            <span class=if *is_dir {
                                "dir-name"
                            } else {
                                "file-name"
                            }>{*name}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
