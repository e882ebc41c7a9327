use chrono::prelude::*;

use super::content;

/// Result of interpreting one line of input.
///
/// `Clear` and `History` are sentinels: the caller interprets them as control
/// instructions (discard the log / synthesize a listing of prior commands)
/// instead of displaying them. Everything else is renderable as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRes {
    /// Discard all history.
    Clear,
    /// Render a synthesized listing of prior commands.
    History,
    /// Empty submission; record a blank entry, display nothing.
    Nothing,
    /// An error line (unknown command, usage errors).
    Err(String),
    /// A plain line of text.
    Text(String),
    Help,
    Neofetch { uptime: String },
    DirListing,
    Skills,
    Projects,
    Contact,
    About,
}

/// First tokens the prompt highlights as recognized commands.
pub const KNOWN_COMMANDS: [&str; 14] = [
    "help", "clear", "whoami", "pwd", "ls", "cat", "echo", "date", "uname", "history", "neofetch",
    "about", "skills", "projects",
];

pub fn is_known_command(token: &str) -> bool {
    let token = token.to_lowercase();
    KNOWN_COMMANDS.contains(&token.as_str()) || token == "contact" || token == "connect"
}

impl From<&str> for CommandRes {
    fn from(input: &str) -> Self {
        let original = input.trim();
        let trimmed = original.to_lowercase();
        let mut parts = trimmed.split_whitespace();
        let base_cmd = match parts.next() {
            Some(word) => word,
            None => return Self::Nothing,
        };
        let args: Vec<&str> = parts.collect();

        match base_cmd {
            "help" if args.is_empty() => Self::Help,
            "clear" if args.is_empty() => Self::Clear,
            "history" if args.is_empty() => Self::History,
            "whoami" if args.is_empty() => Self::Text(content::USER.to_string()),
            "pwd" if args.is_empty() => Self::Text(content::HOME.to_string()),
            "date" if args.is_empty() => {
                Self::Text(Local::now().format("%a %b %d %H:%M:%S %Z %Y").to_string())
            }
            "uname" if args.is_empty() || args == ["-a"] => {
                Self::Text(content::UNAME_OUTPUT.to_string())
            }
            "neofetch" if args.is_empty() || args == ["--ascii"] => Self::Neofetch {
                uptime: uptime_field(),
            },
            "about" if args.is_empty() => Self::About,
            "skills" if args.is_empty() => Self::Skills,
            "projects" if args.is_empty() => Self::Projects,
            "contact" | "connect" if args.is_empty() => Self::Contact,
            "ls" => ls(&args),
            "cat" => cat(&args),
            "echo" => Self::Text(echo_text(original)),
            _ => Self::Err(format!("zsh: command not found: {base_cmd}")),
        }
    }
}

/// `ls` with only flags lists the home directory; with a target it lists the
/// matching pseudo-directory. Historical versions of the page disagreed on
/// which exact alias spellings were accepted, so targets are normalized
/// (leading `./` and trailing `/` stripped) before matching.
fn ls(args: &[&str]) -> CommandRes {
    let mut targets = args.iter().filter(|a| !a.starts_with('-'));
    let target = match targets.next() {
        None => return CommandRes::DirListing,
        Some(t) => *t,
    };
    let normalized = target.trim_start_matches("./").trim_end_matches('/');
    match normalized {
        "skills" => CommandRes::Skills,
        "projects" => CommandRes::Projects,
        "connect" => CommandRes::Contact,
        _ => CommandRes::Err(format!(
            "ls: cannot access '{target}': No such file or directory"
        )),
    }
}

/// There is no real filesystem: `about.txt` is the only readable file, any
/// other operand reports "No such file" verbatim.
fn cat(args: &[&str]) -> CommandRes {
    match args.first() {
        None => CommandRes::Err("cat: missing file operand".to_string()),
        Some(&"about.txt") => CommandRes::About,
        Some(file) => CommandRes::Err(format!("cat: {file}: No such file or directory")),
    }
}

/// `echo` preserves the original casing of its argument text: everything
/// after the command word and one separator char, extra whitespace kept.
/// Stepping over the separator as a char keeps this boundary-safe when the
/// separator is multi-byte (e.g. NBSP).
fn echo_text(original: &str) -> String {
    match original.find(char::is_whitespace) {
        Some(at) => {
            let mut rest = original[at..].chars();
            rest.next();
            rest.as_str().to_string()
        }
        None => String::new(),
    }
}

/// Days the current build has been serving, from the BUILD_TIME captured in
/// build.rs. Falls back to a fixed figure if the timestamp does not parse.
fn uptime_field() -> String {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(built) => {
            let days = Local::now()
                .signed_duration_since(built.with_timezone(&Local))
                .num_days()
                .max(0);
            format!("{days} days")
        }
        Err(_) => "42 days".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_echoes_first_token() {
        let res = CommandRes::from("foo bar");
        match res {
            CommandRes::Err(msg) => {
                assert!(msg.contains("command not found"));
                assert!(msg.contains("foo"));
                assert!(!msg.contains("bar"));
            }
            other => panic!("expected Err, got {other:?}"),
        }
    }

    #[test]
    fn cat_without_operand_is_a_usage_error() {
        match CommandRes::from("cat") {
            CommandRes::Err(msg) => assert!(msg.contains("missing file operand")),
            other => panic!("expected Err, got {other:?}"),
        }
    }

    #[test]
    fn cat_about_and_about_are_synonyms() {
        assert_eq!(CommandRes::from("cat about.txt"), CommandRes::About);
        assert_eq!(CommandRes::from("about"), CommandRes::About);
        assert_eq!(
            CommandRes::from("cat about.txt"),
            CommandRes::from("about")
        );
    }

    #[test]
    fn cat_unknown_file_reports_no_such_file_with_operand() {
        match CommandRes::from("cat missing.txt") {
            CommandRes::Err(msg) => {
                assert!(msg.contains("missing.txt"));
                assert!(msg.contains("No such file or directory"));
            }
            other => panic!("expected Err, got {other:?}"),
        }
    }

    #[test]
    fn sentinels_are_distinguishable() {
        assert_eq!(CommandRes::from("clear"), CommandRes::Clear);
        assert_eq!(CommandRes::from("history"), CommandRes::History);
        assert_ne!(CommandRes::from("clear"), CommandRes::from("history"));
        assert_ne!(CommandRes::from("clear"), CommandRes::from("help"));
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(CommandRes::from("  PWD  "), CommandRes::from("pwd"));
        assert_eq!(CommandRes::from("CLEAR"), CommandRes::Clear);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(CommandRes::from(""), CommandRes::Nothing);
        assert_eq!(CommandRes::from("   "), CommandRes::Nothing);
    }

    #[test]
    fn ls_flag_variants_all_list_the_directory() {
        for cmd in ["ls", "ls -la", "ls -l", "ls -a"] {
            assert_eq!(CommandRes::from(cmd), CommandRes::DirListing, "{cmd}");
        }
    }

    #[test]
    fn ls_target_aliases_are_normalized() {
        for cmd in [
            "skills",
            "ls skills",
            "ls skills/",
            "ls ./skills/",
            "ls -la ./skills/",
            "ls -la skills/",
        ] {
            assert_eq!(CommandRes::from(cmd), CommandRes::Skills, "{cmd}");
        }
        for cmd in ["projects", "ls projects", "ls -la ./projects/"] {
            assert_eq!(CommandRes::from(cmd), CommandRes::Projects, "{cmd}");
        }
        for cmd in ["contact", "connect", "ls connect", "ls -la ./connect/"] {
            assert_eq!(CommandRes::from(cmd), CommandRes::Contact, "{cmd}");
        }
    }

    #[test]
    fn ls_unknown_target_reports_the_target() {
        match CommandRes::from("ls /etc") {
            CommandRes::Err(msg) => assert!(msg.contains("/etc")),
            other => panic!("expected Err, got {other:?}"),
        }
    }

    #[test]
    fn echo_preserves_original_case() {
        assert_eq!(
            CommandRes::from("echo Hello World"),
            CommandRes::Text("Hello World".to_string())
        );
        assert_eq!(CommandRes::from("echo"), CommandRes::Text(String::new()));
    }

    #[test]
    fn echo_keeps_extra_whitespace_and_survives_multibyte_separators() {
        assert_eq!(
            CommandRes::from("echo   spaced"),
            CommandRes::Text("  spaced".to_string())
        );
        assert_eq!(
            CommandRes::from("echo\u{a0}hi"),
            CommandRes::Text("hi".to_string())
        );
    }

    #[test]
    fn whoami_and_pwd_report_the_persona() {
        assert_eq!(
            CommandRes::from("whoami"),
            CommandRes::Text(content::USER.to_string())
        );
        assert_eq!(
            CommandRes::from("pwd"),
            CommandRes::Text(content::HOME.to_string())
        );
    }

    #[test]
    fn neofetch_accepts_the_ascii_flag() {
        assert!(matches!(
            CommandRes::from("neofetch"),
            CommandRes::Neofetch { .. }
        ));
        assert!(matches!(
            CommandRes::from("neofetch --ascii"),
            CommandRes::Neofetch { .. }
        ));
    }

    #[test]
    fn known_command_detection() {
        assert!(is_known_command("help"));
        assert!(is_known_command("LS"));
        assert!(is_known_command("connect"));
        assert!(!is_known_command("frobnicate"));
    }
}
