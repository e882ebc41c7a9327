//! Boot-sequence choreography, computed once from constants.
//!
//! Every scripted reveal is scheduled against a common epoch (component
//! mount), so the whole sequence is a read-only table of millisecond offsets
//! rather than a chain of nested timers.

pub const TYPING_SPEED_MS: u64 = 30;
pub const OUTPUT_DELAY_MS: u64 = 100;
pub const SECTION_DELAY_MS: u64 = 800;
pub const CMD_OUTPUT_DELAY_MS: u64 = 1500;

pub const CMD_NEOFETCH: &str = "neofetch --ascii";
pub const CMD_CAT: &str = "cat about.txt";
pub const CMD_SKILLS: &str = "ls -la ./skills/";
pub const CMD_PROJECTS: &str = "ls -la ./projects/";
pub const CMD_CONNECT: &str = "ls -la ./connect/";

/// Time from typing start until a command's output may appear: one tick per
/// character plus a short pause.
pub const fn command_duration(cmd: &str) -> u64 {
    cmd.len() as u64 * TYPING_SPEED_MS + OUTPUT_DELAY_MS
}

/// Absolute millisecond offsets, relative to mount, for each boot milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTimeline {
    pub last_login: u64,
    pub neofetch_cmd: u64,
    pub neofetch_typing_delay: u64,
    pub neofetch_ascii: u64,
    pub neofetch_meta: u64,
    pub cat_cmd: u64,
    pub cat_typing_delay: u64,
    pub cat_output: u64,
    pub skills_cmd: u64,
    pub skills_typing_delay: u64,
    pub skills_output: u64,
    pub projects_cmd: u64,
    pub projects_typing_delay: u64,
    pub projects_output: u64,
    pub connect_cmd: u64,
    pub connect_typing_delay: u64,
    pub connect_output: u64,
    pub hint: u64,
    pub cursor_hide: u64,
    pub interactive: u64,
}

impl BootTimeline {
    pub const fn new() -> Self {
        let t1 = 100;
        let t2 = t1 + command_duration(CMD_NEOFETCH) + CMD_OUTPUT_DELAY_MS;
        let t3 = t2 + SECTION_DELAY_MS;
        let t4 = t3 + command_duration(CMD_CAT) + CMD_OUTPUT_DELAY_MS;
        let t5 = t4 + SECTION_DELAY_MS;
        let t6 = t5 + command_duration(CMD_SKILLS) + CMD_OUTPUT_DELAY_MS;
        let t7 = t6 + SECTION_DELAY_MS;
        let t8 = t7 + command_duration(CMD_PROJECTS) + CMD_OUTPUT_DELAY_MS;
        let t9 = t8 + SECTION_DELAY_MS;
        let connect_output = t9 + command_duration(CMD_CONNECT) + CMD_OUTPUT_DELAY_MS;
        Self {
            last_login: 0,
            neofetch_cmd: t1,
            neofetch_typing_delay: 0,
            neofetch_ascii: t2,
            neofetch_meta: t2 + 400,
            cat_cmd: t2 + 400,
            cat_typing_delay: SECTION_DELAY_MS,
            cat_output: t4,
            skills_cmd: t4,
            skills_typing_delay: SECTION_DELAY_MS,
            skills_output: t6,
            projects_cmd: t6,
            projects_typing_delay: SECTION_DELAY_MS,
            projects_output: t8,
            connect_cmd: t8,
            connect_typing_delay: SECTION_DELAY_MS,
            connect_output,
            hint: connect_output + 100,
            cursor_hide: connect_output + 200,
            interactive: connect_output + 200,
        }
    }

    /// Milestones in schedule order, for asserting the reveal ordering.
    pub fn milestones(&self) -> [(&'static str, u64); 14] {
        [
            ("last_login", self.last_login),
            ("neofetch_cmd", self.neofetch_cmd),
            ("neofetch_ascii", self.neofetch_ascii),
            ("neofetch_meta", self.neofetch_meta),
            ("cat_cmd", self.cat_cmd),
            ("cat_output", self.cat_output),
            ("skills_cmd", self.skills_cmd),
            ("skills_output", self.skills_output),
            ("projects_cmd", self.projects_cmd),
            ("projects_output", self.projects_output),
            ("connect_cmd", self.connect_cmd),
            ("connect_output", self.connect_output),
            ("hint", self.hint),
            ("cursor_hide", self.cursor_hide),
        ]
    }
}

impl Default for BootTimeline {
    fn default() -> Self {
        Self::new()
    }
}

pub const TIMELINE: BootTimeline = BootTimeline::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_are_monotonically_non_decreasing() {
        let timeline = BootTimeline::new();
        let milestones = timeline.milestones();
        for pair in milestones.windows(2) {
            assert!(
                pair[0].1 <= pair[1].1,
                "{} ({}) fires after {} ({})",
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1
            );
        }
    }

    #[test]
    fn command_duration_scales_with_length() {
        assert_eq!(command_duration(""), OUTPUT_DELAY_MS);
        assert_eq!(
            command_duration(CMD_CAT),
            CMD_CAT.len() as u64 * TYPING_SPEED_MS + OUTPUT_DELAY_MS
        );
        assert!(command_duration(CMD_NEOFETCH) > command_duration(CMD_CAT));
    }

    #[test]
    fn outputs_follow_their_commands_by_at_least_typing_time() {
        let t = BootTimeline::new();
        assert!(t.cat_output >= t.cat_cmd + command_duration(CMD_CAT));
        assert!(t.skills_output >= t.skills_cmd + command_duration(CMD_SKILLS));
        assert!(t.projects_output >= t.projects_cmd + command_duration(CMD_PROJECTS));
    }

    #[test]
    fn interactive_mode_starts_after_the_last_reveal() {
        let t = BootTimeline::new();
        assert!(t.interactive >= t.hint);
        assert!(t.interactive >= t.connect_output);
    }
}
