//! The single declarative source for everything the page presents: persona,
//! projects, skills and social links. Layouts render from these records, so
//! there is exactly one place to edit when a link changes.

pub const USER: &str = "lior";
pub const HOST: &str = "dev";
pub const HOME: &str = "/home/lior";

pub const NAME_ASCII: &str = r#"
  ██╗     ██╗ ██████╗ ██████╗
  ██║     ██║██╔═══██╗██╔══██╗
  ██║     ██║██║   ██║██████╔╝
  ██║     ██║██║   ██║██╔══██╗
  ███████╗██║╚██████╔╝██║  ██║
  ╚══════╝╚═╝ ╚═════╝ ╚═╝  ╚═╝
"#;

pub const ABOUT_LINES: [&str; 3] = [
    "Building at the intersection of AI and software engineering.",
    "I specialize in scalable systems - from microservices architecture to ML pipelines.",
    "Open source contributor. Problem solver. Lifelong learner.",
];

/// Label/value pairs shown under the neofetch ascii block.
pub const NEOFETCH_FIELDS: [(&str, &str); 5] = [
    ("OS", "Human v2.0"),
    ("Shell", "zsh 5.9"),
    ("Role", "Software Engineer"),
    ("Specialty", "AI Agents Manager"),
    ("Experience", "20+ years"),
];

pub const UNAME_OUTPUT: &str = "Human v2.0 lior-dev 20+ years experience";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        name: "blog",
        description: "Tech & AI thoughts - deep dives into software engineering",
        url: "https://blog.liorp.dev/",
    },
    Project {
        name: "milan",
        description: "Hebrew word game - daily puzzle challenge",
        url: "https://milan.liorp.dev/",
    },
    Project {
        name: "hzi",
        description: "Smart electricity calculator - optimize your energy usage",
        url: "https://hzi.liorp.dev/",
    },
    Project {
        name: "fireplace",
        description: "Retirement location finder - discover your ideal destination",
        url: "https://fireplace.liorp.dev/",
    },
    Project {
        name: "cmprsr",
        description: "Learn compression algorithms - interactive visualizations",
        url: "https://cmprsr.liorp.dev/",
    },
];

pub const SKILLS: [&str; 12] = [
    "ML/AI",
    "LLMs",
    "Python",
    "TypeScript",
    "React",
    "Node.js",
    "FastAPI",
    "PostgreSQL",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/liorpdev",
        icon: "gh",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/liorpolak",
        icon: "in",
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/liorpdev",
        icon: "tw",
    },
];
