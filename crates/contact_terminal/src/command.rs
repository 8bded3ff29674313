//! The dispatch table.

use crate::line::LineContent;
use crate::profile::ContactProfile;

/// A platform action a command asks for once its output has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    CopyToClipboard { value: String },
    OpenUrl { url: String },
    Download { asset: String, file_name: String },
    ScrollTo { anchor: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Listing generated from the table itself.
    Help,
    /// Resets the session to its banner.
    Clear,
    Respond {
        lines: Vec<LineContent>,
        actions: Vec<SideEffect>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub key: String,
    pub description: String,
    pub handler: Handler,
}

impl CommandEntry {
    fn new(key: &str, description: &str, handler: Handler) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            handler,
        }
    }

    fn respond(
        key: &str,
        description: &str,
        lines: Vec<LineContent>,
        actions: Vec<SideEffect>,
    ) -> Self {
        Self::new(key, description, Handler::Respond { lines, actions })
    }
}

/// `navigate` flags with the page anchor and label each one targets.
pub const NAVIGATE_TARGETS: [(&str, &str, &str); 7] = [
    ("home", "hero", "Home"),
    ("philosophy", "devops-philosophy", "DevOps Philosophy"),
    ("skills", "technical-arsenal", "Technical Arsenal"),
    ("projects", "project-showcase", "Project Showcase"),
    ("testimonials", "testimonials", "Testimonials"),
    ("experience", "career-timeline", "Career Timeline"),
    ("contact", "contact-terminal", "Contact Terminal"),
];

/// Canonical form used for lookup: trimmed and lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ordered, immutable command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    pub fn from_profile(profile: &ContactProfile) -> Self {
        let mut entries = vec![CommandEntry::new("help", "Show this help", Handler::Help)];

        entries.push(CommandEntry::respond(
            "contact --email",
            "Copy email address",
            vec![
                LineContent::success(format!("📧 Email: {}", profile.email)),
                LineContent::output("Email copied to clipboard!"),
            ],
            vec![SideEffect::CopyToClipboard {
                value: profile.email.clone(),
            }],
        ));

        if let Some(phone) = profile.phone.as_deref() {
            entries.push(CommandEntry::respond(
                "contact --phone",
                "Copy phone number",
                vec![
                    LineContent::success(format!("📱 Phone: {phone}")),
                    LineContent::output("Phone number copied to clipboard!"),
                ],
                vec![SideEffect::CopyToClipboard {
                    value: phone.to_string(),
                }],
            ));
        }

        entries.push(CommandEntry::respond(
            "contact --linkedin",
            "Open LinkedIn profile",
            vec![LineContent::success("🔗 Opening LinkedIn profile...")],
            vec![SideEffect::OpenUrl {
                url: profile.linkedin_url.clone(),
            }],
        ));
        entries.push(CommandEntry::respond(
            "contact --github",
            "Open GitHub profile",
            vec![LineContent::success("🐙 Opening GitHub profile...")],
            vec![SideEffect::OpenUrl {
                url: profile.github_url.clone(),
            }],
        ));
        entries.push(CommandEntry::respond(
            "download --resume",
            "Download resume",
            vec![
                LineContent::success("📄 Downloading resume..."),
                LineContent::output(format!(
                    "{} downloaded successfully!",
                    profile.resume.file_name
                )),
            ],
            vec![SideEffect::Download {
                asset: profile.resume.path.clone(),
                file_name: profile.resume.file_name.clone(),
            }],
        ));

        for (flag, anchor, label) in NAVIGATE_TARGETS {
            entries.push(CommandEntry::respond(
                &format!("navigate --{flag}"),
                &format!("Scroll to {label}"),
                vec![LineContent::success(format!("🧭 Navigating to {label}..."))],
                vec![SideEffect::ScrollTo {
                    anchor: anchor.to_string(),
                }],
            ));
        }

        entries.push(CommandEntry::respond(
            "status",
            "Show current status",
            vec![
                LineContent::success("✅ Infrastructure Status: OPERATIONAL"),
                LineContent::success("✅ Available for new opportunities"),
                LineContent::success("✅ Response time: < 24 hours"),
                LineContent::output("📍 Location: Remote-first"),
            ],
            Vec::new(),
        ));
        entries.push(CommandEntry::respond(
            "whoami",
            "About me",
            vec![
                LineContent::output(format!("{} - {}", profile.name, profile.title)),
                LineContent::output("🚀 Specializing in cloud-native infrastructure"),
                LineContent::output("☁️  Multi-cloud architecture expert"),
                LineContent::output("🛡️  Security-first automation advocate"),
                LineContent::output("📈 Proven track record of cost optimization"),
            ],
            Vec::new(),
        ));
        entries.push(CommandEntry::new("clear", "Clear terminal", Handler::Clear));

        Self { entries }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Exact-match lookup of an already normalized key.
    pub fn lookup(&self, key: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// `Available commands:` followed by one line per entry other than `help`.
    pub fn help_lines(&self) -> Vec<LineContent> {
        let listed: Vec<&CommandEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.handler != Handler::Help)
            .collect();
        let key_width = listed.iter().map(|entry| entry.key.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(listed.len() + 1);
        lines.push(LineContent::output("Available commands:"));
        lines.extend(listed.into_iter().map(|entry| {
            LineContent::output(format!(
                "  {:<key_width$}  - {}",
                entry.key, entry.description
            ))
        }));
        lines
    }
}
