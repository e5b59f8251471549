//! The fixed command vocabulary and its static text payloads.

/// A registered command. The vocabulary is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSpec {
    Help,
    Projects,
    Skills,
    Contact,
    Whoami,
    Clear,
    /// Easter egg, matched as one whole phrase.
    Deploy,
}

impl CommandSpec {
    /// Every command in registration order (also the `help` order).
    pub const ALL: [CommandSpec; 7] = [
        CommandSpec::Help,
        CommandSpec::Projects,
        CommandSpec::Skills,
        CommandSpec::Contact,
        CommandSpec::Whoami,
        CommandSpec::Clear,
        CommandSpec::Deploy,
    ];

    /// The normalized line that invokes this command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Whoami => "whoami",
            Self::Clear => "clear",
            Self::Deploy => "sudo deploy portfolio",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show commands",
            Self::Projects => "List and view projects",
            Self::Skills => "Show skill modules",
            Self::Contact => "Contact info",
            Self::Whoami => "About me",
            Self::Clear => "Clear terminal",
            Self::Deploy => "Deploy the portfolio",
        }
    }

    /// Hidden commands work but are left out of `help`.
    pub fn hidden(self) -> bool {
        matches!(self, Self::Deploy)
    }

    /// Fixed text for commands whose output never varies.
    ///
    /// `None` for the commands the registry renders itself (`help`,
    /// `projects`) and for the `clear` sentinel.
    pub fn static_text(self) -> Option<&'static str> {
        match self {
            Self::Skills => Some(SKILLS),
            Self::Contact => Some(CONTACT),
            Self::Whoami => Some(WHOAMI),
            Self::Deploy => Some(DEPLOY),
            Self::Help | Self::Projects | Self::Clear => None,
        }
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

const SKILLS: &str = "\
> Loading skill modules...

████████████████████ TypeScript 95%
███████████████░░░░ Rust 80%
██████████████░░░░░ Move 75%
█████████████████░░ Node.js 90%
████████████████░░░ PostgreSQL 85%
████████████████░░░ Docker 88%";

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

const CONTACT: &str = "\
📧 Email: victorygray59@gmail.com
🐙 GitHub: https://github.com/vic-Gray
💼 LinkedIn: https://www.linkedin.com/in/victory-azuonye/
🐦 X/Twitter: @victory_gray";

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

const WHOAMI: &str = r#"{
"name": "Victory Ifeanyi Azuonye",
"role": "Backend Engineer & Web3 Explorer",
"location": "Building the decentralized future",
"interests": ["APIs", "Smart Contracts", "System Design"],
"currently": "Open to opportunities"
}"#;

// ---------------------------------------------------------------------------
// sudo deploy portfolio
// ---------------------------------------------------------------------------

const DEPLOY: &str = "\
🚀 Initializing deployment...
📦 Building production bundle...
✅ Deployment successful!
🌐 Portfolio is now live at victory.dev";
