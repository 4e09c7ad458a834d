// Fixed-vocabulary shell used on the "Interactive Shell" panel. Nothing is
// executed; every command maps to a canned reply.

pub const PROMPT: &str = "sourish@portfolio:~$";

pub const WELCOME_LINES: [&str; 2] = ["Welcome to Sourish-OS v3.14", "Type \"help\" to list commands."];

pub const HELP_TEXT: &str = "Available: help, ls, whoami, skills, clear, uptime, contact";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    Whoami,
    Skills,
    Clear,
    Uptime,
    Contact,
}

impl Command {
    /// Match an already trimmed, lowercased command word.
    #[inline]
    pub fn parse(cmd: &str) -> Option<Command> {
        match cmd {
            "help" => Some(Command::Help),
            "ls" => Some(Command::Ls),
            "whoami" => Some(Command::Whoami),
            "skills" => Some(Command::Skills),
            "clear" => Some(Command::Clear),
            "uptime" => Some(Command::Uptime),
            "contact" => Some(Command::Contact),
            _ => None,
        }
    }

    /// Canned reply; `clear` has none because it wipes the log instead.
    pub fn response(self) -> Option<&'static str> {
        match self {
            Command::Help => Some(HELP_TEXT),
            Command::Ls => Some("projects/  research/  cv.pdf  id_rsa.pub"),
            Command::Whoami => {
                Some("Sourish Dey - Cloud | AI/ML | DevOps Engineer. Pursuing B.Tech @ KIIT.")
            }
            Command::Skills => Some(
                "Cloud (AWS, GCP, Azure), DevOps (K8s, Docker, Terraform), ML (PyTorch, TensorFlow), Programming (Python, Go, JS)",
            ),
            Command::Clear => None,
            Command::Uptime => Some("Up 20 years, 3 months, 14 days. Load average: 0.98, 0.95, 0.99"),
            Command::Contact => Some("Email: sourish@example.com | LinkedIn: /in/sourish-dey"),
        }
    }
}

/// What a submit did to the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Appended,
    Cleared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    history: Vec<String>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            history: WELCOME_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run one line of input. The echo keeps the raw text; lookup uses the
    /// trimmed, lowercased form.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let cmd = input.trim().to_lowercase();
        let response = match Command::parse(&cmd) {
            Some(Command::Clear) => {
                self.history.clear();
                return SubmitOutcome::Cleared;
            }
            Some(c) => c.response().unwrap_or_default().to_string(),
            None => format!("Command not found: {cmd}"),
        };
        self.history.push(echo_line(input));
        self.history.push(response);
        SubmitOutcome::Appended
    }
}

#[inline]
pub fn echo_line(input: &str) -> String {
    format!("{PROMPT} {input}")
}
