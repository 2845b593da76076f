//! Parsing of interactive viewer commands.

/// One line of input to the interactive viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open an address (`go <url>`, or a bare URL on its own).
    Go(String),
    /// Step back in history.
    Back,
    /// Step forward in history.
    Forward,
    /// Load the current page again.
    Reload,
    /// Open the home page.
    Home,
    /// List the history entries.
    History,
    /// Print the command list.
    Help,
    /// Leave the viewer.
    Quit,
    /// Blank line.
    Empty,
    /// Anything that is not a command or an address.
    Unknown(String),
}

/// Text shown by the `help` command.
pub const HELP: &str = "\
Commands:
  go <url>    open a page (a bare URL works too)
  back, b     previous page
  forward, f  next page
  reload, r   load the current page again
  home        open the home page
  history     list visited pages
  help, ?     show this list
  quit, q     leave";

impl Command {
    /// Parse one input line. Command words are case-insensitive.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest.is_empty()) {
            ("", _) => Self::Empty,
            ("go" | "open", false) => Self::Go(rest.to_string()),
            ("back" | "b", true) => Self::Back,
            ("forward" | "f", true) => Self::Forward,
            ("reload" | "r", true) => Self::Reload,
            ("home", true) => Self::Home,
            ("history", true) => Self::History,
            ("help" | "?", true) => Self::Help,
            ("quit" | "q" | "exit", true) => Self::Quit,
            (_, true) if looks_like_address(word) => Self::Go(word.to_string()),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// A lone token is taken as an address if it has a dot, a colon or a slash.
fn looks_like_address(word: &str) -> bool {
    word.contains(['.', ':', '/'])
}
