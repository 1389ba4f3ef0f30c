//! Input line tokenizer.

/// A recognised command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Any other keyword, kept verbatim for the reply
    Unknown(String),
}

impl Command {
    /// Map a keyword to a command. Keywords are case-sensitive.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add_birthday" => Self::AddBirthday,
            "show_birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let command = Command::from_keyword(parts.next()?);
    let args = parts.map(String::from).collect();
    Some(ParsedInput { command, args })
}
