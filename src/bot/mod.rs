//! Interactive session for the assistant bot.
//!
//! A `Session` owns the address book and dispatches parsed input lines to
//! the command handlers. [`run_session`] drives a session over any async
//! line reader and writer; the binary uses stdin and stdout.

pub mod handlers;
pub mod parser;

pub use handlers::{GOODBYE_MESSAGE, WELCOME_MESSAGE};
pub use parser::{parse_input, Command, ParsedInput};

use crate::book::{AddressBook, UPCOMING_WINDOW_DAYS};
use crate::clock::Clock;
use anyhow::Result;
use handlers::respond;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// What the session prints after a line, and whether it keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// One user's conversation with the bot.
pub struct Session<C: Clock> {
    book: AddressBook,
    clock: C,
    upcoming_days: u64,
}

impl<C: Clock> Session<C> {
    /// Create a session with an empty book and the default 7-day window.
    pub fn new(clock: C) -> Self {
        Self::with_upcoming_days(clock, UPCOMING_WINDOW_DAYS)
    }

    pub fn with_upcoming_days(clock: C, upcoming_days: u64) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            upcoming_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one raw input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        parse_input(line).map(|input| self.dispatch(&input))
    }

    /// Route a parsed command to its handler.
    pub fn dispatch(&mut self, input: &ParsedInput) -> Reply {
        debug!("Dispatching {:?} with {} args", input.command, input.args.len());

        let args = &input.args;
        let book = &mut self.book;

        let reply = match &input.command {
            Command::Hello => WELCOME_MESSAGE.to_string(),
            Command::Add => respond(handlers::add_contact(args, book)),
            Command::Change => respond(handlers::change_contact(args, book)),
            Command::Phone => respond(handlers::show_phone(args, book)),
            Command::All => respond(handlers::show_all(book)),
            Command::AddBirthday => respond(handlers::add_birthday(args, book)),
            Command::ShowBirthday => respond(handlers::show_birthday(args, book)),
            Command::Birthdays => respond(handlers::birthdays(
                book,
                self.clock.today(),
                self.upcoming_days,
            )),
            Command::Exit => return Reply::Exit(GOODBYE_MESSAGE.to_string()),
            Command::Unknown(keyword) => format!("Unknown command: {}", keyword),
        };

        Reply::Continue(reply)
    }
}

/// Run the read/dispatch/print loop until `close`/`exit` or end of input.
///
/// The welcome message is written first, then `prompt` before every read.
pub async fn run_session<C, R, W>(
    session: &mut Session<C>,
    reader: R,
    mut writer: W,
    prompt: &str,
) -> Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    writer
        .write_all(format!("{}\n", WELCOME_MESSAGE).as_bytes())
        .await?;

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input, closing session");
            break;
        };

        let Some(reply) = session.handle_line(&line) else {
            continue;
        };

        writer
            .write_all(format!("{}\n", reply.text()).as_bytes())
            .await?;

        if let Reply::Exit(_) = reply {
            info!("Exit requested, closing session");
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}
