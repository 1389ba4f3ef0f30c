//! Assistant Bot - an in-memory address book driven by a small command language.
//!
//! The bot keeps contacts (a name, phone numbers, an optional birthday) for
//! the lifetime of the process and answers commands such as `add`, `phone`,
//! `add_birthday`, and `birthdays`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: The contact `Record`
//! - **book**: The name-keyed `AddressBook` and the upcoming-birthday query
//! - **bot**: Input parsing, command handlers, and the session loop
//! - **clock**: Source of today's date
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod bot;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::AddressBook;
pub use bot::{run_session, Reply, Session};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
