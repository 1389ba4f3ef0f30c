//! Command handlers.
//!
//! Each handler takes the command's arguments and the address book, and
//! returns either the reply text or a `CommandError`. [`respond`] turns
//! either outcome into the line printed to the user.

use crate::book::{AddressBook, UPCOMING_WINDOW_DAYS};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot! How can I help you?";
pub const GOODBYE_MESSAGE: &str = "Good bye!";

/// Collapse a handler outcome into the reply shown to the user.
pub fn respond(result: CommandResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(err) => {
            debug!("Command failed: {:?}", err);
            err.to_string()
        }
    }
}

/// The first argument, typically a contact name.
fn first_arg(args: &[String]) -> CommandResult<&str> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

/// The first two arguments; extra arguments are ignored.
fn two_args(args: &[String]) -> CommandResult<(&str, &str)> {
    match args {
        [first, second, ..] => Ok((first.as_str(), second.as_str())),
        _ => Err(CommandError::WrongArgumentCount {
            expected: 2,
            got: args.len(),
        }),
    }
}

/// Exactly two arguments.
fn exactly_two_args(args: &[String]) -> CommandResult<(&str, &str)> {
    match args {
        [first, second] => Ok((first.as_str(), second.as_str())),
        _ => Err(CommandError::WrongArgumentCount {
            expected: 2,
            got: args.len(),
        }),
    }
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
///
/// A new contact is filed before its phone is validated, so a rejected
/// phone still leaves the new contact in the book with no phones.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = two_args(args)?;

    let message = if book.contains(name) {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }
    Ok(message.to_string())
}

/// `change <name> <phone>`: append another phone to an existing contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = two_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))?;
    record.add_phone(phone)?;

    Ok(format!("Contact updated: {} - {}", name, phone))
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = first_arg(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))?;

    Ok(format!("{}'s phone number: {}", name, record))
}

/// `all`
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found".to_string());
    }

    Ok(book
        .iter()
        .map(|(name, record)| format!("{} - {}", name, record))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add_birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, birthday) = exactly_two_args(args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::BirthdayContactNotFound(name.to_string()))?;
    record.add_birthday(birthday)?;

    Ok(format!("Birthday added for {}.", name))
}

/// `show_birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = first_arg(args)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::BirthdayContactNotFound(name.to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday),
        None => format!("No birthday found for {}.", name),
    })
}

/// `birthdays`: contacts with a birthday in the `days` days after `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, days: u64) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays_within(today, days);
    if upcoming.is_empty() {
        return Ok(no_upcoming_message(days));
    }

    let lines = upcoming
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!("Upcoming birthdays:\n{}", lines))
}

fn no_upcoming_message(days: u64) -> String {
    match days {
        UPCOMING_WINDOW_DAYS => "No upcoming birthdays in the next week.".to_string(),
        1 => "No upcoming birthdays tomorrow.".to_string(),
        _ => format!("No upcoming birthdays in the next {} days.", days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_two_args_ignores_extras() {
        let values = args(&["Ann", "1234567890", "extra"]);
        assert_eq!(two_args(&values).unwrap(), ("Ann", "1234567890"));
    }

    #[test]
    fn test_two_args_too_few() {
        assert_eq!(
            two_args(&args(&["Ann"])).unwrap_err(),
            CommandError::WrongArgumentCount {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_exactly_two_args_rejects_extras() {
        assert!(exactly_two_args(&args(&["Ann", "01.01.2000", "x"])).is_err());
        assert!(exactly_two_args(&args(&["Ann", "01.01.2000"])).is_ok());
    }

    #[test]
    fn test_first_arg_missing() {
        assert_eq!(first_arg(&[]).unwrap_err(), CommandError::MissingArgument);
    }

    #[test]
    fn test_no_upcoming_message_names_window() {
        assert_eq!(
            no_upcoming_message(7),
            "No upcoming birthdays in the next week."
        );
        assert_eq!(no_upcoming_message(1), "No upcoming birthdays tomorrow.");
        assert_eq!(
            no_upcoming_message(30),
            "No upcoming birthdays in the next 30 days."
        );
    }

    #[test]
    fn test_add_contact_files_record_before_phone_check() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["Ann", "123"]), &mut book).unwrap_err();

        assert_eq!(err, CommandError::InvalidPhone("123".to_string()));
        assert!(book.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_respond_uses_error_message() {
        let reply = respond(Err(CommandError::UnknownContact("Zoe".to_string())));
        assert_eq!(reply, "Contact not found: Zoe");
        assert_eq!(respond(Ok("fine".to_string())), "fine");
    }
}
