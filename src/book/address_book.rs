//! Name-keyed, insertion-ordered store of contact records.

use crate::models::Record;
use chrono::{Days, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Length of the default upcoming-birthday window, in days after today.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// The format the window compares against: the first five characters of a
/// stored `DD.MM.YYYY` birthday.
const DAY_MONTH_FORMAT: &str = "%d.%m";

/// All contacts, keyed by name.
///
/// Iteration follows the order in which names were first added. Replacing
/// a record under an existing name keeps that name's position; deleting a
/// name and adding it again moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record already
    /// filed there. Nothing from the replaced record is kept.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, record)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    /// Records whose birthday falls within the seven days after `today`.
    ///
    /// See [`AddressBook::get_upcoming_birthdays_within`].
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<&Record> {
        self.get_upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Records whose birthday falls on one of the `days` days after `today`.
    ///
    /// Today itself is not part of the window. Matching is by the `DD.MM`
    /// text of the birthday only: the birth year is ignored and there is no
    /// leap-day adjustment, so `29.02` only matches in a window that
    /// contains a real 29 February. Results follow book iteration order.
    pub fn get_upcoming_birthdays_within(&self, today: NaiveDate, days: u64) -> Vec<&Record> {
        let window: HashSet<String> = (1..=days)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| date.format(DAY_MONTH_FORMAT).to_string())
            .collect();

        self.iter()
            .map(|(_, record)| record)
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|birthday| window.contains(birthday.day_month()))
            })
            .collect()
    }
}
