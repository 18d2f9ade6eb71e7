//! Session commands
//!
//! A line is split on whitespace; the first token (case-insensitive) names
//! the command and the rest are positional arguments. Extra arguments are
//! ignored, missing ones are reported with a usage hint.

use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use super::output::Output;
use crate::domain::{
    upcoming_birthdays_within, BirthdayDate, ContactError, ContactRecord, Directory,
    PhoneNumber, UpcomingBirthday,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Exit,
    Unknown(String),
}

/// Splits a raw line into a lowercased command name and its arguments
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(cmd) => (cmd.to_lowercase(), parts.map(str::to_string).collect()),
        None => (String::new(), Vec::new()),
    }
}

fn take<const N: usize>(args: Vec<String>, hint: &'static str) -> Result<[String; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArgument(hint));
    }
    let mut args = args.into_iter();
    Ok(std::array::from_fn(|_| args.next().unwrap_or_default()))
}

const NAME_HINT: &str = "Enter user name.";

impl Command {
    pub fn parse(name: &str, args: Vec<String>) -> Result<Self, CommandError> {
        let command = match name {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take(args, "Give me name and phone please.")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] =
                    take(args, "Give me name, old phone and new phone please.")?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = take(args, NAME_HINT)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take(args, "Give me name and birthday please.")?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take(args, NAME_HINT)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "remove-phone" => {
                let [name, phone] = take(args, "Give me name and phone please.")?;
                Command::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take(args, NAME_HINT)?;
                Command::Delete { name }
            }
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(&'static str),
    Phones { name: String, phones: Vec<PhoneNumber> },
    Contacts(Vec<ContactRecord>),
    Birthday { name: String, birthday: Option<BirthdayDate> },
    Upcoming(Vec<UpcomingBirthday>),
    Exit,
}

fn lookup<'a>(directory: &'a Directory, name: &str) -> Result<&'a ContactRecord, ContactError> {
    directory
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
}

fn lookup_mut<'a>(
    directory: &'a mut Directory,
    name: &str,
) -> Result<&'a mut ContactRecord, ContactError> {
    directory
        .find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
}

/// Runs a command against the session's directory
pub fn execute(
    command: Command,
    directory: &mut Directory,
    today: NaiveDate,
    window_days: u32,
) -> Result<Reply, CommandError> {
    let reply = match command {
        Command::Hello => Reply::Message("How can I help you?"),

        Command::Add { name, phone } => match directory.find_mut(&name) {
            Some(record) => {
                record.add_phone(&phone)?;
                Reply::Message("Contact updated.")
            }
            None => {
                let mut record = ContactRecord::new(name)?;
                record.add_phone(&phone)?;
                directory.add_record(record);
                Reply::Message("Contact added.")
            }
        },

        Command::Change { name, old, new } => {
            lookup_mut(directory, &name)?.edit_phone(&old, &new)?;
            Reply::Message("Contact updated.")
        }

        Command::Phone { name } => {
            let record = lookup(directory, &name)?;
            Reply::Phones {
                phones: record.phones().to_vec(),
                name,
            }
        }

        Command::All => Reply::Contacts(directory.records().cloned().collect()),

        Command::AddBirthday { name, birthday } => {
            lookup_mut(directory, &name)?.set_birthday(&birthday)?;
            Reply::Message("Birthday added.")
        }

        Command::ShowBirthday { name } => {
            let record = lookup(directory, &name)?;
            Reply::Birthday {
                birthday: record.birthday().copied(),
                name,
            }
        }

        Command::Birthdays => {
            Reply::Upcoming(upcoming_birthdays_within(directory, today, window_days))
        }

        Command::RemovePhone { name, phone } => {
            lookup_mut(directory, &name)?.remove_phone(&phone)?;
            Reply::Message("Phone removed.")
        }

        Command::Delete { name } => {
            directory.delete(&name)?;
            Reply::Message("Contact deleted.")
        }

        Command::Exit => Reply::Exit,

        Command::Unknown(_) => Reply::Message("Invalid command."),
    };
    Ok(reply)
}

impl Reply {
    /// Writes the reply in the session's output format
    pub fn render(&self, output: &Output) {
        match self {
            Reply::Message(message) => output.success(message),
            Reply::Exit => output.success("Good bye!"),

            Reply::Phones { name, phones } => {
                if output.is_json() {
                    output.data(&json!({ "name": name, "phones": phones }));
                } else if phones.is_empty() {
                    println!("No phones for this contact.");
                } else {
                    let phones: Vec<&str> = phones.iter().map(PhoneNumber::as_str).collect();
                    println!("{}", phones.join("; "));
                }
            }

            Reply::Contacts(records) => {
                if output.is_json() {
                    output.data(records);
                } else if records.is_empty() {
                    println!("No contacts stored.");
                } else {
                    for record in records {
                        println!("{}", record);
                    }
                }
            }

            Reply::Birthday { name, birthday } => {
                if output.is_json() {
                    output.data(&json!({ "name": name, "birthday": birthday }));
                } else {
                    match birthday {
                        Some(birthday) => println!("{}", birthday),
                        None => println!("No birthday set for this contact."),
                    }
                }
            }

            Reply::Upcoming(upcoming) => {
                if output.is_json() {
                    output.data(upcoming);
                } else if upcoming.is_empty() {
                    println!("No birthdays for the next week.");
                } else {
                    for entry in upcoming {
                        println!("{}", entry);
                    }
                }
            }
        }
    }
}
