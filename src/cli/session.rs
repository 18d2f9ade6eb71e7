//! Interactive read-eval-print session
//!
//! The session owns the directory for its whole lifetime; nothing is
//! persisted once it ends.

use std::io::BufRead;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::command::{execute, parse_input, Command, CommandError, Reply};
use super::output::Output;
use crate::config::Config;
use crate::domain::{ContactError, ContactRecord, Directory};

pub struct Session {
    directory: Directory,
    today: NaiveDate,
    window_days: u32,
    greeting: String,
    prompt: String,
}

impl Session {
    pub fn new(today: NaiveDate, config: &Config) -> Self {
        Self {
            directory: Directory::new(),
            today,
            window_days: config.birthdays.window_days,
            greeting: config.session.greeting.clone(),
            prompt: config.session.prompt.clone(),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Adds the sample contacts John, Jane and Jim
    pub fn seed_demo(&mut self) -> Result<(), ContactError> {
        let samples = [
            ("John", "1234567890", "13.11.2025"),
            ("Jane", "9876543210", "12.11.2025"),
            ("Jim", "1112223333", "19.11.2025"),
        ];

        for (name, phone, birthday) in samples {
            let mut record = ContactRecord::new(name)?;
            record.add_phone(phone)?;
            record.set_birthday(birthday)?;
            self.directory.add_record(record);
        }
        Ok(())
    }

    /// Parses and executes one input line. Blank lines yield no reply.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, CommandError> {
        let (name, args) = parse_input(line);
        if name.is_empty() {
            return Ok(None);
        }

        let command = Command::parse(&name, args)?;
        execute(command, &mut self.directory, self.today, self.window_days).map(Some)
    }

    /// Reads commands until `close`/`exit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R, output: &Output) -> Result<()> {
        output.verbose_ctx("session", &format!("Reference date: {}", self.today));
        output.success(&self.greeting);

        loop {
            output.prompt(&self.prompt);

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                output.verbose_ctx("session", "End of input");
                output.blank();
                Reply::Exit.render(output);
                break;
            }

            match self.handle_line(&line) {
                Ok(Some(reply)) => {
                    reply.render(output);
                    if reply == Reply::Exit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    output.verbose_ctx("session", &format!("{:?}", e));
                    output.error(&e.to_string());
                }
            }
        }

        output.verbose_ctx(
            "session",
            &format!("Session ended with {} contact(s)", self.directory.len()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), &Config::default())
    }

    #[test]
    fn blank_line_is_ignored() {
        let mut session = session();
        assert_eq!(session.handle_line("\n"), Ok(None));
        assert_eq!(session.handle_line("   "), Ok(None));
    }

    #[test]
    fn state_carries_across_lines() {
        let mut session = session();
        session.handle_line("add John 1234567890").unwrap();
        session.handle_line("add-birthday John 13.11.1980").unwrap();

        let record = session.directory().find("John").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "13.11.1980");
    }

    #[test]
    fn demo_contacts_are_upcoming() {
        let mut session = session();
        session.seed_demo().unwrap();
        assert_eq!(session.directory().len(), 3);

        match session.handle_line("birthdays").unwrap() {
            Some(Reply::Upcoming(upcoming)) => {
                let lines: Vec<String> = upcoming.iter().map(|u| u.to_string()).collect();
                assert_eq!(
                    lines,
                    vec!["Jane: 2025.11.12", "John: 2025.11.13", "Jim: 2025.11.19"]
                );
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut session = session();
        assert!(session.handle_line("phone Ghost").is_err());
        assert!(session.handle_line("add Ghost 1234567890").is_ok());
    }

    #[test]
    fn run_stops_at_exit() {
        let mut session = session();
        let input = "add John 1234567890\nexit\nadd Jane 9876543210\n";
        session
            .run(input.as_bytes(), &Output::new(Default::default(), false))
            .unwrap();

        assert!(session.directory().find("John").is_some());
        assert!(session.directory().find("Jane").is_none());
    }

    #[test]
    fn run_stops_at_end_of_input() {
        let mut session = session();
        session
            .run("add John 1234567890\n".as_bytes(), &Output::new(Default::default(), false))
            .unwrap();
        assert_eq!(session.directory().len(), 1);
    }
}
