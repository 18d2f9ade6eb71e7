//! # Command-Line Interface
//!
//! Interactive session, command parsing and output formatting.
//!
//! ## Commands
//!
//! | Command | Arguments | Purpose |
//! |---------|-----------|---------|
//! | `add` | name phone | Create a contact or add a phone to it |
//! | `change` | name old new | Replace a phone number |
//! | `phone` | name | Show a contact's phones |
//! | `all` | | List every contact |
//! | `add-birthday` | name DD.MM.YYYY | Set a birthday |
//! | `show-birthday` | name | Show a birthday |
//! | `birthdays` | | Congratulation dates for the coming week |
//! | `remove-phone` | name phone | Remove a phone |
//! | `delete` | name | Remove a contact |
//! | `hello` | | Greeting |
//! | `close`, `exit` | | End the session |
//!
//! ## Output Formats
//!
//! `--format text` (default) prints human-readable lines;
//! `--format json` prints one JSON document per reply.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! book --verbose --today 2025-11-12
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod output;
mod command;
mod session;

pub use app::{Cli, run};
pub use command::{execute, parse_input, Command, CommandError, Reply};
pub use output::{Output, OutputFormat};
pub use session::Session;
