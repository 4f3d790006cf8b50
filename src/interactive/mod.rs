//! Interactive input collection
//!
//! - `prompter` - The `Prompter` capability and its dialoguer terminal implementation
//! - `session` - The prompt sequence building a `DepositRequest`, and result display

pub mod prompter;
pub mod session;

pub use prompter::{Prompter, TerminalPrompter};
pub use session::{present, Session, SessionResult};
