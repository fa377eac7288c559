//! Command implementations.

pub mod chat;
pub mod export;
pub mod history;
pub mod import;
pub mod key;
pub mod notes;
pub mod summarize;

pub use self::chat::{execute_chat, send_turn, ChatTurn};
pub use self::export::{execute_export, export_journal};
pub use self::history::execute_history;
pub use self::import::{execute_import, import_journal};
pub use self::key::execute_key;
pub use self::notes::execute_notes;
pub use self::summarize::execute_summarize;
