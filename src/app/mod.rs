//! Application layer: the deck data, navigation and export controllers, and
//! the coordinator that ties them to the FLTK widgets.

pub mod deck;
pub mod error;
pub mod export;
pub mod messages;
pub mod navigation;
pub mod notify;
pub mod platform;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use deck::Deck;
pub use error::{AppError, Result};
pub use export::{ExportController, ExportOutcome, ExportResponse};
pub use messages::Message;
pub use navigation::NavigationController;
pub use notify::{Notice, NoticeKind, Notifier};
pub use settings::{AppSettings, ThemeMode};
