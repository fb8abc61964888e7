//! UI-independent state: configuration, navigation and the form state machines.

pub mod config;
pub mod messages;
pub mod navigation;
pub mod product_entry;
pub mod sales;

pub use config::AppConfig;
pub use messages::{FormMessage, MessageKind};
pub use navigation::{Navigator, Screen};
pub use product_entry::ProductEntryForm;
pub use sales::{PendingSale, SaleDraft, SalesForm, SalesPhase};
