//! Desktop rendition of the Folio portfolio site, built on iced.
//!
//! All site behavior lives in `folio-core`; this crate maps its view models
//! onto widgets and feeds it window sizes, scroll offsets and clock ticks.

pub mod app;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
