//! # Folio Core
//!
//! Framework-free logic of the Folio portfolio site. Nothing in this crate
//! touches a window, a widget tree or a clock: hosts feed it measurements,
//! scroll positions and `Instant`s, and render what it returns.
//!
//! ## Architecture
//!
//! - [`carousel`]: the looping featured-projects carousel (three concatenated
//!   copies, optimistic index, debounced snap-back, autoplay)
//! - [`catalog`]: validated site content and the sources that load it
//! - [`navigation`]: routes, history and route-to-view resolution
//! - [`sections`]: view models for the home sections and the skill page
//! - [`forms`]: contact and booking form state with inline validation
//!
//! ## Example
//!
//! ```
//! use folio_core::catalog::Catalog;
//! use folio_core::navigation::{NavigationShell, View};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut shell = NavigationShell::new();
//! shell.navigate("/skill/cobol");
//!
//! match shell.resolve(&catalog) {
//!     View::Skill(page) => assert_eq!(page.name(), "AWS (Amazon Web Services)"),
//!     View::Home(_) => unreachable!(),
//! }
//! ```

pub mod carousel;
pub mod catalog;
pub mod forms;
pub mod navigation;
pub mod sections;

pub use carousel::{CarouselConfig, LoopingCarousel};
pub use catalog::{Catalog, ContentSource};
pub use navigation::{NavigationShell, Route, View};
