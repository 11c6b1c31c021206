//! Routing between the home page and skill pages.

pub mod route;
pub mod shell;

pub use route::{Route, RouteError};
pub use shell::{NavigationShell, View};
