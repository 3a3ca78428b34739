//! UI components for the portfolio page.

mod app;
mod contact;
mod header;
mod hero;
mod notice;
mod projects;
mod sections;

pub use app::*;
pub use contact::*;
pub use header::*;
pub use hero::*;
pub use notice::*;
pub use projects::*;
pub use sections::*;
