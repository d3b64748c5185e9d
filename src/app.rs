//! Application module: exposes the view model the terminal front-end draws.
//!
//! `App` lives in `app::model` and mirrors the session's latest events.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
