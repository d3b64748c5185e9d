//! Playback: the session state machine, its progress loop and the `rodio`
//! backend it drives.

mod backend;
mod cursor;
mod error;
mod progress;
mod session;
mod sink;
mod time;
mod types;

pub use error::PlaybackError;
pub use session::PlaybackSession;
pub use sink::RodioBackend;
pub use time::format_duration;
pub use types::{PlaybackState, Progress, SessionEvent, TrackInfo};
