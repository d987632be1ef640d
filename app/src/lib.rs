//! Application services around the Sapper engine: persisted scores and
//! settings, the game clock and a session driving a [`sapper_core::Game`].

pub use context::*;
pub use error::*;
pub use files::*;
pub use score::*;
pub use session::*;
pub use settings::*;
pub use timer::*;

mod context;
mod error;
mod files;
mod score;
mod session;
mod settings;
mod timer;
mod xml;
