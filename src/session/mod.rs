//! Sessions: name entry, pacing, and the replay loop around the engine.
//!
//! - `Presenter`: request/response boundary to the UI
//! - `Session`: plays games through a presenter until a rematch is declined
//! - `ConsolePresenter`: the terminal implementation

pub mod console;
pub mod driver;
pub mod presenter;

pub use console::ConsolePresenter;
pub use driver::{Session, SessionSummary};
pub use presenter::{Advance, Presenter};
