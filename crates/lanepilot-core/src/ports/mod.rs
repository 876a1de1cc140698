//! Ports - 抽象化レイヤー
//!
//! Interfaces toward the external collaborators (game data catalog, console
//! dispatch, wall clock). Each trait hides the implementation details of one
//! collaborator; the decision engine only sees these seams.

pub mod catalog;
pub mod clock;
pub mod sink;

pub use self::catalog::HeroCatalog;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::sink::CommandSink;
