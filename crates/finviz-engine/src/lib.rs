//! finviz-engine
//!
//! The aggregation engine behind the finance dashboard: pure, synchronous
//! functions that reduce in-memory record lists into the derived views the
//! dashboard renders. Depends on finviz-domain. No I/O, no HTTP, no clock
//! reads outside the [`time::Clock`] abstraction.

pub mod balance;
pub mod dashboard;
pub mod limits;
pub mod savings;
pub mod search;
pub mod time;
pub mod window;

pub use balance::*;
pub use dashboard::*;
pub use limits::*;
pub use savings::*;
pub use search::*;
pub use time::{Clock, FixedClock, SystemClock};
pub use window::*;
