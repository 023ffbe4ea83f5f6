//! Shared building blocks for the MoimTable client core.
//!
//! Holds the primitive id/timestamp aliases, the clock abstraction used for
//! plan-versus-review decisions, the data-layer error taxonomy and the
//! result channel that state holders consume.

pub mod error;
pub mod result;
pub mod time;
pub mod types;

pub use error::{DataError, DataResult, ErrorKind};
pub use result::LoadResult;
pub use time::{Clock, FixedClock, SystemClock};
