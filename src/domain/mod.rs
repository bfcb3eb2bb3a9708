// Domain layer: the two value types and their shared text helpers. No I/O.

pub mod duration;
pub(crate) mod fields;
pub mod time_of_day;

pub use duration::Duration;
pub use time_of_day::TimeOfDay;
