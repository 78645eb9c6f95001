pub mod diag;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod query;
pub mod sample;
pub mod sampler;

pub use error::{ConfigError, HostError, QueryError};
pub use geometry::{Point, Rect};
pub use interval::TickInterval;
pub use query::{OsQueries, WindowHandle};
pub use sample::Sample;
pub use sampler::{Sampler, TickReport};
