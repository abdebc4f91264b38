//! Schedule data providers.

pub mod cached;
pub mod static_provider;
pub mod traits;

pub use cached::CachedScheduleProvider;
pub use static_provider::StaticScheduleProvider;
pub use traits::ScheduleProvider;
