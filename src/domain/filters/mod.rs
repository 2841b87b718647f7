//! Filters deciding whether a webhook request should trigger its hook.

mod chain;
mod event_filter;
mod filter_trait;
mod payload_filter;

pub use chain::FilterChain;
pub use event_filter::{EventFilter, EVENT_HEADER};
pub use filter_trait::Filter;
pub use payload_filter::PayloadFilter;
