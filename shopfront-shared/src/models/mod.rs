pub mod events;

pub use events::{EmailRequestedEvent, StockUpdatedEvent};
