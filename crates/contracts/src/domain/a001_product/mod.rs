pub mod aggregate;
pub mod order;

pub use aggregate::{Product, ProductId};
pub use order::{OrderAction, OrderMessage, OrderMessageError};
