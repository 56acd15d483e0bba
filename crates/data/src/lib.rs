//! Card catalog and deck list loading.

pub mod deck;
pub mod load;
pub mod schema;

pub use deck::*;
pub use load::*;
pub use schema::*;
