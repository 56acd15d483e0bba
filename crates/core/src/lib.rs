//! Small World route discovery. Keep this crate free of IO and platform concerns.

pub mod bridges;
pub mod cards;
pub mod display;
pub mod index;
pub mod pool;
pub mod routes;
pub mod rules;

pub use bridges::*;
pub use cards::*;
pub use display::*;
pub use index::*;
pub use pool::*;
pub use routes::*;
pub use rules::*;
