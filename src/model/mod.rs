//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::*;
pub use order::*;
pub use product::*;
