//! Pure data structures (DTOs); [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod menu;
pub mod order;
pub mod status;

pub use menu::*;
pub use order::*;
pub use status::*;
