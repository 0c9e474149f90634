//! Two-player Go played through stateless button interactions.
//!
//! No game is ever stored. The [`Board`] travels between interactions inside a
//! state token (see [`token`]), and moves are entered in two steps, column
//! first and row second, driven by the [`Machine`].

pub use affordance::*;
pub use board::*;
pub use button::*;
pub use interaction::*;
pub use legality::*;
pub use move_id::*;
pub use protocol::*;
pub use render::*;

mod affordance;
#[cfg(test)]
mod arbitrary;
mod board;
mod button;
mod interaction;
mod legality;
mod move_id;
mod protocol;
mod render;
pub mod token;
