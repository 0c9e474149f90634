mod dispatch;
mod error;
mod serve;
pub use dispatch::*;
pub use error::*;
pub use serve::*;

pub struct Config {
    /// Draw column letters and row numbers around the board
    pub show_coords: bool,
}
