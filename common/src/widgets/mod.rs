//! Widget components for the cluster display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod banner;
mod dial;
mod gauge;
mod gear_box;
mod indicators;

pub use banner::draw_banner;
pub use dial::{draw_dial_face, draw_needle, draw_pivot};
pub use gauge::draw_aux_gauge;
pub use gear_box::draw_gear_box;
pub use indicators::{draw_mode_text, draw_turn_arrows};
