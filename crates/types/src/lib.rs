pub mod color;
pub mod ids;
pub mod measurement;

pub use color::Color;
pub use ids::{GroupId, ThemeId, TokenId};
pub use measurement::{Measurement, Unit, format_measure};
