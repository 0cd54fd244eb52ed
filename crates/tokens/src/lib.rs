pub mod category;
pub mod group;
pub mod theme;
pub mod token;

pub use category::TokenCategory;
pub use group::{TokenGroup, find_group};
pub use theme::{Theme, ThemeRole};
pub use token::{ColorValue, DimensionValue, TextValue, Token, TokenValue, TypographyValue};
