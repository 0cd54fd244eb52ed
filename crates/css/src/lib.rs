//! The CSS code-generation core: variable naming, reference resolution,
//! per-category value formatting, typography synthesis, and sheet assembly.

pub mod error;
pub mod format;
pub mod naming;
pub mod reference;
pub mod sheet;
pub mod typography;

pub use error::CssError;
pub use format::{declaration, literal_value};
pub use naming::{NameTable, kebab_case, variable_name};
pub use reference::{InlineRenderer, ReferenceRenderer, TokenIndex, VariableRenderer};
pub use sheet::{DISCLAIMER, category_sheet, class_sheet, root_sheet, typography_class_sheet};
pub use typography::{
    CategoryTaggedAssembler, ConventionAssembler, TypographyAssembler, class_block,
    letter_spacing_css,
};
