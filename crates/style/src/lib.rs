pub mod alignment;
pub mod dimension;
pub mod font;
pub mod keys;
pub mod parsers;
pub mod value;

pub use alignment::{HorizontalAlignment, TextWrapping, VerticalAlignment};
pub use dimension::{AttributeScales, PageSize, ScaleKind};
pub use font::{FontStretch, FontStyle, FontWeight};
pub use keys::{StyleKey, ValueKind};
pub use parsers::StyleParseError;
pub use value::StyleValue;
