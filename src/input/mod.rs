mod fields;
mod types;

pub use fields::{FIELDS, FLOAT_MIN, FieldSpec, INT_MIN, Widget};
pub use types::*;
