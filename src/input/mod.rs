//! Raw input sources that decode into [`NullableItem`](crate::core::types::NullableItem) trees.

pub mod de;
pub mod json;
pub mod toon;
