pub mod encode;
pub mod error;
pub mod flatten;
pub mod form;
pub mod normalize;
pub mod sink;
pub mod types;
