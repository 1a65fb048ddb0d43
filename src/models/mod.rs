// Model exports
pub mod domain;

pub use domain::{AttributeValue, Entity};
