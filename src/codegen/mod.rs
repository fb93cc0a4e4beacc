mod generator;

pub use generator::{Language, sample};
