pub mod comparison;
pub mod entity;
pub mod profile;

pub use comparison::*;
pub use entity::*;
pub use profile::*;
