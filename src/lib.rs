pub mod core;
pub mod prelude;
