pub use crate::core::error::*;
pub use crate::core::group::*;
pub use crate::core::pattern::*;
#[cfg(feature = "serde")]
pub use crate::core::table::*;
