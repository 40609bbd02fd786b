pub use crate::animator::*;
pub use crate::cube::*;
pub use crate::error::*;
pub use crate::navigator::*;
pub use crate::r#move::*;
pub use crate::session::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
