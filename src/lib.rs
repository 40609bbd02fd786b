#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

pub mod animator;
pub mod cube;
pub mod error;
pub mod navigator;
pub mod r#move;
pub mod prelude;
pub mod session;
pub mod solver;
