pub mod calc;
pub mod common;
pub mod interpreted;
