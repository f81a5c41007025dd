//! Command implementations for waypath

pub mod algorithms;
pub mod dispatch;
pub mod minimax;
pub mod solve;
