//! Waypath Core Library
//!
//! Graph search engine: an undirected weighted graph model, frontier
//! primitives, twelve path-finding strategies and a dispatcher that maps
//! algorithm identifiers to them. Also carries a small alpha-beta minimax
//! evaluator.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod frontier;
pub mod game;
pub mod graph;
pub mod logging;
pub mod path;
pub mod strategy;
