pub mod model;
pub mod grid;
pub mod action;
pub mod placer;
pub mod audit;
pub mod shuffle;
pub mod config;
