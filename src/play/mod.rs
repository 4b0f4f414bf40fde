pub mod action;
pub mod draws;
pub mod engine;
pub mod phase;
pub mod seat;
pub mod table;
