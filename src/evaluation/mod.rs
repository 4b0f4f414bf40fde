pub mod breakability;
pub mod classify;
