pub mod robot;

use crate::play::action::Action;
use crate::play::table::Table;
use std::fmt::Debug;

/// Anything that can take a turn at the table. The table hands the actor
/// a read-only snapshot; the actor hands back exactly one action.
pub trait Player: Debug {
    fn act(&self, table: &Table, position: usize) -> Action;
}
