use bevy::prelude::*;

/// Completed motion ticks in the current run.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounter {
    pub tick: u64,
}
