//! Test helpers.
//!
//! `World::run_system_once` (from the `RunSystemOnce` trait) runs a single system without a
//! schedule. Systems that use `Commands` only enqueue their changes, so we flush afterwards
//! to make spawned entities and inserted resources visible to assertions.

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}
