//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (player control: nudging and releasing the held fruit)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (reactions to collision events: merges, death line)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // held fruit control before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // collision event consumers
