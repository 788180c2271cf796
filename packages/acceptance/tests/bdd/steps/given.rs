//! Given step definitions
//!
//! Steps that check the instance under test is reachable.

use cucumber::given;
use quilt_acceptance::running_instance;

use crate::world::QuiltWorld;

#[given(regex = r"^a running instance of Quilt$")]
async fn a_running_instance(world: &mut QuiltWorld) {
    if let Err(e) = running_instance(&world.target).await {
        panic!("Expected a running instance at {}: {}", world.target, e);
    }
}
