//! World struct for Cucumber BDD tests
//!
//! A fresh world is built for every scenario, so nothing loaded in one
//! scenario is visible in the next.

use cucumber::World;
use quilt_acceptance::{HttpSession, Target};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct QuiltWorld {
    /// Instance under test
    pub target: Target,
    /// Browser session the navigation and title steps share
    pub session: HttpSession,
}

impl Default for QuiltWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl QuiltWorld {
    /// Create a world aimed at the default Quilt target.
    pub fn new() -> Self {
        let session = match HttpSession::new() {
            Ok(session) => session,
            Err(e) => panic!("Failed to create browser session: {}", e),
        };

        Self {
            target: Target::default(),
            session,
        }
    }
}
