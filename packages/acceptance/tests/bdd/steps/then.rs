//! Then step definitions
//!
//! Steps that verify what the loaded page shows.

use cucumber::then;
use quilt_acceptance::title_shows_up;

use crate::world::QuiltWorld;

#[then(regex = r#"^a page with the title "([^"]*)" shows up$"#)]
async fn page_with_title(world: &mut QuiltWorld, title: String) {
    if let Err(e) = title_shows_up(&world.session, &title).await {
        panic!("{}", e);
    }
}
