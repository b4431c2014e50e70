pub mod check;
pub mod play;

use std::path::Path;

use uc_core::World;

/// Load the built-in world, or a catalog file when one is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => uc_content::from_path(path)
            .map_err(|e| format!("cannot load {}: {e}", path.display())),
        None => uc_content::load().map_err(|e| format!("built-in world is broken: {e}")),
    }
}
