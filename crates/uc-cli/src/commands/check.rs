use std::path::Path;

use uc_core::ObjectFlag;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(path)?;

    let treasures = world
        .objects()
        .filter(|o| o.has(ObjectFlag::Treasure))
        .count();
    println!("  All checks passed for '{}'.", world.meta.name);
    println!(
        "  {} rooms, {} objects ({treasures} treasures), {} actors",
        world.room_count(),
        world.objects().count(),
        world.actors().count()
    );
    println!("  Maximum score: {}", world.meta.max_score);

    Ok(())
}
