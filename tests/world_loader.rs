use std::path::Path;

use glam::Vec2;

use tilecaster::types::SOLID;
use tilecaster::{CasterError, load_world};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_walled_room() {
    let world = load_world(fixture("room.yaml")).expect("world should load");

    assert_eq!(world.grid.width(), 5);
    assert_eq!(world.grid.height(), 5);
    assert_eq!(world.grid.tile_size(), 64.0);
    assert_eq!(world.grid.get(glam::UVec2::new(0, 0)), Some(SOLID));
    assert_eq!(world.config.ray_count, Some(32));
    assert_eq!(world.config.minimap_scale, 0.5);

    let player = world.spawn_player().expect("spawn is open");
    assert_eq!(player.position, Vec2::new(160.0, 160.0));
    assert_eq!(player.heading, 0.0);
}

#[test]
fn ragged_rows_are_rejected() {
    let err = load_world(fixture("ragged.yaml"));
    assert!(matches!(err, Err(CasterError::InvalidMap(_))));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_world(fixture("does_not_exist.yaml"));
    assert!(matches!(err, Err(CasterError::Io(_))));
}
