//! Integration tests: persistence.
use uc_core::{ActorId, Location, ObjectFlag, ObjectId, RoomFlag, RoomId, WorldFlag};
use uc_engine::persistence::{restore, snapshot};
use uc_engine::{
    EngineConfig, GameRng, GameSession, RestoreError, SCHEMA_VERSION, SlotStore, Snapshot,
};

fn played_world() -> uc_core::World {
    let mut game = GameSession::new(uc_content::load().unwrap(), EngineConfig::peaceful());
    game.opening();
    for cmd in ["take leaflet", "north", "east", "open window", "west", "west", "take lamp"] {
        game.process(cmd).unwrap();
    }
    game.world().clone()
}

#[test]
fn snapshot_round_trips_through_json() {
    let base = uc_content::load().unwrap();
    let world = played_world();
    let json = snapshot(&world, &GameRng::new(77)).to_json().unwrap();

    let (restored, rng) = restore(&base, &json).unwrap();
    assert_eq!(rng.seed(), 77);
    assert_eq!(restored.player, world.player);
    assert_eq!(restored.player.location, RoomId::new("living_room"));
    assert!(restored.is_carried(&ObjectId::new("lamp")));
    assert!(restored.is_carried(&ObjectId::new("leaflet")));
    assert!(restored
        .object(&ObjectId::new("window"))
        .unwrap()
        .has(ObjectFlag::Open));
    assert!(restored
        .room(&RoomId::new("kitchen"))
        .unwrap()
        .has(RoomFlag::Visited));
    assert_eq!(Snapshot::capture(&restored, 77), Snapshot::capture(&world, 77));
}

#[test]
fn snapshot_json_is_key_ordered() {
    let json = Snapshot::capture(&uc_content::load().unwrap(), 1)
        .to_json()
        .unwrap();
    let attic = json.find("\"attic\"").unwrap();
    let west = json.find("\"west_of_house\": {").unwrap();
    assert!(attic < west);
    assert!(json.contains(&format!("\"schema_version\": {SCHEMA_VERSION}")));
}

#[test]
fn actor_and_flag_state_survive() {
    let base = uc_content::load().unwrap();
    let mut world = base.clone();
    world.set_flag(WorldFlag::TrollPaid);
    world.move_actor(&ActorId::new("troll"), None).unwrap();
    world
        .move_object(&ObjectId::new("diamond"), Location::room("treasure_room"))
        .unwrap();

    let restored = Snapshot::capture(&world, 3).apply(&base).unwrap();
    assert!(restored.has_flag(WorldFlag::TrollPaid));
    assert_eq!(restored.actor(&ActorId::new("troll")).unwrap().location, None);
    assert_eq!(
        restored.object(&ObjectId::new("diamond")).unwrap().location,
        Location::room("treasure_room")
    );
}

#[test]
fn version_is_required() {
    let base = uc_content::load().unwrap();
    let mut value = serde_json::to_value(Snapshot::capture(&base, 1)).unwrap();
    value.as_object_mut().unwrap().remove("schema_version");
    let err = restore(&base, &value.to_string()).unwrap_err();
    assert!(matches!(err, RestoreError::MissingVersion));

    value["schema_version"] = serde_json::json!(SCHEMA_VERSION + 1);
    let err = restore(&base, &value.to_string()).unwrap_err();
    assert!(matches!(err, RestoreError::UnsupportedVersion(v) if v == SCHEMA_VERSION + 1));
}

#[test]
fn garbage_is_a_json_error() {
    let base = uc_content::load().unwrap();
    assert!(matches!(
        restore(&base, "not json"),
        Err(RestoreError::Json(_))
    ));
}

#[test]
fn unknown_room_is_refused() {
    let base = uc_content::load().unwrap();
    let mut value = serde_json::to_value(Snapshot::capture(&base, 1)).unwrap();
    value["rooms"]["narnia"] = serde_json::json!({ "flags": [] });
    let err = restore(&base, &value.to_string()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"snapshot refers to unknown id "narnia""#);
}

#[test]
fn dangling_location_fails_closed() {
    let base = uc_content::load().unwrap();
    let mut snap = Snapshot::capture(&base, 1);
    snap.objects.get_mut(&ObjectId::new("leaflet")).unwrap().location =
        Location::room("nowhere_at_all");
    assert!(matches!(snap.apply(&base), Err(RestoreError::Invalid(_))));
}

#[test]
fn session_saves_and_restores_slots() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = GameSession::new(uc_content::load().unwrap(), EngineConfig::peaceful())
        .with_slots(SlotStore::new(dir.path()));
    game.process("take leaflet").unwrap();
    game.process("save start").unwrap();
    assert!(dir.path().join("start.json").exists());

    game.process("drop leaflet").unwrap();
    game.process("north").unwrap();
    game.process("restore start").unwrap();
    assert_eq!(game.world().player.location, RoomId::new("west_of_house"));
    assert!(game.world().is_carried(&ObjectId::new("leaflet")));
    assert_eq!(game.world().player.moves, 1);
}

#[test]
fn restored_game_replays_identically() {
    let dir = tempfile::tempdir().unwrap();
    let store = SlotStore::new(dir.path());
    let config = EngineConfig::default().with_seed(5);
    let script = ["wait", "wait", "wait", "wait", "wait", "wait"];

    let mut first = GameSession::new(uc_content::load().unwrap(), config.clone())
        .with_slots(store.clone());
    first.world_mut().move_player(RoomId::new("cellar")).unwrap();
    first.save_slot("cellar").unwrap();
    let a: Vec<String> = script
        .iter()
        .flat_map(|c| first.process(c).unwrap().lines)
        .collect();

    let mut second = GameSession::new(uc_content::load().unwrap(), config).with_slots(store);
    second.restore_slot("cellar").unwrap();
    let b: Vec<String> = script
        .iter()
        .flat_map(|c| second.process(c).unwrap().lines)
        .collect();
    assert_eq!(a, b);
}
