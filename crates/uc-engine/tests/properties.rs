//! Integration tests: properties.
use proptest::prelude::*;
use uc_core::{Location, ObjectFlag, ObjectId, RoomId, World};
use uc_engine::{EngineConfig, GameSession};

const ITEMS: &[&str] = &[
    "bottle", "water", "sack", "lunch", "garlic", "sword", "lamp", "rope", "knife", "timber",
    "shovel",
];

const BROUGHT: &[&str] = &["sword", "lamp", "rope", "knife", "timber", "shovel"];

const CONTAINERS: &[&str] = &["sack", "bottle"];

fn kitchen_game() -> GameSession {
    let mut game = GameSession::new(uc_content::load().unwrap(), EngineConfig::peaceful());
    let world = game.world_mut();
    world.move_player(RoomId::new("kitchen")).unwrap();
    for id in BROUGHT {
        world
            .move_object(&ObjectId::new(*id), Location::room("kitchen"))
            .unwrap();
    }
    game
}

fn command() -> impl Strategy<Value = String> {
    let item = prop::sample::select(ITEMS);
    let container = prop::sample::select(CONTAINERS);
    prop_oneof![
        item.clone().prop_map(|i| format!("take {i}")),
        item.clone().prop_map(|i| format!("drop {i}")),
        (item, container).prop_map(|(i, c)| format!("put {i} in {c}")),
        Just("inventory".to_string()),
    ]
}

fn locations(world: &World) -> Vec<(ObjectId, Location)> {
    world
        .objects()
        .map(|o| (o.id.clone(), o.location.clone()))
        .collect()
}

proptest! {
    #[test]
    fn take_and_drop_never_lose_objects(commands in prop::collection::vec(command(), 1..40)) {
        let mut game = kitchen_game();
        let count = game.world().objects().count();
        for cmd in &commands {
            game.process(cmd).unwrap();
            prop_assert_eq!(game.world().objects().count(), count);
            prop_assert!(game.world().validate().is_ok());
        }
    }

    #[test]
    fn carry_limits_always_hold(commands in prop::collection::vec(command(), 1..40)) {
        let mut game = kitchen_game();
        for cmd in &commands {
            game.process(cmd).unwrap();
            let world = game.world();
            prop_assert!(world.slots_used() <= world.player.carry.slots);
            prop_assert!(world.carried_weight() <= world.player.carry.weight);
        }
    }

    #[test]
    fn taking_then_dropping_restores_the_room(item in prop::sample::select(BROUGHT)) {
        let mut game = kitchen_game();
        let before = locations(game.world());
        game.process(&format!("take {item}")).unwrap();
        game.process(&format!("drop {item}")).unwrap();
        prop_assert_eq!(locations(game.world()), before);
        let touched = game.world().object(&ObjectId::new(item)).unwrap().has(ObjectFlag::Touched);
        prop_assert!(touched);
    }

    #[test]
    fn deposits_score_once(repeats in 1usize..5) {
        let mut game = GameSession::new(uc_content::load().unwrap(), EngineConfig::peaceful());
        game.world_mut().move_player(RoomId::new("living_room")).unwrap();
        game.world_mut()
            .move_object(&ObjectId::new("chalice"), Location::Player)
            .unwrap();
        for _ in 0..repeats {
            game.process("put chalice in case").unwrap();
            game.process("take chalice").unwrap();
        }
        prop_assert_eq!(game.world().player.score, 10);
    }
}
