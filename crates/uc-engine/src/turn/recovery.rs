use uc_core::CoreResult;

use super::{TurnContext, TurnSystem};

/// Restores one hit point every `heal_interval` turns.
#[derive(Debug, Default)]
pub struct RecoverySystem;

impl TurnSystem for RecoverySystem {
    fn name(&self) -> &str {
        "recovery"
    }

    fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()> {
        let interval = ctx.config.heal_interval;
        if interval == 0 || ctx.turn == 0 || ctx.turn % interval != 0 {
            return Ok(());
        }
        let player = &mut ctx.world.player;
        if player.health < player.max_health {
            player.health += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing;
    use crate::config::EngineConfig;
    use crate::rng::GameRng;
    use crate::turn::TurnEngine;

    #[test]
    fn heals_on_the_interval_only() {
        let mut world = testing::world();
        world.player.health = 5;
        let mut engine = TurnEngine::empty();
        engine.add_system(RecoverySystem);
        let config = EngineConfig::default().with_heal_interval(10);
        let mut rng = GameRng::new(1);

        world.player.moves = 9;
        engine.advance(&mut world, &mut rng, &config, false).unwrap();
        assert_eq!(world.player.health, 5);

        world.player.moves = 10;
        engine.advance(&mut world, &mut rng, &config, false).unwrap();
        assert_eq!(world.player.health, 6);
    }
}
