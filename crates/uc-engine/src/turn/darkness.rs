use uc_core::CoreResult;

use super::{TurnContext, TurnSystem};

const GRUE: &str = "Oh, no! You have walked into the slavering fangs of a lurking grue!";

/// The grue.
///
/// The first turn ending in darkness is a warning. Every further one rolls
/// against `grue_percent`.
#[derive(Debug, Default)]
pub struct DarknessSystem;

impl TurnSystem for DarknessSystem {
    fn name(&self) -> &str {
        "darkness"
    }

    fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()> {
        let here = ctx.world.player.location.clone();
        if ctx.world.is_lit(&here) {
            ctx.world.player.dark_turns = 0;
            return Ok(());
        }
        if ctx.world.player.dark_turns >= 1 && ctx.rng.percent(ctx.config.grue_percent) {
            tracing::info!(room = %here, "eaten by a grue");
            return ctx.kill_player(GRUE);
        }
        ctx.world.player.dark_turns += 1;
        Ok(())
    }
}
