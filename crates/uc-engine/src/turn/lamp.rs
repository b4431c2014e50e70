use uc_core::{CoreResult, ObjectFlag};

use super::{TurnContext, TurnEventKind, TurnSystem};

/// Burns lamp fuel.
///
/// Fuel drops by one for every turn the lamp was lit both before and after
/// the command, so lighting or dousing it costs nothing that turn.
#[derive(Debug, Default)]
pub struct LampSystem;

impl TurnSystem for LampSystem {
    fn name(&self) -> &str {
        "lamp"
    }

    fn advance(&mut self, ctx: &mut TurnContext<'_>) -> CoreResult<()> {
        let lamp = ctx.world.meta.lamp.clone();
        let lit_now = ctx.world.object(&lamp).is_some_and(|o| o.is_shining());
        if !(ctx.lamp_was_lit && lit_now) {
            return Ok(());
        }

        let fuel = ctx.world.player.lamp_fuel.saturating_sub(1);
        ctx.world.player.lamp_fuel = fuel;
        if fuel == 0 {
            ctx.world.clear_object_flag(&lamp, ObjectFlag::Lit)?;
            tracing::info!(turn = ctx.turn, "lamp burned out");
            ctx.emit(
                TurnEventKind::LampExpired,
                "Your lamp has run out of power.",
            );
        } else if fuel == ctx.config.lamp_warning {
            ctx.emit(TurnEventKind::LampLow, "Your lamp is getting dim.");
        }
        Ok(())
    }
}
