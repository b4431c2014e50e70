use uc_core::CarryLimit;

/// Configuration for a game.
///
/// Every probability is a whole percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// RNG seed for deterministic play.
    pub seed: u64,
    /// Inventory bound applied to the player at the start of a game.
    pub carry: CarryLimit,
    /// Turns of light in a fresh lamp.
    pub lamp_fuel: u32,
    /// Fuel level at which the lamp warns that it is dimming.
    pub lamp_warning: u32,
    /// Chance per turn of being eaten after the first turn in darkness.
    pub grue_percent: u32,
    /// Chance per turn that the thief wanders to a neighboring room.
    pub thief_move_percent: u32,
    /// Chance per turn that the thief steals when he shares a room with the player.
    pub thief_steal_percent: u32,
    /// Chance that a defeated thief's hoard comes back to the player.
    pub loot_return_percent: u32,
    /// Chance per turn that an engaged hostile actor swings at the player.
    pub npc_aggression_percent: u32,
    /// Deaths allowed before the game ends.
    pub max_deaths: u32,
    /// Points lost per death.
    pub death_penalty: i32,
    /// Turns between one-point health regeneration ticks. 0 disables healing.
    pub heal_interval: u32,
    /// Starting and maximum player health.
    pub player_health: i32,
    /// The player's combat strength.
    pub player_strength: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            carry: CarryLimit::default(),
            lamp_fuel: 330,
            lamp_warning: 30,
            grue_percent: 25,
            thief_move_percent: 33,
            thief_steal_percent: 30,
            loot_return_percent: 75,
            npc_aggression_percent: 100,
            max_deaths: 3,
            death_penalty: 10,
            heal_interval: 10,
            player_health: 10,
            player_strength: 5,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed for deterministic play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the inventory bound.
    pub fn with_carry(mut self, slots: usize, weight: u32) -> Self {
        self.carry = CarryLimit { slots, weight };
        self
    }

    /// Set the lamp's fuel and the warning level.
    pub fn with_lamp(mut self, fuel: u32, warning: u32) -> Self {
        self.lamp_fuel = fuel;
        self.lamp_warning = warning;
        self
    }

    /// Set the grue's appetite.
    pub fn with_grue_percent(mut self, percent: u32) -> Self {
        self.grue_percent = percent.min(100);
        self
    }

    /// Set how restless and how light-fingered the thief is.
    pub fn with_thief_odds(mut self, move_percent: u32, steal_percent: u32) -> Self {
        self.thief_move_percent = move_percent.min(100);
        self.thief_steal_percent = steal_percent.min(100);
        self
    }

    /// Set the chance that a defeated thief gives back his hoard.
    pub fn with_loot_return_percent(mut self, percent: u32) -> Self {
        self.loot_return_percent = percent.min(100);
        self
    }

    /// Set how often engaged hostile actors attack.
    pub fn with_npc_aggression(mut self, percent: u32) -> Self {
        self.npc_aggression_percent = percent.min(100);
        self
    }

    /// Set the death limit and the score penalty per death.
    pub fn with_deaths(mut self, max_deaths: u32, penalty: i32) -> Self {
        self.max_deaths = max_deaths;
        self.death_penalty = penalty;
        self
    }

    /// Set the healing interval (0 disables healing).
    pub fn with_heal_interval(mut self, turns: u32) -> Self {
        self.heal_interval = turns;
        self
    }

    /// Set the player's health and combat strength.
    pub fn with_player(mut self, health: i32, strength: u32) -> Self {
        self.player_health = health;
        self.player_strength = strength;
        self
    }

    /// A configuration with every random hazard switched off. Handy for
    /// scripted walkthroughs.
    pub fn peaceful() -> Self {
        Self::default()
            .with_grue_percent(0)
            .with_thief_odds(0, 0)
            .with_npc_aggression(0)
    }
}
