//! Experience and level-ups.

use cyberstrike_core::components::PlayerStats;
use cyberstrike_core::constants::{LEVEL_UP_HEALTH_BONUS, XP_GROWTH_FACTOR};

/// Add experience and apply every level-up it pays for.
/// Returns the levels reached, in order.
pub fn award_xp(stats: &mut PlayerStats, amount: u32) -> Vec<u32> {
    stats.xp += amount;
    let mut reached = Vec::new();
    while stats.xp_to_next > 0 && stats.xp >= stats.xp_to_next {
        level_up(stats);
        reached.push(stats.level);
    }
    reached
}

/// One level-up: spend the threshold, grow it, raise and refill health.
pub fn level_up(stats: &mut PlayerStats) {
    stats.level += 1;
    stats.xp -= stats.xp_to_next;
    stats.xp_to_next = (stats.xp_to_next as f32 * XP_GROWTH_FACTOR).floor() as u32;
    stats.max_health += LEVEL_UP_HEALTH_BONUS;
    stats.health = stats.max_health;
}
