//! Score accumulation and level progression.

use log::info;

use crate::entities::GameState;

/// Add the reward for `kills` bullet-enemy hits.
pub fn award_kills(state: &mut GameState, kills: usize) {
    if kills == 0 {
        return;
    }
    let gain = state.config.kill_score.saturating_mul(kills as u32);
    state.score = state.score.saturating_add(gain);
    info!("{} enemy(s) destroyed. Score: {}", kills, state.score);
}

/// Score needed to leave the current level.
pub fn level_threshold(state: &GameState) -> u32 {
    state.level.saturating_mul(state.config.level_score_step)
}

/// Single threshold check per step. Returns true when a level-up happened.
pub fn advance_level(state: &mut GameState) -> bool {
    if state.score < level_threshold(state) {
        return false;
    }
    state.level = state.level.saturating_add(1);
    state.max_enemies = state
        .max_enemies
        .saturating_add(state.config.max_enemies_per_level);
    info!(
        "Level up. Level: {}, max enemies: {}",
        state.level, state.max_enemies
    );
    true
}
