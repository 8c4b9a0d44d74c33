//! Player/obstacle overlap in page/column space.

use crate::obstacles::{Obstacle, ObstacleManager};
use crate::types::{HIT_BAND_AHEAD, HIT_BAND_BEHIND};

/// True when an active obstacle overlaps the player.
///
/// Horizontally the obstacle column must fall in
/// `[player_column - 4, player_column + 12]`. Vertically the player counts as
/// hit while its page is at most one above the obstacle's, so a player only
/// one page into a jump still collides.
pub fn hits(player_page: u8, player_column: u8, obstacle: &Obstacle) -> bool {
    if !obstacle.active {
        return false;
    }
    let column = i16::from(obstacle.column);
    let pc = i16::from(player_column);
    let horizontal = column >= pc - HIT_BAND_BEHIND && column <= pc + HIT_BAND_AHEAD;
    let vertical = i16::from(player_page) >= i16::from(obstacle.page) - 1;
    horizontal && vertical
}

/// Slot index of the first obstacle hitting the player, if any.
pub fn first_hit(player_page: u8, player_column: u8, obstacles: &ObstacleManager) -> Option<usize> {
    obstacles
        .active()
        .find(|(_, o)| hits(player_page, player_column, o))
        .map(|(index, _)| index)
}
