//! Fixed-capacity obstacle pool.
//!
//! Obstacles live in [`OBSTACLE_SLOTS`] slots that are reused forever; only the
//! first `limit` slots are ever activated. Inactive slots are never drawn.

use crate::render::Renderer;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub page: u8,
    pub column: u8,
    pub kind: ObstacleKind,
    pub active: bool,
}

impl Obstacle {
    const IDLE: Obstacle = Obstacle {
        page: OBSTACLE_PAGE,
        column: SPAWN_COLUMN,
        kind: ObstacleKind::Small,
        active: false,
    };

    /// Footprint width in cells.
    pub fn width_cells(&self) -> u8 {
        self.kind.sprite().width_cells()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleManager {
    slots: [Obstacle; OBSTACLE_SLOTS],
    limit: usize,
}

impl ObstacleManager {
    /// Pool allowing up to `limit` simultaneous obstacles (clamped to 1..=slots).
    pub fn new(limit: usize) -> Self {
        Self {
            slots: [Obstacle::IDLE; OBSTACLE_SLOTS],
            limit: limit.clamp(1, OBSTACLE_SLOTS),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn slots(&self) -> &[Obstacle] {
        &self.slots
    }

    pub fn active(&self) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Activate the first free slot at the spawn position and draw it.
    ///
    /// Returns false when every allowed slot is busy; the spawn is skipped.
    pub fn spawn(&mut self, kind: ObstacleKind, renderer: &mut Renderer) -> bool {
        self.spawn_at(OBSTACLE_PAGE, SPAWN_COLUMN, kind, renderer)
            .is_some()
    }

    /// Like [`spawn`](Self::spawn) but at an arbitrary position. Returns the slot.
    pub fn spawn_at(
        &mut self,
        page: u8,
        column: u8,
        kind: ObstacleKind,
        renderer: &mut Renderer,
    ) -> Option<usize> {
        let index = self.slots[..self.limit].iter().position(|o| !o.active)?;
        self.slots[index] = Obstacle {
            page,
            column,
            kind,
            active: true,
        };
        renderer.draw_sprite(page, column, kind.sprite());
        Some(index)
    }

    /// Move every active obstacle one step left.
    ///
    /// Obstacles already at or past [`OBSTACLE_EXIT_COLUMN`] are erased and
    /// freed instead. Returns how many left the screen.
    ///
    /// All old footprints are erased before anything is redrawn, so slot
    /// order never lets one obstacle's erase wipe a neighbour's new position.
    pub fn step(&mut self, renderer: &mut Renderer) -> u32 {
        let mut exited = 0;
        for obstacle in self.slots.iter_mut().filter(|o| o.active) {
            renderer.erase(obstacle.page, obstacle.column, obstacle.width_cells());
            if obstacle.column > OBSTACLE_EXIT_COLUMN {
                obstacle.column = obstacle.column.saturating_sub(OBSTACLE_STEP_COLUMNS);
            } else {
                obstacle.active = false;
                exited += 1;
            }
        }
        self.redraw(renderer);
        exited
    }

    /// Erase and free one slot (after a collision).
    ///
    /// Remaining obstacles are redrawn in case the erased footprint
    /// overlapped one of them.
    pub fn remove(&mut self, index: usize, renderer: &mut Renderer) {
        if let Some(obstacle) = self.slots.get_mut(index).filter(|o| o.active) {
            renderer.erase(obstacle.page, obstacle.column, obstacle.width_cells());
            obstacle.active = false;
            self.redraw(renderer);
        }
    }

    /// Draw every active obstacle at its current position.
    pub fn redraw(&self, renderer: &mut Renderer) {
        for (_, obstacle) in self.active() {
            renderer.draw_sprite(obstacle.page, obstacle.column, obstacle.kind.sprite());
        }
    }

    /// Free every slot without touching the screen.
    pub fn clear(&mut self) {
        for obstacle in &mut self.slots {
            obstacle.active = false;
        }
    }
}

impl Default for ObstacleManager {
    fn default() -> Self {
        Self::new(1)
    }
}
