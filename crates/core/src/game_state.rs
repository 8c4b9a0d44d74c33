//! Player and progress state for one game.
//!
//! Coordinates are page/column: a lower page index is higher on screen, so a
//! jump decrements `page` and a landing increments it back.

use crate::types::*;

/// Per-game state, reset on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    page: u8,
    column: u8,
    jump_height: u8,
    is_jumping: bool,
    hang_counter: u8,
    button_held: bool,
    anim_frame: u8,
    score: u32,
    lives: u8,
    /// Ticks between obstacle steps; decreases down to `min_speed`.
    current_speed: u32,
    speed_timer: u32,
    move_timer: u32,
    frame_count: u32,
    tick_period_ms: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            page: PLAYER_START_PAGE,
            column: PLAYER_COLUMN,
            jump_height: 0,
            is_jumping: false,
            hang_counter: 0,
            button_held: false,
            anim_frame: 0,
            score: 0,
            lives: 0,
            current_speed: config.initial_speed,
            speed_timer: 0,
            move_timer: 0,
            frame_count: 0,
            tick_period_ms: config.tick_period_ms,
        }
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn jump_height(&self) -> u8 {
        self.jump_height
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn hang_counter(&self) -> u8 {
        self.hang_counter
    }

    pub fn button_held(&self) -> bool {
        self.button_held
    }

    pub fn anim_frame(&self) -> u8 {
        self.anim_frame
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn current_speed(&self) -> u32 {
        self.current_speed
    }

    pub fn speed_timer(&self) -> u32 {
        self.speed_timer
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    pub fn is_grounded(&self) -> bool {
        self.jump_height == 0 && !self.is_jumping
    }

    pub fn set_lives(&mut self, lives: u8) {
        self.lives = lives.min(MAX_LIVES);
    }

    /// Remove one life and return what is left.
    pub fn lose_life(&mut self) -> u8 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Record the trigger level; a high level while grounded starts a jump.
    pub fn sample_trigger(&mut self, trigger: bool) {
        self.button_held = trigger;
        if trigger && self.is_grounded() {
            self.is_jumping = true;
        }
    }

    /// One tick of jump physics.
    ///
    /// Rise one page per tick to [`JUMP_MAX_HEIGHT`], hang there until the
    /// hang threshold (longer while the trigger is held), then fall one page
    /// per tick back to the ground.
    pub fn advance_jump(&mut self, config: &GameConfig) {
        if self.is_jumping {
            if self.jump_height < JUMP_MAX_HEIGHT {
                self.jump_height += 1;
                self.page = self.page.saturating_sub(1);
            } else {
                self.hang_counter = self.hang_counter.saturating_add(1);
                let threshold = if self.button_held {
                    config.hang_ticks_held
                } else {
                    config.hang_ticks_tapped
                };
                if self.hang_counter >= threshold {
                    self.is_jumping = false;
                    self.hang_counter = 0;
                }
            }
        } else if self.jump_height > 0 {
            self.jump_height -= 1;
            self.page = (self.page + 1).min(PLAYER_START_PAGE);
        }
    }

    pub fn advance_animation(&mut self) {
        self.anim_frame = (self.anim_frame + 1) % ANIM_FRAME_WRAP;
    }

    /// Pose for the current tick: standing while ascending or hanging,
    /// otherwise alternating run frames every [`RUN_FRAME_TICKS`].
    pub fn player_sprite(&self) -> SpriteId {
        if self.is_jumping {
            SpriteId::PlayerStand
        } else if self.anim_frame % (2 * RUN_FRAME_TICKS) < RUN_FRAME_TICKS {
            SpriteId::PlayerRun1
        } else {
            SpriteId::PlayerRun2
        }
    }

    /// Count a frame; true when a spawn is due.
    pub fn spawn_due(&mut self, config: &GameConfig) -> bool {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.frame_count % config.spawn_interval_ticks == 0
    }

    /// Count towards the next obstacle step; true when the obstacles move.
    pub fn move_due(&mut self) -> bool {
        self.move_timer += 1;
        if self.move_timer >= self.current_speed {
            self.move_timer = 0;
            true
        } else {
            false
        }
    }

    /// Advance the speed timer. Returns true when speed or tick period changed.
    pub fn advance_difficulty(&mut self, config: &GameConfig) -> bool {
        self.speed_timer += 1;
        if self.speed_timer < config.speed_up_interval_ticks {
            return false;
        }
        self.speed_timer = 0;

        let speed = self.current_speed.saturating_sub(1).max(config.min_speed);
        let period = self
            .tick_period_ms
            .saturating_sub(config.tick_period_step_ms)
            .max(config.min_tick_period_ms);
        let changed = speed != self.current_speed || period != self.tick_period_ms;
        self.current_speed = speed;
        self.tick_period_ms = period;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn starts_grounded_at_start_page() {
        let s = GameState::new(&config());
        assert!(s.is_grounded());
        assert_eq!(s.page(), PLAYER_START_PAGE);
        assert_eq!(s.column(), PLAYER_COLUMN);
        assert_eq!(s.current_speed(), config().initial_speed);
    }

    #[test]
    fn trigger_only_jumps_when_grounded() {
        let c = config();
        let mut s = GameState::new(&c);
        s.sample_trigger(true);
        assert!(s.is_jumping());
        s.advance_jump(&c);
        assert_eq!(s.jump_height(), 1);

        // Mid-air: releasing and pressing again does not restart the jump.
        s.sample_trigger(false);
        s.advance_jump(&c);
        s.advance_jump(&c);
        s.sample_trigger(true);
        assert_eq!(s.jump_height(), JUMP_MAX_HEIGHT);
    }

    #[test]
    fn tapped_jump_hangs_for_short_threshold() {
        let c = config();
        let mut s = GameState::new(&c);
        s.sample_trigger(true);
        s.advance_jump(&c);
        s.sample_trigger(false);

        let mut apex_ticks = 0;
        while s.is_jumping() {
            s.advance_jump(&c);
            if s.jump_height() == JUMP_MAX_HEIGHT {
                apex_ticks += 1;
            }
        }
        // Two more rising ticks, then the hang.
        assert_eq!(apex_ticks, 1 + c.hang_ticks_tapped as usize);
    }

    #[test]
    fn releasing_mid_hang_ends_it_once_past_short_threshold() {
        let c = config();
        let mut s = GameState::new(&c);
        s.sample_trigger(true);
        for _ in 0..JUMP_MAX_HEIGHT {
            s.advance_jump(&c);
        }
        for _ in 0..c.hang_ticks_tapped + 2 {
            s.advance_jump(&c);
        }
        assert!(s.is_jumping());
        s.sample_trigger(false);
        s.advance_jump(&c);
        assert!(!s.is_jumping());
        assert_eq!(s.hang_counter(), 0);
    }

    #[test]
    fn animation_wraps_at_modulus() {
        let mut s = GameState::new(&config());
        for _ in 0..ANIM_FRAME_WRAP {
            s.advance_animation();
        }
        assert_eq!(s.anim_frame(), 0);
    }

    #[test]
    fn run_frames_alternate_every_ten_ticks() {
        let mut s = GameState::new(&config());
        let mut poses = Vec::new();
        for _ in 0..40 {
            poses.push(s.player_sprite());
            s.advance_animation();
        }
        assert!(poses[..10].iter().all(|&p| p == SpriteId::PlayerRun1));
        assert!(poses[10..20].iter().all(|&p| p == SpriteId::PlayerRun2));
        assert!(poses[20..30].iter().all(|&p| p == SpriteId::PlayerRun1));
    }

    #[test]
    fn move_due_follows_current_speed() {
        let mut s = GameState::new(&config());
        let due: Vec<bool> = (0..6).map(|_| s.move_due()).collect();
        assert_eq!(due, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn lives_never_go_negative() {
        let mut s = GameState::new(&config());
        s.set_lives(1);
        assert_eq!(s.lose_life(), 0);
        assert_eq!(s.lose_life(), 0);
        s.set_lives(9);
        assert_eq!(s.lives(), MAX_LIVES);
    }

    #[test]
    fn difficulty_changes_on_threshold() {
        let c = GameConfig {
            speed_up_interval_ticks: 3,
            ..GameConfig::default()
        };
        let mut s = GameState::new(&c);
        assert!(!s.advance_difficulty(&c));
        assert!(!s.advance_difficulty(&c));
        assert!(s.advance_difficulty(&c));
        assert_eq!(s.current_speed(), c.initial_speed - 1);
        assert_eq!(s.tick_period_ms(), c.tick_period_ms - c.tick_period_step_ms);
        assert_eq!(s.speed_timer(), 0);
    }
}
