//! Game phase machine: `Selecting -> Running -> Dead -> Selecting`.
//!
//! [`Simulation::step`] is called once per tick with the sampled input and
//! draws into the renderer; the caller swaps the renderer into the panel
//! afterwards. Nothing here blocks or fails.

use arrayvec::ArrayVec;

use crate::collision::first_hit;
use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::obstacles::ObstacleManager;
use crate::render::Renderer;
use crate::types::*;

/// Events retained from the most recent step.
pub const MAX_EVENTS: usize = 8;

const PLAYER_CELLS: u8 = 2;

const SCORE_PAGE: u8 = 0;
const SCORE_COLUMN: u8 = 88;
const STAR_PAGE: u8 = 0;
const STAR_COLUMNS: [u8; 2] = [40, 64];

const START_TEXT_PAGE: u8 = 1;
const START_TEXT_COLUMN: u8 = 44;
const LIVES_TEXT_PAGE: u8 = 3;
const LIVES_TEXT_COLUMN: u8 = 32;
const LIVES_DIGIT_COLUMN: u8 = 88;

// Selection gauge, in pixels: one segment per selectable life.
const GAUGE_LEFT: u8 = 24;
const GAUGE_TOP: u8 = 52;
const GAUGE_BOTTOM: u8 = 61;
const GAUGE_SEGMENT: u8 = 20;

// Below the stars, above the ground band.
const END_TEXT_PAGE: u8 = 2;
const END_TEXT_COLUMN: u8 = 52;

pub struct Simulation {
    config: GameConfig,
    phase: Phase,
    state: GameState,
    obstacles: ObstacleManager,
    selected_lives: u8,
    /// Ticks left before a confirm is accepted.
    debounce: u16,
    events: ArrayVec<GameEvent, MAX_EVENTS>,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        Self {
            state: GameState::new(&config),
            obstacles: ObstacleManager::new(config.max_obstacles),
            config,
            phase: Phase::Selecting,
            selected_lives: 1,
            debounce: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    /// Lives chosen on the selection screen (1..=4).
    pub fn selected_lives(&self) -> u8 {
        self.selected_lives
    }

    pub fn debounce_remaining(&self) -> u16 {
        self.debounce
    }

    /// Period the tick source should run at.
    pub fn tick_period_ms(&self) -> u32 {
        self.state.tick_period_ms()
    }

    /// Thermometer-coded life outputs: the selection while selecting, else
    /// the remaining lives.
    pub fn life_indicators(&self) -> [bool; LIFE_INDICATORS] {
        match self.phase {
            Phase::Selecting => life_indicator_pattern(self.selected_lives),
            Phase::Running | Phase::Dead => life_indicator_pattern(self.state.lives()),
        }
    }

    /// Events raised by the last [`step`](Self::step).
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Advance one tick.
    pub fn step(&mut self, input: InputSample, renderer: &mut Renderer) {
        self.events.clear();
        match self.phase {
            Phase::Selecting => self.step_selecting(input, renderer),
            Phase::Running => self.step_running(input, renderer),
            Phase::Dead => self.step_dead(input, renderer),
        }
    }

    fn step_selecting(&mut self, input: InputSample, renderer: &mut Renderer) {
        self.selected_lives = lives_for_analog(input.analog);
        self.draw_selection(renderer);
        if self.confirmed(input.trigger) {
            self.start_run(renderer);
        }
    }

    fn step_running(&mut self, input: InputSample, renderer: &mut Renderer) {
        let config = self.config;
        let state = &mut self.state;

        renderer.erase(state.page(), state.column(), PLAYER_CELLS);
        state.sample_trigger(input.trigger);
        state.advance_jump(&config);
        state.advance_animation();
        renderer.draw_sprite(state.page(), state.column(), state.player_sprite());

        if state.spawn_due(&config) && !self.obstacles.spawn(config.obstacle_kind, renderer) {
            log::debug!("spawn skipped, {} obstacles active", self.obstacles.active_count());
        }

        if self.state.move_due() {
            let exited = self.obstacles.step(renderer);
            for _ in 0..exited {
                self.state.add_score(1);
                self.emit(GameEvent::ObstacleScored {
                    score: self.state.score(),
                });
            }
            if exited > 0 {
                renderer.draw_number(SCORE_PAGE, SCORE_COLUMN, self.state.score());
            }
        } else {
            // The player erase may have cut into an obstacle.
            self.obstacles.redraw(renderer);
        }

        if let Some(index) = first_hit(self.state.page(), self.state.column(), &self.obstacles) {
            self.obstacles.remove(index, renderer);
            let lives = self.state.lose_life();
            self.emit(GameEvent::Hit { lives });
            if lives == 0 {
                self.game_over(renderer);
                return;
            }
            // The obstacle footprint may have covered the player.
            renderer.draw_sprite(
                self.state.page(),
                self.state.column(),
                self.state.player_sprite(),
            );
        }

        if self.state.advance_difficulty(&config) {
            self.emit(GameEvent::SpeedChanged {
                speed: self.state.current_speed(),
                tick_period_ms: self.state.tick_period_ms(),
            });
        }
    }

    fn step_dead(&mut self, input: InputSample, renderer: &mut Renderer) {
        if self.confirmed(input.trigger) {
            self.restart(renderer);
        }
    }

    fn confirmed(&mut self, trigger: bool) -> bool {
        if self.debounce > 0 {
            self.debounce -= 1;
            return false;
        }
        trigger
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("phase {} -> {}", self.phase, phase);
        self.phase = phase;
        self.debounce = self.config.confirm_debounce_ticks;
    }

    fn start_run(&mut self, renderer: &mut Renderer) {
        self.state.set_lives(self.selected_lives);
        self.enter(Phase::Running);

        renderer.clear();
        for tile in 0..(WIDTH as u8 / CELL_WIDTH) {
            renderer.draw_sprite(GROUND_PAGE, tile * CELL_WIDTH, SpriteId::Ground);
        }
        for column in STAR_COLUMNS {
            renderer.draw_sprite(STAR_PAGE, column, SpriteId::Star);
        }
        renderer.draw_number(SCORE_PAGE, SCORE_COLUMN, self.state.score());
        renderer.draw_sprite(
            self.state.page(),
            self.state.column(),
            self.state.player_sprite(),
        );

        self.emit(GameEvent::GameStarted {
            lives: self.state.lives(),
        });
    }

    fn game_over(&mut self, renderer: &mut Renderer) {
        self.enter(Phase::Dead);
        let (page, column) = (self.state.page(), self.state.column());
        renderer.erase(page, column, PLAYER_CELLS);
        renderer.draw_sprite(page, column, SpriteId::PlayerDead);
        renderer.draw_text(END_TEXT_PAGE, END_TEXT_COLUMN, "END");
        self.emit(GameEvent::GameOver {
            score: self.state.score(),
        });
    }

    fn restart(&mut self, renderer: &mut Renderer) {
        self.state = GameState::new(&self.config);
        self.obstacles.clear();
        self.enter(Phase::Selecting);
        renderer.clear();
        self.draw_selection(renderer);
        self.emit(GameEvent::Restarted);
    }

    /// Redrawn every selecting tick; unchanged bytes cost nothing on swap.
    fn draw_selection(&self, renderer: &mut Renderer) {
        renderer.draw_text(START_TEXT_PAGE, START_TEXT_COLUMN, "START");
        renderer.draw_text(LIVES_TEXT_PAGE, LIVES_TEXT_COLUMN, "LIVES");
        renderer.draw_number(LIVES_TEXT_PAGE, LIVES_DIGIT_COLUMN, u32::from(self.selected_lives));

        let right = GAUGE_LEFT + GAUGE_SEGMENT * MAX_LIVES - 1;
        renderer.draw_rect(GAUGE_LEFT, GAUGE_TOP, right, GAUGE_BOTTOM, true);
        for segment in 0..MAX_LIVES {
            let x0 = GAUGE_LEFT + segment * GAUGE_SEGMENT + 2;
            let x1 = x0 + GAUGE_SEGMENT - 5;
            renderer.fill_rect(
                x0,
                GAUGE_TOP + 2,
                x1,
                GAUGE_BOTTOM - 2,
                segment < self.selected_lives,
            );
        }
    }

    fn emit(&mut self, event: GameEvent) {
        log::info!("{}", event);
        if self.events.try_push(event).is_err() {
            log::warn!("event queue full, dropped: {}", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_LIFE: u16 = 0;
    const TWO_LIVES: u16 = 1500;

    fn run_until<F>(
        sim: &mut Simulation,
        r: &mut Renderer,
        input: InputSample,
        max: usize,
        done: F,
    ) -> usize
    where
        F: Fn(&Simulation) -> bool,
    {
        for tick in 0..max {
            if done(sim) {
                return tick;
            }
            sim.step(input, r);
        }
        panic!("condition not reached within {} ticks", max);
    }

    fn started(lives_analog: u16, config: GameConfig) -> (Simulation, Renderer) {
        let mut sim = Simulation::new(config);
        let mut r = Renderer::new();
        sim.step(InputSample::new(true, lives_analog), &mut r);
        assert_eq!(sim.phase(), Phase::Running);
        (sim, r)
    }

    #[test]
    fn selection_follows_analog_each_tick() {
        let mut sim = Simulation::new(GameConfig::default());
        let mut r = Renderer::new();
        sim.step(InputSample::new(false, 3500), &mut r);
        assert_eq!(sim.selected_lives(), 4);
        assert_eq!(sim.life_indicators(), [true; 4]);
        sim.step(InputSample::new(false, 1024), &mut r);
        assert_eq!(sim.selected_lives(), 2);
        assert_eq!(sim.life_indicators(), [true, true, false, false]);
        assert_eq!(sim.phase(), Phase::Selecting);
        assert!(!r.surface().dirty().is_empty());
    }

    #[test]
    fn confirm_starts_with_selected_lives() {
        let (sim, _) = started(TWO_LIVES, GameConfig::default());
        assert_eq!(sim.state().lives(), 2);
        assert_eq!(sim.events(), &[GameEvent::GameStarted { lives: 2 }]);
        assert_eq!(sim.debounce_remaining(), sim.config().confirm_debounce_ticks);
    }

    #[test]
    fn analog_is_ignored_while_running() {
        let (mut sim, mut r) = started(TWO_LIVES, GameConfig::default());
        sim.step(InputSample::new(false, 4095), &mut r);
        assert_eq!(sim.selected_lives(), 2);
        assert_eq!(sim.life_indicators(), [true, true, false, false]);
    }

    #[test]
    fn single_life_collision_freezes_until_restart() {
        let (mut sim, mut r) = started(ONE_LIFE, GameConfig::default());
        let idle = InputSample::default();
        run_until(&mut sim, &mut r, idle, 400, |s| s.phase() == Phase::Dead);

        assert_eq!(sim.state().lives(), 0);
        assert_eq!(sim.life_indicators(), [false; 4]);
        assert!(sim
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));

        let frozen = sim.state().clone();
        for _ in 0..200 {
            sim.step(idle, &mut r);
        }
        assert_eq!(sim.state(), &frozen);
        assert_eq!(sim.obstacles().active_count(), 0);
        assert_eq!(sim.phase(), Phase::Dead);
    }

    #[test]
    fn restart_confirm_is_debounced() {
        let (mut sim, mut r) = started(ONE_LIFE, GameConfig::default());
        run_until(&mut sim, &mut r, InputSample::default(), 400, |s| {
            s.phase() == Phase::Dead
        });

        let press = InputSample::new(true, 0);
        let ticks = run_until(&mut sim, &mut r, press, 100, |s| s.phase() == Phase::Selecting);
        assert_eq!(ticks, sim.config().confirm_debounce_ticks as usize + 1);
        assert_eq!(sim.events(), &[GameEvent::Restarted]);
        assert_eq!(sim.state().score(), 0);
        assert_eq!(sim.tick_period_ms(), sim.config().tick_period_ms);
    }

    #[test]
    fn hit_costs_one_life_and_removes_obstacle() {
        let (mut sim, mut r) = started(TWO_LIVES, GameConfig::default());
        run_until(&mut sim, &mut r, InputSample::default(), 400, |s| {
            s.state().lives() == 1
        });
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.obstacles().active_count(), 0);
        assert!(sim.events().contains(&GameEvent::Hit { lives: 1 }));
    }

    #[test]
    fn held_jump_clears_obstacles_and_scores() {
        let config = GameConfig {
            spawn_interval_ticks: 20,
            hang_ticks_held: 255,
            speed_up_interval_ticks: 10_000,
            ..GameConfig::default()
        };
        let (mut sim, mut r) = started(ONE_LIFE, config);
        let hold = InputSample::new(true, 0);

        let mut last = 0;
        let mut scored = 0;
        for _ in 0..240 {
            sim.step(hold, &mut r);
            let score = sim.state().score();
            assert!(score >= last);
            for event in sim.events() {
                if let GameEvent::ObstacleScored { score: s } = event {
                    scored += 1;
                    // One slot, so at most one exit per step.
                    assert_eq!(*s, last + 1);
                }
            }
            last = score;
        }
        assert_eq!(sim.phase(), Phase::Running);
        assert!(last > 0);
        assert_eq!(scored, last);
    }

    #[test]
    fn speed_and_period_floor() {
        let config = GameConfig {
            spawn_interval_ticks: 100_000,
            speed_up_interval_ticks: 5,
            ..GameConfig::default()
        };
        let (mut sim, mut r) = started(ONE_LIFE, config);
        let mut changes = 0;
        for _ in 0..200 {
            sim.step(InputSample::default(), &mut r);
            changes += sim
                .events()
                .iter()
                .filter(|e| matches!(e, GameEvent::SpeedChanged { .. }))
                .count();
        }
        assert_eq!(sim.state().current_speed(), config.min_speed);
        assert_eq!(sim.tick_period_ms(), config.min_tick_period_ms);
        // Period drops 20 -> 10 one ms at a time; speed floors sooner.
        assert_eq!(changes, 10);
    }

    #[test]
    fn dead_screen_shows_end_text() {
        let (mut sim, mut r) = started(ONE_LIFE, GameConfig::default());
        run_until(&mut sim, &mut r, InputSample::default(), 400, |s| {
            s.phase() == Phase::Dead
        });
        let mut expected = Renderer::new();
        expected.draw_text(END_TEXT_PAGE, END_TEXT_COLUMN, "END");
        for column in END_TEXT_COLUMN..END_TEXT_COLUMN + 24 {
            assert_eq!(
                r.surface().read_byte(END_TEXT_PAGE, column),
                expected.surface().read_byte(END_TEXT_PAGE, column)
            );
        }
    }

    #[test]
    fn end_text_leaves_stars_whole() {
        let (mut sim, mut r) = started(ONE_LIFE, GameConfig::default());
        run_until(&mut sim, &mut r, InputSample::default(), 400, |s| {
            s.phase() == Phase::Dead
        });
        let mut stars = Renderer::new();
        for column in STAR_COLUMNS {
            stars.draw_sprite(STAR_PAGE, column, SpriteId::Star);
        }
        for page in STAR_PAGE..STAR_PAGE + 2 {
            for column in STAR_COLUMNS[0]..STAR_COLUMNS[1] + 16 {
                assert_eq!(
                    r.surface().read_byte(page, column),
                    stars.surface().read_byte(page, column),
                    "page {} column {}",
                    page,
                    column
                );
            }
        }
    }
}
