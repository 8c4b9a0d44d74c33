//! Renderer and panel tests: what reaches the LCD, and when.

use dino_runner::core::Simulation;
use dino_runner::render::{PageSink, RecordingSink, Renderer};
use dino_runner::term::LcdPanel;
use dino_runner::types::{
    GameConfig, InputSample, SpriteId, GROUND_PAGE, PAGES, PLAYER_COLUMN, PLAYER_START_PAGE,
};

#[test]
fn test_unchanged_frame_transmits_nothing() {
    let mut r = Renderer::new();
    let mut sink = RecordingSink::new();
    r.draw_sprite(2, 40, SpriteId::Star);
    r.swap(&mut sink).unwrap();
    sink.clear();

    // Redrawing identical content leaves every page clean.
    r.draw_sprite(2, 40, SpriteId::Star);
    r.swap(&mut sink).unwrap();
    assert!(sink.writes().is_empty());
}

#[test]
fn test_redrawing_a_sprite_in_place_then_moving_it_touches_only_its_pages() {
    let mut r = Renderer::new();
    let mut sink = RecordingSink::new();
    r.draw_sprite(4, 64, SpriteId::CactusBig);
    r.swap(&mut sink).unwrap();
    sink.clear();

    r.erase(4, 64, 2);
    r.draw_sprite(4, 56, SpriteId::CactusBig);
    r.swap(&mut sink).unwrap();
    assert_eq!(sink.pages(), vec![4, 5]);
}

#[test]
fn test_panel_mirrors_surface_after_each_swap() {
    let mut sim = Simulation::new(GameConfig::default());
    let mut r = Renderer::new();
    let mut panel = LcdPanel::new();

    sim.step(InputSample::new(true, 2000), &mut r);
    for tick in 0..300 {
        sim.step(InputSample::new(tick % 40 < 3, 0), &mut r);
        r.swap(&mut panel).unwrap();
        for page in 0..PAGES as u8 {
            assert_eq!(panel.page(page), r.surface().page(page), "page {}", page);
        }
    }
}

#[test]
fn test_running_screen_has_ground_and_player() {
    let mut sim = Simulation::new(GameConfig::default());
    let mut r = Renderer::new();
    sim.step(InputSample::new(true, 0), &mut r);

    let mut expected = Renderer::new();
    expected.draw_sprite(GROUND_PAGE, 0, SpriteId::Ground);
    expected.draw_sprite(PLAYER_START_PAGE, PLAYER_COLUMN, SpriteId::PlayerRun1);
    for col in 0..8 {
        assert_eq!(
            r.surface().read_byte(GROUND_PAGE, col),
            expected.surface().read_byte(GROUND_PAGE, col)
        );
        assert_eq!(
            r.surface().read_byte(PLAYER_START_PAGE, PLAYER_COLUMN + col),
            expected.surface().read_byte(PLAYER_START_PAGE, PLAYER_COLUMN + col)
        );
    }
}

#[test]
fn test_steady_running_sends_few_pages() {
    let config = GameConfig {
        spawn_interval_ticks: 1_000_000,
        ..GameConfig::default()
    };
    let mut sim = Simulation::new(config);
    let mut r = Renderer::new();
    let mut panel = LcdPanel::new();
    sim.step(InputSample::new(true, 0), &mut r);
    r.swap(&mut panel).unwrap();

    // Only the run animation changes the frame, once every ten ticks.
    let before = panel.page_writes();
    let mut swaps_with_writes = 0;
    for _ in 0..100 {
        sim.step(InputSample::default(), &mut r);
        let sent = r.swap(&mut panel).unwrap();
        assert!(sent.iter().all(|p| p == 4 || p == 5), "sent {}", sent);
        if !sent.is_empty() {
            swaps_with_writes += 1;
        }
    }
    assert_eq!(swaps_with_writes, 10);
    assert!(panel.page_writes() - before <= 20);
}

struct Failing;

impl PageSink for Failing {
    type Error = &'static str;

    fn write_page(&mut self, _page: u8, _bytes: &[u8; 128]) -> Result<(), Self::Error> {
        Err("bus timeout")
    }
}

#[test]
fn test_sink_error_is_propagated_and_retried() {
    let mut r = Renderer::new();
    r.draw_sprite(0, 0, SpriteId::Star);
    let pending: Vec<u8> = r.surface().dirty().iter().collect();
    assert!(!pending.is_empty());
    assert_eq!(r.swap(&mut Failing), Err("bus timeout"));

    let mut sink = RecordingSink::new();
    r.swap(&mut sink).unwrap();
    assert_eq!(sink.pages(), pending);
}

mod proptests {
    use super::*;
    use dino_runner::types::{Glyph, WIDTH};
    use proptest::prelude::*;

    fn sprite() -> impl Strategy<Value = SpriteId> {
        prop_oneof![
            Just(SpriteId::CactusBig),
            Just(SpriteId::CactusSmall),
            Just(SpriteId::Star),
            Just(SpriteId::PlayerStand),
            Just(SpriteId::PlayerRun1),
            Just(SpriteId::PlayerRun2),
            Just(SpriteId::PlayerDead),
            Just(SpriteId::Ground),
        ]
    }

    // Property: erasing a region twice equals erasing it once.
    proptest! {
        #[test]
        fn prop_erase_is_idempotent(
            page in 0u8..7,
            column in 0u8..WIDTH as u8,
            width in 1u8..4,
            s in sprite(),
        ) {
            let mut once = Renderer::new();
            once.draw_sprite(page, column, s);
            once.erase(page, column, width);

            let mut twice = once.clone();
            twice.erase(page, column, width);
            prop_assert_eq!(once.surface(), twice.surface());
        }
    }

    // Property: drawing then erasing on a blank, flushed surface leaves nothing to send.
    proptest! {
        #[test]
        fn prop_draw_then_erase_is_clean(page in 0u8..7, column in 0u8..WIDTH as u8, s in sprite()) {
            let mut r = Renderer::new();
            r.draw_sprite(page, column, s);
            r.erase(page, column, s.width_cells());
            prop_assert!(r.surface().dirty().is_empty());
        }
    }

    // Property: text drawing never touches pages outside its two-page band.
    proptest! {
        #[test]
        fn prop_text_stays_in_band(page in 0u8..7, text in "[A-Z0-9 ]{0,20}") {
            let mut r = Renderer::new();
            r.draw_text(page, 0, &text);
            let touched: Vec<u8> = r.surface().dirty().iter().collect();
            prop_assert!(touched.iter().all(|&p| p == page || p == page + 1));
            let visible = text.chars().take(16).any(|c| Glyph::from_char(c) != Some(Glyph::BLANK));
            prop_assert_eq!(touched.is_empty(), !visible);
        }
    }
}
