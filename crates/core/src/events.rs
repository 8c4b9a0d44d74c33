use std::fmt;

/// Notable game transitions, one line each on the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted { lives: u8 },
    ObstacleScored { score: u32 },
    Hit { lives: u8 },
    GameOver { score: u32 },
    Restarted,
    SpeedChanged { speed: u32, tick_period_ms: u32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::GameStarted { lives } => write!(f, "game start, lives: {}", lives),
            GameEvent::ObstacleScored { score } => write!(f, "score: {}", score),
            GameEvent::Hit { lives } => write!(f, "hit, lives remaining: {}", lives),
            GameEvent::GameOver { score } => write!(f, "game over, final score: {}", score),
            GameEvent::Restarted => f.write_str("restart"),
            GameEvent::SpeedChanged {
                speed,
                tick_period_ms,
            } => write!(
                f,
                "speed up: obstacles step every {} ticks, tick {}ms",
                speed, tick_period_ms
            ),
        }
    }
}
