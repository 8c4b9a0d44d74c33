//! Folds key events into a per-tick [`InputSample`].

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::handler::{AnalogDial, TriggerHandler};
use crate::map::{map_key, InputKey};
use crate::types::InputSample;

#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    trigger: TriggerHandler,
    dial: AnalogDial,
}

impl InputSampler {
    pub fn new(trigger: TriggerHandler, dial: AnalogDial) -> Self {
        Self { trigger, dial }
    }

    pub fn dial(&self) -> &AnalogDial {
        &self.dial
    }

    /// Apply one key event. Returns the control it touched, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputKey> {
        let control = map_key(key)?;
        match (control, key.kind) {
            (InputKey::Trigger, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.trigger.handle_press()
            }
            (InputKey::Trigger, KeyEventKind::Release) => self.trigger.handle_release(),
            (_, KeyEventKind::Release) => {}
            (InputKey::DialUp, _) => self.dial.step_up(),
            (InputKey::DialDown, _) => self.dial.step_down(),
            (InputKey::DialPreset(lives), _) => self.dial.set_preset(lives),
        }
        log::trace!("{:?} {:?} -> dial {}", control, key.kind, self.dial.value());
        Some(control)
    }

    /// Sample both controls for this tick.
    pub fn sample(&mut self) -> InputSample {
        InputSample::new(self.trigger.update(), self.dial.value())
    }

    /// Drop a held trigger; the next press or repeat raises it again.
    pub fn reset(&mut self) {
        self.trigger.reset();
    }
}
