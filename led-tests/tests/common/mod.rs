//! Gemeinsamer Mock für die Integration Tests
#![allow(dead_code)]

use led_core::{
    Descriptor, LedCapabilities, LedDescriptor, LedError, LedId, LedState, OutputState,
};

/// Aufgezeichneter Capability-Aufruf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init(LedId),
    SetPolarity(LedId, OutputState),
    SetDuty(LedId, i32),
    GetState(LedId),
    Deinit(LedId),
}

/// PWM-Kanal des Mocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockChannel(pub u8);

// ============================================================================
// Mock Capability Set
// ============================================================================

/// In-memory Capability-Set: merkt sich Pegel pro LED und jeden Aufruf
#[derive(Default)]
pub struct MockLeds {
    pub calls: Vec<Call>,
    pub levels: [i32; 8],
    /// `set_polarity` auf dieser LED schlägt fehl
    pub fail_polarity_for: Option<LedId>,
    /// `init` auf dieser LED schlägt fehl
    pub fail_init_for: Option<LedId>,
    /// `set_duty_cycle` schlägt immer fehl
    pub fail_duty: bool,
    /// `deinit` auf dieser LED schlägt fehl
    pub fail_deinit_for: Option<LedId>,
    /// `get_state` liefert immer diesen Wert
    pub fixed_state: Option<i32>,
    /// `set_polarity` meldet Erfolg, ändert aber nichts
    pub ignore_writes: bool,
    /// `set_polarity` schreibt den Pegel, meldet aber einen Fehler
    pub fail_after_write: bool,
    /// `get_state` schlägt fehl, sobald so viele Lesezugriffe gelungen sind
    pub fail_state_after: Option<usize>,
    /// Anzahl gelungener `get_state`-Aufrufe
    pub state_reads: usize,
}

impl MockLeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reihenfolge der geschriebenen Pegel als (LED, Zustand)
    pub fn polarity_writes(&self) -> Vec<(LedId, OutputState)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetPolarity(id, state) => Some((*id, *state)),
                _ => None,
            })
            .collect()
    }

    /// Reihenfolge der geschriebenen Duty-Cycles
    pub fn duty_writes(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetDuty(_, percent) => Some(*percent),
                _ => None,
            })
            .collect()
    }
}

impl LedCapabilities for MockLeds {
    type Handle = u8;
    type PwmContext = MockChannel;

    fn init(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        self.calls.push(Call::Init(led.id()));
        if self.fail_init_for == Some(led.id()) {
            return Err(LedError::Unknown);
        }

        self.levels[led.id()] = match led.state() {
            LedState::Output(_) => {
                led.set_output_state(OutputState::Off)?;
                OutputState::Off.as_raw()
            }
            LedState::Pwm(pwm) => pwm.duty_cycle,
        };
        Ok(())
    }

    fn set_polarity(
        &mut self,
        led: &mut Descriptor<Self>,
        state: OutputState,
    ) -> Result<(), LedError> {
        self.calls.push(Call::SetPolarity(led.id(), state));
        if self.fail_polarity_for == Some(led.id()) {
            return Err(LedError::Unknown);
        }
        if !self.ignore_writes {
            self.levels[led.id()] = state.as_raw();
        }
        if self.fail_after_write {
            return Err(LedError::Unknown);
        }
        Ok(())
    }

    fn set_duty_cycle(&mut self, led: &mut Descriptor<Self>, percent: i32) -> Result<(), LedError> {
        self.calls.push(Call::SetDuty(led.id(), percent));
        if self.fail_duty {
            return Err(LedError::Unknown);
        }
        self.levels[led.id()] = percent;
        Ok(())
    }

    fn get_state(&mut self, led: &Descriptor<Self>) -> Result<i32, LedError> {
        self.calls.push(Call::GetState(led.id()));
        if self.fail_state_after == Some(self.state_reads) {
            return Err(LedError::Unknown);
        }
        self.state_reads += 1;
        Ok(self.fixed_state.unwrap_or(self.levels[led.id()]))
    }

    fn deinit(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        self.calls.push(Call::Deinit(led.id()));
        if self.fail_deinit_for == Some(led.id()) {
            return Err(LedError::Unknown);
        }
        Ok(())
    }
}

// ============================================================================
// Board-Layout wie auf der Referenz-Hardware
// ============================================================================

pub const RED: LedId = 0;
pub const WHITE: LedId = 1;
pub const GREEN: LedId = 2;
pub const BLUE: LedId = 3;

pub fn board_leds() -> [LedDescriptor<u8, MockChannel>; 4] {
    [
        LedDescriptor::output(5),
        LedDescriptor::pwm(4, 1000, MockChannel(2)),
        LedDescriptor::output(3),
        LedDescriptor::output(2),
    ]
}

pub fn output_leds<const N: usize>() -> [LedDescriptor<u8, MockChannel>; N] {
    core::array::from_fn(|pin| LedDescriptor::output(pin as u8))
}
