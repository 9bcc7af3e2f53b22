//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::LedError;

/// Index einer LED in der Registry (`0..N`)
pub type LedId = usize;

/// Schaltzustand einer Output-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputState {
    #[default]
    Off = 0,
    On = 1,
}

impl OutputState {
    /// Gegenteil des Zustands (On ↔ Off)
    pub fn opposite(self) -> Self {
        match self {
            OutputState::On => OutputState::Off,
            OutputState::Off => OutputState::On,
        }
    }

    /// Rohwert, wie ihn `get_state` einer Capability liefert
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(OutputState::Off),
            1 => Some(OutputState::On),
            _ => None,
        }
    }
}

/// Art der LED, fest für die gesamte Lebensdauer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedKind {
    Output,
    Pwm,
}

/// Zustand einer PWM-LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmState<C> {
    /// Duty-Cycle in Prozent (ungeclampt, die Capability entscheidet)
    pub duty_cycle: i32,
    /// PWM-Frequenz in Hertz
    pub period_hz: u32,
    /// Peripherie-spezifische Kanal-Konfiguration des Integrators
    pub context: C,
}

/// Zustand einer LED, die Variante bestimmt den [`LedKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState<C> {
    Output(OutputState),
    Pwm(PwmState<C>),
}

impl<C> LedState<C> {
    pub fn kind(&self) -> LedKind {
        match self {
            LedState::Output(_) => LedKind::Output,
            LedState::Pwm(_) => LedKind::Pwm,
        }
    }
}

/// Beschreibung einer physischen LED
///
/// `handle` referenziert Pin/Peripherie des Integrators, der Descriptor
/// besitzt die Hardware nicht. Die `id` wird erst bei der Registrierung
/// vergeben und danach nie geändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedDescriptor<H, C> {
    id: LedId,
    handle: H,
    state: LedState<C>,
}

impl<H, C> LedDescriptor<H, C> {
    /// Einfache An/Aus-LED, startet mit `Off`
    pub fn output(handle: H) -> Self {
        Self {
            id: 0,
            handle,
            state: LedState::Output(OutputState::Off),
        }
    }

    /// PWM-gedimmte LED, startet mit 0 % Duty-Cycle
    pub fn pwm(handle: H, period_hz: u32, context: C) -> Self {
        Self {
            id: 0,
            handle,
            state: LedState::Pwm(PwmState {
                duty_cycle: 0,
                period_hz,
                context,
            }),
        }
    }

    /// Setzt den Start-Duty-Cycle, den `init` in die Hardware schreibt
    ///
    /// Für Output-LEDs ohne Wirkung.
    pub fn with_duty_cycle(mut self, percent: i32) -> Self {
        if let LedState::Pwm(pwm) = &mut self.state {
            pwm.duty_cycle = percent;
        }
        self
    }

    pub fn id(&self) -> LedId {
        self.id
    }

    pub fn kind(&self) -> LedKind {
        self.state.kind()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn state(&self) -> &LedState<C> {
        &self.state
    }

    /// Zustand einer Output-LED, `WrongType` für PWM-LEDs
    pub fn output_state(&self) -> Result<OutputState, LedError> {
        match &self.state {
            LedState::Output(state) => Ok(*state),
            LedState::Pwm(_) => Err(LedError::WrongType),
        }
    }

    pub fn set_output_state(&mut self, state: OutputState) -> Result<(), LedError> {
        match &mut self.state {
            LedState::Output(current) => {
                *current = state;
                Ok(())
            }
            LedState::Pwm(_) => Err(LedError::WrongType),
        }
    }

    /// Zustand einer PWM-LED, `WrongType` für Output-LEDs
    pub fn pwm_state(&self) -> Result<&PwmState<C>, LedError> {
        match &self.state {
            LedState::Pwm(pwm) => Ok(pwm),
            LedState::Output(_) => Err(LedError::WrongType),
        }
    }

    pub fn pwm_state_mut(&mut self) -> Result<&mut PwmState<C>, LedError> {
        match &mut self.state {
            LedState::Pwm(pwm) => Ok(pwm),
            LedState::Output(_) => Err(LedError::WrongType),
        }
    }

    pub(crate) fn assign_id(&mut self, id: LedId) {
        self.id = id;
    }
}

/// Richtung der Helligkeits-Rampe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampDirection {
    /// Duty-Cycle steigt (auf der Referenz-Hardware: LED wird dunkler)
    #[default]
    Increasing,
    Decreasing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_state_opposite() {
        assert_eq!(OutputState::On.opposite(), OutputState::Off);
        assert_eq!(OutputState::Off.opposite(), OutputState::On);
    }

    #[test]
    fn test_output_state_raw_values() {
        assert_eq!(OutputState::Off.as_raw(), 0);
        assert_eq!(OutputState::On.as_raw(), 1);
        assert_eq!(OutputState::from_raw(1), Some(OutputState::On));
        assert_eq!(OutputState::from_raw(7), None);
    }

    #[test]
    fn test_output_descriptor_rejects_pwm_access() {
        let mut led: LedDescriptor<u8, ()> = LedDescriptor::output(5);
        assert_eq!(led.kind(), LedKind::Output);
        assert_eq!(led.output_state(), Ok(OutputState::Off));
        assert_eq!(led.pwm_state().err(), Some(LedError::WrongType));
        assert_eq!(led.pwm_state_mut().err(), Some(LedError::WrongType));
    }

    #[test]
    fn test_pwm_descriptor_rejects_output_access() {
        let mut led: LedDescriptor<u8, u8> = LedDescriptor::pwm(4, 1000, 2).with_duty_cycle(30);
        assert_eq!(led.kind(), LedKind::Pwm);
        assert_eq!(led.output_state(), Err(LedError::WrongType));
        assert_eq!(led.set_output_state(OutputState::On), Err(LedError::WrongType));

        let pwm = led.pwm_state().unwrap();
        assert_eq!(pwm.duty_cycle, 30);
        assert_eq!(pwm.period_hz, 1000);
        assert_eq!(pwm.context, 2);
    }

    #[test]
    fn test_with_duty_cycle_ignored_for_output() {
        let led: LedDescriptor<u8, ()> = LedDescriptor::output(1).with_duty_cycle(50);
        assert_eq!(*led.state(), LedState::Output(OutputState::Off));
    }
}
