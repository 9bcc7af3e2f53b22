// GPIO Capability-Set für einfache An/Aus-LEDs
//
// Jede LED hängt an einem eigenen Output-Pin. Der Descriptor-Handle ist der
// Index in das Pin-Array, der Treiber besitzt die Pins.

use core::convert::Infallible;

use esp_hal::gpio::{Level, Output};
use led_core::{Descriptor, LedCapabilities, LedError, OutputState};

/// Output-LEDs an GPIO-Pins
///
/// PWM-LEDs sind hier nicht registrierbar (`PwmContext = Infallible`).
pub struct GpioDriver<const N: usize> {
    outputs: [Output<'static>; N],
    on_level: Level,
}

impl<const N: usize> GpioDriver<N> {
    /// Erstellt den Treiber
    ///
    /// # Parameter
    /// - `outputs`: bereits konfigurierte Output-Pins, Index = Handle
    /// - `on_level`: `High` für LED gegen GND, `Low` für LED gegen 3.3V
    pub fn new(outputs: [Output<'static>; N], on_level: Level) -> Self {
        Self { outputs, on_level }
    }

    fn level_for(&self, state: OutputState) -> Level {
        match state {
            OutputState::On => self.on_level,
            OutputState::Off => !self.on_level,
        }
    }

    fn pin(&mut self, led: &Descriptor<Self>) -> Result<&mut Output<'static>, LedError> {
        self.outputs.get_mut(*led.handle()).ok_or(LedError::InvalidId)
    }
}

impl<const N: usize> LedCapabilities for GpioDriver<N> {
    type Handle = usize;
    type PwmContext = Infallible;

    fn init(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        led.output_state()?;
        let off = self.level_for(OutputState::Off);
        self.pin(led)?.set_level(off);
        led.set_output_state(OutputState::Off)
    }

    fn set_polarity(
        &mut self,
        led: &mut Descriptor<Self>,
        state: OutputState,
    ) -> Result<(), LedError> {
        led.output_state()?;
        let level = self.level_for(state);
        self.pin(led)?.set_level(level);
        Ok(())
    }

    fn set_duty_cycle(&mut self, _led: &mut Descriptor<Self>, _percent: i32) -> Result<(), LedError> {
        Err(LedError::WrongType)
    }

    fn get_state(&mut self, led: &Descriptor<Self>) -> Result<i32, LedError> {
        led.output_state()?;
        let on_level = self.on_level;
        // Output-Latch zurücklesen, nicht den gespeicherten Descriptor-Zustand
        let state = if self.pin(led)?.output_level() == on_level {
            OutputState::On
        } else {
            OutputState::Off
        };
        Ok(state.as_raw())
    }

    fn deinit(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        let off = self.level_for(OutputState::Off);
        self.pin(led)?.set_level(off);
        Ok(())
    }
}
