// Duty-Cycle-Rampe der PWM-LED in der Hauptschleife

use led_core::{LedProc, RampScheduler};

use super::since_boot;
use crate::bsp::RAMP_LED_COUNT;
use crate::hal::LedcDriver;

/// Registry der PWM-LEDs
pub type RampLeds = LedProc<LedcDriver<RAMP_LED_COUNT>, RAMP_LED_COUNT>;

/// Pollt die Rampe für immer
///
/// Kein Sleep: jede Iteration fragt nur die Zeit ab, der Schritt selbst
/// passiert höchstens einmal pro Intervall.
pub fn run_ramp_loop(mut leds: RampLeds, mut ramp: RampScheduler) -> ! {
    defmt::info!(
        "Ramp on LED {} started ({} ms interval)",
        ramp.target(),
        ramp.config().interval.as_millis() as u32
    );

    loop {
        ramp.on_ramp_poll(&mut leds, since_boot());
    }
}
