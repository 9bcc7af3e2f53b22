// Board Support: LED-Tabellen des Boards
//
// Zwei getrennte Registries: die Output-LEDs gehören dem Timer-Interrupt,
// die PWM-LED gehört der Hauptschleife. Damit greifen beide Kontexte nie
// auf denselben Descriptor zu.

use core::convert::Infallible;

use led_core::{LedDescriptor, LedId};

use crate::config::{LED_PWM_BRIGHTEST, LED_PWM_FREQUENCY_HZ, LED_PWM_OPEN_DRAIN, LED_PWM_RESOLUTION};
use crate::hal::LedcContext;

/// Anzahl Output-LEDs im Cycle
pub const CYCLE_LED_COUNT: usize = 3;

/// Anzahl PWM-LEDs in der Rampe
pub const RAMP_LED_COUNT: usize = 1;

// IDs in der Cycle-Registry (Reihenfolge = Registrierung)
pub const LED_RED_NUM: LedId = 0;
pub const LED_GREEN_NUM: LedId = 1;
pub const LED_BLUE_NUM: LedId = 2;

// ID in der Rampen-Registry
pub const LED_WHITE_NUM: LedId = 0;

/// Reihenfolge im RoundRobin: Rot → Grün → Blau
pub const CYCLE_ROTATION: [LedId; CYCLE_LED_COUNT] = [LED_RED_NUM, LED_GREEN_NUM, LED_BLUE_NUM];

/// Output-LEDs, Handle = Index in das Pin-Array des `GpioDriver`
pub fn cycle_leds() -> [LedDescriptor<usize, Infallible>; CYCLE_LED_COUNT] {
    [
        LedDescriptor::output(0),
        LedDescriptor::output(1),
        LedDescriptor::output(2),
    ]
}

/// PWM-LED, Handle = Index in das Kanal-Array des `LedcDriver`
pub fn ramp_leds() -> [LedDescriptor<usize, LedcContext>; RAMP_LED_COUNT] {
    let context = LedcContext {
        resolution: LED_PWM_RESOLUTION,
        open_drain: LED_PWM_OPEN_DRAIN,
    };
    [LedDescriptor::pwm(0, LED_PWM_FREQUENCY_HZ, context).with_duty_cycle(LED_PWM_BRIGHTEST)]
}
