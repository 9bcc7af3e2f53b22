// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use core::time::Duration;

use esp_hal::gpio::Level;
use esp_hal::ledc::timer::config::Duty;
use led_core::{CycleBehavior, CycleConfig, RampConfig};

// ============================================================================
// GPIO Zuordnung
// ============================================================================

/// GPIO-Pin der roten LED (Output, Cycle)
pub const LED_RED_GPIO: u8 = 5;

/// GPIO-Pin der weißen LED (PWM, Rampe)
pub const LED_WHITE_GPIO: u8 = 4;

/// GPIO-Pin der grünen LED (Output, Cycle)
pub const LED_GREEN_GPIO: u8 = 3;

/// GPIO-Pin der blauen LED (Output, Cycle)
pub const LED_BLUE_GPIO: u8 = 2;

/// Pegel für "an"
/// High = LED gegen GND verdrahtet, Low = LED gegen 3.3V (Sink)
pub const LED_ON_LEVEL: Level = Level::High;

// ============================================================================
// Cycle Konfiguration
// ============================================================================

/// Verhalten der Output-LEDs pro Timer-Tick
pub const LED_BEHAVIOR: CycleBehavior = CycleBehavior::RoundRobin;

/// Periode des Hardware-Timers in Millisekunden
pub const LED_TIMER_MS: u64 = 500;

// ============================================================================
// PWM / Rampe Konfiguration
// ============================================================================

/// Abstand zwischen zwei Rampen-Schritten in Millisekunden
pub const RAMP_INTERVAL_MS: u64 = 50;

/// Duty-Cycle am hellen Ende der Rampe (Startwert)
pub const LED_PWM_BRIGHTEST: i32 = 0;

/// Duty-Cycle am dunklen Ende der Rampe
pub const LED_PWM_DIMMEST: i32 = 95;

/// PWM-Frequenz des LEDC-Timers
/// 24 kHz liegt über dem hörbaren Bereich
pub const LED_PWM_FREQUENCY_HZ: u32 = 24_000;

/// Auflösung des Duty-Cycles
/// 5 Bit reichen bei 24 kHz aus APB-Takt (80 MHz)
pub const LED_PWM_RESOLUTION: Duty = Duty::Duty5Bit;

/// Treiberart des PWM-Pins
/// `true` = Open-Drain (LED gegen 3.3V), `false` = Push-Pull (LED gegen GND)
pub const LED_PWM_OPEN_DRAIN: bool = false;

pub fn cycle_config() -> CycleConfig {
    CycleConfig {
        behavior: LED_BEHAVIOR,
        period: Duration::from_millis(LED_TIMER_MS),
    }
}

pub fn ramp_config() -> RampConfig {
    RampConfig {
        brightest: LED_PWM_BRIGHTEST,
        dimmest: LED_PWM_DIMMEST,
        interval: Duration::from_millis(RAMP_INTERVAL_MS),
    }
}
