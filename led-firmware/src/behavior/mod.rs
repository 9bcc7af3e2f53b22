// LED-Verhalten auf dem Board
//
// cycle: Output-LEDs, getrieben vom Hardware-Timer-Interrupt
// ramp:  PWM-LED, gepollt in der Hauptschleife

pub mod cycle;
pub mod ramp;

pub use cycle::start_cycle;
pub use ramp::run_ramp_loop;

/// Monotone Zeit seit Boot
pub fn since_boot() -> core::time::Duration {
    to_core(esp_hal::time::Instant::now().duration_since_epoch())
}

/// esp-hal Duration → core Duration (Mikrosekunden-Auflösung)
pub fn to_core(duration: esp_hal::time::Duration) -> core::time::Duration {
    core::time::Duration::from_micros(duration.as_micros())
}

/// core Duration → esp-hal Duration
pub fn to_hal(duration: core::time::Duration) -> esp_hal::time::Duration {
    esp_hal::time::Duration::from_micros(duration.as_micros() as u64)
}
