//! Konfiguration der periodischen LED-Verhalten
//!
//! Default-Werte entsprechen der Referenz-Hardware.

use core::time::Duration;

/// Tick-Periode für Cycle/Flash in Millisekunden
pub const DEFAULT_CYCLE_PERIOD_MS: u64 = 500;

/// Intervall zwischen zwei Rampen-Schritten in Millisekunden
pub const DEFAULT_RAMP_INTERVAL_MS: u64 = 50;

/// Hellster Duty-Cycle (PWM invertiert: kleiner Wert = heller)
pub const DEFAULT_RAMP_BRIGHTEST: i32 = 0;

/// Dunkelster Duty-Cycle
pub const DEFAULT_RAMP_DIMMEST: i32 = 95;

/// Verhalten im periodischen Interrupt
///
/// Wird einmal konfiguriert, kein Umschalten zur Laufzeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleBehavior {
    /// Pro Tick genau eine LED der Rotation togglen
    #[default]
    RoundRobin,
    /// Pro Tick alle LEDs der Liste gemeinsam togglen
    FlashAll,
}

/// Konfiguration des Cycle/Flash-Verhaltens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    pub behavior: CycleBehavior,
    /// Periode des Timers, der `on_cycle_tick` auslöst
    pub period: Duration,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            behavior: CycleBehavior::default(),
            period: Duration::from_millis(DEFAULT_CYCLE_PERIOD_MS),
        }
    }
}

/// Konfiguration der Duty-Cycle-Rampe ("Atmen")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampConfig {
    /// Untere Grenze, Startwert der Rampe
    pub brightest: i32,
    /// Obere Grenze
    pub dimmest: i32,
    /// Mindestabstand zwischen zwei Schritten
    pub interval: Duration,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            brightest: DEFAULT_RAMP_BRIGHTEST,
            dimmest: DEFAULT_RAMP_DIMMEST,
            interval: Duration::from_millis(DEFAULT_RAMP_INTERVAL_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_config_default() {
        let config = CycleConfig::default();
        assert_eq!(config.behavior, CycleBehavior::RoundRobin);
        assert_eq!(config.period, Duration::from_millis(500));
    }

    #[test]
    fn test_ramp_config_default() {
        let config = RampConfig::default();
        assert_eq!(config.brightest, 0);
        assert_eq!(config.dimmest, 95);
        assert_eq!(config.interval, Duration::from_millis(50));
    }
}
