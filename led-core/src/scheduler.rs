//! Periodische LED-Verhalten
//!
//! Zwei unabhängig getaktete Zustandsautomaten:
//! - [`CycleScheduler`]: fester Tick (Interrupt-Kontext), togglet reihum
//!   eine LED oder alle gemeinsam
//! - [`RampScheduler`]: feiner Tick (Vordergrund-Schleife, gepollt), fährt
//!   den Duty-Cycle einer PWM-LED linear auf und ab
//!
//! Beide besitzen ihren Zustand selbst; die LEDs der beiden Verhalten müssen
//! disjunkt konfiguriert sein (siehe `DESIGN.md`).

use core::time::Duration;

use crate::config::{CycleBehavior, CycleConfig, RampConfig};
use crate::logic::{next_cursor, ramp_advance};
use crate::process::LedProc;
use crate::traits::{LedCapabilities, LedError};
use crate::types::{LedId, LedKind, RampDirection};

/// Cycle/Flash-Automat für den periodischen Interrupt
///
/// Besitzt nicht den Timer, nur den Callback, der beim Feuern läuft.
pub struct CycleScheduler<const R: usize> {
    config: CycleConfig,
    rotation: [LedId; R],
    cursor: usize,
}

impl<const R: usize> CycleScheduler<R> {
    pub fn new(config: CycleConfig, rotation: [LedId; R]) -> Self {
        Self {
            config,
            rotation,
            cursor: 0,
        }
    }

    pub fn behavior(&self) -> CycleBehavior {
        self.config.behavior
    }

    /// Periode, mit der der Integrator den Timer starten soll
    pub fn period(&self) -> Duration {
        self.config.period
    }

    pub fn rotation(&self) -> &[LedId] {
        &self.rotation
    }

    /// Position in der Rotation, die beim nächsten Tick getoggelt wird
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Prüft die Rotation einmalig gegen die Registry, vor dem Timer-Start
    ///
    /// `InvalidId` für Ids außerhalb der Registry, `WrongType` für
    /// PWM-LEDs in der Rotation.
    pub fn validate<D: LedCapabilities, const N: usize>(
        &self,
        leds: &LedProc<D, N>,
    ) -> Result<(), LedError> {
        check_kind(leds, &self.rotation, LedKind::Output)
    }

    /// Ein Übergang, Fehler gehen an den Aufrufer
    ///
    /// RoundRobin rückt den Cursor immer weiter, auch wenn das Toggle
    /// fehlschlägt.
    pub fn tick<D: LedCapabilities, const N: usize>(
        &mut self,
        leds: &mut LedProc<D, N>,
    ) -> Result<(), LedError> {
        match self.config.behavior {
            CycleBehavior::RoundRobin => {
                let Some(&target) = self.rotation.get(self.cursor) else {
                    return Ok(());
                };
                self.cursor = next_cursor(self.cursor, R);
                leds.toggle(target)
            }
            CycleBehavior::FlashAll => leds.toggle_many(&self.rotation),
        }
    }

    /// Callback für den Timer-Interrupt
    ///
    /// Fehler werden nur geloggt, damit die Timer-Quelle weiterläuft.
    pub fn on_cycle_tick<D: LedCapabilities, const N: usize>(&mut self, leds: &mut LedProc<D, N>) {
        if let Err(err) = self.tick(leds) {
            warn!("Cycle tick failed: {:?}", err);
        }
    }
}

fn check_kind<D: LedCapabilities, const N: usize>(
    leds: &LedProc<D, N>,
    ids: &[LedId],
    kind: LedKind,
) -> Result<(), LedError> {
    for &id in ids {
        let led = leds.led(id).ok_or_else(|| {
            error!("Scheduler LED {} not registered", id);
            LedError::InvalidId
        })?;
        if led.kind() != kind {
            error!("Scheduler LED {} has wrong kind", id);
            return Err(LedError::WrongType);
        }
    }
    Ok(())
}

/// Duty-Cycle-Rampe ("Atmen") für eine PWM-LED
pub struct RampScheduler {
    target: LedId,
    config: RampConfig,
    value: i32,
    direction: RampDirection,
    last_step: Option<Duration>,
}

impl RampScheduler {
    /// Startet steigend beim hellsten Wert
    pub fn new(target: LedId, config: RampConfig) -> Self {
        Self {
            target,
            config,
            value: config.brightest,
            direction: RampDirection::Increasing,
            last_step: None,
        }
    }

    pub fn target(&self) -> LedId {
        self.target
    }

    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    /// Wert, der beim nächsten Schritt geschrieben wird
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Prüft, ob das Ziel eine registrierte PWM-LED ist
    pub fn validate<D: LedCapabilities, const N: usize>(
        &self,
        leds: &LedProc<D, N>,
    ) -> Result<(), LedError> {
        check_kind(leds, &[self.target], LedKind::Pwm)
    }

    /// Ein Schritt: erst schreiben, dann weiterzählen und ggf. drehen
    ///
    /// Die Reihenfolge ist fest. Der Übergang passiert auch, wenn das
    /// Schreiben fehlschlägt; der Fehler wird zurückgegeben.
    pub fn step<D: LedCapabilities, const N: usize>(
        &mut self,
        leds: &mut LedProc<D, N>,
    ) -> Result<(), LedError> {
        let written = leds.set_duty_cycle(self.target, self.value);

        let (value, direction) = ramp_advance(
            self.value,
            self.direction,
            self.config.brightest,
            self.config.dimmest,
        );
        if direction != self.direction {
            debug!("Ramp turned at {}", value);
        }
        self.value = value;
        self.direction = direction;

        written
    }

    /// Vordergrund-Poll mit monotoner Zeit seit Start
    ///
    /// Blockiert nie: ohne abgelaufenes Intervall passiert nichts. Der
    /// erste Aufruf setzt nur den Startzeitpunkt. Liefert `true`, wenn ein
    /// Schritt ausgeführt wurde.
    pub fn on_ramp_poll<D: LedCapabilities, const N: usize>(
        &mut self,
        leds: &mut LedProc<D, N>,
        now: Duration,
    ) -> bool {
        let Some(last_step) = self.last_step else {
            self.last_step = Some(now);
            return false;
        };
        if now.saturating_sub(last_step) < self.config.interval {
            return false;
        }

        self.last_step = Some(now);
        self.run_step(leds);
        true
    }

    /// Vordergrund-Poll mit vom Aufrufer gemessener Zeit seit dem letzten
    /// Schritt
    ///
    /// Bei `true` muss der Aufrufer seinen Zähler zurücksetzen.
    pub fn on_ramp_elapsed<D: LedCapabilities, const N: usize>(
        &mut self,
        leds: &mut LedProc<D, N>,
        elapsed: Duration,
    ) -> bool {
        if elapsed < self.config.interval {
            return false;
        }

        self.run_step(leds);
        true
    }

    fn run_step<D: LedCapabilities, const N: usize>(&mut self, leds: &mut LedProc<D, N>) {
        if let Err(err) = self.step(leds) {
            warn!("Ramp step on LED {} failed: {:?}", self.target, err);
        }
    }
}
