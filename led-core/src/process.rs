//! LED Process Layer
//!
//! Einziger Dispatch-Punkt von LED-Ids auf das Capability-Set des
//! Integrators. Besitzt die Registry (feste Anzahl LEDs, Ids `0..N`) und
//! legt die Toggle-Verifikation über die rohen Pegel-/Duty-Schreibzugriffe.

use crate::traits::{Descriptor, LedCapabilities, LedError};
use crate::types::{LedId, LedKind, OutputState};

/// Registry + Capability-Set
///
/// Wird einmal beim Systemstart über [`LedProc::register`] erzeugt und lebt
/// bis zum Reset. Es gibt kein Hinzufügen/Entfernen zur Laufzeit.
pub struct LedProc<D: LedCapabilities, const N: usize> {
    driver: D,
    leds: [Descriptor<D>; N],
}

impl<D: LedCapabilities, const N: usize> LedProc<D, N> {
    /// Prüft das Capability-Set und initialisiert alle LEDs in Reihenfolge
    ///
    /// # Fehlerbehandlung
    /// - `NullCapability` bei leerer LED-Liste oder unvollständigem Set,
    ///   ohne dass eine Capability aufgerufen wurde
    /// - der Fehler des ersten fehlgeschlagenen `init`, es wird nichts
    ///   wiederholt (Aufrufer muss neu registrieren)
    pub fn register(mut driver: D, mut leds: [Descriptor<D>; N]) -> Result<Self, LedError> {
        if N == 0 {
            warn!("LED registration without LEDs");
            return Err(LedError::NullCapability);
        }
        if let Err(err) = driver.validate() {
            error!("LED capability set incomplete: {:?}", err);
            return Err(err);
        }

        for (id, led) in leds.iter_mut().enumerate() {
            led.assign_id(id);
            if let Err(err) = driver.init(led) {
                error!("Failed to init LED {}: {:?}", id, err);
                return Err(err);
            }
        }

        info!("Registered {} LEDs", N);
        Ok(Self { driver, leds })
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn led(&self, id: LedId) -> Option<&Descriptor<D>> {
        self.leds.get(id)
    }

    pub fn leds(&self) -> &[Descriptor<D>] {
        &self.leds
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Schaltet eine Output-LED ein
    pub fn turn_on(&mut self, id: LedId) -> Result<(), LedError> {
        self.write_polarity(id, OutputState::On)
    }

    /// Schaltet eine Output-LED aus
    pub fn turn_off(&mut self, id: LedId) -> Result<(), LedError> {
        self.write_polarity(id, OutputState::Off)
    }

    /// Toggle mit Verifikation
    ///
    /// Liest den Zustand, schreibt das Gegenteil und liest erneut. Erfolg nur,
    /// wenn der zurückgelesene Wert dem geschriebenen entspricht. Das
    /// Capability-`get_state` gilt als Wahrheit, wird aber gegen die
    /// Schreibabsicht geprüft.
    ///
    /// # Fehlerbehandlung
    /// - Fehler des ersten Lesezugriffs, bevor geschrieben wird
    /// - `BadState` bei jedem Rücklesewert außer dem erwarteten, auch wenn
    ///   das Rücklesen selbst fehlschlägt
    /// - der Schreibfehler, wenn der Pegel trotzdem stimmt
    pub fn toggle(&mut self, id: LedId) -> Result<(), LedError> {
        let led = self.leds.get_mut(id).ok_or(LedError::InvalidId)?;
        if led.kind() != LedKind::Output {
            return Err(LedError::WrongType);
        }

        let prior = self.driver.get_state(led)?;
        let expected = if prior == OutputState::On.as_raw() {
            OutputState::Off
        } else {
            OutputState::On
        };

        let written = self.driver.set_polarity(led, expected);
        match self.driver.get_state(led) {
            Ok(readback) if readback == expected.as_raw() => {
                written?;
                led.set_output_state(expected)
            }
            Ok(readback) => {
                warn!(
                    "LED {} toggle mismatch: prior {}, expected {}, read {}",
                    id,
                    prior,
                    expected.as_raw(),
                    readback
                );
                Err(LedError::BadState)
            }
            Err(err) => {
                warn!("LED {} toggle read-back failed: {:?}", id, err);
                Err(LedError::BadState)
            }
        }
    }

    /// Setzt den Duty-Cycle einer PWM-LED
    ///
    /// Kein Clamping: Werte außerhalb von 0..=100 muss die Capability
    /// ablehnen oder sättigen.
    pub fn set_duty_cycle(&mut self, id: LedId, percent: i32) -> Result<(), LedError> {
        let led = self.leds.get_mut(id).ok_or(LedError::InvalidId)?;
        if led.kind() != LedKind::Pwm {
            return Err(LedError::WrongType);
        }

        self.driver.set_duty_cycle(led, percent)?;
        led.pwm_state_mut()?.duty_cycle = percent;
        Ok(())
    }

    /// Rohzustand laut Capability, wird nicht interpretiert
    pub fn get_state(&mut self, id: LedId) -> Result<i32, LedError> {
        let led = self.leds.get(id).ok_or(LedError::InvalidId)?;
        self.driver.get_state(led)
    }

    // ------------------------------------------------------------------------
    // Listen-Varianten: Reihenfolge der Liste, Abbruch beim ersten Fehler,
    // bereits geschaltete LEDs bleiben geschaltet.
    // ------------------------------------------------------------------------

    pub fn turn_on_many(&mut self, ids: &[LedId]) -> Result<(), LedError> {
        ids.iter().try_for_each(|&id| self.turn_on(id))
    }

    pub fn turn_off_many(&mut self, ids: &[LedId]) -> Result<(), LedError> {
        ids.iter().try_for_each(|&id| self.turn_off(id))
    }

    pub fn toggle_many(&mut self, ids: &[LedId]) -> Result<(), LedError> {
        ids.iter().try_for_each(|&id| self.toggle(id))
    }

    pub fn set_duty_many(&mut self, ids: &[LedId], percent: i32) -> Result<(), LedError> {
        ids.iter().try_for_each(|&id| self.set_duty_cycle(id, percent))
    }

    // ------------------------------------------------------------------------
    // Array-Varianten: alle LEDs passender Art in Id-Reihenfolge
    // ------------------------------------------------------------------------

    pub fn turn_on_all(&mut self) -> Result<(), LedError> {
        for id in 0..N {
            if self.leds[id].kind() == LedKind::Output {
                self.turn_on(id)?;
            }
        }
        Ok(())
    }

    pub fn turn_off_all(&mut self) -> Result<(), LedError> {
        for id in 0..N {
            if self.leds[id].kind() == LedKind::Output {
                self.turn_off(id)?;
            }
        }
        Ok(())
    }

    pub fn toggle_all(&mut self) -> Result<(), LedError> {
        for id in 0..N {
            if self.leds[id].kind() == LedKind::Output {
                self.toggle(id)?;
            }
        }
        Ok(())
    }

    pub fn set_duty_all(&mut self, percent: i32) -> Result<(), LedError> {
        for id in 0..N {
            if self.leds[id].kind() == LedKind::Pwm {
                self.set_duty_cycle(id, percent)?;
            }
        }
        Ok(())
    }

    /// Ruft `deinit` für jede LED auf
    ///
    /// Läuft auch nach einem Fehler weiter und liefert den ersten Fehler.
    pub fn deinit(&mut self) -> Result<(), LedError> {
        let mut first_error = None;
        for led in self.leds.iter_mut() {
            if let Err(err) = self.driver.deinit(led) {
                warn!("Failed to deinit LED {}: {:?}", led.id(), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Gibt das Capability-Set zurück (nach [`LedProc::deinit`])
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn write_polarity(&mut self, id: LedId, state: OutputState) -> Result<(), LedError> {
        let led = self.leds.get_mut(id).ok_or(LedError::InvalidId)?;
        if led.kind() != LedKind::Output {
            return Err(LedError::WrongType);
        }

        self.driver.set_polarity(led, state)?;
        led.set_output_state(state)
    }
}
