//! Hardware Abstraction Traits
//!
//! Die Capability-Schnittstelle zwischen Process-Layer und Board-Code.
//! Der Integrator implementiert [`LedCapabilities`] (oder füllt eine
//! [`CapabilityTable`]) und führt damit den echten Hardware-Zugriff aus.

use core::fmt;

use crate::types::{LedDescriptor, OutputState};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Operation passt nicht zum Typ der LED (Output vs. PWM)
    WrongType,
    /// Capability fehlt oder leere LED-Liste bei der Registrierung
    NullCapability,
    /// Rücklesen nach dem Toggle passt nicht zum geschriebenen Zustand
    BadState,
    /// LED-Id liegt außerhalb von `0..N`
    InvalidId,
    /// Nicht weiter klassifizierter Fehler der Capability
    Unknown,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LedError::WrongType => "operation not valid for this LED kind",
            LedError::NullCapability => "required capability or LED list missing",
            LedError::BadState => "LED state read-back does not match the write",
            LedError::InvalidId => "LED id out of range",
            LedError::Unknown => "unclassified capability failure",
        };
        f.write_str(text)
    }
}

/// Descriptor-Typ passend zu einem Capability-Set
pub type Descriptor<D> =
    LedDescriptor<<D as LedCapabilities>::Handle, <D as LedCapabilities>::PwmContext>;

/// Trait für den Hardware-Zugriff auf einzelne LEDs
///
/// Alle fünf Capabilities sind Pflicht. Bei einer Trait-Implementierung
/// prüft das der Compiler; Tabellen mit optionalen Einträgen überschreiben
/// [`LedCapabilities::validate`].
///
/// # Implementierungen
/// - **Production:** `GpioDriver` / `LedcDriver` (ESP32-C6, in `led-firmware`)
/// - **Testing:** `MockLeds` (in-memory Mock, in `led-tests`)
pub trait LedCapabilities {
    /// Pin/Peripherie-Referenz, gehört dem Integrator
    type Handle;
    /// Kanal-Konfiguration einer PWM-LED (Timer, Kanal, Pin-Funktion)
    type PwmContext;

    /// Prüft vor jedem Hardware-Zugriff, ob das Set vollständig ist
    fn validate(&self) -> Result<(), LedError> {
        Ok(())
    }

    /// Initialisiert eine einzelne LED als Output oder PWM
    fn init(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError>;

    /// Schaltet den Pegel einer Output-LED
    ///
    /// Ob `On` einen High- oder Low-Pegel bedeutet, entscheidet der
    /// Integrator (Push/Pull vs. Sink).
    fn set_polarity(&mut self, led: &mut Descriptor<Self>, state: OutputState)
    -> Result<(), LedError>;

    /// Setzt den Duty-Cycle einer PWM-LED in Prozent
    fn set_duty_cycle(&mut self, led: &mut Descriptor<Self>, percent: i32) -> Result<(), LedError>;

    /// Liest den aktuellen Zustand (`OutputState::as_raw` für Output-LEDs)
    fn get_state(&mut self, led: &Descriptor<Self>) -> Result<i32, LedError>;

    /// Gibt die LED wieder frei (darf ein Stub sein)
    fn deinit(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError>;
}

pub type InitFn<H, C> = fn(&mut LedDescriptor<H, C>) -> Result<(), LedError>;
pub type SetPolarityFn<H, C> = fn(&mut LedDescriptor<H, C>, OutputState) -> Result<(), LedError>;
pub type SetDutyCycleFn<H, C> = fn(&mut LedDescriptor<H, C>, i32) -> Result<(), LedError>;
pub type GetStateFn<H, C> = fn(&LedDescriptor<H, C>) -> Result<i32, LedError>;
pub type DeinitFn<H, C> = fn(&mut LedDescriptor<H, C>) -> Result<(), LedError>;

/// Capability-Set als Tabelle von Funktionszeigern
///
/// Für Board-Code, der seine Hardware-Funktionen als freie Funktionen
/// bereitstellt. Fehlende Einträge lassen die Registrierung mit
/// `LedError::NullCapability` scheitern, bevor irgendeine LED angefasst wird.
pub struct CapabilityTable<H, C> {
    pub init: Option<InitFn<H, C>>,
    pub set_polarity: Option<SetPolarityFn<H, C>>,
    pub set_duty_cycle: Option<SetDutyCycleFn<H, C>>,
    pub get_state: Option<GetStateFn<H, C>>,
    pub deinit: Option<DeinitFn<H, C>>,
}

impl<H, C> CapabilityTable<H, C> {
    /// Leere Tabelle, alle Einträge fehlen
    pub const fn new() -> Self {
        Self {
            init: None,
            set_polarity: None,
            set_duty_cycle: None,
            get_state: None,
            deinit: None,
        }
    }
}

impl<H, C> Default for CapabilityTable<H, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, C> Clone for CapabilityTable<H, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, C> Copy for CapabilityTable<H, C> {}

impl<H, C> LedCapabilities for CapabilityTable<H, C> {
    type Handle = H;
    type PwmContext = C;

    fn validate(&self) -> Result<(), LedError> {
        let complete = self.init.is_some()
            && self.set_polarity.is_some()
            && self.set_duty_cycle.is_some()
            && self.get_state.is_some()
            && self.deinit.is_some();
        if complete {
            Ok(())
        } else {
            Err(LedError::NullCapability)
        }
    }

    fn init(&mut self, led: &mut LedDescriptor<H, C>) -> Result<(), LedError> {
        let init = self.init.ok_or(LedError::NullCapability)?;
        init(led)
    }

    fn set_polarity(
        &mut self,
        led: &mut LedDescriptor<H, C>,
        state: OutputState,
    ) -> Result<(), LedError> {
        let set_polarity = self.set_polarity.ok_or(LedError::NullCapability)?;
        set_polarity(led, state)
    }

    fn set_duty_cycle(&mut self, led: &mut LedDescriptor<H, C>, percent: i32) -> Result<(), LedError> {
        let set_duty_cycle = self.set_duty_cycle.ok_or(LedError::NullCapability)?;
        set_duty_cycle(led, percent)
    }

    fn get_state(&mut self, led: &LedDescriptor<H, C>) -> Result<i32, LedError> {
        let get_state = self.get_state.ok_or(LedError::NullCapability)?;
        get_state(led)
    }

    fn deinit(&mut self, led: &mut LedDescriptor<H, C>) -> Result<(), LedError> {
        let deinit = self.deinit.ok_or(LedError::NullCapability)?;
        deinit(led)
    }
}
