// LEDC Capability-Set für PWM-gedimmte LEDs
//
// Alle Kanäle laufen auf einem gemeinsamen Low-Speed-Timer. Der Timer wird
// beim ersten `init` mit der Frequenz aus dem Descriptor konfiguriert.

use esp_hal::gpio::DriveMode;
use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::time::Rate;
use led_core::{Descriptor, LedCapabilities, LedError, OutputState};

type LedcTimer = timer::Timer<'static, LowSpeed>;

/// Kanal-Konfiguration einer PWM-LED
#[derive(Clone, Copy)]
pub struct LedcContext {
    /// Auflösung des Duty-Cycles
    pub resolution: timer::config::Duty,
    /// Open-Drain statt Push-Pull (LED gegen 3.3V)
    pub open_drain: bool,
}

/// PWM-LEDs an LEDC-Kanälen
///
/// Output-LEDs werden mit `WrongType` abgelehnt.
pub struct LedcDriver<const N: usize> {
    channels: [channel::Channel<'static, LowSpeed>; N],
    unconfigured_timer: Option<&'static mut LedcTimer>,
    timer: Option<&'static LedcTimer>,
}

impl<const N: usize> LedcDriver<N> {
    /// Erstellt den Treiber
    ///
    /// # Parameter
    /// - `timer`: noch nicht konfigurierter LEDC-Timer (muss 'static sein,
    ///   die Kanäle referenzieren ihn)
    /// - `channels`: LEDC-Kanäle mit zugeordnetem Pin, Index = Handle
    pub fn new(timer: &'static mut LedcTimer, channels: [channel::Channel<'static, LowSpeed>; N]) -> Self {
        Self {
            channels,
            unconfigured_timer: Some(timer),
            timer: None,
        }
    }

    fn configured_timer(
        &mut self,
        period_hz: u32,
        resolution: timer::config::Duty,
    ) -> Result<&'static LedcTimer, LedError> {
        if let Some(ledc_timer) = self.timer {
            return Ok(ledc_timer);
        }

        let ledc_timer = self.unconfigured_timer.take().ok_or(LedError::Unknown)?;
        ledc_timer
            .configure(timer::config::Config {
                duty: resolution,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(period_hz),
            })
            .map_err(|_| LedError::Unknown)?;

        let ledc_timer: &'static LedcTimer = ledc_timer;
        self.timer = Some(ledc_timer);
        Ok(ledc_timer)
    }
}

/// Sättigt auf 0..=100 %
fn saturate_percent(percent: i32) -> u8 {
    percent.clamp(0, 100) as u8
}

impl<const N: usize> LedCapabilities for LedcDriver<N> {
    type Handle = usize;
    type PwmContext = LedcContext;

    fn init(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        let pwm = *led.pwm_state()?;
        let ledc_timer = self.configured_timer(pwm.period_hz, pwm.context.resolution)?;
        let drive_mode = if pwm.context.open_drain {
            DriveMode::OpenDrain
        } else {
            DriveMode::PushPull
        };

        let channel = self.channels.get_mut(*led.handle()).ok_or(LedError::InvalidId)?;
        channel
            .configure(channel::config::Config {
                timer: ledc_timer,
                duty_pct: saturate_percent(pwm.duty_cycle),
                drive_mode,
            })
            .map_err(|_| LedError::Unknown)
    }

    fn set_polarity(
        &mut self,
        _led: &mut Descriptor<Self>,
        _state: OutputState,
    ) -> Result<(), LedError> {
        Err(LedError::WrongType)
    }

    fn set_duty_cycle(&mut self, led: &mut Descriptor<Self>, percent: i32) -> Result<(), LedError> {
        led.pwm_state()?;
        let channel = self.channels.get(*led.handle()).ok_or(LedError::InvalidId)?;
        channel
            .set_duty(saturate_percent(percent))
            .map_err(|_| LedError::Unknown)
    }

    fn get_state(&mut self, led: &Descriptor<Self>) -> Result<i32, LedError> {
        // LEDC hat kein Rücklesen des Duty-Cycles, letzter Sollwert zählt
        Ok(led.pwm_state()?.duty_cycle)
    }

    fn deinit(&mut self, led: &mut Descriptor<Self>) -> Result<(), LedError> {
        led.pwm_state()?;
        Ok(())
    }
}
