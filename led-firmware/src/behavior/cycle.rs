// Cycle/Flash der Output-LEDs im Timer-Interrupt
//
// Registry, Scheduler und Timer liegen gemeinsam in einem Mutex. Nur der
// Interrupt-Handler greift nach dem Start darauf zu.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::timer::PeriodicTimer;
use esp_hal::{Blocking, handler, ram};
use led_core::{CycleScheduler, LedProc};

use super::to_hal;
use crate::bsp::CYCLE_LED_COUNT;
use crate::hal::GpioDriver;

/// Registry der Output-LEDs
pub type CycleLeds = LedProc<GpioDriver<CYCLE_LED_COUNT>, CYCLE_LED_COUNT>;

struct CycleContext {
    leds: CycleLeds,
    scheduler: CycleScheduler<CYCLE_LED_COUNT>,
    timer: PeriodicTimer<'static, Blocking>,
}

static CYCLE: Mutex<RefCell<Option<CycleContext>>> = Mutex::new(RefCell::new(None));

/// Startet den periodischen Timer und übergibt die LEDs an den Interrupt
///
/// Handler-Registrierung, Timer-Start und Übergabe passieren in einer
/// Critical Section, der erste Tick sieht also immer einen fertigen Kontext.
pub fn start_cycle(
    leds: CycleLeds,
    scheduler: CycleScheduler<CYCLE_LED_COUNT>,
    mut timer: PeriodicTimer<'static, Blocking>,
) -> Result<(), esp_hal::timer::Error> {
    let period = scheduler.period();

    critical_section::with(|cs| {
        timer.set_interrupt_handler(cycle_tick_handler);
        timer.listen();
        timer.start(to_hal(period))?;

        CYCLE.borrow_ref_mut(cs).replace(CycleContext {
            leds,
            scheduler,
            timer,
        });
        Ok::<(), esp_hal::timer::Error>(())
    })?;

    defmt::info!("Cycle timer started ({} ms)", period.as_millis() as u32);
    Ok(())
}

#[handler]
#[ram]
fn cycle_tick_handler() {
    critical_section::with(|cs| {
        if let Some(context) = CYCLE.borrow_ref_mut(cs).as_mut() {
            context.timer.clear_interrupt();
            context.scheduler.on_cycle_tick(&mut context.leds);
        }
    });
}
