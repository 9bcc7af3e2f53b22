// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal::main bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Output, OutputConfig};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed, channel, timer};
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use static_cell::StaticCell;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use led_core::{CycleScheduler, LedError, LedProc, RampScheduler};
use led_firmware::behavior::{run_ramp_loop, start_cycle};
use led_firmware::bsp::{CYCLE_ROTATION, LED_WHITE_NUM, cycle_leds, ramp_leds};
use led_firmware::config::{LED_ON_LEVEL, cycle_config, ramp_config};
use led_firmware::hal::{GpioDriver, LedcDriver};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Nicht behebbarer Fehler beim Hochfahren
fn fatal(what: &str, err: LedError) -> ! {
    defmt::error!("{}: {:?}", what, err);
    panic!("{}", what);
}

/// Main Entry Point
///
/// Registriert beide LED-Gruppen, startet den Cycle-Timer und pollt danach
/// die PWM-Rampe. Kehrt nie zurück.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    defmt::info!("LED-Steuerung startet");

    // Output-LEDs: Rot (GPIO5), Grün (GPIO3), Blau (GPIO2)
    // Reihenfolge muss zu bsp::cycle_leds() passen
    let off = !LED_ON_LEVEL;
    let outputs = [
        Output::new(peripherals.GPIO5, off, OutputConfig::default()),
        Output::new(peripherals.GPIO3, off, OutputConfig::default()),
        Output::new(peripherals.GPIO2, off, OutputConfig::default()),
    ];
    let cycle_leds = LedProc::register(GpioDriver::new(outputs, LED_ON_LEVEL), cycle_leds())
        .unwrap_or_else(|err| fatal("Output LED registration failed", err));

    // LEDC muss 'static sein, Timer und Kanäle leihen sich davon
    static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
    let ledc = LEDC.init(Ledc::new(peripherals.LEDC));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let ledc: &'static Ledc<'static> = ledc;

    // Timer wird erst beim Registrieren konfiguriert (Frequenz aus dem Descriptor)
    static LEDC_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();
    let ledc_timer = LEDC_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));

    // PWM-LED: Weiß (GPIO4)
    let white = ledc.channel(channel::Number::Channel0, peripherals.GPIO4);
    let ramp_leds = LedProc::register(LedcDriver::new(ledc_timer, [white]), ramp_leds())
        .unwrap_or_else(|err| fatal("PWM LED registration failed", err));

    // Cycle im Timer-Interrupt (TIMG1, TIMG0 bleibt frei)
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    let cycle_timer = PeriodicTimer::new(timg1.timer0);
    let scheduler = CycleScheduler::new(cycle_config(), CYCLE_ROTATION);
    if let Err(err) = scheduler.validate(&cycle_leds) {
        fatal("Cycle rotation invalid", err);
    }
    if let Err(err) = start_cycle(cycle_leds, scheduler, cycle_timer) {
        defmt::error!("Cycle timer failed to start: {:?}", err);
        panic!("Cycle timer failed to start");
    }

    // Rampe in der Hauptschleife
    let ramp = RampScheduler::new(LED_WHITE_NUM, ramp_config());
    if let Err(err) = ramp.validate(&ramp_leds) {
        fatal("Ramp target invalid", err);
    }
    run_ramp_loop(ramp_leds, ramp)
}
