// Hardware Abstraction Layer (HAL) Module
//
// Implementierungen des LED-Capability-Sets für den ESP32-C6.
// Der Process-Layer in led-core kennt nur den Trait, nicht die Peripherie.

pub mod gpio_driver;
pub mod ledc_driver;

pub use gpio_driver::GpioDriver;
pub use ledc_driver::{LedcContext, LedcDriver};
