// Library-Root: Board-spezifische Integration der LED-Steuerung
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod behavior;
pub mod bsp;
pub mod config;
pub mod hal;

// Re-exports von led-core
pub use led_core::{LedError, LedProc};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Die gesamte Logik (Registry, Toggle, Cycle, Rampe) liegt deshalb in
// led-core und wird in led-tests gegen MockLeds auf dem Host getestet.
// Hier bleiben nur die dünnen Treiber für GPIO und LEDC, geprüft auf der
// Hardware.
