//! Pure Business Logic Functions
//!
//! Zustandsübergänge der Scheduler ohne Hardware-Dependencies (testbar!)

use crate::types::RampDirection;

/// Nächste Position in einer Rotation der Länge `len`
///
/// Bei leerer Rotation bleibt der Cursor auf 0.
///
/// # Beispiele
///
/// ```
/// # use led_core::next_cursor;
/// assert_eq!(next_cursor(0, 3), 1);
/// assert_eq!(next_cursor(2, 3), 0);
/// ```
pub fn next_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cursor + 1) % len }
}

/// Ein Schritt der Helligkeits-Rampe
///
/// Steigend wird erst erhöht und dann gedreht, sobald der Wert `dimmest`
/// überschreitet; fallend entsprechend bei Unterschreiten von `brightest`.
/// Der Rückgabewert ist der Wert, der beim nächsten Schritt geschrieben wird.
///
/// # Beispiele
///
/// ```
/// # use led_core::{ramp_advance, RampDirection};
/// let (value, direction) = ramp_advance(95, RampDirection::Increasing, 0, 95);
/// assert_eq!((value, direction), (96, RampDirection::Decreasing));
///
/// let (value, direction) = ramp_advance(96, RampDirection::Decreasing, 0, 95);
/// assert_eq!((value, direction), (95, RampDirection::Decreasing));
/// ```
pub fn ramp_advance(
    value: i32,
    direction: RampDirection,
    brightest: i32,
    dimmest: i32,
) -> (i32, RampDirection) {
    match direction {
        RampDirection::Increasing => {
            let next = value.saturating_add(1);
            if next > dimmest {
                (next, RampDirection::Decreasing)
            } else {
                (next, RampDirection::Increasing)
            }
        }
        RampDirection::Decreasing => {
            let next = value.saturating_sub(1);
            if next < brightest {
                (next, RampDirection::Increasing)
            } else {
                (next, RampDirection::Decreasing)
            }
        }
    }
}
