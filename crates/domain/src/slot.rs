// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bookable slot catalog.
//!
//! The catalog is a fixed, process-wide constant: ten slots per day across
//! three price tiers. Changing it is a deploy-time configuration change,
//! not a runtime operation.

use serde::Serialize;

/// A fixed time-of-day booking unit with an associated base price.
///
/// Slots are value objects; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Position of the slot within the day, starting at 1.
    pub slot_id: u8,
    /// The time-of-day label (e.g. `"10:00 AM"`).
    pub time: &'static str,
    /// The base price for this slot in whole currency units.
    pub base_price: i64,
}

/// Morning tier base price.
const MORNING_PRICE: i64 = 150;
/// Afternoon tier base price.
const AFTERNOON_PRICE: i64 = 175;
/// Evening tier base price.
const EVENING_PRICE: i64 = 200;

/// The fixed daily slot catalog, in chronological order.
const SLOT_CATALOG: [Slot; 10] = [
    Slot { slot_id: 1, time: "9:00 AM", base_price: MORNING_PRICE },
    Slot { slot_id: 2, time: "10:00 AM", base_price: MORNING_PRICE },
    Slot { slot_id: 3, time: "11:00 AM", base_price: MORNING_PRICE },
    Slot { slot_id: 4, time: "12:00 PM", base_price: MORNING_PRICE },
    Slot { slot_id: 5, time: "1:00 PM", base_price: AFTERNOON_PRICE },
    Slot { slot_id: 6, time: "2:00 PM", base_price: AFTERNOON_PRICE },
    Slot { slot_id: 7, time: "3:00 PM", base_price: AFTERNOON_PRICE },
    Slot { slot_id: 8, time: "4:00 PM", base_price: AFTERNOON_PRICE },
    Slot { slot_id: 9, time: "5:00 PM", base_price: EVENING_PRICE },
    Slot { slot_id: 10, time: "6:00 PM", base_price: EVENING_PRICE },
];

/// Returns the fixed, ordered slot catalog.
///
/// Pure: no side effects, no errors.
#[must_use]
pub const fn slot_catalog() -> &'static [Slot] {
    &SLOT_CATALOG
}

/// Looks up a slot by its time-of-day label.
#[must_use]
pub fn find_slot(time: &str) -> Option<&'static Slot> {
    SLOT_CATALOG.iter().find(|slot| slot.time == time)
}
