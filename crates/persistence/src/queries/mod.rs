// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query modules.
//!
//! Read-only operations over booking rows. Queries never cache: every
//! availability or conflict decision re-reads live rows.

pub mod bookings;

pub use bookings::{
    get_booking, list_by_client, list_by_photographer, list_by_photographer_and_date,
};
