// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::bookings;
use diesel::prelude::*;

/// A booking row as stored in the database.
///
/// Field order matches the `bookings` table column order.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub client_id: String,
    pub photographer_id: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: Option<String>,
    pub event_location: String,
    pub duration_hint: Option<String>,
    pub total_amount: i64,
    pub deposit_amount: i64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A booking row to insert; the store assigns `booking_id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow {
    pub client_id: String,
    pub photographer_id: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: Option<String>,
    pub event_location: String,
    pub duration_hint: Option<String>,
    pub total_amount: i64,
    pub deposit_amount: i64,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
