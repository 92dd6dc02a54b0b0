// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking query operations.

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Query a single booking by its ID.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_booking: {e}")))
}

/// Query all bookings for a photographer on a given date.
///
/// This is the conflict-check and availability workhorse; rows are
/// returned in creation order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_by_photographer_and_date(
    conn: &mut SqliteConnection,
    photographer_id: &str,
    event_date: &str,
    status_filter: Option<&str>,
) -> Result<Vec<BookingRow>, PersistenceError> {
    let mut query = bookings::table
        .filter(bookings::photographer_id.eq(photographer_id))
        .filter(bookings::event_date.eq(event_date))
        .into_boxed();

    if let Some(status) = status_filter {
        query = query.filter(bookings::status.eq(status.to_string()));
    }

    query
        .order(bookings::booking_id.asc())
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_photographer_and_date: {e}")))
}

/// Query all bookings for a photographer, optionally filtered by status.
///
/// Rows are ordered by event date, then creation order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_by_photographer(
    conn: &mut SqliteConnection,
    photographer_id: &str,
    status_filter: Option<&str>,
) -> Result<Vec<BookingRow>, PersistenceError> {
    let mut query = bookings::table
        .filter(bookings::photographer_id.eq(photographer_id))
        .into_boxed();

    if let Some(status) = status_filter {
        query = query.filter(bookings::status.eq(status.to_string()));
    }

    query
        .order((bookings::event_date.asc(), bookings::booking_id.asc()))
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_photographer: {e}")))
}

/// Query all bookings created by a client.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_by_client(
    conn: &mut SqliteConnection,
    client_id: &str,
) -> Result<Vec<BookingRow>, PersistenceError> {
    bookings::table
        .filter(bookings::client_id.eq(client_id))
        .order((bookings::event_date.asc(), bookings::booking_id.asc()))
        .load::<BookingRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_by_client: {e}")))
}
