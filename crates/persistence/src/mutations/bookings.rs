// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutation operations.
//!
//! Status updates are a single atomic write of `status` and `updated_at`
//! together: no partial transition is ever observable. The confirm path
//! relies on the `uniq_confirmed_slot` partial unique index as the
//! authoritative conflict guard; a violation surfaces as
//! `ConfirmedSlotOccupied` and leaves the row unchanged.

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewBookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::SqliteConnection;

/// Insert a new booking record.
///
/// # Returns
///
/// The booking ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    record: &NewBookingRow,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(bookings::table)
        .values(record)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_booking: {e}")))?;

    get_last_insert_rowid(conn)
}

/// Update a booking's status and transition timestamp in one write.
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist (`BookingNotFound`)
/// - The write violates the confirmed-slot unique index
///   (`ConfirmedSlotOccupied`)
/// - The database update fails
pub fn update_booking_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    new_status: &str,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .set((
            bookings::status.eq(new_status),
            bookings::updated_at.eq(updated_at),
        ))
        .execute(conn);

    match updated {
        Ok(0) => Err(PersistenceError::BookingNotFound(booking_id)),
        Ok(_) => Ok(()),
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::ConfirmedSlotOccupied { booking_id })
        }
        Err(e) => Err(PersistenceError::QueryFailed(format!(
            "update_booking_status: {e}"
        ))),
    }
}

/// Delete a booking record (the cancellation-as-deletion path).
///
/// A deleted booking no longer participates in conflict checks.
///
/// # Errors
///
/// Returns an error if the booking does not exist or the delete fails.
pub fn delete_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<(), PersistenceError> {
    let deleted = diesel::delete(bookings::table.filter(bookings::booking_id.eq(booking_id)))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("delete_booking: {e}")))?;

    if deleted == 0 {
        return Err(PersistenceError::BookingNotFound(booking_id));
    }
    Ok(())
}
