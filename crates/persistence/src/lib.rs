// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Lens Booking System.
//!
//! This crate provides the durable booking store. It is built on Diesel
//! over an embedded `SQLite` database.
//!
//! ## Concurrency
//!
//! The store is the only shared mutable resource in the system. The
//! at-most-one-confirmed invariant for a `(photographer, date, time)`
//! slot is enforced here, not in application code: the migration declares
//! a partial unique index over confirmed rows, so the status update that
//! confirms a booking is a conditional write. Concurrent confirmations of
//! the same slot cannot both succeed regardless of what the callers
//! checked beforehand.
//!
//! ## Testing
//!
//! - Standard tests run against in-memory `SQLite` databases
//! - Each in-memory database receives a unique name via an atomic
//!   counter, ensuring deterministic test isolation without time-based
//!   collisions

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use lens_book_domain::{
    Booking, BookingStatus, ClientId, EventDate, PhotographerId, SlotTime,
};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use data_models::{BookingRow, NewBookingRow};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Type alias retained for call sites that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for booking records.
///
/// Owns a single `SQLite` connection; callers that share an adapter
/// across requests wrap it in their own synchronization (the server uses
/// a mutex).
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_booking_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Persists a new booking and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_booking(&mut self, booking: &Booking) -> Result<Booking, PersistenceError> {
        let record: NewBookingRow = new_row_from_booking(booking);
        let booking_id: i64 = mutations::insert_booking(&mut self.conn, &record)?;

        let mut created: Booking = booking.clone();
        created.booking_id = Some(booking_id);
        Ok(created)
    }

    /// Updates a booking's status and `updated_at` in a single atomic write,
    /// then returns the stored booking.
    ///
    /// Confirmations are conditional writes: the partial unique index on
    /// confirmed slots rejects the update if another confirmed booking
    /// occupies the same `(photographer, date, time)` key.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The booking does not exist (`BookingNotFound`)
    /// - Another confirmed booking occupies the slot
    ///   (`ConfirmedSlotOccupied`)
    /// - The database update fails
    pub fn update_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
        updated_at: &str,
    ) -> Result<Booking, PersistenceError> {
        mutations::update_booking_status(&mut self.conn, booking_id, status.as_str(), updated_at)?;
        self.get_booking(booking_id)
    }

    /// Deletes a booking record (the cancellation-as-deletion path).
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the delete fails.
    pub fn delete_booking(&mut self, booking_id: i64) -> Result<(), PersistenceError> {
        mutations::delete_booking(&mut self.conn, booking_id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Retrieves a booking by its ID.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if no such booking exists, or an error if
    /// the query fails.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id)?
            .ok_or(PersistenceError::BookingNotFound(booking_id))
            .and_then(booking_from_row)
    }

    /// Lists a photographer's bookings on a date, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub fn list_by_photographer_and_date(
        &mut self,
        photographer_id: &PhotographerId,
        event_date: EventDate,
        status_filter: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, PersistenceError> {
        let rows: Vec<BookingRow> = queries::list_by_photographer_and_date(
            &mut self.conn,
            photographer_id.value(),
            &event_date.to_string(),
            status_filter.map(|status| status.as_str()),
        )?;
        rows.into_iter().map(booking_from_row).collect()
    }

    /// Lists all of a photographer's bookings, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub fn list_by_photographer(
        &mut self,
        photographer_id: &PhotographerId,
        status_filter: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, PersistenceError> {
        let rows: Vec<BookingRow> = queries::list_by_photographer(
            &mut self.conn,
            photographer_id.value(),
            status_filter.map(|status| status.as_str()),
        )?;
        rows.into_iter().map(booking_from_row).collect()
    }

    /// Lists all bookings created by a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded.
    pub fn list_by_client(
        &mut self,
        client_id: &ClientId,
    ) -> Result<Vec<Booking>, PersistenceError> {
        let rows: Vec<BookingRow> = queries::list_by_client(&mut self.conn, client_id.value())?;
        rows.into_iter().map(booking_from_row).collect()
    }
}

/// Builds an insertable row from a domain booking.
fn new_row_from_booking(booking: &Booking) -> NewBookingRow {
    NewBookingRow {
        client_id: booking.client_id.value().to_string(),
        photographer_id: booking.photographer_id.value().to_string(),
        event_type: booking.event_type.clone(),
        event_date: booking.event_date.to_string(),
        event_time: booking
            .event_time
            .as_ref()
            .map(|time| time.value().to_string()),
        event_location: booking.event_location.clone(),
        duration_hint: booking.duration_hint.clone(),
        total_amount: booking.total_amount,
        deposit_amount: booking.deposit_amount,
        status: booking.status.as_str().to_string(),
        notes: booking.notes.clone(),
        created_at: booking.created_at.clone(),
        updated_at: booking.updated_at.clone(),
    }
}

/// Decodes a stored row into a domain booking.
fn booking_from_row(row: BookingRow) -> Result<Booking, PersistenceError> {
    let status: BookingStatus = BookingStatus::from_str(&row.status)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let client_id: ClientId = ClientId::new(&row.client_id)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let photographer_id: PhotographerId = PhotographerId::new(&row.photographer_id)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let event_date: EventDate = EventDate::parse(&row.event_date)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let event_time: Option<SlotTime> = row
        .event_time
        .as_deref()
        .map(SlotTime::parse)
        .transpose()
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    Ok(Booking {
        booking_id: Some(row.booking_id),
        client_id,
        photographer_id,
        event_type: row.event_type,
        event_date,
        event_time,
        event_location: row.event_location,
        duration_hint: row.duration_hint,
        total_amount: row.total_amount,
        deposit_amount: row.deposit_amount,
        status,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
