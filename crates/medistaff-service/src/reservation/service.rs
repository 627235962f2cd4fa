//! Reservation lifecycle: creation with conflict detection, availability,
//! status transitions, cancellation, and statistics.

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::equipment::EquipmentRepository;
use medistaff_database::repositories::reservation::{ReservationRepository, ReservationStats};
use medistaff_entity::equipment::{EquipmentAsset, EquipmentStatus};
use medistaff_entity::reservation::{
    NewReservation, Reservation, ReservationDetail, ReservationStatus,
};

use crate::tx;

/// The reservation engine.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Connection pool for transactions.
    pool: PgPool,
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
    /// Equipment repository.
    equipment: Arc<EquipmentRepository>,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(
        pool: PgPool,
        reservations: Arc<ReservationRepository>,
        equipment: Arc<EquipmentRepository>,
    ) -> Self {
        Self {
            pool,
            reservations,
            equipment,
        }
    }

    /// List all reservations with borrower and asset detail.
    pub async fn list(&self) -> AppResult<Vec<ReservationDetail>> {
        self.reservations.list_detailed().await
    }

    /// List reservations whose date range covers `date`.
    pub async fn list_for_date(&self, date: NaiveDate) -> AppResult<Vec<ReservationDetail>> {
        self.reservations.list_for_date(date).await
    }

    /// List the active equipment loan pool.
    pub async fn inventory(&self) -> AppResult<Vec<EquipmentAsset>> {
        self.equipment.list_active().await
    }

    /// List active assets free on `date`.
    pub async fn available_on(&self, date: NaiveDate) -> AppResult<Vec<EquipmentAsset>> {
        self.equipment.available_on(date).await
    }

    /// Aggregate counters for the dashboard.
    pub async fn stats(&self) -> AppResult<ReservationStats> {
        self.reservations.stats().await
    }

    /// Create a reservation.
    ///
    /// The conflict check and the insert run in one transaction, under a
    /// row lock on the asset, so two concurrent requests for overlapping
    /// dates cannot both pass the check. On success the asset moves to
    /// `reserved`; on any failure nothing is committed.
    pub async fn create(&self, data: NewReservation) -> AppResult<Reservation> {
        if data.purpose.trim().is_empty() {
            return Err(AppError::validation("Purpose is required"));
        }
        if !data.period().is_well_formed() {
            return Err(AppError::validation(
                "End date must be on or after start date",
            ));
        }

        let mut db = tx::begin(&self.pool).await?;

        let asset = EquipmentRepository::find_for_update(&mut db, data.equipment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Equipment asset not found"))?;

        if !asset.active {
            return Err(AppError::validation(
                "Equipment asset is not part of the loan pool",
            ));
        }

        let conflicts =
            ReservationRepository::count_conflicts(&mut db, asset.id, data.period()).await?;
        if conflicts > 0 {
            return Err(AppError::conflict(
                "Equipment is already reserved for those dates",
            ));
        }

        let reservation = ReservationRepository::insert(&mut db, &data).await?;
        EquipmentRepository::set_status(&mut db, asset.id, EquipmentStatus::Reserved).await?;

        tx::commit(db).await?;

        info!(
            reservation_id = %reservation.id,
            asset_code = %asset.asset_code,
            start_date = %reservation.start_date,
            end_date = %reservation.end_date,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Move a reservation along the state machine.
    ///
    /// Only the explicit edges are accepted:
    /// pending→confirmed|cancelled, confirmed→in_progress|cancelled,
    /// in_progress→completed. The status write, the timestamp stamps, the
    /// derived asset status, and the optional history entry are one
    /// transaction.
    pub async fn transition(
        &self,
        id: Uuid,
        target: ReservationStatus,
        actor: Option<Uuid>,
        reason: Option<String>,
    ) -> AppResult<Reservation> {
        let mut db = tx::begin(&self.pool).await?;

        let current = ReservationRepository::find_for_update(&mut db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        if !current.status.can_transition_to(target) {
            return Err(AppError::validation(format!(
                "Invalid status transition from {} to {}",
                current.status, target
            )));
        }

        let updated = ReservationRepository::update_status(&mut db, id, target).await?;
        EquipmentRepository::set_status(&mut db, updated.equipment_id, target.equipment_status())
            .await?;

        if let Some(reason) = reason.as_deref() {
            ReservationRepository::insert_history(
                &mut db,
                id,
                Some(current.status),
                target,
                actor,
                Some(reason),
            )
            .await?;
        }

        tx::commit(db).await?;

        info!(
            reservation_id = %id,
            from = %current.status,
            to = %target,
            "Reservation status updated"
        );

        Ok(updated)
    }

    /// Cancel a reservation.
    ///
    /// Only pending or confirmed reservations can be cancelled; an ongoing
    /// loan must run to completion instead. The cancellation reason is
    /// appended to the notes and a history entry is always recorded. The
    /// asset goes back to `available`.
    pub async fn cancel(
        &self,
        id: Uuid,
        reason: Option<String>,
        actor: Option<Uuid>,
    ) -> AppResult<Reservation> {
        let mut db = tx::begin(&self.pool).await?;

        let current = ReservationRepository::find_for_update(&mut db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        if !current.status.is_cancellable() {
            return Err(AppError::conflict(format!(
                "A reservation in status {} cannot be cancelled",
                current.status
            )));
        }

        let marker = cancellation_marker(reason.as_deref());
        ReservationRepository::append_note(&mut db, id, &marker).await?;

        let updated =
            ReservationRepository::update_status(&mut db, id, ReservationStatus::Cancelled)
                .await?;
        EquipmentRepository::set_status(&mut db, updated.equipment_id, EquipmentStatus::Available)
            .await?;

        ReservationRepository::insert_history(
            &mut db,
            id,
            Some(current.status),
            ReservationStatus::Cancelled,
            actor,
            Some(reason.as_deref().unwrap_or("No reason given")),
        )
        .await?;

        tx::commit(db).await?;

        info!(reservation_id = %id, from = %current.status, "Reservation cancelled");

        Ok(updated)
    }
}

/// The marker appended to a reservation's notes when it is cancelled.
pub(crate) fn cancellation_marker(reason: Option<&str>) -> String {
    match reason {
        Some(reason) if !reason.trim().is_empty() => format!("CANCELLED: {reason}"),
        _ => "CANCELLED: no reason given".to_string(),
    }
}

/// Derive an asset's status from the statuses of its blocking reservations.
///
/// An ongoing loan keeps the asset in use; any other blocking reservation
/// keeps it reserved; otherwise it is available.
pub(crate) fn derive_equipment_status(blocking: &[ReservationStatus]) -> EquipmentStatus {
    if blocking.iter().any(|s| *s == ReservationStatus::InProgress) {
        EquipmentStatus::InUse
    } else if blocking.is_empty() {
        EquipmentStatus::Available
    } else {
        EquipmentStatus::Reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_marker() {
        assert_eq!(
            cancellation_marker(Some("borrower on leave")),
            "CANCELLED: borrower on leave"
        );
        assert_eq!(cancellation_marker(Some("  ")), "CANCELLED: no reason given");
        assert_eq!(cancellation_marker(None), "CANCELLED: no reason given");
    }

    #[test]
    fn test_derive_equipment_status() {
        use ReservationStatus::*;
        assert_eq!(derive_equipment_status(&[]), EquipmentStatus::Available);
        assert_eq!(
            derive_equipment_status(&[Pending]),
            EquipmentStatus::Reserved
        );
        assert_eq!(
            derive_equipment_status(&[Confirmed, Pending]),
            EquipmentStatus::Reserved
        );
        assert_eq!(
            derive_equipment_status(&[Confirmed, InProgress]),
            EquipmentStatus::InUse
        );
    }
}
