//! Equipment reservation entity: model, status state machine, date period,
//! audit history, and joined detail rows.

pub mod detail;
pub mod history;
pub mod model;
pub mod period;
pub mod status;

pub use detail::ReservationDetail;
pub use history::ReservationHistoryEntry;
pub use model::{NewReservation, Reservation};
pub use period::ReservationPeriod;
pub use status::ReservationStatus;
