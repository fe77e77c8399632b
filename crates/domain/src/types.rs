//! Domain types and models

pub mod booking;
pub mod slot;
pub mod staff;

pub use booking::{Booking, BookingStatus};
pub use slot::Slot;
pub use staff::StaffMember;
