pub mod floor;
pub mod seat;
pub mod seat_type;

pub use floor::Floor;
pub use seat::{Seat, SeatStatus};
pub use seat_type::SeatType;
