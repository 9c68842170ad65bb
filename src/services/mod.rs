pub mod layout;

pub use layout::{
    add_seat, move_seat, remove_seat, renumber_seats, replace_seat_types, LayoutError,
};
