use serde::{Deserialize, Serialize};

use super::Seat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: i64,
    pub floor_number: i32,
    pub seats: Vec<Seat>,
}

impl Floor {
    pub fn new(id: i64, floor_number: i32, seats: Vec<Seat>) -> Self {
        Self {
            id,
            floor_number,
            seats,
        }
    }

    pub fn seat_at(&self, row: i32, column: i32) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|s| s.row == row && s.column == column)
    }

    /// Возвращает копию этажа с новым типом у одного места.
    /// Клик по проходу или пустой ячейке — допустимый no-op, не ошибка.
    pub fn with_seat_type(&self, row: i32, column: i32, seat_type_id: i64) -> Floor {
        let seats = self
            .seats
            .iter()
            .cloned()
            .map(|mut seat| {
                if seat.row == row && seat.column == column {
                    seat.seat_type_id = seat_type_id;
                }
                seat
            })
            .collect();
        Floor {
            id: self.id,
            floor_number: self.floor_number,
            seats,
        }
    }
}
