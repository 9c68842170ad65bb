use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::models::{Floor, Seat, SeatStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no seat at row {row}, column {column}")]
    SeatNotFound { row: i32, column: i32 },
    #[error("cell at row {row}, column {column} is already occupied")]
    CellOccupied { row: i32, column: i32 },
}

/// Полная перенумерация: сортировка по (ряд, колонка) и сквозные метки
/// с единицы. Прежняя схема меток отбрасывается целиком, места не
/// перемещаются.
pub fn renumber_seats(seats: &[Seat]) -> Vec<Seat> {
    let mut out: Vec<Seat> = seats.to_vec();
    out.sort_by_key(|s| (s.row, s.column));
    for (index, seat) in out.iter_mut().enumerate() {
        seat.label = (index + 1).to_string();
    }
    out
}

/// Добавляет место в пустую ячейку и перенумеровывает этаж.
pub fn add_seat(
    floor: &Floor,
    row: i32,
    column: i32,
    seat_type_id: i64,
) -> Result<Floor, LayoutError> {
    if floor.seat_at(row, column).is_some() {
        return Err(LayoutError::CellOccupied { row, column });
    }

    let mut seats = floor.seats.clone();
    seats.push(Seat {
        id: None,
        floor_id: floor.id,
        label: String::new(),
        row,
        column,
        seat_type_id,
        status: SeatStatus::Available,
    });

    debug!("Added seat at ({}, {}) on floor {}", row, column, floor.id);
    Ok(Floor::new(floor.id, floor.floor_number, renumber_seats(&seats)))
}

/// Убирает место и перенумеровывает этаж.
pub fn remove_seat(floor: &Floor, row: i32, column: i32) -> Result<Floor, LayoutError> {
    if floor.seat_at(row, column).is_none() {
        return Err(LayoutError::SeatNotFound { row, column });
    }

    let seats: Vec<Seat> = floor
        .seats
        .iter()
        .filter(|s| !(s.row == row && s.column == column))
        .cloned()
        .collect();

    debug!("Removed seat at ({}, {}) on floor {}", row, column, floor.id);
    Ok(Floor::new(floor.id, floor.floor_number, renumber_seats(&seats)))
}

/// Переносит место в другую ячейку. Прежний обитатель целевой ячейки
/// вытесняется, затем этаж перенумеровывается.
pub fn move_seat(
    floor: &Floor,
    from_row: i32,
    from_column: i32,
    to_row: i32,
    to_column: i32,
) -> Result<Floor, LayoutError> {
    if from_row == to_row && from_column == to_column {
        return Ok(floor.clone());
    }
    if floor.seat_at(from_row, from_column).is_none() {
        return Err(LayoutError::SeatNotFound {
            row: from_row,
            column: from_column,
        });
    }

    let mut seats: Vec<Seat> = floor
        .seats
        .iter()
        .filter(|s| !(s.row == to_row && s.column == to_column))
        .cloned()
        .collect();
    for seat in seats.iter_mut() {
        if seat.row == from_row && seat.column == from_column {
            seat.row = to_row;
            seat.column = to_column;
        }
    }

    debug!(
        "Moved seat ({}, {}) -> ({}, {}) on floor {}",
        from_row, from_column, to_row, to_column, floor.id
    );
    Ok(Floor::new(floor.id, floor.floor_number, renumber_seats(&seats)))
}

/// Массовое перетипирование при сохранении схемы. Назначения в пустые
/// ячейки пропускаются — та же политика no-op, что и у одиночного клика.
pub fn replace_seat_types(floor: &Floor, assignments: &[(i32, i32, i64)]) -> Floor {
    let by_cell: HashMap<(i32, i32), i64> = assignments
        .iter()
        .map(|&(row, column, seat_type_id)| ((row, column), seat_type_id))
        .collect();

    let seats = floor
        .seats
        .iter()
        .cloned()
        .map(|mut seat| {
            if let Some(&seat_type_id) = by_cell.get(&(seat.row, seat.column)) {
                seat.seat_type_id = seat_type_id;
            }
            seat
        })
        .collect();

    Floor::new(floor.id, floor.floor_number, seats)
}
