use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::{SeatIcon, SeatTypeCatalog};
use crate::models::{Floor, Seat, SeatStatus};

use super::GridGeometry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatCell {
    pub seat_id: Option<i64>,
    pub label: String,
    pub status: SeatStatus,
    pub type_name: String,
    pub color: String,
    pub icon: SeatIcon,
}

/// Ячейка сетки: место, проход или пустой слот под новое место.
/// Проход — не ошибка и не "дырка", а отдельный вид ячейки.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridCell {
    Seat(SeatCell),
    Aisle,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub row: i32,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderableGrid {
    pub geometry: GridGeometry,
    pub rows: Vec<GridRow>,
}

/// Чистая проекция этажа в сетку: этаж не мутируется, побочных эффектов
/// нет. Любое изменение мест проходит через операции редактирования и
/// новый пересчет геометрии, а не через патч готовой сетки.
pub fn build_grid(floor: &Floor, geometry: &GridGeometry, catalog: &SeatTypeCatalog) -> RenderableGrid {
    let by_cell: HashMap<(i32, i32), &Seat> = floor
        .seats
        .iter()
        .map(|s| ((s.row, s.column), s))
        .collect();

    let mut rows = Vec::with_capacity(geometry.row_count.max(0) as usize);
    for row in 1..=geometry.row_count {
        let mut cells = Vec::with_capacity((geometry.max_column - geometry.min_column + 1) as usize);
        for column in geometry.min_column..=geometry.max_column {
            let cell = match by_cell.get(&(row, column)) {
                Some(seat) => {
                    let seat_type = catalog.resolve(seat.seat_type_id);
                    GridCell::Seat(SeatCell {
                        seat_id: seat.id,
                        label: seat.label.clone(),
                        status: seat.status,
                        type_name: seat_type.name.clone(),
                        color: seat_type.color.clone(),
                        icon: catalog.icon_for(seat.seat_type_id),
                    })
                }
                None if column == geometry.aisle_column => GridCell::Aisle,
                None => GridCell::Empty,
            };
            cells.push(cell);
        }
        rows.push(GridRow { row, cells });
    }

    RenderableGrid {
        geometry: *geometry,
        rows,
    }
}
