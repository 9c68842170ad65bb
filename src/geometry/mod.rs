use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::config::{GapPolicy, GridConfig};
use crate::models::Seat;

pub mod grid;

pub use grid::{build_grid, GridCell, GridRow, RenderableGrid, SeatCell};

/// Производная геометрия одного этажа. Нигде не хранится —
/// пересчитывается с нуля из текущего списка мест.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub row_count: i32,
    pub min_column: i32,
    pub max_column: i32,
    pub aisle_column: i32,
    pub left_column_count: usize,
    pub right_column_count: usize,
}

/// Вычисляет границы сетки, колонку прохода и число колонок по сторонам.
///
/// Проход нигде не помечен явно — схемы приходят плоской матрицей, поэтому
/// он восстанавливается по разреженности: колонка, пустующая в наибольшем
/// числе рядов, и есть проход. Колонки не обязаны начинаться с 1 и не
/// обязаны быть непрерывными.
pub fn infer_grid_geometry(seats: &[Seat], config: &GridConfig) -> GridGeometry {
    if seats.is_empty() {
        // Пустой этаж — не вырожденный случай, а шаблон по умолчанию,
        // чтобы редактору было что отрисовать
        let side = config.default_side_columns.max(1);
        return GridGeometry {
            row_count: 0,
            min_column: config.default_aisle_column - side as i32,
            max_column: config.default_aisle_column + side as i32,
            aisle_column: config.default_aisle_column,
            left_column_count: side,
            right_column_count: side,
        };
    }

    let row_count = seats.iter().map(|s| s.row).max().unwrap_or(0);
    let min_column = seats.iter().map(|s| s.column).min().unwrap_or(0);
    let max_column = seats.iter().map(|s| s.column).max().unwrap_or(0);

    let occupied: HashSet<(i32, i32)> = seats.iter().map(|s| (s.row, s.column)).collect();

    // Задний диван часто занимает ячейку прохода только в последнем ряду
    let last_gap_row = match config.gap_policy {
        GapPolicy::ExcludeLastRow => row_count - 1,
        GapPolicy::AllRows => row_count,
    };

    // Скан слева направо; при равенстве выигрывает первая (меньшая) колонка
    let mut aisle_column = None;
    let mut best_empty = 0usize;
    for column in min_column..=max_column {
        let empty_rows = (1..=last_gap_row)
            .filter(|&row| !occupied.contains(&(row, column)))
            .count();
        if empty_rows > best_empty {
            best_empty = empty_rows;
            aisle_column = Some(column);
        }
    }

    // Все колонки заполнены — прохода не видно, берем середину
    let aisle_column = aisle_column.unwrap_or_else(|| {
        let column_count = max_column - min_column + 1;
        min_column + column_count / 2
    });

    let left: HashSet<i32> = seats
        .iter()
        .filter(|s| s.column < aisle_column)
        .map(|s| s.column)
        .collect();
    let right: HashSet<i32> = seats
        .iter()
        .filter(|s| s.column > aisle_column)
        .map(|s| s.column)
        .collect();

    // В редактируемом шаблоне у борта не бывает нуля колонок — это
    // ограничение UI, не физики
    let geometry = GridGeometry {
        row_count,
        min_column,
        max_column,
        aisle_column,
        left_column_count: left.len().max(1),
        right_column_count: right.len().max(1),
    };

    debug!(
        "Inferred geometry for {} seats: {} rows, columns {}..={}, aisle at {} ({} + {})",
        seats.len(),
        geometry.row_count,
        geometry.min_column,
        geometry.max_column,
        geometry.aisle_column,
        geometry.left_column_count,
        geometry.right_column_count
    );

    geometry
}
