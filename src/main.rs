use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_grid::{
    catalog::SeatTypeCatalog,
    config::GridConfig,
    geometry::{GridCell, GridRow},
    models::{Floor, SeatType},
    GridService,
};

// Входной файл: схема автобуса, как её отдает API раскладок
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutFile {
    #[serde(default)]
    seat_types: Vec<SeatType>,
    floors: Vec<Floor>,
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seat_grid=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = env::args()
        .nth(1)
        .expect("Usage: seat_grid <layout.json>");

    let raw = fs::read_to_string(&path).expect("Failed to read layout file");
    let layout: LayoutFile = serde_json::from_str(&raw).expect("Failed to parse layout file");

    let config = GridConfig::from_env();
    let service = GridService::new(config, SeatTypeCatalog::new(layout.seat_types));

    for floor in &layout.floors {
        let grid = service.render(floor);
        info!(
            "Floor {}: {} seats, {} rows, aisle at column {} ({} left / {} right)",
            floor.floor_number,
            floor.seats.len(),
            grid.geometry.row_count,
            grid.geometry.aisle_column,
            grid.geometry.left_column_count,
            grid.geometry.right_column_count
        );
        for row in &grid.rows {
            println!("{}", format_row(row));
        }
        println!();
    }
}

fn format_row(row: &GridRow) -> String {
    row.cells
        .iter()
        .map(|cell| match cell {
            GridCell::Seat(seat) => format!("[{:>3}]", seat.label),
            GridCell::Aisle => "  |  ".to_string(),
            GridCell::Empty => "[ - ]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
