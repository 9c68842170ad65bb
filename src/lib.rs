pub mod cache;
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod models;
pub mod services;

use crate::catalog::SeatTypeCatalog;
use crate::config::GridConfig;
use crate::geometry::{GridGeometry, RenderableGrid};
use crate::models::Floor;

// Общая точка входа: конфиг + каталог типов мест
#[derive(Debug, Clone)]
pub struct GridService {
    pub config: GridConfig,
    pub catalog: SeatTypeCatalog,
}

impl GridService {
    pub fn new(config: GridConfig, catalog: SeatTypeCatalog) -> Self {
        Self { config, catalog }
    }

    /// Геометрия этажа — чистая функция текущего списка мест,
    /// пересчитывается при каждом вызове.
    pub fn geometry(&self, floor: &Floor) -> GridGeometry {
        geometry::infer_grid_geometry(&floor.seats, &self.config)
    }

    pub fn render(&self, floor: &Floor) -> RenderableGrid {
        let geometry = self.geometry(floor);
        geometry::build_grid(floor, &geometry, &self.catalog)
    }
}
