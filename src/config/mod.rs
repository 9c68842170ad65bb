use serde::Deserialize;
use std::env;

/// Политика анализа пустых колонок при поиске прохода.
///
/// `ExcludeLastRow` не учитывает последний ряд: во многих реальных схемах
/// задний диван занимает ячейку прохода только в последнем ряду и сбивает
/// подсчет. `AllRows` считает пустоту по всем рядам одинаково.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    ExcludeLastRow,
    AllRows,
}

// Настройки геометрии сетки мест
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub default_aisle_column: i32,
    pub default_side_columns: usize,
    pub gap_policy: GapPolicy,
    pub catalog_ttl_seconds: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            default_aisle_column: 3,
            default_side_columns: 2,
            gap_policy: GapPolicy::ExcludeLastRow,
            catalog_ttl_seconds: 300,
        }
    }
}

impl GridConfig {
    pub fn from_env() -> Self {
        GridConfig {
            default_aisle_column: env::var("GRID_DEFAULT_AISLE_COLUMN")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .expect("GRID_DEFAULT_AISLE_COLUMN must be a valid number"),
            default_side_columns: env::var("GRID_DEFAULT_SIDE_COLUMNS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .expect("GRID_DEFAULT_SIDE_COLUMNS must be a valid number"),
            gap_policy: match env::var("GRID_GAP_POLICY")
                .unwrap_or_else(|_| "exclude_last_row".to_string())
                .as_str()
            {
                "all_rows" => GapPolicy::AllRows,
                _ => GapPolicy::ExcludeLastRow,
            },
            catalog_ttl_seconds: env::var("GRID_CATALOG_TTL_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("GRID_CATALOG_TTL_SECONDS must be a valid number"),
        }
    }

    pub fn catalog_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.catalog_ttl_seconds)
    }
}
