use serde::Serialize;
use std::collections::HashMap;

use crate::models::SeatType;

/// Известные иконки типов мест. Неизвестный ключ из каталога
/// разрешается в `Standard`, а не в пустую отрисовку.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatIcon {
    Standard,
    Vip,
    Accessible,
    SemiBed,
    Bed,
}

impl SeatIcon {
    pub fn from_key(key: &str) -> SeatIcon {
        match key {
            "vip" | "crown" => SeatIcon::Vip,
            "accessible" | "wheelchair" => SeatIcon::Accessible,
            "semi-bed" | "semibed" | "recliner" => SeatIcon::SemiBed,
            "bed" | "sleeper" => SeatIcon::Bed,
            _ => SeatIcon::Standard,
        }
    }
}

// Каталог типов мест: id -> тип, с запасным типом для неизвестных id
#[derive(Debug, Clone)]
pub struct SeatTypeCatalog {
    by_id: HashMap<i64, SeatType>,
    fallback: SeatType,
}

impl SeatTypeCatalog {
    pub fn new(types: Vec<SeatType>) -> Self {
        let by_id = types.into_iter().map(|t| (t.id, t)).collect();
        Self {
            by_id,
            fallback: SeatType {
                id: 0,
                name: "Standard".to_string(),
                color: "#9e9e9e".to_string(),
                icon_key: "standard".to_string(),
            },
        }
    }

    pub fn resolve(&self, seat_type_id: i64) -> &SeatType {
        self.by_id.get(&seat_type_id).unwrap_or(&self.fallback)
    }

    pub fn icon_for(&self, seat_type_id: i64) -> SeatIcon {
        SeatIcon::from_key(&self.resolve(seat_type_id).icon_key)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_type(id: i64, icon_key: &str) -> SeatType {
        SeatType {
            id,
            name: format!("type-{}", id),
            color: "#3f51b5".to_string(),
            icon_key: icon_key.to_string(),
        }
    }

    #[test]
    fn known_icon_keys_resolve_to_tagged_variants() {
        assert_eq!(SeatIcon::from_key("vip"), SeatIcon::Vip);
        assert_eq!(SeatIcon::from_key("wheelchair"), SeatIcon::Accessible);
        assert_eq!(SeatIcon::from_key("semi-bed"), SeatIcon::SemiBed);
        assert_eq!(SeatIcon::from_key("sleeper"), SeatIcon::Bed);
    }

    #[test]
    fn unknown_icon_key_falls_back_to_standard() {
        assert_eq!(SeatIcon::from_key("dragon"), SeatIcon::Standard);
        assert_eq!(SeatIcon::from_key(""), SeatIcon::Standard);
    }

    #[test]
    fn resolve_returns_catalog_entry() {
        let catalog = SeatTypeCatalog::new(vec![seat_type(10, "vip")]);
        assert_eq!(catalog.resolve(10).name, "type-10");
        assert_eq!(catalog.icon_for(10), SeatIcon::Vip);
    }

    #[test]
    fn resolve_unknown_id_returns_fallback() {
        let catalog = SeatTypeCatalog::new(vec![seat_type(10, "vip")]);
        assert_eq!(catalog.resolve(999).name, "Standard");
        assert_eq!(catalog.icon_for(999), SeatIcon::Standard);
    }
}
