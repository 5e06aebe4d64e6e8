//! Plain category tables for materials and abilities.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use ffrkdb_domain::{Ability, DomainError, Material, RarityFilter};
use ffrkdb_shared::{CraftingFeed, TableColumn, TableRow};

use super::roster::write_sort_keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingCategory {
    Materials,
    Abilities,
}

impl ListingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Materials => "materials",
            Self::Abilities => "abilities",
        }
    }

    pub fn columns(&self) -> Vec<TableColumn> {
        let fields: &[(&str, &str)] = match self {
            Self::Materials => &[("name", "Name"), ("rarity", "Rarity"), ("sale_gil", "Sale gil")],
            Self::Abilities => &[
                ("name", "Name"),
                ("rarity", "Rarity"),
                ("category_name", "Category"),
                ("category_type", "Category Type"),
            ],
        };

        std::iter::once(TableColumn::new(crate::format::INSPECT_FIELD, ""))
            .chain(
                fields
                    .iter()
                    .map(|(field, title)| TableColumn::new(*field, *title).sortable()),
            )
            .collect()
    }

    /// Rows for this category, filtered by tier.
    ///
    /// Materials come in id order. Abilities come in name order with one row
    /// per name, since every grade of an ability shares its detail page.
    pub fn rows(&self, feed: &CraftingFeed, filter: RarityFilter) -> Vec<TableRow> {
        match self {
            Self::Materials => {
                let mut materials: Vec<&Material> = feed
                    .materials
                    .iter()
                    .filter(|m| filter.matches(m.rarity))
                    .collect();
                materials.sort_by_key(|m| m.id);
                materials
                    .into_iter()
                    .filter_map(|m| listing_row(m, m.search_id()))
                    .collect()
            }
            Self::Abilities => {
                let mut abilities: Vec<&Ability> = feed
                    .abilities
                    .iter()
                    .filter(|a| filter.matches(a.rarity))
                    .collect();
                abilities.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
                let mut seen = HashSet::new();
                abilities
                    .into_iter()
                    .filter(|a| seen.insert(a.name.as_str()))
                    .filter_map(|a| listing_row(a, a.search_id()))
                    .collect()
            }
        }
    }
}

fn listing_row<T: Serialize>(record: &T, search_id: u32) -> Option<TableRow> {
    let mut row = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => return None,
    };
    row.insert("search_id".to_string(), search_id.into());
    write_sort_keys(&mut row, false);
    Some(row)
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" | "materials" => Ok(Self::Materials),
            "ability" | "abilities" => Ok(Self::Abilities),
            _ => Err(DomainError::parse(format!("Unknown category: {}", s))),
        }
    }
}
