//! Roster table: one flat row per character with sort shadows and the
//! dataset-wide stat ranges used by the heat map.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use ffrkdb_domain::{
    AbilityCategory, BuddyId, Character, DomainError, EquipmentCategory, Series, Stat,
};
use ffrkdb_shared::{TableColumn, TableRow, SORT_PREFIX};

use super::stat_range::StatRanges;

/// Prefix of the realm-synergy shadow columns.
pub const SERIES_PREFIX: &str = "series_";

const ABILITIES_KEY: &str = "Abilities";
const EQUIPMENT_KEY: &str = "Equipment";
const SERIES_LEVEL_BONUS: u64 = 10;

/// Keeps the records the category page shows.
///
/// With a cap, every record at or below that level. Without one, the highest
/// level record of each character, in first-seen order.
pub fn select_levels(records: Vec<Character>, level_cap: Option<u8>) -> Vec<Character> {
    if let Some(cap) = level_cap {
        return records.into_iter().filter(|c| c.level <= cap).collect();
    }

    let mut order: Vec<BuddyId> = Vec::new();
    let mut best: HashMap<BuddyId, Character> = HashMap::new();
    for record in records {
        let higher = best
            .get(&record.buddy_id)
            .map(|current| record.level > current.level);
        match higher {
            Some(false) => {}
            Some(true) => {
                best.insert(record.buddy_id, record);
            }
            None => {
                order.push(record.buddy_id);
                best.insert(record.buddy_id, record);
            }
        }
    }

    order.into_iter().filter_map(|id| best.remove(&id)).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterTable {
    rows: Vec<TableRow>,
    ranges: StatRanges,
    realm: Option<Series>,
}

impl RosterTable {
    pub fn build(records: &[Character]) -> Self {
        let mut ranges = StatRanges::new();
        let mut rows = Vec::with_capacity(records.len());

        for character in records {
            let Some(mut row) = flatten(character) else {
                continue;
            };
            ranges.observe_row(&row);
            write_sort_keys(&mut row, false);
            rows.push(row);
        }

        tracing::debug!(
            rows = rows.len(),
            columns = ranges.len(),
            "Built roster table"
        );

        Self {
            rows,
            ranges,
            realm: None,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn ranges(&self) -> &StatRanges {
        &self.ranges
    }

    pub fn realm(&self) -> Option<Series> {
        self.realm
    }

    /// Re-sorts rows of `realm` on their synergy stats. `None` restores the
    /// plain sort for every row.
    pub fn apply_realm(&mut self, realm: Option<Series>) {
        self.realm = realm;
        let mut boosted = 0usize;

        for row in &mut self.rows {
            let in_realm = realm.is_some_and(|r| row_in_series(row, r));
            if in_realm {
                boosted += 1;
            }
            write_sort_keys(row, in_realm);
        }

        tracing::debug!(realm = ?realm, boosted, "Recomputed roster sort keys");
    }
}

/// True when the row's `series_id` is `series`.
pub fn row_in_series(row: &TableRow, series: Series) -> bool {
    row.get("series_id").and_then(Value::as_u64) == Some(u64::from(series.id()))
}

fn flatten(character: &Character) -> Option<TableRow> {
    let mut row = match serde_json::to_value(character) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return None,
        Err(e) => {
            tracing::warn!(
                buddy_id = %character.buddy_id,
                error = %e,
                "Skipping unserializable character"
            );
            return None;
        }
    };
    row.remove(ABILITIES_KEY);
    row.remove(EQUIPMENT_KEY);

    row.insert(
        "series_level".to_string(),
        (u64::from(character.level) + SERIES_LEVEL_BONUS).into(),
    );
    // Synergy stats stored under a short name also get a `series_<key>` alias.
    for stat in Stat::ALL {
        let alias = format!("{SERIES_PREFIX}{}", stat.key());
        if alias != stat.series_key() {
            row.insert(alias, character.series_stats.get(stat).into());
        }
    }
    if let Some(defense) = character.stats.defense {
        row.insert("def".to_string(), defense.into());
    }

    for equipment in &character.equipment {
        let name = equipment.name();
        row.insert(name.clone(), Value::String(name));
    }
    for ability in &character.abilities {
        row.insert(ability.category.name(), ability.rarity.stars().into());
    }

    row.insert("search_id".to_string(), character.search_id().into());
    Some(row)
}

pub(crate) fn write_sort_keys(row: &mut TableRow, in_realm: bool) {
    let keys: Vec<String> = row
        .keys()
        .filter(|k| !k.starts_with(SORT_PREFIX))
        .filter(|k| !(in_realm && k.starts_with(SERIES_PREFIX)))
        .cloned()
        .collect();

    for key in keys {
        let shadow = if in_realm {
            row.get(&format!("{SERIES_PREFIX}{key}"))
                .filter(|v| is_truthy(v))
                .or_else(|| row.get(&key))
        } else {
            row.get(&key)
        };
        if let Some(value) = shadow.filter(|v| is_scalar(v)).cloned() {
            row.insert(format!("{SORT_PREFIX}{key}"), value);
        }
    }

    if let Some(name) = row.get("name").cloned() {
        row.insert(format!("{SORT_PREFIX}name"), name);
    }
    if let Some(buddy_id) = row.get("buddy_id").cloned() {
        row.insert(format!("{SORT_PREFIX}image_path"), buddy_id);
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// Column sets
// =============================================================================

/// The roster page's tabs, each a different column set over the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterTab {
    #[default]
    Stats,
    Abilities,
    Weapons,
    Armor,
}

impl RosterTab {
    pub const ALL: [RosterTab; 4] = [Self::Stats, Self::Abilities, Self::Weapons, Self::Armor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Abilities => "abilities",
            Self::Weapons => "weapons",
            Self::Armor => "armor",
        }
    }

    pub fn columns(&self) -> Vec<TableColumn> {
        let mut columns = vec![
            TableColumn::new(crate::format::INSPECT_FIELD, ""),
            TableColumn::new("image_path", "Image").sortable(),
            TableColumn::new("name", "Name").sortable(),
            TableColumn::new("series_id", "Series").sortable(),
        ];

        match self {
            Self::Stats => {
                columns.push(TableColumn::new("level", "Level").sortable().heat_mapped());
                columns.extend(
                    Stat::ALL
                        .iter()
                        .map(|s| TableColumn::new(s.key(), s.label()).sortable().heat_mapped()),
                );
            }
            Self::Abilities => {
                columns.extend(AbilityCategory::ALL.iter().map(|c| {
                    let name = c.name();
                    TableColumn::new(name.clone(), name).sortable().heat_mapped()
                }));
            }
            Self::Weapons => columns.extend(equipment_columns(true)),
            Self::Armor => columns.extend(equipment_columns(false)),
        }

        columns
    }
}

fn equipment_columns(weapons: bool) -> impl Iterator<Item = TableColumn> {
    EquipmentCategory::ALL
        .iter()
        .filter(move |e| e.is_weapon() == weapons)
        .map(|e| {
            let name = e.name();
            TableColumn::new(name.clone(), name).sortable()
        })
}

impl fmt::Display for RosterTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RosterTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("unknown roster tab: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character(
        buddy_id: u32,
        name: &str,
        series: u32,
        level: u8,
        atk: i32,
        series_atk: i32,
    ) -> Character {
        serde_json::from_value(json!({
            "buddy_id": buddy_id,
            "name": name,
            "job_name": "Black Mage",
            "series_id": series,
            "image_path": "/dff/static/lang/image/buddy/10900100/10900100.png",
            "level": level,
            "hp": 2000 + i32::from(level), "atk": atk, "defense": 90, "acc": 95, "eva": 98,
            "matk": 150, "mdef": 140, "mnd": 100, "spd": 110,
            "series_hp": 0, "series_atk": series_atk, "series_def": 110,
            "Abilities": [{"Black Magic": 5}],
            "Equipment": [{"Rod": "Rod"}]
        }))
        .unwrap()
    }

    #[test]
    fn select_levels_keeps_highest_per_character() {
        let records = vec![
            character(1, "Vivi", 109001, 30, 80, 90),
            character(2, "Tyro", 200001, 50, 101, 0),
            character(1, "Vivi", 109001, 50, 100, 120),
            character(1, "Vivi", 109001, 40, 90, 100),
        ];

        let selected = select_levels(records, None);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].name, "Vivi");
        assert_eq!(selected[0].level, 50);
        assert_eq!(selected[1].name, "Tyro");
    }

    #[test]
    fn select_levels_with_cap_keeps_every_record_below() {
        let records = vec![
            character(1, "Vivi", 109001, 30, 80, 90),
            character(1, "Vivi", 109001, 50, 100, 120),
            character(2, "Tyro", 200001, 20, 60, 0),
        ];

        let selected = select_levels(records, Some(30));

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|c| c.level <= 30));
    }

    #[test]
    fn build_adds_derived_fields() {
        let table = RosterTable::build(&[character(1, "Vivi", 109001, 50, 100, 120)]);
        let row = &table.rows()[0];

        assert_eq!(row["series_level"], 60);
        assert_eq!(row["series_defense"], 110);
        assert_eq!(row["def"], 90);
        assert_eq!(row["Black Magic"], 5);
        assert_eq!(row["Rod"], "Rod");
        assert_eq!(row["search_id"], 1);
        assert_eq!(row["sort-atk"], 100);
        assert_eq!(row["sort-name"], "Vivi");
        assert_eq!(row["sort-image_path"], 1);
        assert!(row.get("Abilities").is_none());
        assert!(row.get("Equipment").is_none());
    }

    #[test]
    fn build_collects_ranges_including_ability_rarity() {
        let table = RosterTable::build(&[
            character(1, "Vivi", 109001, 50, 100, 120),
            character(2, "Tyro", 200001, 50, 140, 0),
        ]);

        let atk = table.ranges().get("atk").unwrap();
        assert_eq!((atk.min, atk.max), (100.0, 140.0));
        assert!(table.ranges().get("Black Magic").is_some());
        assert!(table.ranges().get("sort-atk").is_none());
    }

    #[test]
    fn realm_switch_sorts_on_synergy_stats() {
        let mut table = RosterTable::build(&[
            character(1, "Vivi", 109001, 50, 100, 120),
            character(2, "Tyro", 200001, 50, 140, 0),
        ]);

        table.apply_realm(Some(Series::FfIX));

        let vivi = &table.rows()[0];
        assert_eq!(vivi["sort-atk"], 120);
        assert_eq!(vivi["sort-level"], 60);
        assert_eq!(vivi["sort-defense"], 110);
        // Falsy synergy value falls back to the base stat.
        assert_eq!(vivi["sort-hp"], vivi["hp"]);
        assert_eq!(vivi["sort-image_path"], 1);

        let tyro = &table.rows()[1];
        assert_eq!(tyro["sort-atk"], 140);
        assert_eq!(table.realm(), Some(Series::FfIX));
    }

    #[test]
    fn realm_switch_leaves_ranges_untouched() {
        let mut table = RosterTable::build(&[
            character(1, "Vivi", 109001, 50, 100, 120),
            character(2, "Tyro", 200001, 50, 140, 0),
        ]);
        let before = table.ranges().clone();

        table.apply_realm(Some(Series::FfIX));
        assert_eq!(table.ranges(), &before);

        table.apply_realm(None);
        assert_eq!(table.ranges(), &before);
        assert_eq!(table.rows()[0]["sort-atk"], 100);
    }

    #[test]
    fn tab_columns() {
        let stats = RosterTab::Stats.columns();
        assert_eq!(stats[0].field, crate::format::INSPECT_FIELD);
        assert!(stats
            .iter()
            .any(|c| c.field == "defense" && c.title == "DEF" && c.is_heat_mapped()));
        assert!(!stats.iter().any(|c| c.field == "series_id" && c.is_heat_mapped()));

        let weapons = RosterTab::Weapons.columns();
        assert!(weapons.iter().any(|c| c.field == "Rod"));
        assert!(!weapons.iter().any(|c| c.field == "Shield"));

        let armor = RosterTab::Armor.columns();
        assert!(armor.iter().any(|c| c.field == "Shield"));
        assert!(armor.iter().any(|c| c.field == "Accessory"));
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("Abilities".parse::<RosterTab>().unwrap(), RosterTab::Abilities);
        assert!("relics".parse::<RosterTab>().is_err());
    }
}
