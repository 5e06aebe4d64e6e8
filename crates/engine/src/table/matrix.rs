//! Materials x materials incidence matrix for one rarity tier.
//!
//! Row and column are both materials of the active tier. A cell names every
//! ability of that tier whose crafting cost uses both materials; the diagonal
//! names every ability using that one material.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use ffrkdb_domain::{Ability, AbilityCost, AbilityId, Material, MaterialId, Rarity};
use ffrkdb_shared::{TableColumn, TableRow, ALT_FIELD};

/// Material ids each ability costs, in first-seen order without repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostIndex {
    by_ability: HashMap<AbilityId, Vec<MaterialId>>,
}

impl CostIndex {
    /// Indexes the join table. Entries for abilities not in `abilities` are
    /// dropped.
    pub fn build(abilities: &[Ability], costs: &[AbilityCost]) -> Self {
        let known: HashSet<AbilityId> = abilities.iter().map(|a| a.id).collect();
        let mut by_ability: HashMap<AbilityId, Vec<MaterialId>> = HashMap::new();
        let mut orphaned = 0usize;

        for cost in costs {
            if !known.contains(&cost.ability_id) {
                orphaned += 1;
                continue;
            }
            let materials = by_ability.entry(cost.ability_id).or_default();
            if !materials.contains(&cost.material_id) {
                materials.push(cost.material_id);
            }
        }

        if orphaned > 0 {
            tracing::warn!(orphaned, "Ignored cost entries for unknown abilities");
        }

        Self { by_ability }
    }

    pub fn materials_for(&self, ability: AbilityId) -> &[MaterialId] {
        self.by_ability
            .get(&ability)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The crafting table for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixTable {
    pub rarity: Rarity,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    materials: Vec<MaterialId>,
}

impl MatrixTable {
    /// Ability names in the cell at (`row`, `column`), or `None` when either
    /// material is not part of this tier.
    pub fn cell(&self, row: MaterialId, column: MaterialId) -> Option<Vec<&str>> {
        let index = self.materials.iter().position(|m| *m == row)?;
        let cell = self.rows.get(index)?.get(&column.to_string())?;
        let names = cell.as_array()?;
        Some(names.iter().filter_map(Value::as_str).collect())
    }

    pub fn materials(&self) -> &[MaterialId] {
        &self.materials
    }
}

/// Builds the incidence matrix for `rarity`.
pub fn build_matrix(
    materials: &[Material],
    abilities: &[Ability],
    costs: &CostIndex,
    rarity: Rarity,
) -> MatrixTable {
    let active: Vec<&Material> = materials.iter().filter(|m| m.rarity == rarity).collect();
    let position: HashMap<MaterialId, usize> = active
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id, i))
        .collect();

    let mut cells: Vec<Vec<Vec<String>>> = vec![vec![Vec::new(); active.len()]; active.len()];
    let mut cross_tier = 0usize;

    for ability in abilities.iter().filter(|a| a.rarity == rarity) {
        let wanted = costs.materials_for(ability.id);
        let in_tier: Vec<usize> = wanted
            .iter()
            .filter_map(|id| position.get(id).copied())
            .collect();
        cross_tier += wanted.len() - in_tier.len();

        for &row in &in_tier {
            for &column in &in_tier {
                cells[row][column].push(ability.name.clone());
            }
        }
    }

    if cross_tier > 0 {
        tracing::warn!(
            rarity = %rarity,
            dropped = cross_tier,
            "Dropped cost entries outside the active tier"
        );
    }

    let mut columns = Vec::with_capacity(active.len() + 1);
    columns.push(TableColumn::new(ALT_FIELD, ""));
    columns.extend(active.iter().map(|m| {
        TableColumn::new(m.id.to_string(), m.name.clone()).with_footer(m.name.clone())
    }));

    // Columns keep input order; rows come in material id order.
    let mut row_order: Vec<usize> = (0..active.len()).collect();
    row_order.sort_by_key(|&i| active[i].id);

    let rows = row_order
        .iter()
        .map(|&i| {
            let mut row = TableRow::new();
            row.insert(ALT_FIELD.to_string(), Value::String(active[i].name.clone()));
            let row_cells = std::mem::take(&mut cells[i]);
            for (column, names) in active.iter().zip(row_cells) {
                row.insert(
                    column.id.to_string(),
                    Value::Array(names.into_iter().map(Value::String).collect()),
                );
            }
            row
        })
        .collect();

    tracing::debug!(rarity = %rarity, materials = active.len(), "Built incidence matrix");

    MatrixTable {
        rarity,
        columns,
        rows,
        materials: row_order.iter().map(|&i| active[i].id).collect(),
    }
}
