//! Demo table contents.

use navsync_model::RowId;

const NAMES: &[&str] = &[
    "Apple", "Barley", "Carrot", "Date", "Edam", "Fennel", "Gouda", "Hazelnut", "Iceberg",
    "Jasmine rice", "Kale", "Lentil", "Millet", "Nectarine", "Oat", "Parsnip", "Quinoa",
    "Radish", "Spelt", "Tomato",
];

const CATEGORIES: &[&str] = &["Fruit", "Grain", "Vegetable", "Dairy"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRow {
    pub id: RowId,
    pub name: String,
    pub category: &'static str,
    pub stock: u32,
}

/// Rows `1..=count` with deterministic contents.
pub fn demo_rows(count: u32) -> Vec<DemoRow> {
    (1..=count)
        .map(|id| {
            let slot = (id - 1) as usize;
            let name = NAMES[slot % NAMES.len()];
            let name = match slot / NAMES.len() {
                0 => name.to_string(),
                batch => format!("{name} #{}", batch + 1),
            };
            DemoRow {
                id: RowId(id),
                name,
                category: CATEGORIES[slot % CATEGORIES.len()],
                stock: (id * 37) % 100,
            }
        })
        .collect()
}
