use std::collections::HashMap;

use crate::models::{Category, InventoryItem};

/// Render inventory as `Category,Count` CSV, one row per item in insertion
/// order. The category column shows the category's name, or the raw
/// `category_id` when no category with that id exists.
pub fn inventory_csv(categories: &[Category], items: &[InventoryItem]) -> anyhow::Result<String> {
    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["Category", "Count"])?;

    for item in items {
        let category = names
            .get(item.category_id.as_str())
            .copied()
            .unwrap_or(item.category_id.as_str());
        wtr.write_record([category, item.count.to_string().as_str()])?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}
