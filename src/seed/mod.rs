use crate::models::Category;

/// Built-in categories present before the first request, as `(id, name)`.
static DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("cat-server", "Server"),
    ("cat-pc", "PC"),
    ("cat-notebook", "Notebook"),
    ("cat-mobile", "Mobiles Endgerät"),
];

/// The fixed category list every new store starts with, in display order.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: None,
        })
        .collect()
}
