//! Transaction categories and the default set every user starts with.

use serde::{Deserialize, Serialize};

use crate::database_id::CategoryId;

/// The label used for transactions that have no category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A label for transactions (e.g., 'Groceries', 'Travel') with a display icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category, if it has been stored.
    #[serde(default)]
    pub id: Option<CategoryId>,
    /// The name the category is grouped and displayed by.
    pub name: String,
    /// The name of the icon shown next to the category.
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    /// Create a category that has not been stored yet.
    ///
    /// If `name` matches one of the [default categories](default_categories),
    /// the category gets the default icon.
    pub fn new(name: &str) -> Self {
        let name = name.trim();

        Self {
            id: None,
            name: name.to_owned(),
            icon: icon_for(name).map(str::to_owned),
        }
    }

    /// Set the ID of the category.
    pub fn id(mut self, id: Option<CategoryId>) -> Self {
        self.id = id;
        self
    }
}

const DEFAULT_CATEGORIES: [(&str, &str); 16] = [
    ("Food & Dining", "Utensils"),
    ("Transportation", "Car"),
    ("Shopping", "ShoppingBag"),
    ("Entertainment", "Gamepad2"),
    ("Bills & Utilities", "Home"),
    ("Healthcare", "Heart"),
    ("Education", "Book"),
    ("Travel", "Plane"),
    ("Groceries", "ShoppingCart"),
    ("Gas", "Fuel"),
    ("Coffee & Drinks", "Coffee"),
    ("Gifts & Donations", "Gift"),
    ("Business", "ShoppingBag"),
    ("Personal Care", "Heart"),
    ("Home & Garden", "Home"),
    ("Sports & Fitness", "Gamepad2"),
];

/// The categories seeded for new users, in display order.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, icon)| Category {
            id: None,
            name: (*name).to_owned(),
            icon: Some((*icon).to_owned()),
        })
        .collect()
}

/// Get the icon of the default category called `name`, ignoring case.
pub fn icon_for(name: &str) -> Option<&'static str> {
    DEFAULT_CATEGORIES
        .iter()
        .find(|(default_name, _)| default_name.eq_ignore_ascii_case(name))
        .map(|(_, icon)| *icon)
}
