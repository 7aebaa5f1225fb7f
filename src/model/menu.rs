use serde::{Deserialize, Serialize};

/// A dish on the canteen menu.
///
/// `price` is in whole currency units; `avg_prep` is the average preparation time of one
/// portion, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub avg_prep: u32,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, price: u32, avg_prep: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            avg_prep,
        }
    }
}

/// The read-only menu catalog.
///
/// Seeded once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The catalog the canteen opens with.
    pub fn seeded() -> Self {
        Self::new(vec![
            MenuItem::new(1, "French fries", 30, 4),
            MenuItem::new(2, "Pizza", 60, 8),
            MenuItem::new(3, "Special pizza", 100, 12),
            MenuItem::new(4, "Macroni", 30, 6),
            MenuItem::new(5, "Spring roll", 30, 5),
            MenuItem::new(6, "Tea", 10, 1),
            MenuItem::new(7, "Coffee", 20, 2),
            MenuItem::new(8, "Chow Mein", 30, 7),
        ])
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_menu_lookup() {
        let menu = Menu::seeded();
        assert_eq!(menu.items().len(), 8);

        let tea = menu.get(6).unwrap();
        assert_eq!(tea.name, "Tea");
        assert_eq!(tea.price, 10);
        assert_eq!(tea.avg_prep, 1);

        assert!(menu.get(42).is_none());
    }
}
