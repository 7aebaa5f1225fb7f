//! Wait-time heuristic.
//!
//! `minutes = round(Σ avg_prep × qty + 2 × active_orders)`, where each line's `avg_prep`
//! comes from the menu, else from the line's own hint, else [`DEFAULT_PREP_MINUTES`].
//! The estimate is a guide for customers, not a promise.

use crate::model::{CartLine, LineRequest, Menu};

/// Preparation time assumed for a dish nobody has timed.
pub const DEFAULT_PREP_MINUTES: f64 = 5.0;

/// Extra minutes each order already in the queue adds.
pub const MINUTES_PER_ACTIVE_ORDER: f64 = 2.0;

/// A line the estimator can price in minutes.
pub trait PrepLine {
    fn item_id(&self) -> u32;
    fn qty(&self) -> u32;

    /// Caller-supplied preparation time, consulted when the menu has none.
    fn prep_hint(&self) -> Option<f64> {
        None
    }
}

impl PrepLine for LineRequest {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn qty(&self) -> u32 {
        self.qty
    }

    fn prep_hint(&self) -> Option<f64> {
        self.avg_prep
    }
}

impl PrepLine for CartLine {
    fn item_id(&self) -> u32 {
        self.id
    }

    fn qty(&self) -> u32 {
        self.qty
    }
}

/// Minutes to prepare one portion of `line`.
pub fn prep_minutes<L: PrepLine>(line: &L, menu: &Menu) -> f64 {
    menu.get(line.item_id())
        .map(|item| f64::from(item.avg_prep))
        .filter(|minutes| *minutes > 0.0)
        .or_else(|| line.prep_hint().filter(|minutes| *minutes > 0.0))
        .unwrap_or(DEFAULT_PREP_MINUTES)
}

/// Estimated minutes until a cart of `lines` is ready, given `active_orders` ahead of it.
pub fn estimate_wait<L: PrepLine>(lines: &[L], menu: &Menu, active_orders: usize) -> u32 {
    let base: f64 = lines
        .iter()
        .map(|line| prep_minutes(line, menu) * f64::from(line.qty()))
        .sum();
    let queue = active_orders as f64 * MINUTES_PER_ACTIVE_ORDER;

    (base + queue).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    fn hinted(id: u32, qty: u32, avg_prep: f64) -> LineRequest {
        LineRequest {
            avg_prep: Some(avg_prep),
            ..LineRequest::new(id, qty)
        }
    }

    #[test]
    fn test_menu_prep_plus_queue() {
        let menu = Menu::new(vec![MenuItem::new(1, "Fries", 30, 4)]);
        assert_eq!(estimate_wait(&[LineRequest::new(1, 2)], &menu, 3), 14);
    }

    #[test]
    fn test_single_tea_on_empty_queue() {
        assert_eq!(estimate_wait(&[LineRequest::new(6, 2)], &Menu::seeded(), 0), 2);
    }

    #[test]
    fn test_menu_beats_hint() {
        let menu = Menu::seeded();
        assert_eq!(estimate_wait(&[hinted(2, 1, 30.0)], &menu, 0), 8);
    }

    #[test]
    fn test_hint_used_for_unknown_item() {
        let menu = Menu::seeded();
        assert_eq!(estimate_wait(&[hinted(99, 2, 3.0)], &menu, 1), 8);
    }

    #[test]
    fn test_default_when_nothing_known() {
        let menu = Menu::seeded();
        assert_eq!(estimate_wait(&[LineRequest::new(99, 1)], &menu, 0), 5);
        assert_eq!(estimate_wait(&[hinted(99, 1, 0.0)], &menu, 0), 5);
    }

    #[test]
    fn test_zero_menu_prep_falls_through() {
        let menu = Menu::new(vec![MenuItem::new(1, "Water", 5, 0)]);
        assert_eq!(estimate_wait(&[hinted(1, 1, 1.0)], &menu, 0), 1);
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        let menu = Menu::new(vec![]);
        assert_eq!(estimate_wait(&[hinted(1, 1, 2.4)], &menu, 0), 2);
        assert_eq!(estimate_wait(&[hinted(1, 1, 2.5)], &menu, 0), 3);
    }

    #[test]
    fn test_empty_cart_is_queue_only() {
        let lines: [CartLine; 0] = [];
        assert_eq!(estimate_wait(&lines, &Menu::seeded(), 4), 8);
    }

    #[test]
    fn test_cart_lines_ignore_hints() {
        let line = CartLine {
            id: 3,
            name: "Special pizza".into(),
            price: 100,
            qty: 1,
        };
        assert_eq!(estimate_wait(&[line], &Menu::seeded(), 0), 12);
    }
}
