//! Table column visibility, keyed by column name.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnVisibility {
    columns: Vec<String>,
    visible: HashSet<String>,
    /// Columns whose visibility the user changed by hand.
    touched: HashSet<String>,
}

impl ColumnVisibility {
    pub fn new(all_columns: &[String], default_columns: &[String]) -> Self {
        let mut cv = Self::default();
        cv.reconcile(all_columns, default_columns);
        cv
    }

    /// Adopt a new column set from the server. Columns the user toggled keep
    /// their choice; every other column follows `default_columns`.
    pub fn reconcile(&mut self, all_columns: &[String], default_columns: &[String]) {
        let defaults: HashSet<&str> = default_columns.iter().map(String::as_str).collect();
        let mut visible = HashSet::new();
        for column in all_columns {
            let shown = if self.touched.contains(column) {
                self.visible.contains(column)
            } else {
                defaults.contains(column.as_str())
            };
            if shown {
                visible.insert(column.clone());
            }
        }
        self.touched.retain(|c| all_columns.contains(c));
        self.columns = all_columns.to_vec();
        self.visible = visible;
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.visible.contains(column)
    }

    /// Show or hide one column. Unknown names are ignored.
    pub fn set_visible(&mut self, column: &str, visible: bool) {
        if !self.columns.iter().any(|c| c == column) {
            return;
        }
        self.touched.insert(column.to_string());
        if visible {
            self.visible.insert(column.to_string());
        } else {
            self.visible.remove(column);
        }
    }

    /// Visible columns in table order.
    pub fn visible_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| self.visible.contains(*c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_decide_initial_visibility() {
        let cv = ColumnVisibility::new(&cols(&["name", "email", "city"]), &cols(&["name", "city"]));
        assert_eq!(cv.visible_columns(), cols(&["name", "city"]));
        assert!(!cv.is_visible("email"));
    }

    #[test]
    fn toggle_off_and_on_restores() {
        let mut cv = ColumnVisibility::new(&cols(&["name", "email"]), &cols(&["name", "email"]));
        cv.set_visible("email", false);
        assert_eq!(cv.visible_columns(), cols(&["name"]));
        cv.set_visible("email", true);
        assert_eq!(cv.visible_columns(), cols(&["name", "email"]));
    }

    #[test]
    fn reconcile_keeps_user_choices_for_surviving_columns() {
        let mut cv = ColumnVisibility::new(&cols(&["name", "email", "city"]), &cols(&["name"]));
        cv.set_visible("city", true);
        cv.set_visible("name", false);

        cv.reconcile(&cols(&["city", "name", "phone"]), &cols(&["name", "phone"]));

        assert_eq!(cv.columns(), cols(&["city", "name", "phone"]).as_slice());
        assert_eq!(cv.visible_columns(), cols(&["city", "phone"]));
    }

    #[test]
    fn unknown_column_is_ignored() {
        let mut cv = ColumnVisibility::new(&cols(&["name"]), &cols(&["name"]));
        cv.set_visible("ghost", true);
        assert_eq!(cv.visible_columns(), cols(&["name"]));
    }
}
