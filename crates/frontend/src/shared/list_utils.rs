/// Sorting helpers for client-side tables.
use std::cmp::Ordering;

/// Types that can be compared by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by one column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Header suffix showing the sort state of a column.
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current_field == Some(field) {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Compare two display strings: numerically when both parse as numbers,
/// otherwise case-insensitively. Empty cells sort last.
pub fn compare_cell_text(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            compare_cell_text(self.0, other.0)
        }
    }

    #[test]
    fn numbers_compare_numerically() {
        let mut items = vec![Item("10"), Item("9"), Item(""), Item("100")];
        sort_list(&mut items, "score", true);
        let order: Vec<&str> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["9", "10", "100", ""]);
    }

    #[test]
    fn text_compares_case_insensitively() {
        let mut items = vec![Item("beta"), Item("Alpha"), Item("gamma")];
        sort_list(&mut items, "name", false);
        let order: Vec<&str> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn indicator_marks_active_column() {
        assert_eq!(get_sort_indicator(Some("name"), "name", true), " ▲");
        assert_eq!(get_sort_indicator(Some("name"), "name", false), " ▼");
        assert_eq!(get_sort_indicator(None, "name", true), " ⇅");
        assert_eq!(get_sort_class(Some("age"), "name"), "sort-icon");
    }
}
