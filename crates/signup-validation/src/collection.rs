//! Collection validation functions

/// Validates minimum number of items in a collection
pub fn validate_min_items<T>(items: &[T], min: usize) -> Result<(), String> {
    if items.len() >= min {
        Ok(())
    } else {
        Err(format!("Must have at least {} items", min))
    }
}

/// Insert `item` unless an equal element is already present.
///
/// Returns `true` when the collection changed.
pub fn insert_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if items.contains(&item) {
        false
    } else {
        items.push(item);
        true
    }
}

/// Remove every element equal to `item`.
///
/// Returns `true` when the collection changed.
pub fn remove_all<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    let before = items.len();
    items.retain(|existing| existing != item);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_items() {
        let items = vec!["coding"];
        assert!(validate_min_items(&items, 1).is_ok());
        assert!(validate_min_items::<&str>(&[], 1).is_err());
    }

    #[test]
    fn test_insert_unique() {
        let mut items = vec!["coding".to_string()];
        assert!(!insert_unique(&mut items, "coding".to_string()));
        assert!(insert_unique(&mut items, "sports".to_string()));
        assert_eq!(items, vec!["coding", "sports"]);
    }

    #[test]
    fn test_remove_all() {
        let mut items = vec!["coding", "sports", "coding"];
        assert!(remove_all(&mut items, &"coding"));
        assert_eq!(items, vec!["sports"]);
        assert!(!remove_all(&mut items, &"reading"));
    }
}
