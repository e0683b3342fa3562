//! Keyboard navigation inside a dropdown menu.

/// Keys on the trigger that open the menu and focus its first item.
pub fn opens_menu(key: &str) -> bool {
    matches!(key, "Enter" | " " | "ArrowDown")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKeyAction {
    /// Move focus to the item at this index
    Focus(usize),
    /// Hide the menu and return focus to the trigger
    CloseAndFocusTrigger,
    /// Hide the menu and let the browser move focus
    Close,
}

impl ItemKeyAction {
    /// Tab must keep its default focus traversal.
    pub fn prevents_default(self) -> bool {
        !matches!(self, ItemKeyAction::Close)
    }
}

/// Resolve a key pressed on item `index` of a menu with `len` items.
/// Arrow keys wrap around.
pub fn item_key_action(key: &str, index: usize, len: usize) -> Option<ItemKeyAction> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowDown" => Some(ItemKeyAction::Focus((index + 1) % len)),
        "ArrowUp" => Some(ItemKeyAction::Focus((index + len - 1) % len)),
        "Escape" => Some(ItemKeyAction::CloseAndFocusTrigger),
        "Tab" => Some(ItemKeyAction::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_keys() {
        assert!(opens_menu("Enter"));
        assert!(opens_menu(" "));
        assert!(opens_menu("ArrowDown"));
        assert!(!opens_menu("ArrowUp"));
    }

    #[test]
    fn test_arrows_wrap() {
        assert_eq!(item_key_action("ArrowDown", 2, 3), Some(ItemKeyAction::Focus(0)));
        assert_eq!(item_key_action("ArrowUp", 0, 3), Some(ItemKeyAction::Focus(2)));
        assert_eq!(item_key_action("ArrowDown", 0, 3), Some(ItemKeyAction::Focus(1)));
    }

    #[test]
    fn test_escape_and_tab() {
        let esc = item_key_action("Escape", 1, 3).unwrap();
        assert_eq!(esc, ItemKeyAction::CloseAndFocusTrigger);
        assert!(esc.prevents_default());

        let tab = item_key_action("Tab", 1, 3).unwrap();
        assert_eq!(tab, ItemKeyAction::Close);
        assert!(!tab.prevents_default());
    }

    #[test]
    fn test_other_keys_and_empty_menus() {
        assert_eq!(item_key_action("a", 0, 3), None);
        assert_eq!(item_key_action("ArrowDown", 0, 0), None);
    }
}
