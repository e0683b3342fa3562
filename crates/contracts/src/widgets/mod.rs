pub mod dropdown_keys;
pub mod pager;
pub mod scroll_spy;
pub mod search;
pub mod sidebar;
pub mod tab_group;
pub mod viewport;
