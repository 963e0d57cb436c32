//! XML utilities for navigating catalog documents.

mod utils;

pub use utils::{element_children, find_by_path, find_child, get_tag_name, get_text};
