//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons.

use icondata::Icon;

pub const CHEVRON_LEFT: Icon = icondata::LuChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
