// Alert feed module for derived CRM notifications.
//
// Architecture:
// - model.rs: Alert kinds, priorities, actions, and the derived Alert type
// - feed.rs: Joins tasks, activities, and contacts into a prioritized feed
//   and tracks per-session dismissals

pub mod feed;
pub mod model;
