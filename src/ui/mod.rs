/// UI building blocks
///
/// - toolbar.rs: the fetch trigger and the clickable source URL
/// - viewer.rs: the screenshot pane, its placeholder and the save action

pub mod toolbar;
pub mod viewer;
