mod central_panel;
mod dialogs;
mod tools_panel;

pub use central_panel::canvas_panel;
pub use dialogs::{dialogs, setup_failed, setup_prompt};
pub use tools_panel::toolbar;
