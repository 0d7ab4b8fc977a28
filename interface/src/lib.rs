pub mod app;
pub mod component_ui;
pub mod consts;
pub mod display_elems;
pub mod logging;
pub mod state_handlers;
pub mod top_bar;
pub mod update_ops;
pub mod utils;
