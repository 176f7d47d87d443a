//! # pomkit-utils
//!
//! Filesystem-facing helpers: the `.properties` parser, the layered [`PropertyOverlay`],
//! project root discovery and config loading.

mod find_git_work_dir;
mod find_project_root;
mod get_pomkit_config;
pub mod properties;
pub mod property_overlay;

pub use find_git_work_dir::find_git_work_dir;
pub use find_project_root::find_project_root;
pub use get_pomkit_config::{
    CONFIG_DIR, CONFIG_FILE, get_pomkit_config, get_pomkit_config_path, get_pomkit_dir,
};
pub use properties::{PropertiesError, parse_properties, read_properties_file};
pub use property_overlay::{PropertyOverlay, is_property_file_name};
