pub mod form;
pub mod layout;
pub mod path;

pub use form::{validators, Form, FormField};
pub use layout::{center_column, center_popup, create_standard_layout};
pub use path::{
    expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir, get_storage_path,
};
