pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{CONFIG_ENV_VAR, get_config_path};
pub use paths::{MAX_UPLOAD_BYTES, format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_for_terminal;
