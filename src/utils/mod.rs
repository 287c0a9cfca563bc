pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{get_home_dir, get_projects_dir, projects_dir_from_home};
pub use paths::{NO_PROJECT, format_path_with_tilde, format_project_path, is_log_file};
pub use terminal::sanitize_for_terminal;
pub use timestamps::{format_datetime, format_time_ago};
