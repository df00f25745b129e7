mod clean;
mod contact;
mod job;

pub use clean::{build_clean_config, clean_actions};
pub use contact::build_contact_config;
pub use job::{JobFile, load_job};
