mod list;
mod migrate;
mod serve;

pub use list::cmd_list_movies;
pub use migrate::{cmd_migrate, cmd_reset, cmd_seed};
pub use serve::cmd_serve;
