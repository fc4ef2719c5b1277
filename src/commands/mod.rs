pub mod check;
pub mod show;
pub mod resolve;
pub mod add;
pub mod config;

pub use check::handle_check;
pub use show::handle_show;
pub use resolve::handle_resolve;
pub use add::handle_add;
pub use config::handle_config;
