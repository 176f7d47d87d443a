mod check;
mod config;
mod env;
mod init;
mod javadoc;
mod pom;

pub use check::CheckArgs;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use env::EnvArgs;
pub use env::handle_env;
pub use init::InitArgs;
pub use init::handle_init;
pub use javadoc::JavadocArgs;
pub use javadoc::handle_javadoc;
pub use pom::PomArgs;
pub use pom::handle_pom;
