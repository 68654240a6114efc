pub mod command;
pub mod init;
pub mod run;

pub use command::command_command;
pub use init::init_command;
pub use run::run_command;
