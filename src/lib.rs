pub mod cli;
pub mod commit;
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod prompt;
pub mod utils;
