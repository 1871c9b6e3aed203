pub mod describe;
pub mod init_config;
pub mod render;
pub mod run;
