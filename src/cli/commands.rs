//! # Commands / 命令
//!
//! - `run` - Run one or more targets non-interactively
//! - `session` - Interactive session with run history
//! - `init` - Write a default configuration file
//!
//! - `run` - 非交互地运行一个或多个目标
//! - `session` - 带运行历史的交互式会话
//! - `init` - 写出默认配置文件

pub mod init;
pub mod run;
pub mod session;
