//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Locale Switch,
//! currently the logging setup used by the command-line binary.
//!
//! 此模块为 Locale Switch 提供基础设施服务，
//! 目前是命令行程序使用的日志初始化。

pub mod logging;

pub use logging::LoggerBuilder;
