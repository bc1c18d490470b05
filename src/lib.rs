//! Adoul CMS - 生地・施工実績カタログ管理ツール
//!
//! ブラウザ版と同じ形式のストレージ（キー → JSON文字列）をファイルで扱う。

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod file_store;
pub mod image_file;
pub mod logging;
pub mod printer;
