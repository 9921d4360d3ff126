//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的顶点: {vertex} (顶点数 {order})")]
    InvalidVertex { vertex: usize, order: usize },

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
