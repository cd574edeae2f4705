#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnionFindError {
    #[error("number of sites must be non-negative, got {sites}")]
    InvalidArgument { sites: i64 },
    #[error("index {index} is not in 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, UnionFindError>;
