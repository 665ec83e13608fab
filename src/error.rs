use thiserror::Error;

/// 電卓クライアントのエラー。表示文字列はそのまま `ERROR: ...!!!` に埋め込まれる。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Server connection error")]
    Connection,

    #[error("Invalid result ID format")]
    InvalidResultIdFormat,

    #[error("Unknown result ID")]
    UnknownResultId,

    #[error("Unknown operator")]
    UnknownOperator,

    #[error("Invalid number format error")]
    InvalidNumberFormat,

    #[error("Zero division error")]
    ZeroDivision,
}

impl From<reqwest::Error> for CalcError {
    fn from(_: reqwest::Error) -> Self {
        CalcError::Connection
    }
}
