pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 无法读取标准输入
    #[error("failed to read standard input: {0}")]
    Io(#[from] std::io::Error),
    // 输入不是合法的 JSON（包括空输入和非 UTF-8 内容）
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
