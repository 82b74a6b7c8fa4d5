use crate::status::Verdict;
use std::{io::Read, process::ExitCode};
use tracing::debug;

mod errors;
mod logger;
mod status;
mod vars;

// 读取通过管道传入的 /api/status 响应（例如 `curl -s https://localhost:5601/api/status | kibcheck`），
// 仅通过退出码报告结果
fn main() -> ExitCode {
    // Initialize the logger
    logger::init();

    let verdict = match read_stdin() {
        Ok(input) => status::check(&input),
        Err(e) => Verdict::from(&e),
    };
    debug!(
        code = verdict.code(),
        verdict = %verdict,
        "{}",
        verdict.meaning()
    );

    verdict.into()
}

fn read_stdin() -> errors::Result<Vec<u8>> {
    let mut input = Vec::new();
    std::io::stdin().lock().read_to_end(&mut input)?;

    Ok(input)
}
