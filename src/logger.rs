use crate::vars::KIBCHECK_LOG;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Records from the `log` facade are bridged
/// in as well. Stdout is never written to.
pub fn init() {
    let filter = EnvFilter::try_new(*KIBCHECK_LOG).unwrap_or_else(|_| EnvFilter::new("off"));
    // 已经初始化过（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
