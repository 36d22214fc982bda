use logship_core::{Context, OsEnv};
use logship_http_send_reqwest::ReqwestHttpSend;

/// Create a context with a default reqwest client and the OS environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
