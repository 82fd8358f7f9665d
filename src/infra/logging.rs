//! Инициализация логгера для бинарников. Библиотека пишет только через `log`.

use env_logger::Env;

/// Поднять `env_logger`. Уровень берётся из `RUST_LOG`, по умолчанию `info`.
///
/// Повторный вызов безопасен (ошибку `try_init` игнорируем).
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
