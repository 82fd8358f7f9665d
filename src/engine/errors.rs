use crate::domain::SegmentIndex;

use thiserror::Error;

/// Ошибка колбэка хоста (рендер, звук). Движок её не чинит, только пробрасывает.
#[derive(Debug, Error)]
#[error("Колбэк хоста упал: {message}")]
pub struct HostError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Ошибки движка колеса и шаффлера.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfiguration(String),

    #[error("Сегмент {segment} вне колеса из {segment_count} сегментов")]
    SegmentOutOfRange {
        segment: SegmentIndex,
        segment_count: usize,
    },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
