use serde::{Deserialize, Serialize};

use crate::controller::{ControllerError, Screen};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / оператору).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Команда не подходит к текущему экрану.
    WrongScreen { expected: Screen, actual: Screen },

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка.
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidConfiguration(_) | EngineError::SegmentOutOfRange { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<ControllerError> for ApiError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::WrongScreen { expected, actual } => {
                ApiError::WrongScreen { expected, actual }
            }
            ControllerError::ShuffleNotStopped | ControllerError::SpinInProgress => {
                ApiError::InvalidCommand(err.to_string())
            }
            ControllerError::Engine(e) => e.into(),
        }
    }
}
