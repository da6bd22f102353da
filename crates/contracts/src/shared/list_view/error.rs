use super::delete_flow::DeleteFlowState;
use thiserror::Error;

/// Ошибки сценария удаления записи
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    /// Переход недопустим в текущем состоянии (например, второе удаление
    /// пока первое еще не завершено)
    #[error("cannot {action} while delete flow is {state}")]
    InvalidState {
        action: &'static str,
        state: DeleteFlowState,
    },

    /// Backend отклонил удаление; список не изменялся
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}

/// Ошибки загрузки настроек списочных форм
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse list config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("list config '{screen}': page sizes must be greater than zero")]
    ZeroPageSize { screen: String },
}
