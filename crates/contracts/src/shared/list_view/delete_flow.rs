//! Delete confirmation workflow
//!
//! `Idle -> Confirming(id) -> Committing(id) -> Idle`. The record leaves the
//! list only after the backend confirms the delete; on failure the list is
//! untouched. Only one delete may be in progress per flow.

use super::error::DeleteError;
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlowState {
    #[default]
    Idle,
    Confirming(String),
    Committing(String),
}

impl fmt::Display for DeleteFlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteFlowState::Idle => write!(f, "idle"),
            DeleteFlowState::Confirming(id) => write!(f, "confirming delete of {}", id),
            DeleteFlowState::Committing(id) => write!(f, "committing delete of {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteFlow {
    state: DeleteFlowState,
    /// Номер попытки удаления; растет с каждым `begin_commit`
    attempt: u64,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteFlowState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DeleteFlowState::Idle
    }

    pub fn is_committing(&self) -> bool {
        matches!(self.state, DeleteFlowState::Committing(_))
    }

    /// Id записи, удаление которой подтверждается или выполняется
    pub fn target_id(&self) -> Option<&str> {
        match &self.state {
            DeleteFlowState::Idle => None,
            DeleteFlowState::Confirming(id) | DeleteFlowState::Committing(id) => Some(id),
        }
    }

    fn invalid(&self, action: &'static str) -> DeleteError {
        log::warn!("delete flow: cannot {} while {}", action, self.state);
        DeleteError::InvalidState {
            action,
            state: self.state.clone(),
        }
    }

    /// Idle -> Confirming(id). Повторный запрос для той же записи ничего не меняет.
    pub fn request_delete(&mut self, id: impl Into<String>) -> Result<(), DeleteError> {
        let id = id.into();
        match &self.state {
            DeleteFlowState::Idle => {
                log::debug!("delete flow: confirming {}", id);
                self.state = DeleteFlowState::Confirming(id);
                Ok(())
            }
            DeleteFlowState::Confirming(current) if *current == id => Ok(()),
            _ => Err(self.invalid("request delete")),
        }
    }

    /// Confirming -> Idle. Возвращает false, если отменять нечего
    /// (Idle или запрос уже отправлен).
    pub fn cancel(&mut self) -> bool {
        match &self.state {
            DeleteFlowState::Confirming(id) => {
                log::debug!("delete flow: cancelled {}", id);
                self.state = DeleteFlowState::Idle;
                true
            }
            DeleteFlowState::Idle => false,
            DeleteFlowState::Committing(id) => {
                log::warn!("delete flow: cannot cancel, delete of {} already sent", id);
                false
            }
        }
    }

    /// Confirming(id) -> Committing(id); возвращает id для запроса на удаление
    pub fn begin_commit(&mut self) -> Result<String, DeleteError> {
        match &self.state {
            DeleteFlowState::Confirming(id) => {
                let id = id.clone();
                self.attempt += 1;
                log::debug!("delete flow: committing {} (attempt {})", id, self.attempt);
                self.state = DeleteFlowState::Committing(id.clone());
                Ok(id)
            }
            _ => Err(self.invalid("confirm")),
        }
    }

    /// Committing(id) -> Idle после успешного удаления; возвращает id удаленной записи
    pub fn complete(&mut self) -> Result<String, DeleteError> {
        match std::mem::take(&mut self.state) {
            DeleteFlowState::Committing(id) => {
                log::debug!("delete flow: {} deleted", id);
                Ok(id)
            }
            other => {
                self.state = other;
                Err(self.invalid("complete"))
            }
        }
    }

    /// Committing(id) -> Idle после ошибки. Также используется вызывающей стороной
    /// для прерывания зависшего запроса по своему таймауту.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<DeleteError, DeleteError> {
        let reason = reason.into();
        match &self.state {
            DeleteFlowState::Committing(id) => {
                log::warn!("delete flow: delete of {} failed: {}", id, reason);
                self.state = DeleteFlowState::Idle;
                Ok(DeleteError::DeleteFailed(reason))
            }
            _ => Err(self.invalid("fail")),
        }
    }

    /// Номер последней попытки, начатой `begin_commit`
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.is_committing() && self.attempt == attempt
    }

    /// `complete` только для попытки `attempt`. Ответ на давно завершенную
    /// попытку ничего не меняет и дает None.
    pub fn complete_attempt(&mut self, attempt: u64) -> Option<String> {
        if !self.is_current(attempt) {
            log::debug!("delete flow: ignoring completion of stale attempt {}", attempt);
            return None;
        }
        self.complete().ok()
    }

    /// `fail` только для попытки `attempt`; таймаут прошлой попытки
    /// не трогает повторное удаление той же записи.
    pub fn fail_attempt(&mut self, attempt: u64, reason: impl Into<String>) -> Option<DeleteError> {
        if !self.is_current(attempt) {
            log::debug!("delete flow: ignoring failure of stale attempt {}", attempt);
            return None;
        }
        self.fail(reason).ok()
    }

    /// Подтверждает удаление: вызывает `delete` ровно один раз и ждет результата.
    ///
    /// `Ok(id)` - запись удалена на сервере, вызывающий удаляет ее из списка.
    /// `Err(DeleteFailed)` - список не трогаем, причину показываем пользователю.
    /// Повторных попыток нет.
    pub async fn confirm<F, Fut, E>(&mut self, delete: F) -> Result<String, DeleteError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: fmt::Display,
    {
        let id = self.begin_commit()?;
        match delete(id).await {
            Ok(()) => self.complete(),
            Err(e) => Err(self.fail(e.to_string())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_request_then_cancel() {
        let mut flow = DeleteFlow::new();
        assert!(!flow.cancel());
        flow.request_delete("a").unwrap();
        assert_eq!(flow.state(), &DeleteFlowState::Confirming("a".into()));
        assert_eq!(flow.target_id(), Some("a"));
        assert!(flow.cancel());
        assert!(flow.is_idle());
    }

    #[test]
    fn test_second_request_rejected_while_confirming() {
        let mut flow = DeleteFlow::new();
        flow.request_delete("a").unwrap();
        let err = flow.request_delete("b").unwrap_err();
        assert!(matches!(err, DeleteError::InvalidState { .. }));
        assert_eq!(flow.state(), &DeleteFlowState::Confirming("a".into()));

        // same record again is harmless
        assert!(flow.request_delete("a").is_ok());
    }

    #[test]
    fn test_request_rejected_while_committing() {
        let mut flow = DeleteFlow::new();
        flow.request_delete("a").unwrap();
        flow.begin_commit().unwrap();
        assert!(flow.request_delete("a").is_err());
        assert!(flow.request_delete("b").is_err());
        assert!(!flow.cancel());
        assert!(flow.is_committing());
    }

    #[test]
    fn test_confirm_from_idle_is_invalid() {
        let mut flow = DeleteFlow::new();
        assert!(matches!(
            flow.begin_commit(),
            Err(DeleteError::InvalidState { action: "confirm", .. })
        ));
        assert!(flow.complete().is_err());
        assert!(flow.fail("timeout").is_err());
        assert!(flow.is_idle());
    }

    #[test]
    fn test_external_fail_returns_to_idle() {
        let mut flow = DeleteFlow::new();
        flow.request_delete("a").unwrap();
        flow.begin_commit().unwrap();
        let err = flow.fail("timed out").unwrap();
        assert_eq!(err, DeleteError::DeleteFailed("timed out".into()));
        assert!(flow.is_idle());
        assert!(flow.request_delete("b").is_ok());
    }

    #[test]
    fn test_stale_timeout_does_not_fail_retry() {
        let mut flow = DeleteFlow::new();
        flow.request_delete("x").unwrap();
        flow.begin_commit().unwrap();
        let first = flow.attempt();
        assert!(flow.fail_attempt(first, "500 Internal Server Error").is_some());

        flow.request_delete("x").unwrap();
        flow.begin_commit().unwrap();
        let second = flow.attempt();
        assert_ne!(first, second);

        // таймер первой попытки срабатывает во время второй
        assert_eq!(flow.fail_attempt(first, "Delete request timed out"), None);
        assert!(flow.is_committing());
        assert_eq!(flow.complete_attempt(first), None);
        assert!(flow.is_committing());

        assert_eq!(flow.complete_attempt(second), Some("x".to_string()));
        assert!(flow.is_idle());
        assert_eq!(flow.fail_attempt(second, "Delete request timed out"), None);
    }

    #[tokio::test]
    async fn test_confirm_success() {
        let calls = Cell::new(0);
        let mut flow = DeleteFlow::new();
        flow.request_delete("a").unwrap();
        let result = flow
            .confirm(|id| {
                calls.set(calls.get() + 1);
                async move {
                    assert_eq!(id, "a");
                    Ok::<(), String>(())
                }
            })
            .await;
        assert_eq!(result, Ok("a".to_string()));
        assert_eq!(calls.get(), 1);
        assert!(flow.is_idle());
    }

    #[tokio::test]
    async fn test_confirm_failure_surfaces_reason() {
        let mut flow = DeleteFlow::new();
        flow.request_delete("a").unwrap();
        let result = flow
            .confirm(|_| async { Err::<(), _>("500 Internal Server Error") })
            .await;
        assert_eq!(
            result,
            Err(DeleteError::DeleteFailed("500 Internal Server Error".into()))
        );
        assert!(flow.is_idle());
    }

    #[tokio::test]
    async fn test_confirm_without_request_never_calls_delete() {
        let calls = Cell::new(0);
        let mut flow = DeleteFlow::new();
        let result = flow
            .confirm(|_| {
                calls.set(calls.get() + 1);
                async { Ok::<(), String>(()) }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }
}
