use serde::{Deserialize, Serialize};

/// Статусы записей, которые backend возвращает в поле `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Inactive,
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
    Upcoming,
}

impl RecordStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Pending => "pending",
            RecordStatus::Approved => "approved",
            RecordStatus::Rejected => "rejected",
            RecordStatus::Completed => "completed",
            RecordStatus::Cancelled => "cancelled",
            RecordStatus::Upcoming => "upcoming",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Pending => "Pending",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
            RecordStatus::Completed => "Completed",
            RecordStatus::Cancelled => "Cancelled",
            RecordStatus::Upcoming => "Upcoming",
        }
    }

    /// Вариант бейджа: "success", "warning", "error", "primary" или "neutral"
    pub fn badge_variant(&self) -> &'static str {
        match self {
            RecordStatus::Active | RecordStatus::Approved | RecordStatus::Completed => "success",
            RecordStatus::Pending => "warning",
            RecordStatus::Rejected | RecordStatus::Cancelled => "error",
            RecordStatus::Upcoming => "primary",
            RecordStatus::Inactive => "neutral",
        }
    }

    /// Разбор без учета регистра; неизвестные значения дают `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "active" => Some(RecordStatus::Active),
            "inactive" => Some(RecordStatus::Inactive),
            "pending" => Some(RecordStatus::Pending),
            "approved" => Some(RecordStatus::Approved),
            "rejected" => Some(RecordStatus::Rejected),
            "completed" | "done" => Some(RecordStatus::Completed),
            "cancelled" | "canceled" => Some(RecordStatus::Cancelled),
            "upcoming" | "scheduled" => Some(RecordStatus::Upcoming),
            _ => None,
        }
    }
}

/// Вариант бейджа для произвольной строки статуса
pub fn badge_variant_for(status: &str) -> &'static str {
    RecordStatus::from_code(status)
        .map(|s| s.badge_variant())
        .unwrap_or("neutral")
}
