use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Pending,
    Approved,
    PartiallyPaid,
    Paid,
    Cancelled,
}

impl FeeStatus {
    pub fn key(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "pending",
            FeeStatus::Approved => "approved",
            FeeStatus::PartiallyPaid => "partially_paid",
            FeeStatus::Paid => "paid",
            FeeStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeeStatus::Pending => "Pending",
            FeeStatus::Approved => "Approved",
            FeeStatus::PartiallyPaid => "Partially paid",
            FeeStatus::Paid => "Paid",
            FeeStatus::Cancelled => "Cancelled",
        }
    }

    /// Only pending fees wait for approval.
    pub fn can_approve(&self) -> bool {
        matches!(self, FeeStatus::Pending)
    }

    pub fn can_pay(&self) -> bool {
        matches!(self, FeeStatus::Approved | FeeStatus::PartiallyPaid)
    }

    pub fn can_cancel(&self) -> bool {
        !matches!(self, FeeStatus::Paid | FeeStatus::Cancelled)
    }
}
