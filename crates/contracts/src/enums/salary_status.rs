use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryStatus {
    Pending,
    Paid,
    Cancelled,
}

impl SalaryStatus {
    pub fn key(&self) -> &'static str {
        match self {
            SalaryStatus::Pending => "pending",
            SalaryStatus::Paid => "paid",
            SalaryStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalaryStatus::Pending => "Pending",
            SalaryStatus::Paid => "Paid",
            SalaryStatus::Cancelled => "Cancelled",
        }
    }
}
