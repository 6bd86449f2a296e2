use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::SalaryStatus;
use crate::shared::money::round_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    Teacher,
    Staff,
}

impl EmployeeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Teacher => "Teacher",
            EmployeeKind::Staff => "Staff",
        }
    }
}

/// Monthly salary sheet entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub employee_kind: EmployeeKind,
    /// "YYYY-MM"
    pub month: String,
    pub base_amount: f64,
    #[serde(default)]
    pub allowances: f64,
    #[serde(default)]
    pub deductions: f64,
    pub status: SalaryStatus,
    #[serde(default)]
    pub paid_on: Option<NaiveDate>,
}

impl Salary {
    pub fn gross_amount(&self) -> f64 {
        round_money(self.base_amount + self.allowances)
    }

    pub fn net_amount(&self) -> f64 {
        round_money((self.gross_amount() - self.deductions).max(0.0))
    }

    pub fn can_pay(&self) -> bool {
        self.status == SalaryStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_amount() {
        let s = Salary {
            id: "p1".into(),
            employee_id: "t1".into(),
            employee_name: "Sara Ali".into(),
            employee_kind: EmployeeKind::Teacher,
            month: "2024-09".into(),
            base_amount: 1500.0,
            allowances: 200.5,
            deductions: 100.25,
            status: SalaryStatus::Pending,
            paid_on: None,
        };
        assert_eq!(s.gross_amount(), 1700.5);
        assert_eq!(s.net_amount(), 1600.25);
        assert!(s.can_pay());
    }
}
