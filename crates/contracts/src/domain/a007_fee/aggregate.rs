use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_student::aggregate::Student;
use crate::enums::{BillType, FeeStatus};
use crate::shared::money::round_money;
use crate::shared::Ref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    pub value: f64,
}

impl Discount {
    /// Amount taken off `gross`; never negative and never more than `gross`
    pub fn amount_off(&self, gross: f64) -> f64 {
        if gross <= 0.0 || self.value <= 0.0 {
            return 0.0;
        }
        let off = match self.kind {
            DiscountKind::Percent => gross * self.value.min(100.0) / 100.0,
            DiscountKind::Fixed => self.value.min(gross),
        };
        round_money(off)
    }

    pub fn describe(&self) -> String {
        match self.kind {
            DiscountKind::Percent => format!("{}%", self.value),
            DiscountKind::Fixed => format!("{:.2}", self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: String,
    pub student: Ref<Student>,
    pub bill_type: BillType,
    pub amount: f64,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: FeeStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl Fee {
    pub fn discount_amount(&self) -> f64 {
        self.discount
            .map(|d| d.amount_off(self.amount))
            .unwrap_or(0.0)
    }

    pub fn net_amount(&self) -> f64 {
        round_money((self.amount - self.discount_amount()).max(0.0))
    }

    /// Ещё не оплачено; отменённое начисление ничего не должно
    pub fn due_amount(&self) -> f64 {
        if self.status == FeeStatus::Cancelled {
            return 0.0;
        }
        round_money((self.net_amount() - self.paid_amount).max(0.0))
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_amount() > 0.0 && self.due_date.is_some_and(|d| d < today)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeTotals {
    pub gross: f64,
    pub discount: f64,
    pub net: f64,
    pub paid: f64,
    pub due: f64,
}

impl FeeTotals {
    /// Totals over non-cancelled fees
    pub fn from_fees<'a>(fees: impl IntoIterator<Item = &'a Fee>) -> Self {
        let mut totals = Self::default();
        for fee in fees.into_iter().filter(|f| f.status != FeeStatus::Cancelled) {
            totals.gross += fee.amount;
            totals.discount += fee.discount_amount();
            totals.net += fee.net_amount();
            totals.paid += fee.paid_amount;
            totals.due += fee.due_amount();
        }
        Self {
            gross: round_money(totals.gross),
            discount: round_money(totals.discount),
            net: round_money(totals.net),
            paid: round_money(totals.paid),
            due: round_money(totals.due),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayFeeDto {
    pub fee_id: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(amount: f64, discount: Option<Discount>, paid: f64, status: FeeStatus) -> Fee {
        Fee {
            id: "f1".into(),
            student: Ref::Unresolved("s1".into()),
            bill_type: BillType::Tuition,
            amount,
            discount,
            paid_amount: paid,
            due_date: NaiveDate::from_ymd_opt(2024, 10, 1),
            status,
            description: None,
        }
    }

    #[test]
    fn test_percent_discount() {
        let d = Discount { kind: DiscountKind::Percent, value: 15.0 };
        assert_eq!(d.amount_off(200.0), 30.0);
        let over = Discount { kind: DiscountKind::Percent, value: 150.0 };
        assert_eq!(over.amount_off(80.0), 80.0);
    }

    #[test]
    fn test_fixed_discount_capped_by_gross() {
        let d = Discount { kind: DiscountKind::Fixed, value: 500.0 };
        assert_eq!(d.amount_off(120.0), 120.0);
        assert_eq!(d.amount_off(0.0), 0.0);
    }

    #[test]
    fn test_net_and_due() {
        let f = fee(
            1000.0,
            Some(Discount { kind: DiscountKind::Percent, value: 10.0 }),
            400.0,
            FeeStatus::PartiallyPaid,
        );
        assert_eq!(f.discount_amount(), 100.0);
        assert_eq!(f.net_amount(), 900.0);
        assert_eq!(f.due_amount(), 500.0);
    }

    #[test]
    fn test_overpaid_fee_has_nothing_due() {
        let f = fee(100.0, None, 150.0, FeeStatus::Paid);
        assert_eq!(f.due_amount(), 0.0);
    }

    #[test]
    fn test_overdue() {
        let f = fee(100.0, None, 0.0, FeeStatus::Approved);
        let after = NaiveDate::from_ymd_opt(2024, 10, 2).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert!(f.is_overdue(after));
        assert!(!f.is_overdue(before));
    }

    #[test]
    fn test_totals_skip_cancelled() {
        let fees = vec![
            fee(100.0, None, 100.0, FeeStatus::Paid),
            fee(200.0, Some(Discount { kind: DiscountKind::Fixed, value: 50.0 }), 0.0, FeeStatus::Approved),
            fee(999.0, None, 0.0, FeeStatus::Cancelled),
        ];
        let totals = FeeTotals::from_fees(&fees);
        assert_eq!(totals.gross, 300.0);
        assert_eq!(totals.discount, 50.0);
        assert_eq!(totals.net, 250.0);
        assert_eq!(totals.paid, 100.0);
        assert_eq!(totals.due, 150.0);
    }
}
