use contracts::domain::a007_fee::aggregate::{Fee, PayFeeDto};
use leptos::prelude::*;

use crate::domain::a007_fee::api::pay_fee;
use crate::shared::form::{parse_amount, submit_form, FormActions, FormError, FormField};
use crate::shared::format::format_money;
use crate::shared::notify::use_notify;

/// A payment must be positive and cannot exceed what is still due
pub fn validate_payment(fee: &Fee, amount: f64) -> Result<f64, String> {
    let due = fee.due_amount();
    if amount <= 0.0 {
        return Err("Payment must be greater than zero".to_string());
    }
    if amount > due {
        return Err(format!("Only {} is due", format_money(due)));
    }
    Ok(amount)
}

#[component]
pub fn PayFeeForm(fee: Fee, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notify = use_notify();
    let amount = RwSignal::new(format!("{:.2}", fee.due_amount()));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let summary = format!(
        "{} for {}: net {}, paid {}, due {}",
        fee.bill_type.label(),
        fee.student.label(),
        format_money(fee.net_amount()),
        format_money(fee.paid_amount),
        format_money(fee.due_amount()),
    );
    let fee = StoredValue::new(fee);

    let on_save = Callback::new(move |_| {
        let checked = parse_amount(&amount.get_untracked(), "Payment")
            .and_then(|value| fee.with_value(|f| validate_payment(f, value)));
        match checked {
            Ok(value) => {
                let dto = PayFeeDto {
                    fee_id: fee.with_value(|f| f.id.clone()),
                    amount: value,
                };
                submit_form(saving, error, notify, "Payment recorded", pay_fee(dto), on_saved);
            }
            Err(msg) => error.set(Some(msg)),
        }
    });

    view! {
        <div class="form">
            <p class="form__summary">{summary}</p>
            <FormError error=error />
            <FormField label="Amount">
                <input
                    type="text"
                    inputmode="decimal"
                    class="form-input"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </FormField>
            <FormActions saving=saving on_save=on_save on_cancel=on_cancel />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{BillType, FeeStatus};
    use contracts::shared::Ref;

    fn fee() -> Fee {
        Fee {
            id: "f1".into(),
            student: Ref::Unresolved("s1".into()),
            bill_type: BillType::Exam,
            amount: 250.0,
            discount: None,
            paid_amount: 50.0,
            due_date: None,
            status: FeeStatus::PartiallyPaid,
            description: None,
        }
    }

    #[test]
    fn test_payment_bounds() {
        assert_eq!(validate_payment(&fee(), 200.0), Ok(200.0));
        assert!(validate_payment(&fee(), 0.0).is_err());
        assert_eq!(validate_payment(&fee(), 200.01), Err("Only 200.00 is due".to_string()));
    }
}
