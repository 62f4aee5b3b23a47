use serde::{Deserialize, Serialize};

/// Raw quote request as submitted by the pricing form.
///
/// Every field arrives as a string. The accessors apply the lenient
/// parsing rule used across the quote flow: a value that does not parse
/// as a number becomes zero, so pricing always produces a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteForm {
    /// Guarantee duration in months ("12", "24" or "36")
    pub duracion: String,
    /// Monthly rent in whole currency units
    pub valor_mes: String,
    /// Monthly building fees
    pub expensas: String,
    /// Optional coupon code (case-sensitive, empty when none was entered)
    pub cupon: String,
}

impl QuoteForm {
    /// Requested duration in months, zero when unparseable.
    pub fn duration_months(&self) -> u32 {
        self.duracion.parse().unwrap_or(0)
    }

    /// Monthly rent, zero when unparseable.
    pub fn monthly_rent(&self) -> f64 {
        self.valor_mes.parse().unwrap_or(0.0)
    }

    /// Monthly building fees, zero when unparseable.
    pub fn monthly_fees(&self) -> f64 {
        self.expensas.parse().unwrap_or(0.0)
    }

    /// Coupon code exactly as entered.
    pub fn coupon(&self) -> &str {
        &self.cupon
    }
}

/// Raw contact-and-quote form submitted on the email step.
///
/// The quote cost and the selected plan ride along as opaque values that
/// the page round-trips, since no server-side session exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailForm {
    /// Prospect email address (the notification recipient)
    pub email: String,
    /// Quoted total, carried forward from the pricing step
    pub cost: String,
    /// Selected plan name, carried forward from the plan step
    pub plan: String,
    /// Prospect first name
    pub name: String,
    /// Prospect surname
    pub surname: String,
    /// Prospect phone number
    pub phone: String,
}

impl EmailForm {
    /// Recipient address, trimmed.
    pub fn email(&self) -> &str {
        self.email.trim()
    }

    /// Quoted cost, zero when unparseable.
    pub fn cost(&self) -> i64 {
        self.cost.trim().parse().unwrap_or(0)
    }

    /// Selected plan name, trimmed.
    pub fn plan(&self) -> &str {
        self.plan.trim()
    }

    /// Prospect first name, trimmed.
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Prospect surname, trimmed.
    pub fn surname(&self) -> &str {
        self.surname.trim()
    }

    /// Prospect phone number, trimmed.
    pub fn phone(&self) -> &str {
        self.phone.trim()
    }

    /// True when every field is blank. Retrying front-ends submit the
    /// form twice; the second submission arrives empty and must be
    /// treated as a no-op rather than an error.
    pub fn is_empty(&self) -> bool {
        self.email().is_empty()
            && self.cost.trim().is_empty()
            && self.plan().is_empty()
            && self.name().is_empty()
            && self.surname().is_empty()
            && self.phone().is_empty()
    }
}

/// Opaque "plan|amount" value round-tripped between the plan page and the
/// email page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSelection {
    /// Display name of the selected plan
    pub plan: String,
    /// Installment or lump amount shown for the plan
    pub amount: i64,
}

impl PlanSelection {
    /// Parse a round-tripped "plan|amount" value. A value without the
    /// separator keeps the whole string as the plan name with amount zero,
    /// and an unparseable amount becomes zero.
    pub fn parse(value: &str) -> Self {
        match value.split_once('|') {
            Some((plan, amount)) => Self {
                plan: plan.to_string(),
                amount: amount.trim().parse().unwrap_or(0),
            },
            None => Self {
                plan: value.to_string(),
                amount: 0,
            },
        }
    }

    /// Encode back into the "plan|amount" wire value.
    pub fn to_value(&self) -> String {
        format!("{}|{}", self.plan, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_form_parses_numbers() {
        let form = QuoteForm {
            duracion: "24".to_string(),
            valor_mes: "1500.50".to_string(),
            expensas: "200".to_string(),
            cupon: "RAICES10PLUS".to_string(),
        };
        assert_eq!(form.duration_months(), 24);
        assert_eq!(form.monthly_rent(), 1500.50);
        assert_eq!(form.monthly_fees(), 200.0);
        assert_eq!(form.coupon(), "RAICES10PLUS");
    }

    #[test]
    fn test_quote_form_unparseable_defaults_to_zero() {
        let form = QuoteForm {
            duracion: "twelve".to_string(),
            valor_mes: "1,000".to_string(),
            expensas: "".to_string(),
            cupon: String::new(),
        };
        assert_eq!(form.duration_months(), 0);
        assert_eq!(form.monthly_rent(), 0.0);
        assert_eq!(form.monthly_fees(), 0.0);
    }

    #[test]
    fn test_email_form_trims_fields() {
        let form = EmailForm {
            email: "  cliente@example.com ".to_string(),
            cost: " 864 ".to_string(),
            plan: " 3 cuotas ".to_string(),
            name: " Ana ".to_string(),
            surname: " García ".to_string(),
            phone: " 1155550000 ".to_string(),
        };
        assert_eq!(form.email(), "cliente@example.com");
        assert_eq!(form.cost(), 864);
        assert_eq!(form.plan(), "3 cuotas");
        assert_eq!(form.name(), "Ana");
        assert_eq!(form.surname(), "García");
        assert_eq!(form.phone(), "1155550000");
    }

    #[test]
    fn test_email_form_unparseable_cost_is_zero() {
        let form = EmailForm {
            cost: "864 pesos".to_string(),
            ..EmailForm::default()
        };
        assert_eq!(form.cost(), 0);
    }

    #[test]
    fn test_email_form_empty_detection() {
        assert!(EmailForm::default().is_empty());

        let whitespace_only = EmailForm {
            email: "   ".to_string(),
            phone: "\t".to_string(),
            ..EmailForm::default()
        };
        assert!(whitespace_only.is_empty());

        let with_phone = EmailForm {
            phone: "1155550000".to_string(),
            ..EmailForm::default()
        };
        assert!(!with_phone.is_empty());
    }

    #[test]
    fn test_plan_selection_round_trip() {
        let selection = PlanSelection::parse("3 cuotas|288");
        assert_eq!(selection.plan, "3 cuotas");
        assert_eq!(selection.amount, 288);
        assert_eq!(selection.to_value(), "3 cuotas|288");
    }

    #[test]
    fn test_plan_selection_without_separator() {
        let selection = PlanSelection::parse("Pago único");
        assert_eq!(selection.plan, "Pago único");
        assert_eq!(selection.amount, 0);
    }

    #[test]
    fn test_plan_selection_bad_amount() {
        let selection = PlanSelection::parse("Transferencia|abc");
        assert_eq!(selection.plan, "Transferencia");
        assert_eq!(selection.amount, 0);
    }

    #[test]
    fn test_forms_serialize_round_trip() {
        let form = QuoteForm {
            duracion: "36".to_string(),
            valor_mes: "1500".to_string(),
            expensas: "250".to_string(),
            cupon: "MIHOGAR30".to_string(),
        };
        let json = serde_json::to_string(&form).unwrap();
        let back: QuoteForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);

        let selection = PlanSelection {
            plan: "6 cuotas".to_string(),
            amount: 144,
        };
        let json = serde_json::to_string(&selection).unwrap();
        let back: PlanSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }
}
