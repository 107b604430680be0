//! Payment plans and history.

/// Total due for the application, in cents.
pub const TOTAL_DUE_CENTS: u64 = 120_000;

/// How the applicant chooses to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentPlan {
    #[default]
    Card,
    Afterpay,
    EduPay,
}

impl PaymentPlan {
    pub const ALL: [PaymentPlan; 3] = [PaymentPlan::Card, PaymentPlan::Afterpay, PaymentPlan::EduPay];

    pub fn label(self) -> &'static str {
        match self {
            PaymentPlan::Card => "Pay in Full (Card)",
            PaymentPlan::Afterpay => "Buy Now, Pay Later (Afterpay)",
            PaymentPlan::EduPay => "EduPay",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaymentPlan::Card => "Pay the full amount now",
            PaymentPlan::Afterpay => "Split into 4 payments",
            PaymentPlan::EduPay => "Educational payment plan",
        }
    }

    /// Number of instalments the total is split into.
    pub fn instalments(self) -> u64 {
        match self {
            PaymentPlan::Afterpay => 4,
            _ => 1,
        }
    }

    /// Amount of each instalment, in cents.
    pub fn instalment_cents(self) -> u64 {
        TOTAL_DUE_CENTS / self.instalments()
    }
}

/// A past payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub label: String,
    pub status: &'static str,
    pub amount_cents: u64,
}

/// Static payment history.
pub fn history() -> Vec<PaymentRecord> {
    vec![PaymentRecord {
        label: "Payment 1".to_string(),
        status: "Completed",
        amount_cents: TOTAL_DUE_CENTS,
    }]
}

/// Format cents as "$1,200.00".
pub fn format_amount(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}
