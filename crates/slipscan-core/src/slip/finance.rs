//! Financial line tracking and reconciliation.

use rust_decimal::Decimal;

use crate::models::draft::{OrderDraft, PaymentStatus};

use super::rules::money::parse_price;

/// Running financial state gathered while scanning slip lines.
///
/// Lines are observed in slip order; [`FinanceLedger::settle`] resolves
/// the collected figures into the draft once the whole slip is read.
#[derive(Debug, Default)]
pub struct FinanceLedger {
    total: Option<Decimal>,
    amount_paid: Option<Decimal>,
    balance: Option<Decimal>,
    delivery_fee: Option<Decimal>,
}

impl FinanceLedger {
    /// Record any financial figures found on one line.
    pub fn observe(&mut self, line: &str, lower: &str) {
        if lower.starts_with("total") {
            let total = parse_price(line);
            self.total = Some(total);

            if lower.contains("unpaid") {
                self.amount_paid = Some(Decimal::ZERO);
            } else if lower.contains("paid") {
                self.amount_paid = Some(total);
            }
        } else if lower.starts_with("balance") {
            self.balance = Some(parse_price(line));
        } else if lower.starts_with("downpayment")
            || lower.starts_with("dp")
            || lower.starts_with("paid")
            || lower.starts_with("payment")
        {
            if !lower.contains(|c: char| c.is_ascii_digit()) {
                // A figure-less "paid in full" only helps once the total
                // is known
                if lower.contains("full") || lower.contains("paid") {
                    if let Some(total) = self.total {
                        self.amount_paid = Some(total);
                    }
                }
            } else {
                self.amount_paid = Some(parse_price(line));
            }
        }

        if lower.contains("delivery fee") {
            self.delivery_fee = Some(parse_price(line));
        }
    }

    /// Resolve the collected figures into the draft.
    ///
    /// With a known total the balance is recomputed as total minus paid,
    /// clamped at zero, and the payment status follows from the remaining
    /// due. Without one, only an explicit balance line carries over.
    pub fn settle(self, draft: &mut OrderDraft) {
        draft.delivery_fee = self.delivery_fee;
        draft.amount_paid = self.amount_paid;

        let Some(total) = self.total else {
            draft.balance = self.balance;
            return;
        };

        draft.total = Some(total);

        let paid = self.amount_paid.unwrap_or(Decimal::ZERO);
        let due = total - paid;
        draft.balance = Some(due.max(Decimal::ZERO));

        draft.status = Some(if due <= Decimal::ZERO {
            PaymentStatus::Paid
        } else if paid > Decimal::ZERO {
            PaymentStatus::Downpayment
        } else {
            PaymentStatus::Unpaid
        });
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn settle_lines(lines: &[&str]) -> OrderDraft {
        let mut ledger = FinanceLedger::default();
        for line in lines {
            ledger.observe(line, &line.to_lowercase());
        }
        let mut draft = OrderDraft::default();
        ledger.settle(&mut draft);
        draft
    }

    #[test]
    fn test_total_paid_inline() {
        let draft = settle_lines(&["TOTAL: 3,200 PAID"]);
        assert_eq!(draft.total, Some(Decimal::from(3200)));
        assert_eq!(draft.amount_paid, Some(Decimal::from(3200)));
        assert_eq!(draft.balance, Some(Decimal::ZERO));
        assert_eq!(draft.status, Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_total_unpaid_inline() {
        let draft = settle_lines(&["TOTAL: 3,200 UNPAID"]);
        assert_eq!(draft.amount_paid, Some(Decimal::ZERO));
        assert_eq!(draft.balance, Some(Decimal::from(3200)));
        assert_eq!(draft.status, Some(PaymentStatus::Unpaid));
    }

    #[test]
    fn test_downpayment_leaves_balance_due() {
        let draft = settle_lines(&["TOTAL: 3,200", "DOWNPAYMENT: 1,000 gcash"]);
        assert_eq!(draft.total, Some(Decimal::from(3200)));
        assert_eq!(draft.amount_paid, Some(Decimal::from(1000)));
        assert_eq!(draft.balance, Some(Decimal::from(2200)));
        assert_eq!(draft.status, Some(PaymentStatus::Downpayment));
    }

    #[test]
    fn test_total_alone_is_fully_due() {
        let draft = settle_lines(&["TOTAL: 3,200"]);
        assert_eq!(draft.amount_paid, None);
        assert_eq!(draft.balance, Some(Decimal::from(3200)));
        assert_eq!(draft.status, Some(PaymentStatus::Unpaid));
    }

    #[test]
    fn test_balance_line_without_total() {
        let draft = settle_lines(&["Balance: 500"]);
        assert_eq!(draft.total, None);
        assert_eq!(draft.balance, Some(Decimal::from(500)));
        assert_eq!(draft.status, None);
    }

    #[test]
    fn test_overpayment_clamps_balance_to_zero() {
        let draft = settle_lines(&["TOTAL: 1,000", "PAYMENT: 1,500"]);
        assert_eq!(draft.balance, Some(Decimal::ZERO));
        assert_eq!(draft.status, Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_full_payment_note_needs_known_total() {
        let draft = settle_lines(&["Paid in full", "TOTAL: 2,000"]);
        assert_eq!(draft.amount_paid, None);
        assert_eq!(draft.status, Some(PaymentStatus::Unpaid));

        let draft = settle_lines(&["TOTAL: 2,000", "Paid in full"]);
        assert_eq!(draft.amount_paid, Some(Decimal::from(2000)));
        assert_eq!(draft.status, Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_delivery_fee_is_independent() {
        let draft = settle_lines(&["Delivery fee: 150"]);
        assert_eq!(draft.delivery_fee, Some(Decimal::from(150)));
        assert_eq!(draft.total, None);
    }

    #[test]
    fn test_explicit_balance_is_recomputed_when_total_known() {
        let draft = settle_lines(&["TOTAL: 3,000", "DOWNPAYMENT: 1,000", "Balance: 999"]);
        assert_eq!(draft.balance, Some(Decimal::from(2000)));
    }
}
