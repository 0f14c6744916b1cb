//! Late-fee quoting, settlement, and refund service

use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::{
        fee::{self, FeeStatus, LateFeeQuote, MAX_LATE_FEE},
        patron::is_valid_patron_id,
    },
    payment::{PaymentGateway, PaymentOutcome, RefundOutcome},
    repository::LibraryStore,
};

/// Accepted gateway transaction identifier shape, e.g. `txn_8f3a21`
static TRANSACTION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^txn_[A-Za-z0-9]+$").unwrap());

#[derive(Clone)]
pub struct FeesService {
    store: Arc<dyn LibraryStore>,
}

impl FeesService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Quote the late fee owed by a patron on a book, as of now.
    ///
    /// Every policy outcome is a quote, never an error: invalid inputs and
    /// missing data come back as zero-fee quotes with the matching status.
    /// Only a store fault surfaces as `Err`. No side effects.
    pub async fn quote_late_fee(&self, patron_id: &str, book_id: i64) -> AppResult<LateFeeQuote> {
        if !is_valid_patron_id(patron_id) {
            return Ok(LateFeeQuote::empty(FeeStatus::InvalidPatronId));
        }

        if book_id <= 0 {
            return Ok(LateFeeQuote::empty(FeeStatus::InvalidBookId));
        }

        if self.store.get_book_by_id(book_id).await?.is_none() {
            return Ok(LateFeeQuote::empty(FeeStatus::BookNotFound));
        }

        let borrowed = self.store.list_open_borrows(patron_id).await?;
        let record = match borrowed.into_iter().find(|r| r.book_id == book_id) {
            Some(r) => r,
            None => return Ok(LateFeeQuote::empty(FeeStatus::NotBorrowed)),
        };

        // Past due means overdue, even before a whole chargeable day has
        // elapsed; the fee stays 0.00 until then.
        let now = Utc::now();
        if now > record.due_date {
            let assessment = fee::assess(record.due_date, now);
            Ok(LateFeeQuote {
                fee_amount: assessment.amount,
                days_overdue: assessment.days_overdue,
                status: FeeStatus::Overdue,
            })
        } else {
            Ok(LateFeeQuote::empty(FeeStatus::NotOverdue))
        }
    }

    /// Settle a patron's late fee for one book through a payment gateway.
    ///
    /// The gateway is only invoked with a positive, freshly quoted amount;
    /// unquotable or zero-fee cases fail fast. Gateway faults are caught and
    /// normalized, so the outcome always reaches the caller.
    pub async fn settle_late_fees(
        &self,
        patron_id: &str,
        book_id: i64,
        gateway: &dyn PaymentGateway,
    ) -> AppResult<PaymentOutcome> {
        if !is_valid_patron_id(patron_id) {
            return Ok(PaymentOutcome {
                success: false,
                message: "Invalid patron ID. Must be exactly 6 digits".to_string(),
                transaction_id: None,
            });
        }

        let quote = self.quote_late_fee(patron_id, book_id).await?;
        match quote.status {
            FeeStatus::Overdue | FeeStatus::NotOverdue => {}
            terminal => {
                return Ok(PaymentOutcome {
                    success: false,
                    message: format!("Unable to calculate late fees: {}", terminal),
                    transaction_id: None,
                });
            }
        }

        if quote.fee_amount.is_zero() {
            return Ok(PaymentOutcome {
                success: false,
                message: "No late fees due for this patron and book".to_string(),
                transaction_id: None,
            });
        }

        // The quote already proved the book exists
        let title = self
            .store
            .get_book_by_id(book_id)
            .await?
            .map(|b| b.title)
            .unwrap_or_default();
        let description = format!("Late fees for '{}'", title);

        match gateway
            .process_payment(patron_id, quote.fee_amount, &description)
            .await
        {
            Ok(receipt) if receipt.approved => {
                tracing::info!(
                    "Late fee of ${} settled for patron {} (book_id={})",
                    quote.fee_amount,
                    patron_id,
                    book_id
                );
                Ok(PaymentOutcome {
                    success: true,
                    message: format!(
                        "Payment successful. ${} charged for late fees",
                        quote.fee_amount
                    ),
                    transaction_id: receipt.transaction_id,
                })
            }
            Ok(receipt) => Ok(PaymentOutcome {
                success: false,
                message: format!("Payment failed: {}", receipt.message),
                transaction_id: None,
            }),
            Err(e) => {
                tracing::warn!("Payment gateway fault for patron {}: {}", patron_id, e);
                Ok(PaymentOutcome {
                    success: false,
                    message: format!("Payment processing error: {}", e),
                    transaction_id: None,
                })
            }
        }
    }

    /// Refund a previously settled late-fee payment.
    ///
    /// Each validation failure short-circuits with its own message and the
    /// gateway is never contacted for an invalid request.
    pub async fn refund_late_fee_payment(
        &self,
        transaction_id: &str,
        amount: Decimal,
        gateway: &dyn PaymentGateway,
    ) -> RefundOutcome {
        if !TRANSACTION_ID_RE.is_match(transaction_id) {
            return RefundOutcome {
                success: false,
                message: "Invalid transaction ID format".to_string(),
            };
        }

        if amount <= Decimal::ZERO {
            return RefundOutcome {
                success: false,
                message: "Refund amount must be greater than 0".to_string(),
            };
        }

        if amount > MAX_LATE_FEE {
            return RefundOutcome {
                success: false,
                message: format!("Refund amount exceeds maximum late fee (${})", MAX_LATE_FEE),
            };
        }

        match gateway.refund_payment(transaction_id, amount).await {
            Ok(receipt) if receipt.approved => RefundOutcome {
                success: true,
                message: format!("Refund successful: {}", receipt.message),
            },
            Ok(receipt) => RefundOutcome {
                success: false,
                message: format!("Refund failed: {}", receipt.message),
            },
            Err(e) => {
                tracing::warn!("Refund gateway fault for {}: {}", transaction_id, e);
                RefundOutcome {
                    success: false,
                    message: format!("Refund processing error: {}", e),
                }
            }
        }
    }
}
