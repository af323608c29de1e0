//! API enumerations
//!
//! All of these decode unknown strings into `Unknown(String)` instead of
//! failing; see `codec::api_enum`.

use crate::codec::api_enum;

api_enum! {
    /// ISO 4217 currency code
    pub enum Currency {
        Aed => "AED",
        Aud => "AUD",
        Brl => "BRL",
        Cad => "CAD",
        Chf => "CHF",
        Cny => "CNY",
        Dkk => "DKK",
        Eur => "EUR",
        Gbp => "GBP",
        Hkd => "HKD",
        Idr => "IDR",
        Inr => "INR",
        Jpy => "JPY",
        Krw => "KRW",
        Mxn => "MXN",
        Myr => "MYR",
        Nok => "NOK",
        Nzd => "NZD",
        Php => "PHP",
        Pln => "PLN",
        Sek => "SEK",
        Sgd => "SGD",
        Thb => "THB",
        Usd => "USD",
        Zar => "ZAR",
    }
}

api_enum! {
    /// ISO 3166-1 alpha-2 country code
    pub enum CountryCode {
        Ae => "AE",
        Ar => "AR",
        At => "AT",
        Au => "AU",
        Be => "BE",
        Br => "BR",
        Ca => "CA",
        Ch => "CH",
        De => "DE",
        Dk => "DK",
        Es => "ES",
        Fi => "FI",
        Fr => "FR",
        Gb => "GB",
        Ie => "IE",
        In => "IN",
        It => "IT",
        Jp => "JP",
        Mx => "MX",
        Nl => "NL",
        No => "NO",
        Nz => "NZ",
        Pl => "PL",
        Pt => "PT",
        Se => "SE",
        Sg => "SG",
        Us => "US",
        Za => "ZA",
    }
}

api_enum! {
    /// Payment (intent) status
    pub enum IntentStatus {
        Succeeded => "succeeded",
        Failed => "failed",
        Cancelled => "cancelled",
        Processing => "processing",
        RequiresCustomerAction => "requires_customer_action",
        RequiresMerchantAction => "requires_merchant_action",
        RequiresPaymentMethod => "requires_payment_method",
        RequiresConfirmation => "requires_confirmation",
        RequiresCapture => "requires_capture",
        PartiallyCaptured => "partially_captured",
        PartiallyCapturedAndCapturable => "partially_captured_and_capturable",
    }
}

api_enum! {
    /// Refund status
    pub enum RefundStatus {
        Succeeded => "succeeded",
        Failed => "failed",
        Pending => "pending",
        Review => "review",
    }
}

api_enum! {
    /// Dispute status
    pub enum DisputeStatus {
        Opened => "dispute_opened",
        Expired => "dispute_expired",
        Accepted => "dispute_accepted",
        Cancelled => "dispute_cancelled",
        Challenged => "dispute_challenged",
        Won => "dispute_won",
        Lost => "dispute_lost",
    }
}

api_enum! {
    /// Dispute stage
    pub enum DisputeStage {
        PreDispute => "pre_dispute",
        Dispute => "dispute",
        PreArbitration => "pre_arbitration",
    }
}

api_enum! {
    /// Subscription status
    pub enum SubscriptionStatus {
        Pending => "pending",
        Active => "active",
        OnHold => "on_hold",
        Cancelled => "cancelled",
        Failed => "failed",
        Expired => "expired",
    }
}

api_enum! {
    /// Payout status
    pub enum PayoutStatus {
        NotInitiated => "not_initiated",
        InProgress => "in_progress",
        OnHold => "on_hold",
        Failed => "failed",
        Success => "success",
    }
}

api_enum! {
    /// License key status
    pub enum LicenseKeyStatus {
        Active => "active",
        Expired => "expired",
        Disabled => "disabled",
    }
}

api_enum! {
    /// Billing and trial period unit
    pub enum TimeInterval {
        Day => "Day",
        Week => "Week",
        Month => "Month",
        Year => "Year",
    }
}

api_enum! {
    /// How a plan change is billed
    pub enum ProrationBillingMode {
        ProratedImmediately => "prorated_immediately",
        FullImmediately => "full_immediately",
        DifferenceImmediately => "difference_immediately",
    }
}

api_enum! {
    /// Event type of a webhook delivery (dot-namespaced)
    pub enum WebhookEventType {
        PaymentSucceeded => "payment.succeeded",
        PaymentFailed => "payment.failed",
        PaymentProcessing => "payment.processing",
        PaymentCancelled => "payment.cancelled",
        RefundSucceeded => "refund.succeeded",
        RefundFailed => "refund.failed",
        DisputeOpened => "dispute.opened",
        DisputeExpired => "dispute.expired",
        DisputeAccepted => "dispute.accepted",
        DisputeCancelled => "dispute.cancelled",
        DisputeChallenged => "dispute.challenged",
        DisputeWon => "dispute.won",
        DisputeLost => "dispute.lost",
        SubscriptionActive => "subscription.active",
        SubscriptionRenewed => "subscription.renewed",
        SubscriptionOnHold => "subscription.on_hold",
        SubscriptionCancelled => "subscription.cancelled",
        SubscriptionFailed => "subscription.failed",
        SubscriptionExpired => "subscription.expired",
        SubscriptionPlanChanged => "subscription.plan_changed",
        LicenseKeyCreated => "license_key.created",
    }
}

impl WebhookEventType {
    /// The namespace before the dot, e.g. `payment`
    pub fn namespace(&self) -> &str {
        let raw = self.as_str();
        raw.split_once('.').map_or(raw, |(ns, _)| ns)
    }
}

api_enum! {
    /// Comparison operator in a meter filter condition
    pub enum FilterOperator {
        Equals => "equals",
        NotEquals => "not_equals",
        GreaterThan => "greater_than",
        GreaterThanOrEquals => "greater_than_or_equals",
        LessThan => "less_than",
        LessThanOrEquals => "less_than_or_equals",
        Contains => "contains",
        DoesNotContain => "does_not_contain",
    }
}

api_enum! {
    /// How meter filter clauses combine
    pub enum Conjunction {
        And => "and",
        Or => "or",
    }
}

api_enum! {
    /// Meter aggregation function
    pub enum AggregationType {
        Count => "count",
        Sum => "sum",
        Max => "max",
        Last => "last",
    }
}

api_enum! {
    /// What produced a wallet ledger entry
    pub enum LedgerEventType {
        Payment => "payment",
        PaymentReversal => "payment_reversal",
        Refund => "refund",
        RefundReversal => "refund_reversal",
        Dispute => "dispute",
        DisputeReversal => "dispute_reversal",
        MerchantAdjustment => "merchant_adjustment",
    }
}

api_enum! {
    /// Direction of a manual ledger entry
    pub enum LedgerEntryType {
        Credit => "credit",
        Debit => "debit",
    }
}
