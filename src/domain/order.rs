// ============================================================================
// Order Domain Model
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::OrderSnapshot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifetime given to orders created without an explicit deadline
pub const DEFAULT_VALIDITY_DAYS: i64 = 90;

pub fn default_validity() -> Duration {
    Duration::days(DEFAULT_VALIDITY_DAYS)
}

// ============================================================================
// Value Objects
// ============================================================================

/// Opaque order identity. The nil UUID is the "zero identity" and is never
/// accepted by a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Sell side
    Ask,
    /// Buy side
    Bid,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Ask => Side::Bid,
            Side::Bid => Side::Ask,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Ask => "ask",
            Side::Bid => "bid",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ask" => Ok(Side::Ask),
            "bid" => Ok(Side::Bid),
            other => Err(format!("Unknown side: {}", other)),
        }
    }
}

/// Time-limited order classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OrderKind {
    /// Valid until the end of the trading day
    OneDay,
    /// Remains active until disabled or its deadline passes
    GoodTillCancelled,
    /// Fill immediately or cancel remainder
    ImmediateOrCancel,
    /// Fill entire order immediately or cancel all
    FillOrKill,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::OneDay => "one-day",
            OrderKind::GoodTillCancelled => "good-till-cancelled",
            OrderKind::ImmediateOrCancel => "immediate-or-cancel",
            OrderKind::FillOrKill => "fill-or-kill",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-day" => Ok(OrderKind::OneDay),
            "good-till-cancelled" => Ok(OrderKind::GoodTillCancelled),
            "immediate-or-cancel" => Ok(OrderKind::ImmediateOrCancel),
            "fill-or-kill" => Ok(OrderKind::FillOrKill),
            other => Err(format!("Unknown order kind: {}", other)),
        }
    }
}

// ============================================================================
// Order State (derived)
// ============================================================================

pub mod state {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Visibility state of an order, computed from its enabled flag and
    /// deadline at read time. Never stored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum OrderState {
        Active,
        Disabled,
        Expired,
    }

    impl OrderState {
        pub fn is_terminal(&self) -> bool {
            matches!(self, OrderState::Disabled | OrderState::Expired)
        }

        pub fn is_processable(&self) -> bool {
            matches!(self, OrderState::Active)
        }
    }
}

// ============================================================================
// Order Details
// ============================================================================

/// Caller-supplied attributes of a new order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderDetails {
    pub trade_code: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
    pub price: Decimal,
    pub quantity: u64,
    pub side: Side,
    pub counterparty: String,
}

impl OrderDetails {
    pub fn new(side: Side, price: Decimal, quantity: u64) -> Self {
        Self {
            trade_code: Uuid::nil(),
            valid_until: None,
            price,
            quantity,
            side,
            counterparty: String::new(),
        }
    }

    pub fn with_trade_code(mut self, trade_code: Uuid) -> Self {
        self.trade_code = trade_code;
        self
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = counterparty.into();
        self
    }

    pub fn valid_until(mut self, deadline: DateTime<Utc>) -> Self {
        self.valid_until = Some(deadline);
        self
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// A resting order. The enabled flag is private: it starts `true` and only
/// the repository's disable path can clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub trade_code: Uuid,
    pub valid_until: Option<DateTime<Utc>>,
    pub price: Decimal,
    pub quantity: u64,
    pub side: Side,
    pub counterparty: String,
    pub kind: OrderKind,
    enabled: bool,
}

impl Order {
    /// Create a good-till-cancelled order with a fresh identity, defaulting
    /// the deadline to now + 90 days
    pub fn good_till_cancelled(details: OrderDetails) -> Self {
        Self::good_till_cancelled_with_validity(details, default_validity())
    }

    /// Create a good-till-cancelled order, defaulting the deadline to
    /// now + `default_validity` when the details carry none
    pub fn good_till_cancelled_with_validity(
        details: OrderDetails,
        default_validity: Duration,
    ) -> Self {
        let valid_until = details.valid_until.unwrap_or_else(|| {
            Utc::now()
                .checked_add_signed(default_validity)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        });

        Self {
            id: OrderId::new(),
            trade_code: details.trade_code,
            valid_until: Some(valid_until),
            price: details.price,
            quantity: details.quantity,
            side: details.side,
            counterparty: details.counterparty,
            kind: OrderKind::GoodTillCancelled,
            enabled: true,
        }
    }

    /// Create a match probe carrying only a side and a price.
    ///
    /// Probes have the nil identity and no deadline, so a repository will
    /// neither store them nor report them as processable.
    pub fn probe(side: Side, price: Decimal) -> Self {
        Self {
            id: OrderId::nil(),
            trade_code: Uuid::nil(),
            valid_until: None,
            price,
            quantity: 0,
            side,
            counterparty: String::new(),
            kind: OrderKind::GoodTillCancelled,
            enabled: true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// One-way flag flip; there is no way to re-enable an order.
    pub(crate) fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.valid_until {
            Some(deadline) => now >= deadline,
            None => true,
        }
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> state::OrderState {
        if !self.enabled {
            state::OrderState::Disabled
        } else if self.is_expired_at(now) {
            state::OrderState::Expired
        } else {
            state::OrderState::Active
        }
    }

    /// Enabled and strictly before its deadline at `now`
    pub fn is_processable_at(&self, now: DateTime<Utc>) -> bool {
        self.enabled && !self.is_expired_at(now)
    }

    pub fn is_processable(&self) -> bool {
        self.is_processable_at(Utc::now())
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            price: self.price,
            quantity: self.quantity,
        }
    }
}
