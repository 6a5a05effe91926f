//! Checkout
//!
//! The stars-page checkout dialog: `Closed -> Open(package) -> Closed`, an
//! order form with native-style required fields, and the confirmation emitted
//! on submission. There is no backing transaction; submission yields a
//! synchronous confirmation value and nothing else.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::packages::StarPackage;

/// Errors surfaced by the checkout dialog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Submit was called while the dialog was closed.
    #[error("the checkout dialog is not open")]
    DialogClosed,

    /// A required form field is empty; submission is blocked.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    /// An unrecognised payment method label.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

/// Payment method selector entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Bank card.
    Card,

    /// QIWI wallet.
    Qiwi,

    /// `YooMoney` wallet.
    YooMoney,

    /// Cryptocurrency.
    Crypto,
}

impl PaymentMethod {
    /// Label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Банковская карта",
            PaymentMethod::Qiwi => "QIWI",
            PaymentMethod::YooMoney => "ЮMoney",
            PaymentMethod::Crypto => "Криптовалюта",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "qiwi" => Ok(PaymentMethod::Qiwi),
            "yoomoney" => Ok(PaymentMethod::YooMoney),
            "crypto" => Ok(PaymentMethod::Crypto),
            other => Err(CheckoutError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Transient order form state.
///
/// Created when the dialog opens, mutated by field edits, reset on successful
/// submission. Username, email and payment method are required; the Telegram
/// id and notes are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// Telegram username, e.g. "@username".
    pub username: String,

    /// Contact email.
    pub email: String,

    /// Optional numeric Telegram id.
    pub telegram_id: Option<u64>,

    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,

    /// Free-text notes for the order.
    pub notes: String,
}

impl OrderForm {
    /// First required field that is still empty, if any.
    ///
    /// The library counterpart of the form widgets' native required-field
    /// check: submission is blocked while this returns `Some`.
    #[must_use]
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.username.is_empty() {
            Some("username")
        } else if self.email.is_empty() {
            Some("email")
        } else if self.payment_method.is_none() {
            Some("payment_method")
        } else {
            None
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Confirmation payload emitted by a successful submission.
///
/// Carries exactly the chosen package's name, star count and price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation<'a> {
    package_name: String,
    stars: u32,
    price: Money<'a, Currency>,
}

impl<'a> OrderConfirmation<'a> {
    /// Name of the purchased package.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Number of stars purchased.
    #[must_use]
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Price paid.
    #[must_use]
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }
}

impl fmt::Display for OrderConfirmation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mirrors the storefront's confirmation line, with the price in plain
        // major units ("650₽", not a localised money string).
        let major = Decimal::new(self.price.to_minor_units(), self.price.currency().exponent);

        write!(
            f,
            "Заказ оформлен! Пакет: {}, Звёзд: {}, Цена: {}₽",
            self.package_name,
            self.stars,
            major.normalize()
        )
    }
}

/// Dialog state: closed, or open over the selected package.
#[derive(Debug, Clone, PartialEq)]
enum DialogState<'a> {
    Closed,
    Open(StarPackage<'a>),
}

/// The checkout dialog of the stars page.
#[derive(Debug)]
pub struct CheckoutDialog<'a> {
    state: DialogState<'a>,
    form: OrderForm,
}

impl Default for CheckoutDialog<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CheckoutDialog<'a> {
    /// Create a closed dialog with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            form: OrderForm::default(),
        }
    }

    /// Whether the dialog is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    /// The package the dialog was opened for, while open.
    #[must_use]
    pub fn selected_package(&self) -> Option<&StarPackage<'a>> {
        match &self.state {
            DialogState::Open(package) => Some(package),
            DialogState::Closed => None,
        }
    }

    /// The order form.
    #[must_use]
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// Mutable access to the order form, for field bindings.
    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Open the dialog for the selected package card.
    pub fn open(&mut self, package: StarPackage<'a>) {
        tracing::debug!(package = package.name(), "checkout dialog opened");

        self.state = DialogState::Open(package);
    }

    /// Dismiss the dialog without submitting.
    ///
    /// No side effect beyond closing: the form keeps whatever the user typed,
    /// so reopening shows the fields as they were left.
    pub fn dismiss(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Submit the order form.
    ///
    /// On success the confirmation carries the selected package's name, star
    /// count and price; the form resets to defaults and the dialog closes.
    /// A blocked submission leaves the dialog open and the form untouched.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::DialogClosed`]: the dialog is not open.
    /// - [`CheckoutError::MissingField`]: a required field is empty.
    pub fn submit(&mut self) -> Result<OrderConfirmation<'a>, CheckoutError> {
        let DialogState::Open(package) = &self.state else {
            return Err(CheckoutError::DialogClosed);
        };

        if let Some(field) = self.form.missing_required() {
            return Err(CheckoutError::MissingField(field));
        }

        let confirmation = OrderConfirmation {
            package_name: package.name().to_string(),
            stars: package.stars(),
            price: package.price(),
        };

        tracing::debug!(
            package = confirmation.package_name(),
            stars = confirmation.stars(),
            "order submitted"
        );

        self.form.reset();
        self.state = DialogState::Closed;

        Ok(confirmation)
    }
}
