//! Order Wizard
//!
//! Three gated steps (space → customer → products) ending in a single
//! order-creation call. The wizard owns the cart for the order in progress.

use pos_shared::constants::{MAX_CUSTOMER_NAME_LENGTH, MAX_CUSTOMER_PHONE_LENGTH, MAX_NOTES_LENGTH};
use pos_shared::utils::{is_blank, normalize_optional};
use pos_shared::ComboPricing;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::cart::Cart;
use crate::domain::{NewOrder, Order, Space};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Space,
    Customer,
    Products,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Space, Step::Customer, Step::Products];

    /// 1-based position shown to the user.
    pub fn index(&self) -> u8 {
        match self {
            Step::Space => 1,
            Step::Customer => 2,
            Step::Products => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Space => "space",
            Step::Customer => "customer",
            Step::Products => "products",
        }
    }

    fn following(&self) -> Option<Step> {
        match self {
            Step::Space => Some(Step::Customer),
            Step::Customer => Some(Step::Products),
            Step::Products => None,
        }
    }

    fn preceding(&self) -> Option<Step> {
        match self {
            Step::Space => None,
            Step::Customer => Some(Step::Space),
            Step::Products => Some(Step::Customer),
        }
    }
}

/// Customer form. Only the name is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CustomerInfo {
    #[validate(length(max = MAX_CUSTOMER_NAME_LENGTH, message = "Customer name is too long"))]
    pub name: String,

    #[validate(length(max = MAX_CUSTOMER_PHONE_LENGTH, message = "Phone number is too long"))]
    pub phone: Option<String>,

    #[validate(length(max = MAX_NOTES_LENGTH, message = "Notes are too long"))]
    pub notes: Option<String>,
}

impl CustomerInfo {
    pub fn check(&self) -> Result<(), DomainError> {
        if is_blank(&self.name) {
            return Err(DomainError::BlankCustomerName);
        }
        self.validate()?;
        Ok(())
    }
}

/// Payload ready to send, with the key the backend dedupes replays on
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub order: NewOrder,
    pub idempotency_key: String,
}

pub struct OrderWizard {
    step: Step,
    space: Option<Space>,
    pub customer: CustomerInfo,
    cart: Cart,
    /// Last error to surface (inline message or banner).
    pub error: Option<String>,
    pub is_submitting: bool,
    /// Last attempted submission. Kept across failures so a resend of the
    /// same payload reuses its key.
    pending: Option<Submission>,
}

impl Default for OrderWizard {
    fn default() -> Self {
        Self::new(ComboPricing::default())
    }
}

impl OrderWizard {
    pub fn new(pricing: ComboPricing) -> Self {
        Self {
            step: Step::Space,
            space: None,
            customer: CustomerInfo::default(),
            cart: Cart::with_pricing(pricing),
            error: None,
            is_submitting: false,
            pending: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn space(&self) -> Option<&Space> {
        self.space.as_ref()
    }

    /// Occupied spaces are refused; the previous choice is kept.
    pub fn select_space(&mut self, space: Space) -> Result<(), DomainError> {
        if space.is_occupied() {
            debug!("Refusing occupied space {}", space.name);
            return Err(DomainError::SpaceOccupied(space.name));
        }
        self.space = Some(space);
        Ok(())
    }

    pub fn clear_space(&mut self) {
        self.space = None;
    }

    pub fn set_customer(&mut self, name: impl Into<String>, phone: Option<String>, notes: Option<String>) {
        self.customer = CustomerInfo {
            name: name.into(),
            phone,
            notes,
        };
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn check_step(&self, step: Step) -> Result<(), DomainError> {
        match step {
            Step::Space => self.space.as_ref().map(|_| ()).ok_or(DomainError::NoSpaceSelected),
            Step::Customer => self.customer.check(),
            Step::Products => {
                if self.cart.is_empty() {
                    Err(DomainError::EmptyCart)
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn is_step_valid(&self, step: Step) -> bool {
        self.check_step(step).is_ok()
    }

    /// Moves forward when the current step is valid. Otherwise stays put and
    /// records the reason.
    pub fn next(&mut self) -> Result<Step, DomainError> {
        if let Err(e) = self.check_step(self.step) {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.error = None;
        if let Some(next) = self.step.following() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn prev(&mut self) -> Step {
        if let Some(prev) = self.step.preceding() {
            self.step = prev;
        }
        self.step
    }

    /// Every step valid at once, not only the current one.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && Step::ALL.iter().all(|s| self.is_step_valid(*s))
    }

    pub fn build_order(&self) -> Result<NewOrder, DomainError> {
        for step in Step::ALL {
            self.check_step(step)?;
        }
        let space = self.space.as_ref().ok_or(DomainError::NoSpaceSelected)?;
        Ok(NewOrder {
            space_id: space.id.clone(),
            customer_name: self.customer.name.trim().to_string(),
            customer_phone: normalize_optional(self.customer.phone.clone()),
            notes: normalize_optional(self.customer.notes.clone()),
            total_amount: self.cart.total(),
            items: self.cart.serialize()?,
        })
    }

    /// Builds the payload and marks the wizard busy. Validation failures
    /// are recorded for inline display and nothing is sent.
    ///
    /// Resending an unchanged payload after a failure reuses the previous
    /// idempotency key; an edited payload gets a fresh one.
    pub fn begin_submit(&mut self) -> Result<Submission, DomainError> {
        if self.is_submitting {
            return Err(DomainError::SubmissionInProgress);
        }
        let order = match self.build_order() {
            Ok(order) => order,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        let idempotency_key = match &self.pending {
            Some(previous) if previous.order == order => previous.idempotency_key.clone(),
            _ => Uuid::new_v4().to_string(),
        };
        let submission = Submission { order, idempotency_key };

        self.pending = Some(submission.clone());
        self.error = None;
        self.is_submitting = true;
        Ok(submission)
    }

    pub fn pending_key(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.idempotency_key.as_str())
    }

    pub fn on_submit_success(&mut self, order: &Order) {
        info!("Order {} created for {}", order.order_number, order.customer_name);
        self.reset();
    }

    /// Keeps the cart and the customer data so the user can retry.
    pub fn on_submit_failed(&mut self, error: &DomainError) {
        warn!("Order submission failed: {}", error);
        self.is_submitting = false;
        self.step = Step::Products;
        self.error = Some(error.to_string());
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.cart.pricing());
    }
}
