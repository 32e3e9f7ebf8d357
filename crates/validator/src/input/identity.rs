//! Identity number predicates backed by the Luhn engine.

use super::Input;
use crate::luhn::LuhnIdentifier;

impl Input {
    fn luhn(&self) -> Option<LuhnIdentifier> {
        self.string_view().map(LuhnIdentifier::new)
    }

    /// Swedish personal or coordination number.
    #[must_use]
    pub fn is_social_number(&self) -> bool {
        let year = self.env.current_year();
        self.luhn().is_some_and(|id| id.is_personal_number(year))
    }

    /// Swedish organisation number.
    #[must_use]
    pub fn is_org_number(&self) -> bool {
        self.luhn().is_some_and(|id| id.is_org_number())
    }

    /// Payment card number with a known issuer prefix.
    #[must_use]
    pub fn is_credit_card(&self) -> bool {
        self.luhn().is_some_and(|id| id.is_credit_card())
    }

    /// EU VAT number.
    #[must_use]
    pub fn is_vat_number(&self) -> bool {
        self.luhn().is_some_and(|id| id.is_vat_number())
    }

    /// Personal number whose serial marks a man (odd).
    #[must_use]
    pub fn is_male(&self) -> bool {
        let year = self.env.current_year();
        self.luhn().and_then(|id| id.is_male(year)) == Some(true)
    }

    /// Personal number whose serial marks a woman (even).
    #[must_use]
    pub fn is_female(&self) -> bool {
        let year = self.env.current_year();
        self.luhn().and_then(|id| id.is_male(year)) == Some(false)
    }
}
