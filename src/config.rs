use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collateral::{TenureEstimate, TenureQuery, MAX_TENURE_MONTHS};
use crate::decimal::{Money, Rate};
use crate::duration::BillingPolicy;
use crate::errors::{LoanError, Result};
use crate::interest::{InterestEngine, InterestMode};

/// loan configuration as submitted from a kalam form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    pub terms: LoanTerms,
    pub billing: BillingConfig,
}

/// amount lent against the kalam and its rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// annual rate (monthly ROI × 12)
    pub annual_rate: Rate,
}

/// how durations and interest are billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub interest_mode: InterestMode,
    pub waive_one_day_grace: bool,
    /// bill on the rounded duration instead of the raw one
    pub round_duration: bool,
    /// upper bound for [`LoanConfig::tenure`]
    pub tenure_cap_months: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            interest_mode: InterestMode::Compound,
            waive_one_day_grace: false,
            round_duration: true,
            tenure_cap_months: MAX_TENURE_MONTHS,
        }
    }
}

impl BillingConfig {
    pub fn policy(&self) -> BillingPolicy {
        BillingPolicy::new(self.waive_one_day_grace)
    }

    pub fn engine(&self) -> InterestEngine {
        InterestEngine::new(self.interest_mode)
    }
}

impl LoanTerms {
    /// terms from the monthly ROI percentage entered on the form
    pub fn from_monthly_roi(principal: Money, monthly_roi: Decimal) -> Self {
        Self {
            principal,
            annual_rate: Rate::from_monthly_roi(monthly_roi),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(LoanError::InvalidAmount {
                amount: self.principal,
            });
        }
        if !self.annual_rate.is_positive() {
            return Err(LoanError::InvalidInterestRate {
                rate: self.annual_rate,
            });
        }
        Ok(())
    }
}

impl LoanConfig {
    /// create compound interest configuration
    pub fn compound(principal: Money, monthly_roi: Decimal) -> Self {
        Self {
            terms: LoanTerms::from_monthly_roi(principal, monthly_roi),
            billing: BillingConfig::default(),
        }
    }

    /// create simple interest configuration
    pub fn simple(principal: Money, monthly_roi: Decimal) -> Self {
        Self {
            terms: LoanTerms::from_monthly_roi(principal, monthly_roi),
            billing: BillingConfig {
                interest_mode: InterestMode::Simple,
                ..BillingConfig::default()
            },
        }
    }

    pub fn with_grace(mut self, waive_one_day_grace: bool) -> Self {
        self.billing.waive_one_day_grace = waive_one_day_grace;
        self
    }

    pub fn with_raw_duration(mut self) -> Self {
        self.billing.round_duration = false;
        self
    }

    pub fn with_tenure_cap(mut self, months: u32) -> Self {
        self.billing.tenure_cap_months = months;
        self
    }

    /// months these terms can run before the payable amount exceeds `item_value`
    pub fn tenure(&self, item_value: Money) -> TenureEstimate {
        TenureQuery::new(self.terms.principal, item_value, self.terms.annual_rate)
            .solve_capped(self.billing.tenure_cap_months)
    }

    pub fn validate(&self) -> Result<()> {
        self.terms.validate()?;
        if self.billing.tenure_cap_months == 0 {
            return Err(LoanError::InvalidConfiguration {
                message: "tenure cap must be at least one month".to_string(),
            });
        }
        Ok(())
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_presets() {
        let compound = LoanConfig::compound(Money::from_major(50_000), dec!(2));
        assert_eq!(compound.terms.annual_rate, Rate::from_percentage(24));
        assert_eq!(compound.billing.interest_mode, InterestMode::Compound);
        assert!(compound.billing.round_duration);
        assert_eq!(compound.billing.tenure_cap_months, 360);

        let simple = LoanConfig::simple(Money::from_major(50_000), dec!(1.5)).with_grace(true);
        assert_eq!(simple.billing.interest_mode, InterestMode::Simple);
        assert!(simple.billing.waive_one_day_grace);
        assert_eq!(simple.billing.policy().days_threshold(), 2);
    }

    #[test]
    fn test_validation() {
        assert!(LoanConfig::compound(Money::from_major(1_000), dec!(2)).validate().is_ok());

        let err = LoanConfig::compound(Money::ZERO, dec!(2)).validate().unwrap_err();
        assert!(matches!(err, LoanError::InvalidAmount { .. }));

        let err = LoanConfig::compound(Money::from_major(1_000), dec!(0)).validate().unwrap_err();
        assert!(matches!(err, LoanError::InvalidInterestRate { .. }));

        let mut config = LoanConfig::compound(Money::from_major(1_000), dec!(2));
        config.billing.tenure_cap_months = 0;
        assert!(matches!(config.validate(), Err(LoanError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_tenure_respects_configured_cap() {
        let config = LoanConfig::compound(Money::from_major(1_000), dec!(2));
        let item_value = Money::from_major(2_000);
        assert_eq!(config.tenure(item_value), TenureEstimate { months: 38, bounded: true });

        let short = config.clone().with_tenure_cap(24);
        assert_eq!(short.tenure(item_value), TenureEstimate { months: 24, bounded: false });

        // a cap above the answer leaves it alone
        let long = config.with_tenure_cap(120);
        assert_eq!(long.tenure(item_value), TenureEstimate { months: 38, bounded: true });
    }

    #[test]
    fn test_json_round_trip() {
        let config = LoanConfig::simple(Money::from_major(75_000), dec!(1.25)).with_raw_duration();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"interest_mode\": \"simple\""));

        let parsed = LoanConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_rejects_invalid_terms() {
        let json = r#"{
            "terms": { "principal": "-5", "annual_rate": "0.24" },
            "billing": {
                "interest_mode": "compound",
                "waive_one_day_grace": false,
                "round_duration": true,
                "tenure_cap_months": 360
            }
        }"#;
        assert!(matches!(LoanConfig::from_json(json), Err(LoanError::InvalidAmount { .. })));
        assert!(matches!(LoanConfig::from_json("{"), Err(LoanError::Serialization(_))));
    }
}
