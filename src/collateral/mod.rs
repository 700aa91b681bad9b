pub mod tenure;

pub use tenure::{
    max_tenure_months, max_tenure_months_capped, TenureEstimate, TenureQuery, MAX_TENURE_MONTHS,
};
