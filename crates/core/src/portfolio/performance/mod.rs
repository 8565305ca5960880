mod cash_flows;
mod flow_classifier;
pub mod performance_model;
mod xirr;

pub use cash_flows::{build_cash_flows, has_sign_change};
pub use flow_classifier::{
    classify, classify_label, classify_record, signed_units, signed_value, FlowDirection,
};
pub use performance_model::*;
pub use xirr::{calculate_xirr, calculate_xirr_with};
