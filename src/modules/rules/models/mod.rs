pub mod rule_set;

pub use rule_set::{
    CommissionRuleSet, CommissionTier, ComponentConfig, ComponentKind, RuleKind, SalaryComponent,
    SalaryComponentConfig,
};
