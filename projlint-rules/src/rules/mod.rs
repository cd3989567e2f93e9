//! Built-in convention rules.

use crate::engine::Rule;

mod dir_name_style;
mod file_name_style;
mod ordinal_collision;
mod ordinal_prefix;
mod root_config;
mod separator_consistency;

/// Registry of built-in rules, in evaluation order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(root_config::RootConfigRule),
        Box::new(ordinal_prefix::OrdinalPrefixRule),
        Box::new(ordinal_collision::OrdinalCollisionRule),
        Box::new(dir_name_style::DirNameStyleRule),
        Box::new(file_name_style::FileNameStyleRule),
        Box::new(separator_consistency::SeparatorConsistencyRule),
    ]
}

/// Ids of the built-in rules, in registry order.
pub fn rule_ids() -> Vec<&'static str> {
    builtin_rules().iter().map(|r| r.id()).collect()
}
