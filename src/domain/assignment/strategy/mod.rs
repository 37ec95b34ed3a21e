pub mod greedy_strategy;
pub mod strategy_trait;
pub mod strategy_type;
