use crate::domain::assignment::strategy::greedy_strategy::GreedyStrategy;
use crate::domain::assignment::strategy::strategy_trait::AssignmentStrategy;
use crate::error::ConversionError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentStrategyType {
    #[default]
    Greedy,
}

impl FromStr for AssignmentStrategyType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Greedy" => Ok(AssignmentStrategyType::Greedy),
            _ => Err(ConversionError::UnknownStrategyType(s.to_string())),
        }
    }
}

impl AssignmentStrategyType {
    // Factory method to create a concrete strategy
    pub fn get_instance(&self) -> Box<dyn AssignmentStrategy> {
        match self {
            AssignmentStrategyType::Greedy => Box::new(GreedyStrategy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown_strategy() {
        assert_eq!(AssignmentStrategyType::from_str("Greedy"), Ok(AssignmentStrategyType::Greedy));
        assert_eq!(AssignmentStrategyType::from_str("Hungarian"), Err(ConversionError::UnknownStrategyType("Hungarian".to_string())));
    }

    #[test]
    fn test_instance_reports_its_name() {
        assert_eq!(AssignmentStrategyType::Greedy.get_instance().get_name(), "Greedy");
    }
}
