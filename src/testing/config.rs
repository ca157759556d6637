//! Scenario table
//!
//! The four integration scenarios hit live swap backends and only produce
//! meaningful results after the user edits the variables in the test file
//! by hand. Choice 5 runs the default unit test set.

/// A named integration scenario
#[derive(Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Menu number
    pub choice: u8,
    /// Display name
    pub name: &'static str,
    /// Test name filter passed to the runner
    pub filter: &'static str,
    /// Source file whose variables must be edited before a run
    pub file: &'static str,
}

const BITCOIN_TEST_FILE: &str = "src/swaps/bitcoin.rs";
const LIQUID_TEST_FILE: &str = "src/swaps/liquid.rs";

static SCENARIOS: &[Scenario] = &[
    Scenario {
        choice: 1,
        name: "bitcoin submarine",
        filter: "test_bitcoin_ssi",
        file: BITCOIN_TEST_FILE,
    },
    Scenario {
        choice: 2,
        name: "bitcoin reverse submarine",
        filter: "test_bitcoin_rsi",
        file: BITCOIN_TEST_FILE,
    },
    Scenario {
        choice: 3,
        name: "liquid submarine",
        filter: "test_liquid_ssi",
        file: LIQUID_TEST_FILE,
    },
    Scenario {
        choice: 4,
        name: "liquid reverse submarine",
        filter: "test_liquid_rsi",
        file: LIQUID_TEST_FILE,
    },
];

/// Menu number of the unit test entry
pub const ALL_UNIT_TESTS_CHOICE: u8 = 5;

/// Get all named scenarios in menu order
pub fn all_scenarios() -> &'static [Scenario] {
    SCENARIOS
}

/// Get a scenario by display name
pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Scenario(&'static Scenario),
    AllUnitTests,
}

impl MenuChoice {
    /// Parse a menu answer; only the literal numbers 1 to 5 are accepted
    pub fn parse(input: &str) -> Option<Self> {
        let choice: u8 = match input.trim() {
            "1" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            "5" => ALL_UNIT_TESTS_CHOICE,
            _ => return None,
        };
        if choice == ALL_UNIT_TESTS_CHOICE {
            return Some(MenuChoice::AllUnitTests);
        }
        SCENARIOS
            .iter()
            .find(|s| s.choice == choice)
            .map(MenuChoice::Scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_are_contiguous() {
        let choices: Vec<u8> = all_scenarios().iter().map(|s| s.choice).collect();
        assert_eq!(choices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bitcoin_scenarios_share_file() {
        let submarine = get_scenario("bitcoin submarine").unwrap();
        let reverse = get_scenario("bitcoin reverse submarine").unwrap();
        assert_eq!(submarine.file, reverse.file);
    }

    #[test]
    fn test_liquid_scenarios_share_other_file() {
        let submarine = get_scenario("liquid submarine").unwrap();
        let reverse = get_scenario("liquid reverse submarine").unwrap();
        assert_eq!(submarine.file, reverse.file);
        assert_ne!(submarine.file, get_scenario("bitcoin submarine").unwrap().file);
    }

    #[test]
    fn test_parse_menu_choices() {
        for scenario in all_scenarios() {
            let input = scenario.choice.to_string();
            assert_eq!(MenuChoice::parse(&input), Some(MenuChoice::Scenario(scenario)));
        }
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::AllUnitTests));
        assert_eq!(MenuChoice::parse(" 3 "), MenuChoice::parse("3"));
    }

    #[test]
    fn test_out_of_range_choices() {
        for input in ["0", "6", "", "one", "1.0", "+1", "01", "-5"] {
            assert_eq!(MenuChoice::parse(input), None, "input {:?}", input);
        }
    }
}
