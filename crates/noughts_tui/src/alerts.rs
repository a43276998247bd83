//! End-of-game alerts.

use noughts::GameOutcome;

/// Text shown when a game ends; dismissing it starts a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeAlert {
    /// Headline.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the dismiss button.
    pub button: &'static str,
}

impl OutcomeAlert {
    /// Shown when the human completes a line.
    pub const HUMAN_WIN: OutcomeAlert = OutcomeAlert {
        title: "You Win!",
        message: "Looks like you have the brains to beat your own AI.",
        button: "Hell yeah",
    };

    /// Shown when the computer completes a line.
    pub const COMPUTER_WIN: OutcomeAlert = OutcomeAlert {
        title: "You Lost",
        message: "How could you lose to a AI, are you really that dumb?",
        button: "Never Give Up",
    };

    /// Shown on a full board with no line.
    pub const DRAW: OutcomeAlert = OutcomeAlert {
        title: "Draw",
        message: "What a battle of wits we have here.",
        button: "Try Again",
    };

    /// Alert for a finished game; `None` while the game is ongoing.
    pub fn for_outcome(outcome: GameOutcome) -> Option<Self> {
        match outcome {
            GameOutcome::Ongoing => None,
            GameOutcome::HumanWin => Some(Self::HUMAN_WIN),
            GameOutcome::ComputerWin => Some(Self::COMPUTER_WIN),
            GameOutcome::Draw => Some(Self::DRAW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_per_outcome() {
        assert_eq!(OutcomeAlert::for_outcome(GameOutcome::Ongoing), None);
        assert_eq!(
            OutcomeAlert::for_outcome(GameOutcome::HumanWin).map(|a| a.title),
            Some("You Win!")
        );
        assert_eq!(
            OutcomeAlert::for_outcome(GameOutcome::ComputerWin).map(|a| a.button),
            Some("Never Give Up")
        );
        assert_eq!(OutcomeAlert::for_outcome(GameOutcome::Draw), Some(OutcomeAlert::DRAW));
    }
}
