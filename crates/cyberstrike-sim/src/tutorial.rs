//! Tutorial overlay: a fixed sequence of instruction panels.

use cyberstrike_core::state::TutorialView;

/// (title, text) for each tutorial panel.
const STEPS: [(&str, &str); 5] = [
    (
        "Welcome to CyberStrike!",
        "Use WASD to move, mouse to look around, and left click to shoot.",
    ),
    (
        "Advanced Movement",
        "Hold Shift to sprint, Space to jump, and C to crouch. Use cover wisely!",
    ),
    (
        "Combat System",
        "Right click to aim, R to reload. Different weapons have unique properties.",
    ),
    (
        "RPG Elements",
        "Gain XP by defeating enemies. Level up to unlock new abilities and weapons.",
    ),
    (
        "Environment",
        "Objects can be destroyed for cover or resources. Explore thoroughly!",
    ),
];

/// Result of advancing the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialAdvance {
    /// Moved to the next panel.
    Shown,
    /// The last panel was dismissed; the game should start.
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct Tutorial {
    active: bool,
    step: usize,
}

impl Tutorial {
    pub fn start(&mut self) {
        self.active = true;
        self.step = 0;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn next(&mut self) -> TutorialAdvance {
        if self.step + 1 < STEPS.len() {
            self.step += 1;
            TutorialAdvance::Shown
        } else {
            self.skip();
            TutorialAdvance::Finished
        }
    }

    pub fn prev(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Hide the overlay.
    pub fn skip(&mut self) {
        self.active = false;
    }

    pub fn view(&self) -> Option<TutorialView> {
        if !self.active {
            return None;
        }
        let (title, text) = STEPS[self.step];
        let last = self.step + 1 == STEPS.len();
        Some(TutorialView {
            step: self.step,
            total_steps: STEPS.len(),
            title: title.to_string(),
            text: text.to_string(),
            can_go_back: self.step > 0,
            next_label: if last { "Start Game" } else { "Next" }.to_string(),
        })
    }
}
