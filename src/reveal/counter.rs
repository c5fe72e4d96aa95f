//! Count-up animation state for numeric counters such as "150+" or "98%".
//!
//! A [`CountUp`] is parsed once from the element's initial text and then
//! stepped by whatever task drives the animation. It never overshoots its
//! target and reports completion exactly once.

/// Total running time of a count-up.
pub const COUNT_UP_DURATION_MS: u32 = 2_000;

/// Number of displayed steps in a run.
pub const COUNT_UP_STEPS: u32 = 60;

/// Delay between two displayed steps (~33ms).
pub const COUNT_UP_TICK_MS: u32 = COUNT_UP_DURATION_MS / COUNT_UP_STEPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suffix {
    #[default]
    None,
    Plus,
    Percent,
}

impl Suffix {
    /// A "+" anywhere in the text wins over a "%".
    pub fn detect(text: &str) -> Self {
        if text.contains('+') {
            Suffix::Plus
        } else if text.contains('%') {
            Suffix::Percent
        } else {
            Suffix::None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::None => "",
            Suffix::Plus => "+",
            Suffix::Percent => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    current: u64,
    suffix: Suffix,
    steps_taken: u32,
    finished: bool,
}

impl CountUp {
    /// Parses the counter target from display text by keeping only its digits.
    ///
    /// Returns `None` when the text has no digits or the digits overflow `u64`.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse::<u64>().ok()?;
        Some(Self::new(target, Suffix::detect(text)))
    }

    pub fn new(target: u64, suffix: Suffix) -> Self {
        Self {
            target,
            current: 0,
            suffix,
            steps_taken: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn suffix(&self) -> Suffix {
        self.suffix
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn steps_remaining(&self) -> u32 {
        if self.finished {
            0
        } else {
            COUNT_UP_STEPS - self.steps_taken
        }
    }

    /// Text for the current value, suffix included.
    pub fn display(&self) -> String {
        format!("{}{}", self.current, self.suffix.as_str())
    }

    /// Moves one step forward and returns the text to show, or `None` once finished.
    pub fn advance(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.steps_taken += 1;
        let reached = u128::from(self.target) * u128::from(self.steps_taken)
            / u128::from(COUNT_UP_STEPS);
        // reached <= target because steps_taken <= COUNT_UP_STEPS
        self.current = u64::try_from(reached).unwrap_or(self.target).min(self.target);
        if self.current >= self.target || self.steps_taken >= COUNT_UP_STEPS {
            self.current = self.target;
            self.finished = true;
        }
        Some(self.display())
    }
}
