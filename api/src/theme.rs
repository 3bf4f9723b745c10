use crate::consts::PAGE_STEP;

/// CSS gradients for one cosmetic color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub background_before_connect: &'static str,
    pub background: &'static str,
    pub navbar: &'static str,
    pub button: &'static str,
    pub button_hover: &'static str,
    pub leaderboard: &'static str,
}

pub const SCHEMES: [ColorScheme; 4] = [
    ColorScheme {
        background_before_connect: "linear-gradient(to right, #d1e0f9, #e2e2e2)",
        background: "linear-gradient(to right, #d1e0f9, #e2e2e2)",
        navbar: "linear-gradient(to right, #7ea5e0, #7ea5e0)",
        button: "linear-gradient(to right, #ffb2bb, #8dd3ff)",
        button_hover: "linear-gradient(to right, #8dd3ff, #ffb2bb)",
        leaderboard: "linear-gradient(to right, #adff4e, #9aff9b)",
    },
    ColorScheme {
        background_before_connect: "linear-gradient(to right, #bfe5d4, #afd5c2)",
        background: "linear-gradient(to right, #afd5c2, #bfe5d4)",
        navbar: "linear-gradient(to right, #39868c, #186174)",
        button: "linear-gradient(to right, #e0d267, #dcb63e)",
        button_hover: "linear-gradient(to right, #dcb63e, #e0d267)",
        leaderboard: "linear-gradient(to right, #f7ea96, #bdd79c)",
    },
    ColorScheme {
        background_before_connect: "linear-gradient(to right, #ffeded, #ffd3d3)",
        background: "linear-gradient(to right, #ffd3d3, #ffeded)",
        navbar: "linear-gradient(to right, #ff6666, #ff3333)",
        button: "linear-gradient(to right, #ffaa80, #ff7a59)",
        button_hover: "linear-gradient(to right, #ff7a59, #ffaa80)",
        leaderboard: "linear-gradient(to right, #ffe680, #ffd66b)",
    },
    ColorScheme {
        background_before_connect: "linear-gradient(to right, #d6e2f4, #adc8e6)",
        background: "linear-gradient(to right, #adc8e6, #d6e2f4)",
        navbar: "linear-gradient(to right, #4d68b0, #6b82e6)",
        button: "linear-gradient(to right, #ffb971, #ff8a5a)",
        button_hover: "linear-gradient(to right, #ff8a5a, #ffb971)",
        leaderboard: "linear-gradient(to right, #6ac88e, #4d95b5)",
    },
];

/// Fixed panel gradient used by variants that do not cycle the leaderboard.
pub const CREAM: &str = "linear-gradient(to right, #fff6dd, #fff6ee)";

/// One themed edition of the game page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    pub title: &'static str,

    /// Minimum clicks for an identifier to be exported.
    pub export_threshold: u64,

    /// Clicks that unlock minting access, shown in the guide.
    pub mint_goal: u64,

    /// The only identity offered the export download.
    pub privileged_identity: Option<&'static str>,

    pub page_step: usize,
    pub schemes: &'static [ColorScheme],
    pub cycle_interval_ms: u32,

    /// Leaderboard panel background; `None` follows the active scheme.
    pub leaderboard_background: Option<&'static str>,

    pub show_target: bool,
    pub guide_url: &'static str,
}

impl Variant {
    pub fn odyssey() -> Self {
        Self {
            title: "AMIGOS ODYSSEY CLICK",
            export_threshold: 150,
            mint_goal: 500,
            privileged_identity: Some("ExnV1bFPfDQJ5PtVy8jEdH2gt19cu1XLDM8t7wprKdR5"),
            page_step: PAGE_STEP,
            schemes: &SCHEMES,
            cycle_interval_ms: 3000,
            leaderboard_background: Some(CREAM),
            show_target: true,
            guide_url: "https://twitter.com/amigosodyssey",
        }
    }

    pub fn mint_pass() -> Self {
        Self {
            export_threshold: 500,
            leaderboard_background: None,
            ..Self::odyssey()
        }
    }

    pub fn can_export(&self, identity: &str) -> bool {
        !identity.is_empty() && self.privileged_identity == Some(identity)
    }

    pub fn theme(&self) -> ThemeCycle {
        ThemeCycle::new(self.schemes)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::odyssey()
    }
}

/// Cycles through color schemes on a timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeCycle {
    schemes: &'static [ColorScheme],
    index: usize,
}

impl ThemeCycle {
    pub fn new(schemes: &'static [ColorScheme]) -> Self {
        Self { schemes, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> ColorScheme {
        self.schemes.get(self.index).copied().unwrap_or(SCHEMES[0])
    }

    pub fn advance(&mut self) -> ColorScheme {
        if !self.schemes.is_empty() {
            self.index = (self.index + 1) % self.schemes.len();
        }
        self.current()
    }
}
