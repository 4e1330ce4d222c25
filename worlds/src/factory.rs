//! Robot-blueprint resource maximization.
//!
//! A blueprint prices four robot kinds in ore, clay, and obsidian; one
//! pre-existing ore robot gathers from minute one, and the factory can
//! start one build per minute. The search maximizes geodes cracked before
//! time runs out.
//!
//! States jump from build decision to build decision rather than minute to
//! minute: each successor picks the next robot kind and fast-forwards
//! through the wait until it is affordable. Geodes are banked as gain the
//! moment a geode robot is built (one per remaining minute), so a state
//! with no affordable, useful build left is terminal with its bank final.
//!
//! Pruning here is *sound*, not empirical: robot counts are capped at the
//! most any recipe can spend per minute, and the optimistic bound assumes
//! a new geode robot every remaining minute. Neither can cut off an
//! optimal schedule, so the maximizing driver's early stop keeps exact
//! answers.

use pathwise_engine::space::{Cost, SearchSpace, Step};
use regex::Regex;

/// Blueprint parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-empty line does not match the blueprint sentence format.
    BadBlueprint { line: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadBlueprint { line } => {
                write!(f, "line {line} is not a valid blueprint sentence")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Robot recipe prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blueprint {
    pub id: u32,
    pub ore_robot_ore: u16,
    pub clay_robot_ore: u16,
    pub obsidian_robot_ore: u16,
    pub obsidian_robot_clay: u16,
    pub geode_robot_ore: u16,
    pub geode_robot_obsidian: u16,
}

/// Parse one blueprint sentence per non-empty line.
///
/// # Errors
///
/// [`ParseError::BadBlueprint`] with the 1-based line number of the first
/// line that does not match.
pub fn parse_blueprints(input: &str) -> Result<Vec<Blueprint>, ParseError> {
    let pattern = Regex::new(concat!(
        r"Blueprint (\d+): Each ore robot costs (\d+) ore\. ",
        r"Each clay robot costs (\d+) ore\. ",
        r"Each obsidian robot costs (\d+) ore and (\d+) clay\. ",
        r"Each geode robot costs (\d+) ore and (\d+) obsidian\.",
    ))
    .expect("pattern is statically valid");

    let mut blueprints = Vec::new();
    for (index, line) in input.trim().lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(captures) = pattern.captures(line) else {
            return Err(ParseError::BadBlueprint { line: index + 1 });
        };
        let bad = || ParseError::BadBlueprint { line: index + 1 };
        let price = |group: usize| -> Result<u16, ParseError> {
            captures[group].parse().map_err(|_| bad())
        };
        blueprints.push(Blueprint {
            id: captures[1].parse().map_err(|_| bad())?,
            ore_robot_ore: price(2)?,
            clay_robot_ore: price(3)?,
            obsidian_robot_ore: price(4)?,
            obsidian_robot_clay: price(5)?,
            geode_robot_ore: price(6)?,
            geode_robot_obsidian: price(7)?,
        });
    }
    Ok(blueprints)
}

/// The factory's search state: remaining minutes, stockpiles, and
/// gathering robots. Geode robots never appear here — their output is
/// banked as gain when they are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plant {
    pub minutes_left: u16,
    pub ore: u16,
    pub clay: u16,
    pub obsidian: u16,
    pub ore_robots: u16,
    pub clay_robots: u16,
    pub obsidian_robots: u16,
}

/// One blueprint bound to a time budget.
#[derive(Debug, Clone, Copy)]
pub struct FactoryWorld {
    blueprint: Blueprint,
    minutes: u16,
    /// Per-minute spend caps: more robots than this can never help.
    max_ore_robots: u16,
    max_clay_robots: u16,
    max_obsidian_robots: u16,
}

#[derive(Debug, Clone, Copy)]
enum Build {
    Ore,
    Clay,
    Obsidian,
    Geode,
}

const BUILDS: [Build; 4] = [Build::Ore, Build::Clay, Build::Obsidian, Build::Geode];

impl FactoryWorld {
    #[must_use]
    pub fn new(blueprint: Blueprint, minutes: u16) -> Self {
        let max_ore_robots = blueprint
            .ore_robot_ore
            .max(blueprint.clay_robot_ore)
            .max(blueprint.obsidian_robot_ore)
            .max(blueprint.geode_robot_ore);
        Self {
            blueprint,
            minutes,
            max_ore_robots,
            max_clay_robots: blueprint.obsidian_robot_clay,
            max_obsidian_robots: blueprint.geode_robot_obsidian,
        }
    }

    /// The opening state: one ore robot, empty stockpiles.
    #[must_use]
    pub fn opening(&self) -> Plant {
        Plant {
            minutes_left: self.minutes,
            ore: 0,
            clay: 0,
            obsidian: 0,
            ore_robots: 1,
            clay_robots: 0,
            obsidian_robots: 0,
        }
    }

    /// `(ore, clay, obsidian)` price of a build.
    fn price(&self, build: Build) -> (u16, u16, u16) {
        match build {
            Build::Ore => (self.blueprint.ore_robot_ore, 0, 0),
            Build::Clay => (self.blueprint.clay_robot_ore, 0, 0),
            Build::Obsidian => (
                self.blueprint.obsidian_robot_ore,
                self.blueprint.obsidian_robot_clay,
                0,
            ),
            Build::Geode => (
                self.blueprint.geode_robot_ore,
                0,
                self.blueprint.geode_robot_obsidian,
            ),
        }
    }

    /// Minutes until the build is affordable at current gather rates, or
    /// `None` if a required robot kind is missing entirely.
    fn wait_for(&self, plant: &Plant, build: Build) -> Option<u16> {
        let (ore, clay, obsidian) = self.price(build);
        let mut wait = 0;
        for (price, stock, rate) in [
            (ore, plant.ore, plant.ore_robots),
            (clay, plant.clay, plant.clay_robots),
            (obsidian, plant.obsidian, plant.obsidian_robots),
        ] {
            let short = price.saturating_sub(stock);
            if short == 0 {
                continue;
            }
            if rate == 0 {
                return None;
            }
            wait = wait.max(short.div_ceil(rate));
        }
        Some(wait)
    }
}

impl SearchSpace for FactoryWorld {
    type State = Plant;
    type Key = Plant;

    fn canonical_key(&self, state: &Plant) -> Plant {
        *state
    }

    fn successors(&self, state: &Plant, out: &mut Vec<Step<Plant>>) {
        for build in BUILDS {
            let at_cap = match build {
                Build::Ore => state.ore_robots >= self.max_ore_robots,
                Build::Clay => state.clay_robots >= self.max_clay_robots,
                Build::Obsidian => state.obsidian_robots >= self.max_obsidian_robots,
                Build::Geode => false,
            };
            if at_cap {
                continue;
            }
            let Some(wait) = self.wait_for(state, build) else {
                continue;
            };
            let elapsed = wait + 1;
            let Some(left) = state.minutes_left.checked_sub(elapsed) else {
                continue;
            };
            // A geode robot built with no minute left cracks nothing; a
            // gathering robot needs at least a minute of gathering plus a
            // minute for its output to matter.
            let useful = match build {
                Build::Geode => left >= 1,
                _ => left >= 2,
            };
            if !useful {
                continue;
            }

            let (ore, clay, obsidian) = self.price(build);
            let mut next = Plant {
                minutes_left: left,
                ore: state.ore + state.ore_robots * elapsed - ore,
                clay: state.clay + state.clay_robots * elapsed - clay,
                obsidian: state.obsidian + state.obsidian_robots * elapsed - obsidian,
                ..*state
            };
            let gain = match build {
                Build::Ore => {
                    next.ore_robots += 1;
                    0
                }
                Build::Clay => {
                    next.clay_robots += 1;
                    0
                }
                Build::Obsidian => {
                    next.obsidian_robots += 1;
                    0
                }
                Build::Geode => Cost::from(left),
            };
            out.push(Step {
                state: next,
                cost: gain,
            });
        }
    }

    /// Maximizing search: terminal states, not a goal predicate.
    fn is_goal(&self, _state: &Plant) -> bool {
        false
    }

    /// A new geode robot every remaining minute: `t*(t-1)/2` more geodes.
    /// Never underestimates, so the driver's early stop stays exact.
    fn gain_bound(&self, state: &Plant) -> Option<Cost> {
        let t = Cost::from(state.minutes_left);
        Some(t * (t - 1) / 2)
    }
}
