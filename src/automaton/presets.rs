//! Named rules offered by the viewer's preset selector

use super::rule::Rule;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A well-known rule with a short description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub rule: Rule,
    pub name: &'static str,
}

/// Presets in selector order
pub const PRESETS: &[Preset] = &[
    Preset {
        rule: Rule::new(30),
        name: "chaotic",
    },
    Preset {
        rule: Rule::new(45),
        name: "pseudo-random",
    },
    Preset {
        rule: Rule::new(73),
        name: "walls",
    },
    Preset {
        rule: Rule::new(90),
        name: "Sierpinski triangle",
    },
    Preset {
        rule: Rule::new(105),
        name: "inverted XOR",
    },
    Preset {
        rule: Rule::new(110),
        name: "Turing complete",
    },
    Preset {
        rule: Rule::new(150),
        name: "additive",
    },
    Preset {
        rule: Rule::new(184),
        name: "traffic flow",
    },
    Preset {
        rule: Rule::new(250),
        name: "simple growth",
    },
];

fn index() -> &'static FxHashMap<Rule, usize> {
    static INDEX: OnceLock<FxHashMap<Rule, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        PRESETS
            .iter()
            .enumerate()
            .map(|(i, preset)| (preset.rule, i))
            .collect()
    })
}

/// Position of `rule` in [`PRESETS`], if it is one
pub fn position(rule: Rule) -> Option<usize> {
    index().get(&rule).copied()
}

/// Name of the preset matching `rule`
pub fn preset_name(rule: Rule) -> Option<&'static str> {
    position(rule).map(|i| PRESETS[i].name)
}

/// Preset after `rule` in selector order (the first one if `rule` is not a preset)
pub fn next(rule: Rule) -> Preset {
    match position(rule) {
        Some(i) => PRESETS[(i + 1) % PRESETS.len()],
        None => PRESETS[0],
    }
}

/// Preset before `rule` in selector order (the last one if `rule` is not a preset)
pub fn previous(rule: Rule) -> Preset {
    match position(rule) {
        Some(i) => PRESETS[(i + PRESETS.len() - 1) % PRESETS.len()],
        None => PRESETS[PRESETS.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_rule() {
        assert_eq!(preset_name(Rule::new(90)), Some("Sierpinski triangle"));
        assert_eq!(preset_name(Rule::new(31)), None);
    }

    #[test]
    fn test_cycling_wraps_around() {
        assert_eq!(next(Rule::new(250)).rule, Rule::new(30));
        assert_eq!(previous(Rule::new(30)).rule, Rule::new(250));
        assert_eq!(next(Rule::new(30)).rule, Rule::new(45));
    }

    #[test]
    fn test_cycling_from_custom_rule() {
        assert_eq!(next(Rule::new(1)), PRESETS[0]);
        assert_eq!(previous(Rule::new(1)), PRESETS[PRESETS.len() - 1]);
    }
}
