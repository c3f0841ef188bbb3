// ABOUTME: Closed categorical metric enumerations with stable wire strings
// ABOUTME: Skills, activities, bosses, computed metrics, periods, and the Metric union
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

/// Error produced when a wire string does not belong to the closed set it
/// was parsed against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized wire value: {0}")]
pub struct UnknownWireValue(pub String);

/// Defines a closed, string-valued categorical enum.
///
/// The wire table is the single source of truth: `as_str`, `Display`,
/// `FromStr`, `Serialize`, and `Deserialize` all route through it, so the
/// value sent in a query parameter is byte-identical to the value matched
/// when deserializing.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("Wire value `", $wire, "`.")]
                $variant,
            )+
        }

        impl $name {
            /// The stable wire string for this member, used as-is in query
            /// parameters and payloads.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::metrics::UnknownWireValue;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::metrics::UnknownWireValue(value.to_owned())),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// A period of time over which gains, records, and snapshots are
    /// aggregated.
    Period {
        FiveMins => "five_min",
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

wire_enum! {
    /// An in-game skill.
    Skill {
        Overall => "overall",
        Attack => "attack",
        Defence => "defence",
        Strength => "strength",
        Hitpoints => "hitpoints",
        Ranged => "ranged",
        Prayer => "prayer",
        Magic => "magic",
        Cooking => "cooking",
        Woodcutting => "woodcutting",
        Fletching => "fletching",
        Fishing => "fishing",
        Firemaking => "firemaking",
        Crafting => "crafting",
        Smithing => "smithing",
        Mining => "mining",
        Herblore => "herblore",
        Agility => "agility",
        Thieving => "thieving",
        Slayer => "slayer",
        Farming => "farming",
        Runecrafting => "runecrafting",
        Hunter => "hunter",
        Construction => "construction",
    }
}

wire_enum! {
    /// A minigame or other tracked activity.
    Activity {
        LeaguePoints => "league_points",
        BountyHunterHunter => "bounty_hunter_hunter",
        BountyHunterRogue => "bounty_hunter_rogue",
        ClueScrollsAll => "clue_scrolls_all",
        ClueScrollsBeginner => "clue_scrolls_beginner",
        ClueScrollsEasy => "clue_scrolls_easy",
        ClueScrollsMedium => "clue_scrolls_medium",
        ClueScrollsHard => "clue_scrolls_hard",
        ClueScrollsElite => "clue_scrolls_elite",
        ClueScrollsMaster => "clue_scrolls_master",
        LastManStanding => "last_man_standing",
        PvpArena => "pvp_arena",
        SoulWarsZeal => "soul_wars_zeal",
        GuardiansOfTheRift => "guardians_of_the_rift",
    }
}

wire_enum! {
    /// A boss with tracked kill counts.
    Boss {
        AbyssalSire => "abyssal_sire",
        AlchemicalHydra => "alchemical_hydra",
        BarrowsChests => "barrows_chests",
        Bryophyta => "bryophyta",
        Callisto => "callisto",
        Cerberus => "cerberus",
        ChambersOfXeric => "chambers_of_xeric",
        ChambersOfXericChallenge => "chambers_of_xeric_challenge_mode",
        ChaosElemental => "chaos_elemental",
        ChaosFanatic => "chaos_fanatic",
        CommanderZilyana => "commander_zilyana",
        CorporealBeast => "corporeal_beast",
        CrazyArchaeologist => "crazy_archaeologist",
        DagannothPrime => "dagannoth_prime",
        DagannothRex => "dagannoth_rex",
        DagannothSupreme => "dagannoth_supreme",
        DerangedArchaeologist => "deranged_archaeologist",
        GeneralGraardor => "general_graardor",
        GiantMole => "giant_mole",
        GrotesqueGuardians => "grotesque_guardians",
        Hespori => "hespori",
        KalphiteQueen => "kalphite_queen",
        KingBlackDragon => "king_black_dragon",
        Kraken => "kraken",
        Kreearra => "kreearra",
        KrilTsutsaroth => "kril_tsutsaroth",
        Mimic => "mimic",
        Nex => "nex",
        Nightmare => "nightmare",
        PhosanisNightmare => "phosanis_nightmare",
        Obor => "obor",
        PhantomMuspah => "phantom_muspah",
        Sarachnis => "sarachnis",
        Scorpia => "scorpia",
        Skotizo => "skotizo",
        Tempoross => "tempoross",
        TheGauntlet => "the_gauntlet",
        TheCorruptedGauntlet => "the_corrupted_gauntlet",
        TheatreOfBlood => "theatre_of_blood",
        TheatreOfBloodHard => "theatre_of_blood_hard_mode",
        ThermonuclearSmokeDevil => "thermonuclear_smoke_devil",
        TombsOfAmascut => "tombs_of_amascut",
        TombsOfAmascutExpert => "tombs_of_amascut_expert",
        TzkalZuk => "tzkal_zuk",
        TztokJad => "tztok_jad",
        Venenatis => "venenatis",
        Vetion => "vetion",
        Vorkath => "vorkath",
        Wintertodt => "wintertodt",
        Zalcano => "zalcano",
        Zulrah => "zulrah",
    }
}

wire_enum! {
    /// A metric derived from other metrics rather than read from hiscores.
    ComputedMetric {
        Ehp => "ehp",
        Ehb => "ehb",
    }
}

/// The closed union over all metric categories.
///
/// Wire strings are globally unique across the four categories, so a single
/// lookup resolves both the category and the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// A skill metric.
    Skill(Skill),
    /// An activity metric.
    Activity(Activity),
    /// A boss metric.
    Boss(Boss),
    /// A computed metric.
    Computed(ComputedMetric),
}

impl Metric {
    /// The stable wire string of the wrapped member.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill(skill) => skill.as_str(),
            Self::Activity(activity) => activity.as_str(),
            Self::Boss(boss) => boss.as_str(),
            Self::Computed(computed) => computed.as_str(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = UnknownWireValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(skill) = value.parse() {
            return Ok(Self::Skill(skill));
        }
        if let Ok(activity) = value.parse() {
            return Ok(Self::Activity(activity));
        }
        if let Ok(boss) = value.parse() {
            return Ok(Self::Boss(boss));
        }
        if let Ok(computed) = value.parse() {
            return Ok(Self::Computed(computed));
        }

        Err(UnknownWireValue(value.to_owned()))
    }
}

impl serde::Serialize for Metric {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Metric {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Skill> for Metric {
    fn from(skill: Skill) -> Self {
        Self::Skill(skill)
    }
}

impl From<Activity> for Metric {
    fn from(activity: Activity) -> Self {
        Self::Activity(activity)
    }
}

impl From<Boss> for Metric {
    fn from(boss: Boss) -> Self {
        Self::Boss(boss)
    }
}

impl From<ComputedMetric> for Metric {
    fn from(computed: ComputedMetric) -> Self {
        Self::Computed(computed)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_wire_strings_are_exact() {
        assert_eq!(Skill::Overall.as_str(), "overall");
        assert_eq!(Period::FiveMins.as_str(), "five_min");
        assert_eq!(Activity::GuardiansOfTheRift.as_str(), "guardians_of_the_rift");
        assert_eq!(
            Boss::ChambersOfXericChallenge.as_str(),
            "chambers_of_xeric_challenge_mode"
        );
        assert_eq!(Boss::TheatreOfBloodHard.as_str(), "theatre_of_blood_hard_mode");
        assert_eq!(ComputedMetric::Ehp.as_str(), "ehp");
    }

    #[test]
    fn test_metric_lookup_resolves_category_and_member() {
        assert_eq!("overall".parse::<Metric>(), Ok(Metric::Skill(Skill::Overall)));
        assert_eq!("pvp_arena".parse::<Metric>(), Ok(Metric::Activity(Activity::PvpArena)));
        assert_eq!("zulrah".parse::<Metric>(), Ok(Metric::Boss(Boss::Zulrah)));
        assert_eq!("ehb".parse::<Metric>(), Ok(Metric::Computed(ComputedMetric::Ehb)));
    }

    #[test]
    fn test_unknown_metric_string_is_an_error() {
        let err = "sailing".parse::<Metric>();
        assert_eq!(err, Err(UnknownWireValue("sailing".to_owned())));
    }

    #[test]
    fn test_serde_round_trips_through_wire_table() {
        let json = serde_json::to_string(&Metric::Boss(Boss::TzkalZuk)).unwrap();
        assert_eq!(json, "\"tzkal_zuk\"");

        let parsed: Period = serde_json::from_str("\"five_min\"").unwrap();
        assert_eq!(parsed, Period::FiveMins);

        let bad: Result<Skill, _> = serde_json::from_str("\"sailing\"");
        assert!(bad.is_err());
    }
}
