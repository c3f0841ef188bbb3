// ABOUTME: Group domain models, memberships, statistics, and hiscores entries
// ABOUTME: Hiscores data dispatches on the metric discriminator to a closed set of shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::metrics::{wire_enum, Activity, Boss, ComputedMetric, Metric, Skill};

use super::players::{Player, StatisticsSnapshot};
use super::Gains;

wire_enum! {
    /// The role a member holds within a group.
    GroupRole {
        Achiever => "achiever",
        Adept => "adept",
        Administrator => "administrator",
        Admiral => "admiral",
        Adventurer => "adventurer",
        Archer => "archer",
        Artillery => "artillery",
        Artisan => "artisan",
        Assassin => "assassin",
        Assistant => "assistant",
        Athlete => "athlete",
        Attacker => "attacker",
        Bandit => "bandit",
        Bandosian => "bandosian",
        Barbarian => "barbarian",
        Battlemage => "battlemage",
        Beast => "beast",
        Berserker => "berserker",
        Blisterwood => "blisterwood",
        Blood => "blood",
        Blue => "blue",
        Bob => "bob",
        Body => "body",
        Brassican => "brassican",
        Brawler => "brawler",
        Brigadier => "brigadier",
        Brigand => "brigand",
        Bronze => "bronze",
        Bruiser => "bruiser",
        Bulwark => "bulwark",
        Burglar => "burglar",
        Burnt => "burnt",
        Cadet => "cadet",
        Captain => "captain",
        Carry => "carry",
        Champion => "champion",
        Chief => "chief",
        Colonel => "colonel",
        Commander => "commander",
        Competitor => "competitor",
        Completionist => "completionist",
        Constructor => "constructor",
        Cook => "cook",
        Coordinator => "coordinator",
        Corporal => "corporal",
        Cosmic => "cosmic",
        Councillor => "councillor",
        Crafter => "crafter",
        Crew => "crew",
        Crusader => "crusader",
        Cutpurse => "cutpurse",
        Death => "death",
        Defender => "defender",
        Defiler => "defiler",
        DeputyOwner => "deputy_owner",
        Destroyer => "destroyer",
        Diamond => "diamond",
        Diseased => "diseased",
        Doctor => "doctor",
        Dogsbody => "dogsbody",
        Dragon => "dragon",
        Dragonstone => "dragonstone",
        Druid => "druid",
        Duellist => "duellist",
        Earth => "earth",
        Elite => "elite",
        Emerald => "emerald",
        Enforcer => "enforcer",
        Epic => "epic",
        Executive => "executive",
        Expert => "expert",
        Explorer => "explorer",
        Farmer => "farmer",
        Feeder => "feeder",
        Fighter => "fighter",
        Fire => "fire",
        Firemaker => "firemaker",
        Firestarter => "firestarter",
        Fisher => "fisher",
        Fletcher => "fletcher",
        Forager => "forager",
        Fremennik => "fremennik",
        Gamer => "gamer",
        Gatherer => "gatherer",
        General => "general",
        GnomeChild => "gnome_child",
        GnomeElder => "gnome_elder",
        Goblin => "goblin",
        Gold => "gold",
        Goon => "goon",
        Green => "green",
        Grey => "grey",
        Guardian => "guardian",
        Guthixian => "guthixian",
        Harpoon => "harpoon",
        Healer => "healer",
        Hellcat => "hellcat",
        Helper => "helper",
        Herbologist => "herbologist",
        Hero => "hero",
        Holy => "holy",
        Hoarder => "hoarder",
        Hunter => "hunter",
        Ignitor => "ignitor",
        Illusionist => "illusionist",
        Imp => "imp",
        Infantry => "infantry",
        Inquisitor => "inquisitor",
        Iron => "iron",
        Jade => "jade",
        Justiciar => "justiciar",
        Kandarin => "kandarin",
        Karamjan => "karamjan",
        Kharidian => "kharidian",
        Kitten => "kitten",
        Knight => "knight",
        Labourer => "labourer",
        Law => "law",
        Leader => "leader",
        Learner => "learner",
        Legacy => "legacy",
        Legend => "legend",
        Legionnaire => "legionnaire",
        Lieutenant => "lieutenant",
        Looter => "looter",
        Lumberjack => "lumberjack",
        Magic => "magic",
        Magician => "magician",
        Major => "major",
        Maple => "maple",
        Marshal => "marshal",
        Master => "master",
        Maxed => "maxed",
        Mediator => "mediator",
        Medic => "medic",
        Mentor => "mentor",
        Member => "member",
        Merchant => "merchant",
        Minion => "minion",
        Miner => "miner",
        Minister => "minister",
        Moderator => "moderator",
        Monarch => "monarch",
        Morytanian => "morytanian",
        Mystic => "mystic",
        Myth => "myth",
        Natural => "natural",
        Nature => "nature",
        Necromancer => "necromancer",
        Ninja => "ninja",
        Nurse => "nurse",
        Oak => "oak",
        Officer => "officer",
        Onyx => "onyx",
        Opal => "opal",
        Oracle => "oracle",
        Orange => "orange",
        Owner => "owner",
        Page => "page",
        Paladin => "paladin",
        Pawn => "pawn",
        Pilgrim => "pilgrim",
        Pine => "pine",
        Pink => "pink",
        Prefect => "prefect",
        Priest => "priest",
        Private => "private",
        Prodigy => "prodigy",
        Proselyte => "proselyte",
        Prospector => "prospector",
        Protector => "protector",
        Pure => "pure",
        Purple => "purple",
        Pyromancer => "pyromancer",
        Quester => "quester",
        Racer => "racer",
        Raider => "raider",
        Ranger => "ranger",
        RecordChaser => "record_chaser",
        Recruit => "recruit",
        Recruiter => "recruiter",
        RedTopaz => "red_topaz",
        Red => "red",
        Rogue => "rogue",
        Ruby => "ruby",
        Rune => "rune",
        Runecrafter => "runecrafter",
        Saboteur => "saboteur",
        Sage => "sage",
        Sapphire => "sapphire",
        Saradominist => "saradominist",
        Saviour => "saviour",
        Scavenger => "scavenger",
        Scholar => "scholar",
        Scourge => "scourge",
        Scout => "scout",
        Scribe => "scribe",
        Seer => "seer",
        Senator => "senator",
        Sentry => "sentry",
        Serenist => "serenist",
        Sergeant => "sergeant",
        Shaman => "shaman",
        Sheriff => "sheriff",
        ShortGreenGuy => "short_green_guy",
        Skiller => "skiller",
        Skulled => "skulled",
        Slayer => "slayer",
        Smiter => "smiter",
        Smith => "smith",
        Smuggler => "smuggler",
        Sniper => "sniper",
        Soul => "soul",
        Specialist => "specialist",
        SpeedRunner => "speed_runner",
        Spellcaster => "spellcaster",
        Squire => "squire",
        Staff => "staff",
        Steel => "steel",
        Strider => "strider",
        Striker => "striker",
        Stylist => "stylist",
        Summoner => "summoner",
        Superior => "superior",
        Supervisor => "supervisor",
        Teacher => "teacher",
        Templar => "templar",
        Therapist => "therapist",
        Thief => "thief",
        Tirannwn => "tirannwn",
        Trialist => "trialist",
        Trickster => "trickster",
        Tzkal => "tzkal",
        Tztok => "tztok",
        Unholy => "unholy",
        Vagrant => "vagrant",
        Vanguard => "vanguard",
        Walker => "walker",
        Wanderer => "wanderer",
        Warden => "warden",
        Warlock => "warlock",
        Warrior => "warrior",
        Water => "water",
        Wild => "wild",
        Willow => "willow",
        Wily => "wily",
        Wintumber => "wintumber",
        Witch => "witch",
        Wizard => "wizard",
        Worker => "worker",
        Wrath => "wrath",
        Xerician => "xerician",
        Yellow => "yellow",
        Yew => "yew",
        Zamorakian => "zamorakian",
        Zarosian => "zarosian",
        Zealot => "zealot",
        Zenyte => "zenyte",
    }
}

/// A group of tracked players.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// The unique ID of the group.
    pub id: i32,
    /// The group name.
    pub name: String,
    /// The in-game clan chat channel.
    pub clan_chat: Option<String>,
    /// The group description, when set.
    #[serde(default)]
    pub description: Option<String>,
    /// The group's home world, when set.
    #[serde(default)]
    pub homeworld: Option<i32>,
    /// Whether the group is verified.
    pub verified: bool,
    /// The group's score.
    pub score: i32,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
    /// When the group was last updated.
    pub updated_at: DateTime<Utc>,
    /// The number of members.
    pub member_count: i32,
}

/// One player's membership within one group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// The ID of the member player.
    pub player_id: i32,
    /// The ID of the group.
    pub group_id: i32,
    /// The member's role, when one is assigned.
    #[serde(default)]
    pub role: Option<GroupRole>,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
    /// When the membership was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A membership as listed on a group, with the member player attached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    /// The membership itself.
    #[serde(flatten)]
    pub membership: Membership,
    /// The member player.
    pub player: Player,
}

/// A membership as listed on a player, with the group attached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMembership {
    /// The membership itself.
    #[serde(flatten)]
    pub membership: Membership,
    /// The group the player belongs to.
    pub group: Group,
}

/// A group with its memberships, as returned by detail and creation
/// endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    /// The group itself.
    #[serde(flatten)]
    pub group: Group,
    /// The group's memberships.
    pub memberships: Vec<GroupMembership>,
    /// The verification code; only present when the group was just
    /// created.
    #[serde(default)]
    pub verification_code: Option<String>,
}

/// A condensed member entry built by the caller and sent to member
/// mutation endpoints. The `role` key is omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMemberFragment {
    /// The member's username.
    pub username: String,
    /// The role to assign, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<GroupRole>,
}

impl GroupMemberFragment {
    /// Creates a fragment with no role.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: None,
        }
    }

    /// Creates a fragment with a role.
    #[must_use]
    pub fn with_role(username: impl Into<String>, role: GroupRole) -> Self {
        Self {
            username: username.into(),
            role: Some(role),
        }
    }
}

/// Caller-built payload for editing a group. Omitted fields are left
/// unchanged by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditGroupRequest {
    /// A new group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A new clan chat channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan_chat: Option<String>,
    /// A new description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A new home world.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeworld: Option<i32>,
    /// A replacement member list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<GroupMemberFragment>>,
}

/// One member's gains over a requested interval, as listed on a group
/// gained leaderboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberGains {
    /// The member player.
    pub player: Player,
    /// The start of the interval.
    pub start_date: DateTime<Utc>,
    /// The end of the interval.
    pub end_date: DateTime<Utc>,
    /// The gains over the interval.
    pub data: Gains,
}

/// Hiscores values for a skill metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHiscoresSkillItem {
    /// The skill measured.
    pub metric: Skill,
    /// Hiscores rank.
    pub rank: i64,
    /// Skill level.
    pub level: i32,
    /// Skill experience.
    pub experience: i64,
}

/// Hiscores values for a boss metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHiscoresBossItem {
    /// The boss measured.
    pub metric: Boss,
    /// Hiscores rank.
    pub rank: i64,
    /// Kill count.
    pub kills: i64,
}

/// Hiscores values for an activity metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHiscoresActivityItem {
    /// The activity measured.
    pub metric: Activity,
    /// Hiscores rank.
    pub rank: i64,
    /// Activity score.
    pub score: i64,
}

/// Hiscores values for a computed metric.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupHiscoresComputedItem {
    /// The computed metric measured.
    pub metric: ComputedMetric,
    /// Hiscores rank.
    pub rank: i64,
    /// The computed value.
    pub value: f64,
}

/// The metric-dependent portion of a hiscores entry.
///
/// The shape is resolved by the `metric` discriminator inside the payload:
/// skills carry rank/level/experience, bosses rank/kills, activities
/// rank/score, and computed metrics rank/value. An unrecognized metric is
/// a deserialization failure, never a silently chosen variant.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupHiscoresData {
    /// Skill-shaped values.
    Skill(GroupHiscoresSkillItem),
    /// Boss-shaped values.
    Boss(GroupHiscoresBossItem),
    /// Activity-shaped values.
    Activity(GroupHiscoresActivityItem),
    /// Computed-metric-shaped values.
    Computed(GroupHiscoresComputedItem),
}

/// Raw hiscores data before the discriminator dispatch.
#[derive(Debug, Deserialize)]
struct RawHiscoresData {
    metric: String,
    rank: i64,
    #[serde(default)]
    level: Option<i32>,
    #[serde(default)]
    experience: Option<i64>,
    #[serde(default)]
    kills: Option<i64>,
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    value: Option<f64>,
}

impl<'de> Deserialize<'de> for GroupHiscoresData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHiscoresData::deserialize(deserializer)?;

        let metric: Metric = raw
            .metric
            .parse()
            .map_err(|_| D::Error::custom(format!("unrecognized metric: {}", raw.metric)))?;

        match metric {
            Metric::Skill(metric) => Ok(Self::Skill(GroupHiscoresSkillItem {
                metric,
                rank: raw.rank,
                level: raw.level.ok_or_else(|| D::Error::missing_field("level"))?,
                experience: raw
                    .experience
                    .ok_or_else(|| D::Error::missing_field("experience"))?,
            })),
            Metric::Boss(metric) => Ok(Self::Boss(GroupHiscoresBossItem {
                metric,
                rank: raw.rank,
                kills: raw.kills.ok_or_else(|| D::Error::missing_field("kills"))?,
            })),
            Metric::Activity(metric) => Ok(Self::Activity(GroupHiscoresActivityItem {
                metric,
                rank: raw.rank,
                score: raw.score.ok_or_else(|| D::Error::missing_field("score"))?,
            })),
            Metric::Computed(metric) => Ok(Self::Computed(GroupHiscoresComputedItem {
                metric,
                rank: raw.rank,
                value: raw.value.ok_or_else(|| D::Error::missing_field("value"))?,
            })),
        }
    }
}

/// One player's entry on a group hiscores leaderboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupHiscoresEntry {
    /// The player holding the entry.
    pub player: Player,
    /// The metric-dependent values.
    pub data: GroupHiscoresData,
}

/// Accumulated statistics over a group's members.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    /// Members with maxed combat stats.
    pub maxed_combat_count: i32,
    /// Members with maxed total level.
    pub maxed_total_count: i32,
    /// Members with 200m experience in every skill.
    #[serde(rename = "maxed200msCount")]
    pub maxed_200ms_count: i32,
    /// The average stats across all members.
    pub average_stats: StatisticsSnapshot,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]

    use super::*;

    #[test]
    fn test_member_fragment_omits_absent_role() {
        let fragment = GroupMemberFragment::new("jonxslays");
        let json = serde_json::to_string(&fragment).unwrap();

        assert_eq!(json, r#"{"username":"jonxslays"}"#);
    }

    #[test]
    fn test_member_fragment_serializes_role_wire_value() {
        let fragment = GroupMemberFragment::with_role("jonxslays", GroupRole::DeputyOwner);
        let json = serde_json::to_string(&fragment).unwrap();

        assert_eq!(json, r#"{"username":"jonxslays","role":"deputy_owner"}"#);
    }

    #[test]
    fn test_hiscores_data_dispatches_on_skill_metric() {
        let json = serde_json::json!({
            "metric": "attack", "rank": 4, "level": 99, "experience": 200_000_000
        });

        let data: GroupHiscoresData = serde_json::from_value(json).unwrap();
        let GroupHiscoresData::Skill(item) = data else {
            panic!("expected skill-shaped data");
        };

        assert_eq!(item.metric, Skill::Attack);
        assert_eq!(item.level, 99);
        assert_eq!(item.experience, 200_000_000);
    }

    #[test]
    fn test_hiscores_data_dispatches_on_boss_metric() {
        let json = serde_json::json!({ "metric": "zulrah", "rank": 1, "kills": 5000 });

        let data: GroupHiscoresData = serde_json::from_value(json).unwrap();
        assert_eq!(
            data,
            GroupHiscoresData::Boss(GroupHiscoresBossItem {
                metric: Boss::Zulrah,
                rank: 1,
                kills: 5000,
            })
        );
    }

    #[test]
    fn test_hiscores_data_dispatches_on_activity_metric() {
        let json = serde_json::json!({ "metric": "soul_wars_zeal", "rank": 2, "score": 1200 });

        let data: GroupHiscoresData = serde_json::from_value(json).unwrap();
        assert_eq!(
            data,
            GroupHiscoresData::Activity(GroupHiscoresActivityItem {
                metric: Activity::SoulWarsZeal,
                rank: 2,
                score: 1200,
            })
        );
    }

    #[test]
    fn test_hiscores_data_dispatches_on_computed_metric() {
        let json = serde_json::json!({ "metric": "ehp", "rank": 3, "value": 1042.5 });

        let data: GroupHiscoresData = serde_json::from_value(json).unwrap();
        let GroupHiscoresData::Computed(item) = data else {
            panic!("expected computed-shaped data");
        };

        assert_eq!(item.metric, ComputedMetric::Ehp);
        assert_eq!(item.value, 1042.5);
    }

    #[test]
    fn test_hiscores_data_rejects_unrecognized_metric() {
        let json = serde_json::json!({ "metric": "sailing", "rank": 1, "score": 10 });

        let result: Result<GroupHiscoresData, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_hiscores_data_rejects_mismatched_shape() {
        // Skill metric without skill fields must not fall through to
        // another variant.
        let json = serde_json::json!({ "metric": "attack", "rank": 4, "kills": 100 });

        let result: Result<GroupHiscoresData, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_group_missing_id_fails_atomically() {
        let json = serde_json::json!({
            "name": "Wise Old Men",
            "clanChat": "wiseoldman",
            "verified": true,
            "score": 100,
            "createdAt": "2021-01-26T00:19:42.224Z",
            "updatedAt": "2021-01-26T00:19:42.224Z",
            "memberCount": 3
        });

        let result: Result<Group, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
