//! Coordinate contract of the host minigame interface.
//!
//! Every UI field the tracker reads is named here once; the rest of the
//! engine refers to these constants and never to raw coordinates. Each of the
//! four role panels carries the same child layout, so the per-role constants
//! differ only in their group id.

use crate::core::FieldCoord;

/// Attacker in-wave panel group.
pub const ATTACKER_GROUP: u32 = 485;
/// Collector in-wave panel group.
pub const COLLECTOR_GROUP: u32 = 486;
/// Defender in-wave panel group.
pub const DEFENDER_GROUP: u32 = 487;
/// Healer in-wave panel group.
pub const HEALER_GROUP: u32 = 488;
/// Horn-of-glory panel group, visible only while operating the horn.
pub const GLORY_GROUP: u32 = 507;
/// End-of-wave reward panel group.
pub const REWARD_GROUP: u32 = 158;

const WAVE_CHILD: u32 = 4;
const LISTEN_CHILD: u32 = 6;
const CALL_CHILD: u32 = 8;
const CALL_FLASH_CHILD: u32 = 9;

/// Wave number shown on the attacker panel.
pub const ATTACKER_WAVE_TEXT: FieldCoord = FieldCoord::new(ATTACKER_GROUP, WAVE_CHILD);
/// Attacker listen instruction (which arrows to use).
pub const ATTACKER_LISTEN_TEXT: FieldCoord = FieldCoord::new(ATTACKER_GROUP, LISTEN_CHILD);
/// Attacker call instruction (what to tell the collector).
pub const ATTACKER_CALL_TEXT: FieldCoord = FieldCoord::new(ATTACKER_GROUP, CALL_CHILD);
/// Flash overlay shown when the attacker call changes.
pub const ATTACKER_CALL_FLASH: FieldCoord = FieldCoord::new(ATTACKER_GROUP, CALL_FLASH_CHILD);

/// Wave number shown on the defender panel.
pub const DEFENDER_WAVE_TEXT: FieldCoord = FieldCoord::new(DEFENDER_GROUP, WAVE_CHILD);
/// Defender listen instruction (which bait to drop).
pub const DEFENDER_LISTEN_TEXT: FieldCoord = FieldCoord::new(DEFENDER_GROUP, LISTEN_CHILD);
/// Defender call instruction (what to tell the healer).
pub const DEFENDER_CALL_TEXT: FieldCoord = FieldCoord::new(DEFENDER_GROUP, CALL_CHILD);
/// Flash overlay shown when the defender call changes.
pub const DEFENDER_CALL_FLASH: FieldCoord = FieldCoord::new(DEFENDER_GROUP, CALL_FLASH_CHILD);

/// Wave number shown on the collector panel.
pub const COLLECTOR_WAVE_TEXT: FieldCoord = FieldCoord::new(COLLECTOR_GROUP, WAVE_CHILD);
/// Collector listen instruction (which egg to collect).
pub const COLLECTOR_LISTEN_TEXT: FieldCoord = FieldCoord::new(COLLECTOR_GROUP, LISTEN_CHILD);
/// Collector call instruction (what to tell the attacker).
pub const COLLECTOR_CALL_TEXT: FieldCoord = FieldCoord::new(COLLECTOR_GROUP, CALL_CHILD);
/// Flash overlay shown when the collector call changes.
pub const COLLECTOR_CALL_FLASH: FieldCoord = FieldCoord::new(COLLECTOR_GROUP, CALL_FLASH_CHILD);

/// Wave number shown on the healer panel.
pub const HEALER_WAVE_TEXT: FieldCoord = FieldCoord::new(HEALER_GROUP, WAVE_CHILD);
/// Healer listen instruction (which poison food to use).
pub const HEALER_LISTEN_TEXT: FieldCoord = FieldCoord::new(HEALER_GROUP, LISTEN_CHILD);
/// Healer call instruction (what to tell the defender).
pub const HEALER_CALL_TEXT: FieldCoord = FieldCoord::new(HEALER_GROUP, CALL_CHILD);
/// Flash overlay shown when the healer call changes.
pub const HEALER_CALL_FLASH: FieldCoord = FieldCoord::new(HEALER_GROUP, CALL_FLASH_CHILD);

/// Attacker instruction slot on the horn-of-glory panel.
pub const GLORY_ATTACKER_LISTEN_TEXT: FieldCoord = FieldCoord::new(GLORY_GROUP, 2);
/// Defender instruction slot on the horn-of-glory panel.
pub const GLORY_DEFENDER_LISTEN_TEXT: FieldCoord = FieldCoord::new(GLORY_GROUP, 3);
/// Collector instruction slot on the horn-of-glory panel.
pub const GLORY_COLLECTOR_LISTEN_TEXT: FieldCoord = FieldCoord::new(GLORY_GROUP, 4);
/// Healer instruction slot on the horn-of-glory panel.
pub const GLORY_HEALER_LISTEN_TEXT: FieldCoord = FieldCoord::new(GLORY_GROUP, 5);

/// Attacks made with the wrong arrow type.
pub const FAILED_ATTACKS: FieldCoord = FieldCoord::new(REWARD_GROUP, 7);
/// Runners that escaped past the traps.
pub const RUNNERS_PASSED: FieldCoord = FieldCoord::new(REWARD_GROUP, 8);
/// Eggs collected during the wave.
pub const EGGS_COLLECTED: FieldCoord = FieldCoord::new(REWARD_GROUP, 9);
/// Hitpoints replenished by the healer.
pub const HITPOINTS_REPLENISHED: FieldCoord = FieldCoord::new(REWARD_GROUP, 10);
/// Wrong poison packs used on healers.
pub const WRONG_POISON_PACKS: FieldCoord = FieldCoord::new(REWARD_GROUP, 11);

/// Point delta for failed attacks (zero or negative).
pub const FAILED_ATTACKS_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 12);
/// Point delta for runners passed (zero or negative).
pub const RUNNERS_PASSED_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 13);
/// Point delta for eggs collected.
pub const EGGS_COLLECTED_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 14);
/// Point delta for hitpoints replenished.
pub const HITPOINTS_REPLENISHED_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 15);
/// Point delta for wrong poison packs (zero or negative).
pub const WRONG_POISON_PACKS_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 16);

/// Points from penance rangers killed, credited to the attacker.
pub const RANGERS_KILLED: FieldCoord = FieldCoord::new(REWARD_GROUP, 17);
/// Points from penance fighters killed, credited to the attacker.
pub const FIGHTERS_KILLED: FieldCoord = FieldCoord::new(REWARD_GROUP, 18);
/// Points from penance runners killed, credited to the defender.
pub const RUNNERS_KILLED: FieldCoord = FieldCoord::new(REWARD_GROUP, 19);
/// Points from penance healers killed, credited to the healer.
pub const HEALERS_KILLED: FieldCoord = FieldCoord::new(REWARD_GROUP, 20);

/// Flat participation points granted to every role each wave.
pub const BASE_POINTS: FieldCoord = FieldCoord::new(REWARD_GROUP, 21);
