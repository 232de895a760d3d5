use crate::core::{Color, FieldCoord, FieldSource};

use super::fields;

/// Item identifiers of the host's call vocabulary.
///
/// These are the host's own item ids; the engine only passes them through to
/// overlay callers (e.g. to draw the listened-for item next to the horn).
pub mod items {
    /// Sentinel for "no item": the instruction is absent or names nothing
    /// the item table knows.
    pub const NO_ITEM: i32 = -1;

    /// Tofu bait.
    pub const TOFU: i32 = 2963;
    /// Crackers bait.
    pub const CRACKERS: i32 = 2946;
    /// Worms bait.
    pub const WORMS: i32 = 2970;
    /// Poisoned tofu food pack.
    pub const POISONED_TOFU: i32 = 10535;
    /// Poisoned worms food pack.
    pub const POISONED_WORMS: i32 = 10536;
    /// Poisoned meat food pack.
    pub const POISONED_MEAT: i32 = 10537;
    /// Bullet arrow (controlled style).
    pub const BULLET_ARROW: i32 = 10538;
    /// Field arrow (accurate style).
    pub const FIELD_ARROW: i32 = 10539;
    /// Blunt arrow (aggressive style).
    pub const BLUNT_ARROW: i32 = 10540;
    /// Barbed arrow (defensive style).
    pub const BARBED_ARROW: i32 = 10541;
    /// Red egg.
    pub const RED_EGG: i32 = 10531;
    /// Green egg.
    pub const GREEN_EGG: i32 = 10532;
    /// Blue egg.
    pub const BLUE_EGG: i32 = 10533;
}

/// Raw horn-of-glory phrase to canonical short label.
///
/// The horn panel always draws from this closed vocabulary: four composite
/// arrow-style phrases and nine consumables. Lookup is exact-match only and
/// an unknown phrase yields no label at all.
const GLORY_CALLS: [(&str, &str); 13] = [
    ("Controlled/Bullet/Wind", "Controlled/"),
    ("Accurate/Field/Water", "Accurate/"),
    ("Aggressive/Blunt/Earth", "Aggressive/"),
    ("Defensive/Barbed/Fire", "Defensive/"),
    ("Tofu", "Tofu"),
    ("Crackers", "Crackers"),
    ("Worms", "Worms"),
    ("Poison worms", "Pois. Worms"),
    ("Poison tofu", "Pois. Tofu"),
    ("Poison meat", "Pois. Meat"),
    ("Red egg", "Red egg"),
    ("Green egg", "Green egg"),
    ("Blue egg", "Blue egg"),
];

/// Canonical label (or raw role-panel phrase) to item id.
///
/// The egg keys are plural because that is how the role panels phrase them;
/// the singular egg labels produced by the horn-of-glory table therefore
/// resolve to [`items::NO_ITEM`]. That mismatch is inherited host behavior
/// and is kept as-is.
const ITEMS: [(&str, i32); 13] = [
    ("Tofu", items::TOFU),
    ("Crackers", items::CRACKERS),
    ("Worms", items::WORMS),
    ("Pois. Worms", items::POISONED_WORMS),
    ("Pois. Tofu", items::POISONED_TOFU),
    ("Pois. Meat", items::POISONED_MEAT),
    ("Controlled/", items::BULLET_ARROW),
    ("Accurate/", items::FIELD_ARROW),
    ("Aggressive/", items::BLUNT_ARROW),
    ("Defensive/", items::BARBED_ARROW),
    ("Red eggs", items::RED_EGG),
    ("Green eggs", items::GREEN_EGG),
    ("Blue eggs", items::BLUE_EGG),
];

/// UI fields owned by one role, plus its overlay icon.
#[derive(Debug, Clone, Copy)]
struct RoleFields {
    wave: FieldCoord,
    listen: FieldCoord,
    glory_listen: FieldCoord,
    call: FieldCoord,
    call_flash: FieldCoord,
    glory_call: FieldCoord,
    icon: u32,
}

/// Per-role field table, indexed by [`Role::index`].
///
/// The glory listen/call slots are the same field per role, and each role
/// reads its call partner's slot: attacker pairs with collector, defender
/// with healer.
static ROLE_FIELDS: [RoleFields; 4] = [
    RoleFields {
        wave: fields::ATTACKER_WAVE_TEXT,
        listen: fields::ATTACKER_LISTEN_TEXT,
        glory_listen: fields::GLORY_COLLECTOR_LISTEN_TEXT,
        call: fields::ATTACKER_CALL_TEXT,
        call_flash: fields::ATTACKER_CALL_FLASH,
        glory_call: fields::GLORY_COLLECTOR_LISTEN_TEXT,
        icon: 2046,
    },
    RoleFields {
        wave: fields::DEFENDER_WAVE_TEXT,
        listen: fields::DEFENDER_LISTEN_TEXT,
        glory_listen: fields::GLORY_HEALER_LISTEN_TEXT,
        call: fields::DEFENDER_CALL_TEXT,
        call_flash: fields::DEFENDER_CALL_FLASH,
        glory_call: fields::GLORY_HEALER_LISTEN_TEXT,
        icon: 2047,
    },
    RoleFields {
        wave: fields::COLLECTOR_WAVE_TEXT,
        listen: fields::COLLECTOR_LISTEN_TEXT,
        glory_listen: fields::GLORY_ATTACKER_LISTEN_TEXT,
        call: fields::COLLECTOR_CALL_TEXT,
        call_flash: fields::COLLECTOR_CALL_FLASH,
        glory_call: fields::GLORY_ATTACKER_LISTEN_TEXT,
        icon: 2048,
    },
    RoleFields {
        wave: fields::HEALER_WAVE_TEXT,
        listen: fields::HEALER_LISTEN_TEXT,
        glory_listen: fields::GLORY_DEFENDER_LISTEN_TEXT,
        call: fields::HEALER_CALL_TEXT,
        call_flash: fields::HEALER_CALL_FLASH,
        glory_call: fields::GLORY_DEFENDER_LISTEN_TEXT,
        icon: 2049,
    },
];

/// One of the four fixed cooperative roles.
///
/// Variant order is a contract: [`Role::index`] is used as the index into the
/// per-role point array of [`Wave`](super::Wave), and [`Role::ALL`] iterates
/// in that same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Role {
    /// Kills penance rangers and fighters with called arrows.
    #[display("Attacker")]
    Attacker,
    /// Traps penance runners with called bait.
    #[display("Defender")]
    Defender,
    /// Gathers called eggs.
    #[display("Collector")]
    Collector,
    /// Heals teammates and poisons penance healers with called food.
    #[display("Healer")]
    Healer,
}

impl Role {
    /// All roles in ordinal order.
    pub const ALL: [Self; 4] = [Self::Attacker, Self::Defender, Self::Collector, Self::Healer];

    /// Ordinal position (0-3), the per-role point array index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attacker => "Attacker",
            Self::Defender => "Defender",
            Self::Collector => "Collector",
            Self::Healer => "Healer",
        }
    }

    /// Display color for chat lines and overlays.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Attacker => Color::RED,
            Self::Defender => Color::LIGHT_BLUE,
            Self::Collector => Color::YELLOW,
            Self::Healer => Color::DARK_GREEN,
        }
    }

    /// Overlay icon id for this role.
    #[must_use]
    pub fn icon_id(self) -> u32 {
        self.fields().icon
    }

    /// Field carrying the wave number on this role's panel.
    #[must_use]
    pub fn wave_field(self) -> FieldCoord {
        self.fields().wave
    }

    /// Field flashed by the host when this role's call changes.
    #[must_use]
    pub fn call_flash_field(self) -> FieldCoord {
        self.fields().call_flash
    }

    /// Resolves the instruction this role should currently follow.
    ///
    /// Two-tier lookup: the horn-of-glory slot wins when present, and its raw
    /// phrase is canonicalized through the glory table (an unrecognized
    /// phrase yields `None`, never the raw text). Without the glory panel the
    /// role panel's own listen text is returned unmodified.
    pub fn listen_text<'a>(self, source: &'a impl FieldSource) -> Option<&'a str> {
        instruction_text(source, self.fields().glory_listen, self.fields().listen)
    }

    /// Resolves the instruction this role should currently call out, with the
    /// same two-tier lookup as [`Self::listen_text`].
    pub fn call_text<'a>(self, source: &'a impl FieldSource) -> Option<&'a str> {
        instruction_text(source, self.fields().glory_call, self.fields().call)
    }

    /// Item id of the currently listened-for item, or [`items::NO_ITEM`] when
    /// the instruction is absent or names no known item.
    pub fn listen_item_id(self, source: &impl FieldSource) -> i32 {
        self.listen_text(source).map_or(items::NO_ITEM, item_id)
    }

    fn fields(self) -> &'static RoleFields {
        &ROLE_FIELDS[self.index()]
    }
}

fn instruction_text<'a>(
    source: &'a impl FieldSource,
    glory: FieldCoord,
    primary: FieldCoord,
) -> Option<&'a str> {
    if let Some(raw) = source.read_text(glory) {
        return canonical_call(raw);
    }
    source.read_text(primary)
}

fn canonical_call(raw: &str) -> Option<&'static str> {
    GLORY_CALLS
        .iter()
        .find(|(phrase, _)| *phrase == raw)
        .map(|(_, label)| *label)
}

fn item_id(label: &str) -> i32 {
    ITEMS
        .iter()
        .find(|(key, _)| *key == label)
        .map_or(items::NO_ITEM, |(_, id)| *id)
}

#[cfg(test)]
mod tests {
    use crate::core::SnapshotSource;

    use super::*;

    #[test]
    fn test_ordinal_contract() {
        assert_eq!(Role::Attacker.index(), 0);
        assert_eq!(Role::Defender.index(), 1);
        assert_eq!(Role::Collector.index(), 2);
        assert_eq!(Role::Healer.index(), 3);
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Role::Healer.to_string(), "Healer");
        assert_eq!(Role::Attacker.name(), "Attacker");
    }

    #[test]
    fn test_glory_phrase_resolves_to_canonical_label() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::GLORY_DEFENDER_LISTEN_TEXT, "Poison tofu");
        // The role panel text must lose to the glory panel.
        snapshot.set_text(fields::HEALER_LISTEN_TEXT, "Pois. Worms");

        assert_eq!(Role::Healer.listen_text(&snapshot), Some("Pois. Tofu"));
    }

    #[test]
    fn test_primary_text_returned_unmodified_without_glory() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::ATTACKER_LISTEN_TEXT, "Controlled/");

        assert_eq!(Role::Attacker.listen_text(&snapshot), Some("Controlled/"));
    }

    #[test]
    fn test_unknown_glory_phrase_yields_no_text() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::GLORY_COLLECTOR_LISTEN_TEXT, "Omega egg");
        // No fallback to the role panel once the glory panel is visible.
        snapshot.set_text(fields::ATTACKER_LISTEN_TEXT, "Accurate/");

        assert_eq!(Role::Attacker.listen_text(&snapshot), None);
    }

    #[test]
    fn test_both_fields_absent_yields_no_text() {
        let snapshot = SnapshotSource::new();
        assert_eq!(Role::Collector.listen_text(&snapshot), None);
        assert_eq!(Role::Collector.call_text(&snapshot), None);
    }

    #[test]
    fn test_call_text_uses_call_fields() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::DEFENDER_CALL_TEXT, "Pois. Meat");

        assert_eq!(Role::Defender.call_text(&snapshot), Some("Pois. Meat"));
    }

    #[test]
    fn test_listen_item_id_from_primary_text() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::DEFENDER_LISTEN_TEXT, "Crackers");

        assert_eq!(Role::Defender.listen_item_id(&snapshot), items::CRACKERS);
    }

    #[test]
    fn test_listen_item_id_sentinel_when_absent() {
        let snapshot = SnapshotSource::new();
        assert_eq!(Role::Defender.listen_item_id(&snapshot), items::NO_ITEM);
    }

    #[test]
    fn test_glory_arrow_phrase_maps_to_arrow_item() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::GLORY_COLLECTOR_LISTEN_TEXT, "Defensive/Barbed/Fire");

        assert_eq!(Role::Attacker.listen_text(&snapshot), Some("Defensive/"));
        assert_eq!(Role::Attacker.listen_item_id(&snapshot), items::BARBED_ARROW);
    }

    #[test]
    fn test_glory_egg_label_has_no_item() {
        // The item table keys eggs in the plural, so the singular canonical
        // label from the glory table resolves to no item. Inherited host
        // behavior, see the ITEMS doc.
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::GLORY_ATTACKER_LISTEN_TEXT, "Red egg");

        assert_eq!(Role::Collector.listen_text(&snapshot), Some("Red egg"));
        assert_eq!(Role::Collector.listen_item_id(&snapshot), items::NO_ITEM);
    }

    #[test]
    fn test_plural_egg_text_from_role_panel_maps_to_item() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_text(fields::COLLECTOR_LISTEN_TEXT, "Blue eggs");

        assert_eq!(Role::Collector.listen_item_id(&snapshot), items::BLUE_EGG);
    }

    #[test]
    fn test_every_glory_phrase_has_a_label() {
        let mut snapshot = SnapshotSource::new();
        for (phrase, label) in GLORY_CALLS {
            snapshot.set_text(fields::GLORY_HEALER_LISTEN_TEXT, phrase);
            assert_eq!(Role::Defender.listen_text(&snapshot), Some(label));
        }
    }
}
