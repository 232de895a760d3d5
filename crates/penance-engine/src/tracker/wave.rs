use std::time::Duration;

use crate::core::{Color, FieldCoord, FieldSource, LineBuilder};

use super::{fields, role::Role, timer::WaveTimer};

/// Category names for the summary line, in the fixed category order.
const SUMMARY_DESCRIPTIONS: [&str; 5] = [
    "Wrong attacks",
    "Runners passed",
    "Eggs",
    "Hp",
    "Wrong poison",
];

/// Raw amount fields, aligned with [`SUMMARY_DESCRIPTIONS`].
const AMOUNT_FIELDS: [FieldCoord; 5] = [
    fields::FAILED_ATTACKS,
    fields::RUNNERS_PASSED,
    fields::EGGS_COLLECTED,
    fields::HITPOINTS_REPLENISHED,
    fields::WRONG_POISON_PACKS,
];

const FAILED_ATTACKS_INDEX: usize = 0;
const ATTACKER_POINT_FIELDS: [FieldCoord; 3] = [
    fields::FAILED_ATTACKS_POINTS,
    fields::RANGERS_KILLED,
    fields::FIGHTERS_KILLED,
];

const RUNNERS_PASSED_INDEX: usize = 0;
const DEFENDER_POINT_FIELDS: [FieldCoord; 2] =
    [fields::RUNNERS_PASSED_POINTS, fields::RUNNERS_KILLED];

const EGGS_COLLECTED_INDEX: usize = 0;
const COLLECTOR_POINT_FIELDS: [FieldCoord; 1] = [fields::EGGS_COLLECTED_POINTS];

const HITPOINTS_REPLENISHED_INDEX: usize = 0;
const WRONG_POISON_PACKS_INDEX: usize = 1;
const HEALER_POINT_FIELDS: [FieldCoord; 3] = [
    fields::HITPOINTS_REPLENISHED_POINTS,
    fields::WRONG_POISON_PACKS_POINTS,
    fields::HEALERS_KILLED,
];

// Reward formula is collected / 4.35 with the input capped at 60 eggs, so
// anything above 60 is clamped before display and scoring.
const MAXIMUM_COLLECTED_EGGS: i32 = 60;
// Reward formula is healed / 18 capped at 28 reward points, i.e. 504 raw hp.
const MAXIMUM_HP_HEALED: i32 = 504;

/// Seconds between call rotations.
const CALL_ROTATION_SECS: u64 = 30;

/// One played wave of the minigame: raw counters, point deltas, and per-role
/// point accumulation.
///
/// Constructed when the host announces the wave; the live counters
/// ([`set_eggs_count`](Self::set_eggs_count) and friends) are updated as
/// events arrive, and [`set_amounts`](Self::set_amounts) /
/// [`set_points`](Self::set_points) pull the final reward-panel values once
/// the wave-complete signal fires. After that the wave is kept as read-only
/// history.
///
/// The counter and point-delta arrays are always five elements in the fixed
/// category order {failed attacks, runners passed, eggs, hp, wrong poison};
/// the per-role array is four elements in [`Role::index`] order.
#[derive(Debug, Clone)]
pub struct Wave {
    number: u32,
    role: Option<Role>,
    timer: Option<WaveTimer>,
    eggs_count: i32,
    wrong_eggs_count: i32,
    hp_healed: i32,
    amounts: [i32; 5],
    points: [i32; 5],
    roles_points: [i32; 4],
}

impl Wave {
    /// Creates a wave with zeroed counters. `role` is `None` for a spectator
    /// wave, and `timer` is `None` when no call rotation applies.
    #[must_use]
    pub fn new(number: u32, role: Option<Role>, timer: Option<WaveTimer>) -> Self {
        Self {
            number,
            role,
            timer,
            eggs_count: 0,
            wrong_eggs_count: 0,
            hp_healed: 0,
            amounts: [0; 5],
            points: [0; 5],
            roles_points: [0; 4],
        }
    }

    /// Wave number assigned at creation.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Role played this wave, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    /// Raw amounts in the fixed category order.
    #[must_use]
    pub const fn amounts(&self) -> &[i32; 5] {
        &self.amounts
    }

    /// Point deltas in the fixed category order.
    #[must_use]
    pub const fn points(&self) -> &[i32; 5] {
        &self.points
    }

    /// Cumulative per-role points, indexed by [`Role::index`].
    #[must_use]
    pub const fn roles_points(&self) -> &[i32; 4] {
        &self.roles_points
    }

    /// Eggs collected so far, as counted live by the caller.
    #[must_use]
    pub const fn eggs_count(&self) -> i32 {
        self.eggs_count
    }

    /// Eggs wrongly delivered so far.
    #[must_use]
    pub const fn wrong_eggs_count(&self) -> i32 {
        self.wrong_eggs_count
    }

    /// Updates the live egg counter.
    pub const fn set_eggs_count(&mut self, count: i32) {
        self.eggs_count = count;
    }

    /// Updates the live wrong-egg counter.
    pub const fn set_wrong_eggs_count(&mut self, count: i32) {
        self.wrong_eggs_count = count;
    }

    /// Updates the live healed-hitpoints counter.
    pub const fn set_hp_healed(&mut self, hp: i32) {
        self.hp_healed = hp;
    }

    /// Seconds until the current calls rotate, or -1 when no timer is
    /// attached.
    ///
    /// At an exact rotation boundary this reports 30 - the full length of
    /// the window that just opened - never 0.
    #[must_use]
    pub fn time_until_call_change(&self) -> i32 {
        self.timer
            .as_ref()
            .map_or(-1, |timer| seconds_until_call_change(timer.wave_time()))
    }

    /// Eggs that count toward the reward: collected minus wrongly delivered,
    /// clamped to the host's 60-egg reward cap.
    ///
    /// No lower clamp is applied; more wrong deliveries than collections
    /// yields a negative count, matching the host formula literally.
    #[must_use]
    pub fn collected_eggs_count(&self) -> i32 {
        (self.eggs_count - self.wrong_eggs_count).min(MAXIMUM_COLLECTED_EGGS)
    }

    /// Hitpoints healed, clamped to the host's 504-hp reward cap.
    #[must_use]
    pub fn hp_healed(&self) -> i32 {
        self.hp_healed.min(MAXIMUM_HP_HEALED)
    }

    /// Pulls the five raw amount counters from the reward panel. Absent
    /// fields read as 0. Meaningful only after the wave-complete signal.
    pub fn set_amounts(&mut self, source: &impl FieldSource) {
        for (amount, coord) in self.amounts.iter_mut().zip(AMOUNT_FIELDS) {
            *amount = field_value(source, coord);
        }
    }

    /// Pulls the point deltas from the reward panel and accumulates per-role
    /// points: the flat base points go to every role, then each role's slot
    /// receives the sum of the fields semantically tied to it.
    pub fn set_points(&mut self, source: &impl FieldSource) {
        self.points[0] = field_value(source, ATTACKER_POINT_FIELDS[FAILED_ATTACKS_INDEX]);
        self.points[1] = field_value(source, DEFENDER_POINT_FIELDS[RUNNERS_PASSED_INDEX]);
        self.points[2] = field_value(source, COLLECTOR_POINT_FIELDS[EGGS_COLLECTED_INDEX]);
        self.points[3] = field_value(source, HEALER_POINT_FIELDS[HITPOINTS_REPLENISHED_INDEX]);
        self.points[4] = field_value(source, HEALER_POINT_FIELDS[WRONG_POISON_PACKS_INDEX]);

        let base_points = field_value(source, fields::BASE_POINTS);
        for role_points in &mut self.roles_points {
            *role_points += base_points;
        }
        for coord in ATTACKER_POINT_FIELDS {
            self.roles_points[Role::Attacker.index()] += field_value(source, coord);
        }
        for coord in DEFENDER_POINT_FIELDS {
            self.roles_points[Role::Defender.index()] += field_value(source, coord);
        }
        for coord in COLLECTOR_POINT_FIELDS {
            self.roles_points[Role::Collector.index()] += field_value(source, coord);
        }
        for coord in HEALER_POINT_FIELDS {
            self.roles_points[Role::Healer.index()] += field_value(source, coord);
        }
    }

    /// Renders the per-role points line, e.g.
    /// `Attacker: 56  Defender: 54  Collector: 68  Healer: 74`.
    ///
    /// Displayed totals are floored at 0; the accumulator itself may stay
    /// negative. With `colorful`, each total is tagged with its role color.
    #[must_use]
    pub fn wave_points_line(&self, colorful: bool) -> String {
        let mut line = LineBuilder::new();
        for (i, role) in Role::ALL.into_iter().enumerate() {
            if i != 0 {
                line.append("  ");
            }
            let points = self.roles_points[i].max(0).to_string();
            line.append(role.name()).append(": ");
            if colorful {
                line.append_colored(role.color(), &points);
            } else {
                line.append(&points);
            }
        }
        line.build()
    }

    /// Renders the per-category statistics line, e.g.
    /// `Eggs: 10 (+8)  Hp: 50 (+16)`.
    ///
    /// The parenthesized delta is omitted when it is exactly 0 and carries an
    /// explicit `+` when positive. With `colorful`, positive deltas are
    /// green and negative ones red.
    #[must_use]
    pub fn wave_summary_line(&self, colorful: bool) -> String {
        let mut line = LineBuilder::new();
        for (i, description) in SUMMARY_DESCRIPTIONS.into_iter().enumerate() {
            if i != 0 {
                line.append("  ");
            }
            line.append(description)
                .append(": ")
                .append(&self.amounts[i].to_string());

            let delta = self.points[i];
            if delta != 0 {
                let text = if delta > 0 {
                    format!("+{delta}")
                } else {
                    delta.to_string()
                };
                line.append(" (");
                if colorful {
                    let color = if delta < 0 { Color::RED } else { Color::DARK_GREEN };
                    line.append_colored(color, &text);
                } else {
                    line.append(&text);
                }
                line.append(")");
            }
        }
        line.build()
    }
}

fn field_value(source: &impl FieldSource, coord: FieldCoord) -> i32 {
    source.read_int(coord).unwrap_or(0)
}

fn seconds_until_call_change(elapsed: Duration) -> i32 {
    let remaining = CALL_ROTATION_SECS - elapsed.as_secs() % CALL_ROTATION_SECS;
    // remaining is always 1..=30
    i32::try_from(remaining).unwrap()
}

#[cfg(test)]
mod tests {
    use crate::core::SnapshotSource;

    use super::*;

    fn reward_snapshot(
        amounts: [i32; 5],
        category_points: [i32; 5],
        kills: [i32; 4],
        base_points: i32,
    ) -> SnapshotSource {
        let mut snapshot = SnapshotSource::new();
        for (coord, value) in AMOUNT_FIELDS.into_iter().zip(amounts) {
            snapshot.set_int(coord, value);
        }
        snapshot.set_int(fields::FAILED_ATTACKS_POINTS, category_points[0]);
        snapshot.set_int(fields::RUNNERS_PASSED_POINTS, category_points[1]);
        snapshot.set_int(fields::EGGS_COLLECTED_POINTS, category_points[2]);
        snapshot.set_int(fields::HITPOINTS_REPLENISHED_POINTS, category_points[3]);
        snapshot.set_int(fields::WRONG_POISON_PACKS_POINTS, category_points[4]);
        snapshot.set_int(fields::RANGERS_KILLED, kills[0]);
        snapshot.set_int(fields::FIGHTERS_KILLED, kills[1]);
        snapshot.set_int(fields::RUNNERS_KILLED, kills[2]);
        snapshot.set_int(fields::HEALERS_KILLED, kills[3]);
        snapshot.set_int(fields::BASE_POINTS, base_points);
        snapshot
    }

    #[test]
    fn test_set_amounts_reads_positionally() {
        let snapshot = reward_snapshot([2, 3, 10, 50, 1], [0; 5], [0; 4], 0);
        let mut wave = Wave::new(1, None, None);
        wave.set_amounts(&snapshot);
        assert_eq!(wave.amounts(), &[2, 3, 10, 50, 1]);
    }

    #[test]
    fn test_set_amounts_defaults_absent_fields_to_zero() {
        let mut snapshot = SnapshotSource::new();
        snapshot.set_int(fields::EGGS_COLLECTED, 7);
        let mut wave = Wave::new(1, None, None);
        wave.set_amounts(&snapshot);
        assert_eq!(wave.amounts(), &[0, 0, 7, 0, 0]);
    }

    #[test]
    fn test_set_points_category_deltas() {
        let snapshot = reward_snapshot([0; 5], [-4, -6, 8, 16, -2], [0; 4], 0);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);
        assert_eq!(wave.points(), &[-4, -6, 8, 16, -2]);
    }

    #[test]
    fn test_base_points_reach_every_role() {
        let snapshot = reward_snapshot([0; 5], [0; 5], [0; 4], 60);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);
        assert_eq!(wave.roles_points(), &[60, 60, 60, 60]);
    }

    #[test]
    fn test_role_points_have_no_cross_contamination() {
        // Only the defender group carries values; everyone else gets base
        // points alone.
        let snapshot = reward_snapshot([0; 5], [0, -6, 0, 0, 0], [0, 0, 5, 0], 20);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);
        assert_eq!(wave.roles_points(), &[20, 19, 20, 20]);
    }

    #[test]
    fn test_kill_fields_count_for_roles_but_not_categories() {
        let snapshot = reward_snapshot([0; 5], [0; 5], [3, 4, 5, 6], 0);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);
        assert_eq!(wave.points(), &[0; 5]);
        assert_eq!(wave.roles_points(), &[7, 5, 0, 6]);
    }

    #[test]
    fn test_end_to_end_scoring_scenario() {
        let snapshot = reward_snapshot([2, 3, 10, 50, 1], [-4, -6, 8, 16, -2], [0; 4], 60);
        let mut wave = Wave::new(5, Some(Role::Healer), None);
        wave.set_amounts(&snapshot);
        wave.set_points(&snapshot);

        assert_eq!(wave.roles_points(), &[56, 54, 68, 74]);
        assert_eq!(
            wave.wave_summary_line(false),
            "Wrong attacks: 2 (-4)  Runners passed: 3 (-6)  Eggs: 10 (+8)  Hp: 50 (+16)  Wrong poison: 1 (-2)"
        );
        assert_eq!(
            wave.wave_points_line(false),
            "Attacker: 56  Defender: 54  Collector: 68  Healer: 74"
        );
    }

    #[test]
    fn test_points_line_floors_negative_totals_for_display_only() {
        let snapshot = reward_snapshot([0; 5], [-80, 0, 0, 0, 0], [0; 4], 10);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);

        assert_eq!(wave.roles_points()[Role::Attacker.index()], -70);
        assert_eq!(
            wave.wave_points_line(false),
            "Attacker: 0  Defender: 10  Collector: 10  Healer: 10"
        );
    }

    #[test]
    fn test_points_line_colorized_segments() {
        let snapshot = reward_snapshot([0; 5], [0; 5], [0; 4], 5);
        let mut wave = Wave::new(1, None, None);
        wave.set_points(&snapshot);

        assert_eq!(
            wave.wave_points_line(true),
            "Attacker: <col=ff0000>5</col>  Defender: <col=add8e6>5</col>  \
             Collector: <col=ffff00>5</col>  Healer: <col=006400>5</col>"
        );
    }

    #[test]
    fn test_summary_line_omits_zero_deltas() {
        let snapshot = reward_snapshot([2, 0, 10, 0, 0], [0, 0, 8, 0, 0], [0; 4], 0);
        let mut wave = Wave::new(1, None, None);
        wave.set_amounts(&snapshot);
        wave.set_points(&snapshot);

        assert_eq!(
            wave.wave_summary_line(false),
            "Wrong attacks: 2  Runners passed: 0  Eggs: 10 (+8)  Hp: 0  Wrong poison: 0"
        );
    }

    #[test]
    fn test_summary_line_colorizes_delta_signs() {
        let snapshot = reward_snapshot([1, 0, 4, 0, 0], [-4, 0, 3, 0, 0], [0; 4], 0);
        let mut wave = Wave::new(1, None, None);
        wave.set_amounts(&snapshot);
        wave.set_points(&snapshot);

        assert_eq!(
            wave.wave_summary_line(true),
            "Wrong attacks: 1 (<col=ff0000>-4</col>)  Runners passed: 0  \
             Eggs: 4 (<col=006400>+3</col>)  Hp: 0  Wrong poison: 0"
        );
    }

    #[test]
    fn test_collected_eggs_capped_at_sixty() {
        let mut wave = Wave::new(1, None, None);
        wave.set_eggs_count(75);
        wave.set_wrong_eggs_count(5);
        assert_eq!(wave.collected_eggs_count(), 60);

        wave.set_eggs_count(40);
        assert_eq!(wave.collected_eggs_count(), 35);
    }

    #[test]
    fn test_collected_eggs_negative_difference_passes_through() {
        let mut wave = Wave::new(1, None, None);
        wave.set_eggs_count(3);
        wave.set_wrong_eggs_count(8);
        assert_eq!(wave.collected_eggs_count(), -5);
    }

    #[test]
    fn test_hp_healed_capped() {
        let mut wave = Wave::new(1, None, None);
        wave.set_hp_healed(600);
        assert_eq!(wave.hp_healed(), 504);

        wave.set_hp_healed(503);
        assert_eq!(wave.hp_healed(), 503);
    }

    #[test]
    fn test_call_change_countdown() {
        assert_eq!(seconds_until_call_change(Duration::from_secs(0)), 30);
        assert_eq!(seconds_until_call_change(Duration::from_secs(1)), 29);
        assert_eq!(seconds_until_call_change(Duration::from_secs(29)), 1);
        // An exact rotation boundary opens a fresh 30-second window.
        assert_eq!(seconds_until_call_change(Duration::from_secs(30)), 30);
        assert_eq!(seconds_until_call_change(Duration::from_secs(90)), 30);
        assert_eq!(seconds_until_call_change(Duration::from_secs(47)), 13);
    }

    #[test]
    fn test_call_change_without_timer_is_sentinel() {
        let wave = Wave::new(1, None, None);
        assert_eq!(wave.time_until_call_change(), -1);
    }

    #[test]
    fn test_call_change_with_timer() {
        let timer = WaveTimer::with_elapsed(Duration::from_secs(47));
        let wave = Wave::new(1, Some(Role::Attacker), Some(timer));
        assert_eq!(wave.time_until_call_change(), 13);
    }
}
