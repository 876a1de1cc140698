//! The decision orchestrator.
//!
//! One instance per session, explicitly constructed with its collaborator
//! handles (catalog, sink, clock); no ambient state. The host invokes the
//! capability surface (`on_tick`, `on_hero_rejected`, `on_membership`,
//! `on_match_boundary`, `on_catalog_updated`) from its own event loop; all
//! logic runs synchronously inside those calls and nothing blocks.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::app::{ingest, selector};
use crate::domain::{
    Attribute, GameCommand, HeroId, LaneDecisionState, PlayerId, Role, RoleFlags, SnapshotReason,
    SnapshotScope, Team, bare_name, resolve_lane,
};
use crate::ports::{Clock, CommandSink, HeroCatalog};
use crate::settings::Settings;
use crate::sleeper::{JitterPolicy, Sleeper};

/// Cooldown slot gating repeated hero suggestions.
pub const POSSIBLE_HERO_SLOT: &str = "possibleHero";

/// Cooldown slot gating repeated settings resets.
pub const RESET_SETTINGS_SLOT: &str = "ResetSettings";

const RESET_SETTINGS_COOLDOWN: Duration = Duration::from_secs(2);

/// Host-observed state for one tick.
///
/// The host resolves all of its nested optional lookups while building this
/// view; the orchestrator never digs through external records itself.
#[derive(Debug, Clone, Default)]
pub struct TickContext {
    pub connected: bool,
    pub local: Option<LocalPlayerView>,
}

/// The local participant, as seen by the host at tick time.
#[derive(Debug, Clone)]
pub struct LocalPlayerView {
    /// Stable identity; absent while the lobby has not reported it yet.
    pub player_id: Option<PlayerId>,
    pub team: Team,
    pub is_spectator: bool,
    /// The game's own in-progress pick indicator; zero means the selection
    /// process is still open.
    pub possible_hero_selection: u32,
    /// Current network latency, widens the jitter window.
    pub ping_ms: u64,
}

/// Top-level decision driver. See the module docs for the lifecycle.
pub struct Orchestrator<C: Clock> {
    catalog: Arc<dyn HeroCatalog>,
    sink: Arc<dyn CommandSink>,
    sleeper: Sleeper<C>,
    rng: StdRng,
    jitter: JitterPolicy,
    settings: Settings,

    // Per-match state, cleared on match boundaries.
    lane: LaneDecisionState,
    suggested: HashSet<String>,
    rejected: HashSet<HeroId>,
    role_signals: HashMap<PlayerId, Option<RoleFlags>>,
}

impl<C: Clock> Orchestrator<C> {
    pub fn new(catalog: Arc<dyn HeroCatalog>, sink: Arc<dyn CommandSink>, clock: C) -> Self {
        Self::with_rng(catalog, sink, clock, StdRng::from_entropy())
    }

    /// Deterministic jitter for tests.
    pub fn with_seed(
        catalog: Arc<dyn HeroCatalog>,
        sink: Arc<dyn CommandSink>,
        clock: C,
        seed: u64,
    ) -> Self {
        Self::with_rng(catalog, sink, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        catalog: Arc<dyn HeroCatalog>,
        sink: Arc<dyn CommandSink>,
        clock: C,
        rng: StdRng,
    ) -> Self {
        let mut settings = Settings::default();
        settings.refresh_hero_names(catalog.as_ref());
        Self {
            catalog,
            sink,
            sleeper: Sleeper::new(clock),
            rng,
            jitter: JitterPolicy::default(),
            settings,
            lane: LaneDecisionState::default(),
            suggested: HashSet::new(),
            rejected: HashSet::new(),
            role_signals: HashMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Capability surface
    // ------------------------------------------------------------------

    /// Periodic state-update tick.
    pub fn on_tick(&mut self, ctx: &TickContext) {
        if !ctx.connected || !self.settings.enabled {
            return;
        }
        let Some(local) = ctx.local.clone() else {
            return;
        };
        if local.is_spectator {
            return;
        }
        self.update_possible_hero(&local);
        self.update_lane(&local);
    }

    /// A hero was banned or reported as an invalid choice. Set semantics
    /// absorb duplicate notifications.
    pub fn on_hero_rejected(&mut self, hero: HeroId) {
        if self.rejected.insert(hero) {
            debug!(%hero, "hero rejected for this match");
        }
    }

    /// Lobby/party membership snapshot.
    pub fn on_membership(&mut self, scope: SnapshotScope, reason: SnapshotReason, snapshot: &Value) {
        if scope != SnapshotScope::Lobby {
            return;
        }
        match reason {
            SnapshotReason::Cleared => {
                self.on_match_boundary();
                return;
            }
            SnapshotReason::Updated => {}
            SnapshotReason::Other(_) => return,
        }
        match ingest::team_members(snapshot) {
            Ok(members) => {
                // Last snapshot wins: the signal map is replaced wholesale.
                self.role_signals = members
                    .into_iter()
                    .map(|m| (m.id, m.roles))
                    .collect();
            }
            Err(err) => {
                // Keep the previous signals; the next snapshot will recur.
                warn!(%err, "membership snapshot dropped");
            }
        }
    }

    /// Match start or match end: clear all per-match state.
    pub fn on_match_boundary(&mut self) {
        self.lane.reset();
        self.sleeper.full_reset();
        self.suggested.clear();
        self.rejected.clear();
        self.role_signals.clear();
        info!("per-match state reset");
    }

    /// The catalog was refreshed; the cached name list is stale.
    pub fn on_catalog_updated(&mut self) {
        self.settings.refresh_hero_names(self.catalog.as_ref());
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    /// Switching mode invalidates an earlier lane decision.
    pub fn set_role_based(&mut self, role_based: bool) {
        self.settings.role_based = role_based;
        self.lane.reset();
    }

    /// Changing the manual pick invalidates an earlier lane decision.
    pub fn set_manual_lane(&mut self, manual: Role) {
        self.settings.manual_lane = manual;
        self.lane.reset();
    }

    pub fn set_attribute_filter(&mut self, attribute: Attribute) {
        self.settings.attribute_filter = attribute;
    }

    pub fn set_hero_enabled(&mut self, name: &str, enabled: bool) {
        self.settings.set_hero_enabled(name, enabled);
    }

    /// Restore the documented preference defaults.
    ///
    /// Gated by its own cooldown so a held-down reset button does not spam;
    /// returns whether the reset was applied.
    pub fn reset_settings(&mut self) -> bool {
        if self.sleeper.sleeping(RESET_SETTINGS_SLOT) {
            return false;
        }
        self.settings.restore_defaults();
        self.lane.reset();
        self.sleeper.sleep(RESET_SETTINGS_SLOT, RESET_SETTINGS_COOLDOWN);
        info!("settings restored to defaults");
        true
    }

    // ------------------------------------------------------------------
    // Decision tracks
    // ------------------------------------------------------------------

    fn update_possible_hero(&mut self, local: &LocalPlayerView) {
        if local.possible_hero_selection != 0 {
            // The player's own pick is already in flight.
            return;
        }
        let Some(name) = selector::next_suggestion(
            self.settings.hero_names(),
            &self.suggested,
            &self.rejected,
            &self.settings,
            self.catalog.as_ref(),
        ) else {
            return;
        };
        if self.sleeper.sleeping(POSSIBLE_HERO_SLOT) {
            return;
        }

        self.suggested.insert(name.clone());
        let delay = self.jitter.sample(&mut self.rng, local.ping_ms);
        self.sleeper.sleep(POSSIBLE_HERO_SLOT, delay);

        let command = GameCommand::PossibleHero(bare_name(&name).to_string());
        debug!(%command, ?delay, "suggesting hero");
        self.sink.execute(command);
    }

    fn update_lane(&mut self, local: &LocalPlayerView) {
        if self.lane.is_committed() {
            return;
        }
        let Some(player_id) = local.player_id else {
            return;
        };
        let signal = self.role_signals.get(&player_id).copied().flatten();
        let lane = resolve_lane(
            local.team,
            self.settings.manual_lane,
            signal,
            self.settings.role_based,
        );
        if !lane.is_resolved() {
            return;
        }

        self.lane.commit(lane);
        let command = GameCommand::SelectStartingPosition(lane);
        debug!(%command, "committing starting position");
        self.sink.execute(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HeroEntry, Lane};
    use crate::impls::{RecordingSink, StaticCatalog};
    use crate::ports::FixedClock;
    use serde_json::json;

    const PING_MS: u64 = 50;
    const LOCAL_ID: u64 = 7_000;

    struct Harness {
        orchestrator: Orchestrator<FixedClock>,
        sink: Arc<RecordingSink>,
        clock: FixedClock,
    }

    fn harness() -> Harness {
        let catalog = Arc::new(StaticCatalog::new(vec![
            HeroEntry::new(1, "npc_dota_hero_antimage", Attribute::Agility),
            HeroEntry::new(2, "npc_dota_hero_axe", Attribute::Strength),
            HeroEntry::new(3, "npc_dota_hero_lina", Attribute::Intellect),
        ]));
        let sink = Arc::new(RecordingSink::default());
        let clock = FixedClock::default_start();
        let mut orchestrator = Orchestrator::with_seed(
            catalog,
            Arc::clone(&sink) as Arc<dyn CommandSink>,
            clock.clone(),
            42,
        );
        orchestrator.set_enabled(true);
        Harness {
            orchestrator,
            sink,
            clock,
        }
    }

    fn tick_ctx(local: Option<LocalPlayerView>) -> TickContext {
        TickContext {
            connected: true,
            local,
        }
    }

    fn local_player() -> LocalPlayerView {
        LocalPlayerView {
            player_id: Some(PlayerId(LOCAL_ID)),
            team: Team::Radiant,
            is_spectator: false,
            possible_hero_selection: 0,
            ping_ms: PING_MS,
        }
    }

    /// Advance past the widest possible jitter window.
    fn advance_past_cooldown(clock: &FixedClock) {
        clock.advance(Duration::from_millis(1000 + PING_MS + 1));
    }

    fn lane_commands(sink: &RecordingSink) -> Vec<GameCommand> {
        sink.commands()
            .into_iter()
            .filter(|c| matches!(c, GameCommand::SelectStartingPosition(_)))
            .collect()
    }

    fn hero_commands(sink: &RecordingSink) -> Vec<String> {
        sink.commands()
            .into_iter()
            .filter_map(|c| match c {
                GameCommand::PossibleHero(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn lane_commits_at_most_once_per_match() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));

        h.orchestrator.on_tick(&ctx);
        h.orchestrator.on_tick(&ctx);
        h.orchestrator.on_tick(&ctx);

        let lanes = lane_commands(&h.sink);
        assert_eq!(lanes.len(), 1);
        // Manual default is mid, no role signal ingested.
        assert_eq!(lanes[0], GameCommand::SelectStartingPosition(Lane::Mid));
    }

    #[test]
    fn boundary_reopens_the_lane_track() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));

        h.orchestrator.on_tick(&ctx);
        h.orchestrator.on_match_boundary();
        h.orchestrator.on_tick(&ctx);

        assert_eq!(lane_commands(&h.sink).len(), 2);
    }

    #[test]
    fn boundary_clears_rejections_and_role_signals() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));
        let snapshot = json!({
            "all_members": [
                { "id": LOCAL_ID, "team": 2, "lane_selection_flags": Role::OffLane.bit() },
            ]
        });
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &snapshot);
        h.orchestrator.on_hero_rejected(HeroId(3));

        h.orchestrator.on_tick(&ctx);
        h.orchestrator.on_match_boundary();
        h.orchestrator.on_tick(&ctx);

        // Before the boundary the offlane signal drove the lane and lina
        // (id 3) was skipped; after it the stale signal is gone (manual mid
        // applies) and lina is suggestible again.
        assert_eq!(
            lane_commands(&h.sink),
            vec![
                GameCommand::SelectStartingPosition(Lane::Hard),
                GameCommand::SelectStartingPosition(Lane::Mid),
            ]
        );
        assert_eq!(hero_commands(&h.sink), vec!["axe", "lina"]);
    }

    #[test]
    fn nothing_happens_when_disabled_disconnected_or_spectating() {
        let mut h = harness();

        h.orchestrator.on_tick(&TickContext {
            connected: false,
            local: Some(local_player()),
        });

        h.orchestrator.set_enabled(false);
        h.orchestrator.on_tick(&tick_ctx(Some(local_player())));
        h.orchestrator.set_enabled(true);

        let mut spectator = local_player();
        spectator.is_spectator = true;
        h.orchestrator.on_tick(&tick_ctx(Some(spectator)));

        h.orchestrator.on_tick(&tick_ctx(None));

        assert!(h.sink.commands().is_empty());
    }

    #[test]
    fn role_signal_drives_the_lane_in_role_based_mode() {
        let mut h = harness();
        let snapshot = json!({
            "all_members": [
                { "id": LOCAL_ID, "team": 3, "lane_selection_flags": Role::OffLane.bit() },
            ]
        });
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &snapshot);

        let mut local = local_player();
        local.team = Team::Dire;
        h.orchestrator.on_tick(&tick_ctx(Some(local)));

        // Offlane is hard-side pre-mirror; Dire mirrors it to easy-side.
        assert_eq!(
            lane_commands(&h.sink),
            vec![GameCommand::SelectStartingPosition(Lane::Easy)]
        );
    }

    #[test]
    fn manual_mode_ignores_the_ingested_signal() {
        let mut h = harness();
        let snapshot = json!({
            "all_members": [
                { "id": LOCAL_ID, "team": 2, "lane_selection_flags": Role::OffLane.bit() },
            ]
        });
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &snapshot);
        h.orchestrator.set_role_based(false);
        h.orchestrator.set_manual_lane(Role::SafeLane);

        h.orchestrator.on_tick(&tick_ctx(Some(local_player())));

        assert_eq!(
            lane_commands(&h.sink),
            vec![GameCommand::SelectStartingPosition(Lane::Easy)]
        );
    }

    #[test]
    fn hero_suggestions_walk_the_catalog_from_the_end() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));

        h.orchestrator.on_tick(&ctx);
        advance_past_cooldown(&h.clock);
        h.orchestrator.on_tick(&ctx);
        advance_past_cooldown(&h.clock);
        h.orchestrator.on_tick(&ctx);
        advance_past_cooldown(&h.clock);
        h.orchestrator.on_tick(&ctx);

        // Bare names, last catalog entry first, no repeats, list exhausted.
        assert_eq!(hero_commands(&h.sink), vec!["lina", "axe", "antimage"]);
    }

    #[test]
    fn cooldown_blocks_back_to_back_suggestions() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));

        h.orchestrator.on_tick(&ctx);
        h.orchestrator.on_tick(&ctx);

        // The second tick happened inside the armed window.
        assert_eq!(hero_commands(&h.sink).len(), 1);

        advance_past_cooldown(&h.clock);
        h.orchestrator.on_tick(&ctx);
        assert_eq!(hero_commands(&h.sink).len(), 2);
    }

    #[test]
    fn open_pick_indicator_suppresses_suggestions() {
        let mut h = harness();
        let mut local = local_player();
        local.possible_hero_selection = 12;

        h.orchestrator.on_tick(&tick_ctx(Some(local)));

        assert!(hero_commands(&h.sink).is_empty());
    }

    #[test]
    fn rejected_heroes_are_never_suggested() {
        let mut h = harness();
        h.orchestrator.on_hero_rejected(HeroId(3));
        h.orchestrator.on_hero_rejected(HeroId(3)); // duplicate is absorbed

        h.orchestrator.on_tick(&tick_ctx(Some(local_player())));

        assert_eq!(hero_commands(&h.sink), vec!["axe"]);
    }

    #[test]
    fn oversized_snapshot_keeps_prior_signals() {
        let mut h = harness();
        let good = json!({
            "all_members": [
                { "id": LOCAL_ID, "team": 2, "lane_selection_flags": Role::OffLane.bit() },
            ]
        });
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &good);

        let members: Vec<serde_json::Value> = (0..11)
            .map(|i| json!({ "id": i, "team": 2, "lane_selection_flags": Role::MidLane.bit() }))
            .collect();
        let oversized = json!({ "all_members": members });
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &oversized);

        h.orchestrator.on_tick(&tick_ctx(Some(local_player())));

        // Still the offlane signal from the first snapshot.
        assert_eq!(
            lane_commands(&h.sink),
            vec![GameCommand::SelectStartingPosition(Lane::Hard)]
        );
    }

    #[test]
    fn non_lobby_and_non_update_reasons_are_ignored() {
        let mut h = harness();
        let snapshot = json!({
            "all_members": [
                { "id": LOCAL_ID, "team": 2, "lane_selection_flags": Role::OffLane.bit() },
            ]
        });

        h.orchestrator
            .on_membership(SnapshotScope::Other, SnapshotReason::Updated, &snapshot);
        h.orchestrator
            .on_membership(SnapshotScope::Lobby, SnapshotReason::Other(1), &snapshot);

        h.orchestrator.on_tick(&tick_ctx(Some(local_player())));

        // No signal ingested, manual default (mid) applies.
        assert_eq!(
            lane_commands(&h.sink),
            vec![GameCommand::SelectStartingPosition(Lane::Mid)]
        );
    }

    #[test]
    fn cleared_snapshot_triggers_the_full_reset() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));
        h.orchestrator.on_tick(&ctx);
        assert_eq!(lane_commands(&h.sink).len(), 1);

        h.orchestrator.on_membership(
            SnapshotScope::Lobby,
            SnapshotReason::Cleared,
            &json!({}),
        );

        h.orchestrator.on_tick(&ctx);
        assert_eq!(lane_commands(&h.sink).len(), 2);
        // Suggestion cache was cleared too: the same hero comes back first.
        let heroes = hero_commands(&h.sink);
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0], heroes[1]);
    }

    #[test]
    fn settings_reset_is_cooldown_gated() {
        let mut h = harness();
        h.orchestrator.set_manual_lane(Role::OffLane);

        assert!(h.orchestrator.reset_settings());
        assert_eq!(h.orchestrator.settings().manual_lane, Role::MidLane);

        h.orchestrator.set_manual_lane(Role::OffLane);
        assert!(!h.orchestrator.reset_settings());
        assert_eq!(h.orchestrator.settings().manual_lane, Role::OffLane);

        h.clock.advance(Duration::from_millis(2001));
        assert!(h.orchestrator.reset_settings());
        assert_eq!(h.orchestrator.settings().manual_lane, Role::MidLane);
    }

    #[test]
    fn mode_change_invalidates_a_committed_lane() {
        let mut h = harness();
        let ctx = tick_ctx(Some(local_player()));

        h.orchestrator.on_tick(&ctx);
        h.orchestrator.set_manual_lane(Role::OffLane);
        h.orchestrator.on_tick(&ctx);

        assert_eq!(
            lane_commands(&h.sink),
            vec![
                GameCommand::SelectStartingPosition(Lane::Mid),
                GameCommand::SelectStartingPosition(Lane::Hard),
            ]
        );
    }
}
