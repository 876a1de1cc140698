use std::sync::Arc;

use serde_json::json;
use tokio::time::{Duration, sleep};

use lanepilot_core::domain::{
    Attribute, GameCommand, HeroEntry, HeroId, PlayerId, SnapshotReason, SnapshotScope, Team,
};
use lanepilot_core::impls::StaticCatalog;
use lanepilot_core::ports::{CommandSink, HeroCatalog, SystemClock};
use lanepilot_core::{LocalPlayerView, Orchestrator, TickContext};

/// Sink that "dispatches" to stdout.
struct PrintSink;

impl CommandSink for PrintSink {
    fn execute(&self, command: GameCommand) {
        println!("> {command}");
    }
}

const LOCAL_STEAM_ID: u64 = 76_561_198_000_000_001;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().compact().init();

    // (A) Wire the collaborators: a small fixed catalog and a stdout sink.
    let catalog = Arc::new(StaticCatalog::new(vec![
        HeroEntry::new(1, "npc_dota_hero_antimage", Attribute::Agility),
        HeroEntry::new(2, "npc_dota_hero_axe", Attribute::Strength),
        HeroEntry::new(25, "npc_dota_hero_lina", Attribute::Intellect),
        HeroEntry::new(14, "npc_dota_hero_pudge", Attribute::Strength),
    ]));
    let mut orchestrator = Orchestrator::new(
        Arc::clone(&catalog) as Arc<dyn HeroCatalog>,
        Arc::new(PrintSink),
        SystemClock,
    );
    orchestrator.set_enabled(true);

    println!(
        "selectable strength heroes: {:?}",
        orchestrator.settings().selectable_heroes(catalog.as_ref())
    );

    // (B) A lobby snapshot arrives: the local player queued as offlane
    //     (bit 1) on Dire, so role-based resolution lands on the easy side.
    let snapshot = json!({
        "all_members": [
            { "id": LOCAL_STEAM_ID, "team": 3, "lane_selection_flags": 0b10 },
            { "id": 42, "team": 2, "lane_selection_flags": 0b100 },
        ]
    });
    orchestrator.on_membership(SnapshotScope::Lobby, SnapshotReason::Updated, &snapshot);

    // (C) One hero got banned before our ticks start.
    orchestrator.on_hero_rejected(HeroId(14));

    // (D) Drive the tick loop the way the host environment would.
    let ctx = TickContext {
        connected: true,
        local: Some(LocalPlayerView {
            player_id: Some(PlayerId(LOCAL_STEAM_ID)),
            team: Team::Dire,
            is_spectator: false,
            possible_hero_selection: 0,
            ping_ms: 40,
        }),
    };
    for _ in 0..80 {
        orchestrator.on_tick(&ctx);
        sleep(Duration::from_millis(50)).await;
    }

    // (E) Match over: everything per-match is dropped.
    orchestrator.on_match_boundary();
    println!("done");
}
