//! lanepilot-core
//!
//! Decision engine for the match-setup phase: resolves a starting-position
//! lane from teammate role signals and user preferences, and suggests hero
//! candidates with jittered pacing, each exactly once per relevant state.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（lane, role, hero, member, command, resolve）
//! - **ports**: 抽象化レイヤー（HeroCatalog, CommandSink, Clock）
//! - **app**: アプリケーションロジック（ingest, selector, orchestrator）
//! - **impls**: 実装（StaticCatalog など開発用）
//! - **sleeper** / **settings**: jitter cooldowns and user preferences
//!
//! The engine is single-threaded and tick-driven: the host calls the
//! orchestrator's capability surface from its own event loop, and nothing
//! in here blocks or spawns.

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod settings;
pub mod sleeper;

pub use app::{LocalPlayerView, Orchestrator, TickContext};
pub use settings::Settings;
pub use sleeper::{JitterPolicy, Sleeper};
