//! Solace Gateway - Empathetic response gateway for emotional diary assistants
//!
//! This library provides the core functionality of the Solace gateway:
//! - Context identification and intensity scoring for diary entries
//! - Emotion label resolution and empathetic response synthesis
//! - Diary entry persistence
//! - HTTP API for frontends and upstream classifiers
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    Interfaces                        │
//! │        HTTP API  │  CLI  │  Diary frontends          │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Solace Gateway                       │
//! │   Context  │  Intensity  │  Summary  │  Synthesis   │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Diary Store                         │
//! │              SQLite (entries, replies)               │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;

pub use config::Config;
pub use db::{DbConn, DbPool, DiaryEntry, EntryRepo, Speaker};
pub use engine::{
    ContextDescriptor, ContextTopic, EmotionTag, EmpathyAnalysis, EmpathyEngine, IntensityLevel,
    Lexicon, SeededSelector, Selector, ThreadRngSelector,
};
pub use error::{Error, Result};
