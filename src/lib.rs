//! # BioTUI - Molecular Biology Trainer
//!
//! A terminal trainer for protein synthesis and DNA replication using ratatui.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture with clear separation:
//! - `genetics`: base alphabets, pairing rule and the standard codon table
//! - `trainer`: the two-stage transcription/translation exercise
//! - `replication`: walkthrough, Meselson-Stahl and strand comparison views
//! - `quiz` / `glossary`: fixed content plus small stepping state
//! - `wheel`: codon wheel geometry and SVG export
//! - `model`: screen selection and per-widget application state
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: orchestration of ticks, input and rendering

pub mod controller;
pub mod event;
pub mod genetics;
pub mod glossary;
pub mod model;
pub mod quiz;
pub mod replication;
pub mod trainer;
pub mod ui;
pub mod wheel;
