//! # Line Up
//!
//! Connect Four on a configurable board, with two special discs per kind for
//! each player: a boring disc that drills to the bottom of its column and a
//! magnetic disc that pulls the player's nearest disc up by one.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, player inventories, drop rules, win detection
//! - [`ai`] — Agent trait and the greedy computer player
//! - [`save`] — JSON save files with full validation on load
//! - [`notation`] — `O4`/`B3`/`M5` move notation and scripted replays
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod save;
