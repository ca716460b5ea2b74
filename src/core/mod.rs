//! # Core Painting Logic
//!
//! This module contains cellbrush's painting logic.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (pencil)       │
//!                    │  • Canvas (cells)       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `PencilState` and the `App` aggregate
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`canvas`]: the cell surface, the persistent canvas, draw primitives
//! - [`palette`]: the digit-to-color table and the two color slots
//! - [`config`]: optional palette overrides from `~/.cellbrush/config.toml`

pub mod action;
pub mod canvas;
pub mod config;
pub mod palette;
pub mod state;
