//! Foodgram backend: the recipe REST API, short links and uploaded media.
//!
//! Requests enter through `router`, which maps them to `controller` handlers.
//! Handlers resolve the caller with the token guard in `middleware`, turn request
//! DTOs into validated `model` parameters and call a `service`. Services apply the
//! rules (ownership, duplicate relations, image lifecycle) on top of the `data`
//! repositories, which own every SeaORM query.
//!
//! `startup` waits for the database and migrates it, `command` holds the CLI
//! management tasks, and `media` stores images under `MEDIA_ROOT`.

pub mod command;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod media;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
