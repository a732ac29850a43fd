// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;

pub mod engine;
pub mod pipeline;
pub mod runner;
pub mod scroll;
pub mod sink;
pub mod snapshot;
pub mod specs;
pub mod view;
