//! Stockpot - restaurant inventory blast-radius and restock engine.
//!
//! This crate provides both a CLI application and a library for modeling a
//! restaurant catalog (ingredients, sub-recipes, menu items) as a dependency
//! graph and answering outage, restock, and demand-surge questions over it.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod error;

// Public CLI modules (needed by binary)
pub mod app;
pub mod cli;
pub mod output;

// Command implementations
pub mod commands;
