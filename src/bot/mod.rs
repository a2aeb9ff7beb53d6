//! Automated players.
//!
//! A strategy only picks among the pawns the controller already ruled legal;
//! it never moves pawns itself. The [`crate::driver::Driver`] feeds its
//! choice back through `select_pawn` like any human input.

pub mod strategy;

pub use strategy::{GreedyStrategy, MoveStrategy, RandomStrategy};
