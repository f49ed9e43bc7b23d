//! Usagi - personal task tracker for todos, deadlines, events and recurring tasks

pub mod cli;
pub mod command;
pub mod config;
pub mod storage;
pub mod task;
