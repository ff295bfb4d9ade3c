//! UI module - stateless rendering components

pub mod components;
