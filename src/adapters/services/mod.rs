//! External service adapters
//!
//! This module contains adapters for external APIs including:
//! - ASR (Automatic Speech Recognition) services

pub mod asr;
