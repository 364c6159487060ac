//! Per-kind block layouts, grouped the way the admin groups the catalogue.

pub(crate) mod content;
pub(crate) mod interactive;
pub(crate) mod layout;
pub(crate) mod media;
