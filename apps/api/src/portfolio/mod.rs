//! The portfolio data-assembly core: timeline merging, skill management,
//! project ranking, and view-model assembly.

pub mod articles;
pub mod handlers;
pub mod journey;
pub mod projects;
pub mod skills;
pub mod view;
