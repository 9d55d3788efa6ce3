pub mod nav;
pub mod project_card;
pub mod section;
pub mod skills;
pub mod social;
