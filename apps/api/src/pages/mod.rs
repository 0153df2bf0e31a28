// JSON page handlers. Each response is the context a page template would render.

pub mod analytics;
pub mod explore;
pub mod overview;
