// Keyword-driven chatbot: normalizes the question, routes it through an ordered
// rule table, and renders the answer from a catalog snapshot.

pub mod handlers;
pub mod query;
pub mod replies;
pub mod rules;
